//! # Source Span
//!
//! Byte offsets plus line/column positions for CST and AST nodes.
//!
//! ## Example
//!
//! ```rust
//! use zenscript_cst::Span;
//!
//! let span = Span::from_bytes(0, 10);
//! assert_eq!(span.len(), 10);
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// POSITION
// =============================================================================

/// A point in the source text.
///
/// `line` and `column` are zero-based; `column` counts bytes from the line start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub byte: usize,
    /// Zero-based line number.
    pub line: usize,
    /// Zero-based column number.
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub const fn new(byte: usize, line: usize, column: usize) -> Self {
        Self { byte, line, column }
    }
}

// =============================================================================
// SPAN
// =============================================================================

/// A half-open range of source text, `start` inclusive and `end` exclusive.
///
/// ## Example
///
/// ```rust
/// use zenscript_cst::{Position, Span};
///
/// let span = Span::new(Position::new(4, 1, 0), Position::new(9, 1, 5));
/// assert_eq!(span.len(), 5);
/// assert!(span.contains(4));
/// assert!(!span.contains(9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// First position covered.
    pub start: Position,
    /// Position just past the end.
    pub end: Position,
}

impl Span {
    /// Create a span from two positions.
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a single-line span from byte offsets (line 0, column = byte).
    pub const fn from_bytes(start: usize, end: usize) -> Self {
        Self {
            start: Position::new(start, 0, start),
            end: Position::new(end, 0, end),
        }
    }

    /// The empty span at the start of the source.
    pub const fn zero() -> Self {
        Self::from_bytes(0, 0)
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.byte.saturating_sub(self.start.byte)
    }

    /// True if the span covers no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start.byte >= self.end.byte
    }

    /// Smallest span covering both `self` and `other`.
    ///
    /// ```rust
    /// use zenscript_cst::Span;
    ///
    /// let merged = Span::from_bytes(0, 5).merge(&Span::from_bytes(10, 15));
    /// assert_eq!(merged, Span::from_bytes(0, 15));
    /// ```
    pub fn merge(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// True if `offset` lies inside the span.
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start.byte && offset < self.end.byte
    }
}

/// Anything that covers a region of source text.
pub trait Spanned {
    /// The covered region.
    fn span(&self) -> Span;
}
