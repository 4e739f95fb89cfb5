//! # CST Builder
//!
//! Builds CSTs by hand with realistic spans: each token is placed one byte
//! after the previous one, as if tokens were separated by a single space, and
//! each rule spans its children.
//!
//! Tokens must be created in source order for the spans to be meaningful,
//! which is what nested `rule(..., vec![...])` calls do naturally.
//!
//! ## Example
//!
//! ```rust
//! use zenscript_cst::{CstBuilder, RuleKind, TokenKind};
//!
//! let b = CstBuilder::new();
//! let stmt = b.rule(RuleKind::BreakStatement, vec![
//!     b.token(TokenKind::Break, "break"),
//!     b.token(TokenKind::Semicolon, ";"),
//! ]);
//! assert_eq!(stmt.span.start.byte, 0);
//! assert_eq!(stmt.span.end.byte, 7);
//! ```

use crate::cst::CstNode;
use crate::rule::RuleKind;
use crate::span::Span;
use crate::token::TokenKind;
use std::cell::Cell;

/// Hand-written CST factory with a running byte cursor.
#[derive(Debug, Default)]
pub struct CstBuilder {
    cursor: Cell<usize>,
}

impl CstBuilder {
    /// Start building at offset 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Terminal at the current cursor.
    pub fn token(&self, kind: TokenKind, text: &str) -> CstNode {
        let start = self.cursor.get();
        let end = start + text.len();
        self.cursor.set(end + 1);
        CstNode::token(kind, Span::from_bytes(start, end), text)
    }

    /// Non-terminal spanning `children`.
    pub fn rule(&self, kind: RuleKind, children: Vec<CstNode>) -> CstNode {
        CstNode::rule(kind, children)
    }

    /// `simple_name` wrapping one identifier.
    pub fn simple_name(&self, text: &str) -> CstNode {
        self.rule(
            RuleKind::SimpleName,
            vec![self.token(TokenKind::Identifier, text)],
        )
    }

    /// `qualified_name` of dot-separated simple names.
    pub fn qualified_name(&self, segments: &[&str]) -> CstNode {
        let mut children = Vec::with_capacity(segments.len() * 2);
        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                children.push(self.token(TokenKind::Dot, "."));
            }
            children.push(self.simple_name(segment));
        }
        self.rule(RuleKind::QualifiedName, children)
    }

    /// Next byte offset a token would start at.
    pub fn offset(&self) -> usize {
        self.cursor.get()
    }
}
