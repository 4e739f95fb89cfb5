//! # CST Errors
//!
//! Errors produced while obtaining a CST: syntax errors reported by the
//! producing parser, and decoding failures for serialized trees.

use crate::span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// PARSE ERROR
// =============================================================================

/// A syntax error reported by the parser that produced the CST.
///
/// The mapper does not interpret these; they travel with [`crate::Cst`] so
/// callers can decide whether to map a tree that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    /// Human-readable description.
    pub message: String,
    /// Source location of error.
    pub span: Span,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.message, self.span.start.line, self.span.start.column
        )
    }
}

impl std::error::Error for ParseError {}

// =============================================================================
// CST ERROR
// =============================================================================

/// Errors that can occur while loading a serialized CST.
#[derive(Debug, Error)]
pub enum CstError {
    /// The JSON text is not a valid CST.
    #[error("invalid CST JSON: {0}")]
    Json(#[from] serde_json::Error),
}
