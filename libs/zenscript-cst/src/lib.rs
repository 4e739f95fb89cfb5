//! # ZenScript CST
//!
//! The concrete syntax tree contract between a ZenScript parser and the
//! AST mapper in `zenscript-ast`.
//!
//! ## Architecture
//!
//! ```text
//! ZenScript Source → parser (external) → CST (this crate) → zenscript-ast → AST
//! ```
//!
//! A producer either builds [`CstNode`] values directly or serializes them as
//! JSON and hands the text to [`from_json`].
//!
//! ## Example
//!
//! ```rust
//! use zenscript_cst::{from_json, NodeKind, RuleKind};
//!
//! let root = from_json(r#"{ "kind": { "rule": "compilation_unit" } }"#).unwrap();
//! assert_eq!(root.kind, NodeKind::Rule(RuleKind::CompilationUnit));
//! assert!(root.children.is_empty());
//! ```

pub mod builder;
pub mod cst;
pub mod error;
pub mod rule;
pub mod span;
pub mod token;

// Re-export public API
pub use builder::CstBuilder;
pub use cst::{Cst, CstNode, NodeKind};
pub use error::{CstError, ParseError};
pub use rule::RuleKind;
pub use span::{Position, Span, Spanned};
pub use token::TokenKind;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Decode a serialized CST root node.
///
/// ## Errors
///
/// Returns [`CstError::Json`] when the text is not valid JSON or does not
/// describe a node. Unknown rule names are accepted as [`RuleKind::Other`].
pub fn from_json(json: &str) -> Result<CstNode, CstError> {
    Ok(serde_json::from_str(json)?)
}

/// Decode a serialized [`Cst`] (root plus producer errors).
pub fn cst_from_json(json: &str) -> Result<Cst, CstError> {
    Ok(serde_json::from_str(json)?)
}
