//! # ZenScript AST Crate
//!
//! Converts a ZenScript CST (Concrete Syntax Tree) into a typed AST (Abstract
//! Syntax Tree). Every node carries source span information for diagnostics.
//!
//! ## Architecture
//!
//! ```text
//! ZenScript Source → parser (external) → zenscript-cst (CST) → zenscript-ast (AST)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use zenscript_ast::{Mapper, MapperConfig};
//! use zenscript_cst::{CstBuilder, RuleKind, TokenKind};
//!
//! let b = CstBuilder::new();
//! let stmt = b.rule(RuleKind::BreakStatement, vec![b.token(TokenKind::Break, "break")]);
//! let root = b.rule(RuleKind::CompilationUnit, vec![
//!     b.rule(RuleKind::ToplevelEntity, vec![b.rule(RuleKind::Statement, vec![stmt])]),
//! ]);
//!
//! let result = Mapper::new(MapperConfig::strict()).transform(&root).unwrap();
//! assert_eq!(result.unit.unwrap().toplevel_entities.len(), 1);
//! ```
//!
//! ## Design Principles
//!
//! - **Typed AST**: All nodes are strongly typed Rust enums/structs
//! - **Source Mapping**: Every node carries a `Span` for diagnostics
//! - **Unresolved Names**: References are name-keyed; binding is a later pass
//! - **Recoverable Gaps**: Unknown shapes become generic nodes or strict failures, never panics

pub mod ast;
pub mod cst_to_ast;
pub mod diagnostic;
pub mod error;
pub mod node;
pub mod visitor;

// Re-exports for convenience
pub use ast::*;
pub use config::constants::MapperConfig;
pub use cst_to_ast::{transform, Mapper, Registry, Transformation};
pub use diagnostic::{Diagnostic, Issues, Severity};
pub use error::{LoadError, TransformError};
pub use visitor::{collect_references, Visitor};
