//! # CST to AST Transformation
//!
//! Transforms a ZenScript Concrete Syntax Tree into the typed AST.
//!
//! Construction procedures are looked up per rule kind in a [`Registry`] that
//! is built once and never mutated afterwards. Each run gets its own
//! [`Translation`] context, so one [`Mapper`] can serve many threads.
//!
//! ## Example
//!
//! ```rust
//! use zenscript_ast::cst_to_ast::Mapper;
//! use zenscript_cst::{CstNode, RuleKind};
//!
//! let root = CstNode::rule(RuleKind::CompilationUnit, vec![]);
//! let result = Mapper::default().transform(&root).unwrap();
//! assert!(result.unit.unwrap().toplevel_entities.is_empty());
//! ```

mod declarations;
mod expressions;
pub mod literals;
pub mod operators;
mod registry;
mod statements;
mod translation;
mod types;

pub use registry::{NodeFactory, Registry};
pub use translation::Translation;

use crate::ast::CompilationUnit;
use crate::diagnostic::Issues;
use crate::error::{LoadError, TransformError};
use config::constants::MapperConfig;
use rayon::prelude::*;
use std::sync::OnceLock;
use zenscript_cst::CstNode;

// =============================================================================
// TRANSFORMATION RESULT
// =============================================================================

/// Outcome of one transformation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformation {
    /// AST root, absent when the strict policy rejected a subtree.
    pub unit: Option<CompilationUnit>,
    /// Issues recorded during the run, in the order they were found.
    pub issues: Issues,
}

impl Transformation {
    /// True when a root was produced and no error was recorded.
    pub fn is_ok(&self) -> bool {
        self.unit.is_some() && !self.issues.has_errors()
    }
}

// =============================================================================
// MAPPER
// =============================================================================

/// Shared, read-only transformation engine.
#[derive(Debug, Clone)]
pub struct Mapper {
    registry: Registry,
    config: MapperConfig,
}

impl Mapper {
    /// Mapper over the full ZenScript registry.
    pub fn new(config: MapperConfig) -> Self {
        Self::with_registry(Registry::zenscript(), config)
    }

    /// Mapper over a caller-supplied registry.
    pub fn with_registry(registry: Registry, config: MapperConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Transform a CST root into a compilation unit.
    ///
    /// ## Returns
    ///
    /// - `Ok` with a root and issues on success, including permissive
    ///   recoveries.
    /// - `Ok` without a root when the strict policy rejected a subtree; the
    ///   rejection is already among the issues.
    ///
    /// ## Errors
    ///
    /// Any defect: an unexpected token, a shape mismatch, a missing required
    /// child or a malformed pass-through rule.
    pub fn transform(&self, root: &CstNode) -> Result<Transformation, TransformError> {
        let mut translation = Translation::new(self);
        let result = translation.translate::<CompilationUnit>(root);
        let issues = translation.into_issues();
        match result {
            Ok(unit) => Ok(Transformation {
                unit: Some(unit),
                issues,
            }),
            Err(err) if !err.is_defect() => Ok(Transformation { unit: None, issues }),
            Err(err) => Err(err),
        }
    }

    /// Decode a JSON-serialized CST and transform it.
    pub fn transform_json(&self, json: &str) -> Result<Transformation, LoadError> {
        let root = zenscript_cst::from_json(json)?;
        Ok(self.transform(&root)?)
    }

    /// Transform independent roots in parallel.
    ///
    /// Results come back in input order; each run has its own issue list.
    pub fn transform_batch(&self, roots: &[CstNode]) -> Vec<Result<Transformation, TransformError>> {
        roots.par_iter().map(|root| self.transform(root)).collect()
    }
}

impl Default for Mapper {
    fn default() -> Self {
        Self::new(MapperConfig::default())
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Transform with a process-wide mapper in the default (permissive) mode.
///
/// ## Example
///
/// ```rust
/// use zenscript_ast::cst_to_ast::transform;
/// use zenscript_cst::{CstNode, RuleKind};
///
/// let root = CstNode::rule(RuleKind::CompilationUnit, vec![]);
/// assert!(transform(&root).unwrap().is_ok());
/// ```
pub fn transform(root: &CstNode) -> Result<Transformation, TransformError> {
    static DEFAULT: OnceLock<Mapper> = OnceLock::new();
    DEFAULT.get_or_init(Mapper::default).transform(root)
}

// =============================================================================
// TESTS
// =============================================================================
