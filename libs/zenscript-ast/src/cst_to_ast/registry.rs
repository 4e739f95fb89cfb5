//! # Rule Registry
//!
//! Maps each rule kind to the procedure that builds its AST node.
//!
//! The table is assembled once per [`super::Mapper`] and only read afterwards,
//! so it is shared freely across threads.

use super::translation::Translation;
use super::{declarations, expressions, literals, statements, types};
use crate::error::TransformError;
use crate::node::Node;
use std::collections::HashMap;
use zenscript_cst::{CstNode, RuleKind};

/// Construction procedure for one rule kind.
pub type NodeFactory = fn(&mut Translation<'_>, &CstNode) -> Result<Node, TransformError>;

/// Rule kind to construction procedure table.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    factories: HashMap<RuleKind, NodeFactory>,
}

impl Registry {
    /// Empty registry; every shape is unmapped.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry covering the whole ZenScript grammar.
    pub fn zenscript() -> Self {
        let mut registry = Self::new();
        declarations::register(&mut registry);
        statements::register(&mut registry);
        expressions::register(&mut registry);
        literals::register(&mut registry);
        types::register(&mut registry);
        registry
    }

    /// Register `factory` for `rule`, replacing any earlier entry.
    pub fn register(&mut self, rule: RuleKind, factory: NodeFactory) -> &mut Self {
        self.factories.insert(rule, factory);
        self
    }

    /// Drop the entry for `rule`, leaving it unmapped.
    pub fn unregister(&mut self, rule: &RuleKind) -> Option<NodeFactory> {
        self.factories.remove(rule)
    }

    pub fn get(&self, rule: &RuleKind) -> Option<NodeFactory> {
        self.factories.get(rule).copied()
    }

    pub fn contains(&self, rule: &RuleKind) -> bool {
        self.factories.contains_key(rule)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
