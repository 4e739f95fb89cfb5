//! # Translation Context
//!
//! Per-run state shared by every construction procedure: the mapper it runs
//! under and the issues found so far.
//!
//! Procedures never recurse into children directly; they go through the
//! helpers here so that every descent is dispatched through the registry,
//! narrowed to the expected shape and guarded against stack exhaustion.

use super::Mapper;
use crate::ast::{GenericNode, Name, Statement};
use crate::diagnostic::{Diagnostic, Issues};
use crate::error::TransformError;
use crate::node::{FromNode, Node};
use zenscript_cst::{CstNode, NodeKind, RuleKind};

/// State of one transformation run.
pub struct Translation<'m> {
    mapper: &'m Mapper,
    issues: Issues,
}

impl<'m> Translation<'m> {
    pub fn new(mapper: &'m Mapper) -> Self {
        Self {
            mapper,
            issues: Issues::new(),
        }
    }

    pub fn issues(&self) -> &Issues {
        &self.issues
    }

    pub fn into_issues(self) -> Issues {
        self.issues
    }

    // =========================================================================
    // DISPATCH
    // =========================================================================

    /// Build the AST node for `node` with the procedure registered for its
    /// rule kind.
    ///
    /// Terminals and unregistered rules take the unmapped-shape path.
    pub fn translate_node(&mut self, node: &CstNode) -> Result<Node, TransformError> {
        let config = *self.mapper.config();
        stacker::maybe_grow(config.stack_red_zone, config.stack_size, || {
            self.dispatch(node)
        })
    }

    fn dispatch(&mut self, node: &CstNode) -> Result<Node, TransformError> {
        let mapper = self.mapper;
        let factory = node.rule_kind().and_then(|rule| mapper.registry().get(rule));
        match factory {
            Some(factory) => factory(self, node),
            None => self.reject(
                node,
                format!("no mapping for {}", node.kind),
                "the grammar has a shape the mapper does not know yet",
            ),
        }
    }

    /// Record a mapping-level issue for `node` and apply the policy.
    ///
    /// Permissive: a warning plus an opaque [`GenericNode`] covering `node`.
    /// Strict: an error plus [`TransformError::Rejected`], which fails every
    /// enclosing construction up to the run boundary.
    pub fn reject(
        &mut self,
        node: &CstNode,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) -> Result<Node, TransformError> {
        let shape = node.kind.to_string();
        if self.mapper.config().allow_generic_node {
            self.issues
                .push(Diagnostic::warning(message, node.span).with_hint(hint));
            Ok(Node::Generic(GenericNode {
                shape,
                text: node.text(),
                span: node.span,
            }))
        } else {
            self.issues
                .push(Diagnostic::error(message, node.span).with_hint(hint));
            Err(TransformError::Rejected {
                shape,
                span: node.span,
            })
        }
    }

    // =========================================================================
    // GENERIC HELPERS
    // =========================================================================

    /// Translate a required child and narrow it to `T`.
    pub fn translate<T: FromNode>(&mut self, node: &CstNode) -> Result<T, TransformError> {
        let built = self.translate_node(node)?;
        T::from_node(built).map_err(|other| mismatch::<T>(other, node))
    }

    /// Translate a child that the grammar allows to be absent.
    ///
    /// An opaque node in a slot whose shape has no `Generic` variant is
    /// dropped; its warning is already recorded.
    pub fn translate_optional<T: FromNode>(
        &mut self,
        node: Option<&CstNode>,
    ) -> Result<Option<T>, TransformError> {
        match node {
            Some(n) => self.translate_or_skip(n),
            None => Ok(None),
        }
    }

    /// Translate a sequence of children, preserving order.
    ///
    /// Opaque nodes that `T` cannot hold are left out, as in
    /// [`Translation::translate_optional`].
    pub fn translate_list<'c, T, I>(&mut self, nodes: I) -> Result<Vec<T>, TransformError>
    where
        T: FromNode,
        I: IntoIterator<Item = &'c CstNode>,
    {
        let mut built = Vec::new();
        for node in nodes {
            if let Some(item) = self.translate_or_skip(node)? {
                built.push(item);
            }
        }
        Ok(built)
    }

    fn translate_or_skip<T: FromNode>(&mut self, node: &CstNode) -> Result<Option<T>, TransformError> {
        match T::from_node(self.translate_node(node)?) {
            Ok(item) => Ok(Some(item)),
            Err(Node::Generic(_)) => Ok(None),
            Err(other) => Err(mismatch::<T>(other, node)),
        }
    }

    /// Translate the single rule child of a wrapper rule.
    ///
    /// Tokens around the child (semicolons, keywords) are ignored.
    pub fn translate_only_child(&mut self, node: &CstNode) -> Result<Node, TransformError> {
        let mut rules = node.rule_children();
        match (rules.next(), rules.next()) {
            (Some(child), None) => self.translate_node(child),
            _ => Err(TransformError::MalformedWrapper {
                rule: rule_of(node),
                found: node.rule_children().count(),
                span: node.span,
            }),
        }
    }

    // =========================================================================
    // FIELD ACCESS
    // =========================================================================

    /// Translate the required child labelled `field`.
    pub fn field<T: FromNode>(
        &mut self,
        node: &CstNode,
        field: &'static str,
    ) -> Result<T, TransformError> {
        let child = required(node, node.child_by_field(field), field)?;
        self.translate(child)
    }

    /// Translate the child labelled `field`, if present.
    pub fn optional_field<T: FromNode>(
        &mut self,
        node: &CstNode,
        field: &str,
    ) -> Result<Option<T>, TransformError> {
        self.translate_optional(node.child_by_field(field))
    }

    /// Translate every child labelled `field`.
    pub fn field_list<T: FromNode>(
        &mut self,
        node: &CstNode,
        field: &str,
    ) -> Result<Vec<T>, TransformError> {
        self.translate_list(node.children_by_field(field))
    }

    /// Translate the required `simple_name` child.
    pub fn simple_name(&mut self, node: &CstNode) -> Result<Name, TransformError> {
        let child = required(node, node.find_rule(&RuleKind::SimpleName), "simple name")?;
        self.translate(child)
    }

    /// Translate the first unlabelled expression child.
    ///
    /// Rules this crate does not know count as expressions here, so a newer
    /// expression form becomes an opaque node instead of a missing child.
    pub fn expression<T: FromNode>(&mut self, node: &CstNode) -> Result<T, TransformError> {
        let child = required(node, unlabeled(node, is_expression_slot), "expression")?;
        self.translate(child)
    }

    /// Translate the first unlabelled expression child, if present.
    pub fn optional_expression<T: FromNode>(
        &mut self,
        node: &CstNode,
    ) -> Result<Option<T>, TransformError> {
        self.translate_optional(unlabeled(node, is_expression_slot))
    }

    /// Translate every unlabelled expression child, in order.
    pub fn expression_list<T: FromNode>(&mut self, node: &CstNode) -> Result<Vec<T>, TransformError> {
        let children = node
            .children
            .iter()
            .filter(|c| c.field.is_none() && c.rule_kind().is_some_and(is_expression_slot));
        self.translate_list(children)
    }

    /// Translate the first unlabelled type literal child.
    pub fn type_literal<T: FromNode>(&mut self, node: &CstNode) -> Result<T, TransformError> {
        let child = required(node, unlabeled(node, RuleKind::is_type_literal), "type literal")?;
        self.translate(child)
    }

    /// Translate the first unlabelled type literal child, if present.
    pub fn optional_type_literal<T: FromNode>(
        &mut self,
        node: &CstNode,
    ) -> Result<Option<T>, TransformError> {
        self.translate_optional(unlabeled(node, RuleKind::is_type_literal))
    }

    /// Statements of the `body` child of `node`.
    ///
    /// An absent body yields an empty list.
    pub fn body(&mut self, node: &CstNode, body: RuleKind) -> Result<Vec<Statement>, TransformError> {
        match node.find_rule(&body) {
            Some(body) => self.translate_list(body.rule_children()),
            None => Ok(Vec::new()),
        }
    }
}

// =============================================================================
// CST HELPERS
// =============================================================================

/// Turn an absent required child into [`TransformError::MissingChild`].
pub(crate) fn required<'c>(
    parent: &CstNode,
    child: Option<&'c CstNode>,
    field: &'static str,
) -> Result<&'c CstNode, TransformError> {
    child.ok_or_else(|| TransformError::MissingChild {
        rule: rule_of(parent),
        field,
        span: parent.span,
    })
}

fn mismatch<T: FromNode>(found: Node, node: &CstNode) -> TransformError {
    TransformError::ShapeMismatch {
        expected: T::SHAPE,
        found: found.shape(),
        span: node.span,
    }
}

/// First rule child without a grammar label that satisfies `accept`.
///
/// Labelled children fill named slots (`returnType`, `initializer`), so the
/// unlabelled one is the positional child the grammar means.
pub(crate) fn unlabeled(node: &CstNode, accept: fn(&RuleKind) -> bool) -> Option<&CstNode> {
    node.children
        .iter()
        .filter(|c| c.field.is_none())
        .find(|c| c.rule_kind().is_some_and(accept))
}

fn is_expression_slot(rule: &RuleKind) -> bool {
    rule.is_expression() || matches!(rule, RuleKind::Other(_))
}

fn rule_of(node: &CstNode) -> RuleKind {
    match &node.kind {
        NodeKind::Rule(rule) => rule.clone(),
        NodeKind::Token(token) => RuleKind::Other(token.to_string()),
    }
}

// =============================================================================
// TESTS
// =============================================================================
