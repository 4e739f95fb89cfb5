//! # Concrete Syntax Tree (CST)
//!
//! CST types a ZenScript parser hands to the AST mapper. Every node knows the
//! rule (or token kind) that produced it, its span, the grammar label it was
//! captured under, and its ordered children.
//!
//! ## Example
//!
//! ```rust
//! use zenscript_cst::{CstNode, RuleKind, Span, TokenKind};
//!
//! let name = CstNode::token(TokenKind::Identifier, Span::from_bytes(0, 3), "foo");
//! let node = CstNode::rule(RuleKind::SimpleName, vec![name]);
//! assert_eq!(node.text(), "foo");
//! ```

use crate::error::ParseError;
use crate::rule::RuleKind;
use crate::span::{Span, Spanned};
use crate::token::TokenKind;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// CST
// =============================================================================

/// Concrete Syntax Tree result.
///
/// Contains the root node and any syntax errors the producer reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cst {
    /// Root node of the syntax tree.
    pub root: CstNode,
    /// Syntax errors encountered by the producer.
    #[serde(default)]
    pub errors: Vec<ParseError>,
}

impl Cst {
    /// Create a new CST.
    pub fn new(root: CstNode, errors: Vec<ParseError>) -> Self {
        Self { root, errors }
    }

    /// Check if parsing was successful (no errors).
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

// =============================================================================
// NODE KIND
// =============================================================================

/// What produced a CST node: a grammar rule or a lexer token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Non-terminal produced by a grammar rule.
    Rule(RuleKind),
    /// Terminal produced by the lexer.
    Token(TokenKind),
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule(rule) => write!(f, "{rule}"),
            Self::Token(token) => write!(f, "token {token}"),
        }
    }
}

// =============================================================================
// CST NODE
// =============================================================================

/// A node in the Concrete Syntax Tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CstNode {
    /// Rule or token kind.
    pub kind: NodeKind,
    /// Source span.
    #[serde(default)]
    pub span: Span,
    /// Grammar label this node was captured under in its parent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Lexeme, for terminals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Child nodes in source order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CstNode>,
}

impl CstNode {
    /// Create a terminal node.
    ///
    /// ## Parameters
    ///
    /// - `kind`: Token kind
    /// - `span`: Source location
    /// - `text`: Lexeme
    pub fn token(kind: TokenKind, span: Span, text: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Token(kind),
            span,
            field: None,
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    /// Create a rule node whose span covers its children.
    ///
    /// A rule without children gets an empty span at the origin.
    pub fn rule(kind: RuleKind, children: Vec<CstNode>) -> Self {
        let span = match (children.first(), children.last()) {
            (Some(first), Some(last)) => first.span.merge(&last.span),
            _ => Span::zero(),
        };
        Self::rule_with_span(kind, span, children)
    }

    /// Create a rule node with an explicit span.
    pub fn rule_with_span(kind: RuleKind, span: Span, children: Vec<CstNode>) -> Self {
        Self {
            kind: NodeKind::Rule(kind),
            span,
            field: None,
            text: None,
            children,
        }
    }

    /// Label this node with the grammar field it fills in its parent.
    pub fn labeled(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Rule kind, if this is a non-terminal.
    pub fn rule_kind(&self) -> Option<&RuleKind> {
        match &self.kind {
            NodeKind::Rule(rule) => Some(rule),
            NodeKind::Token(_) => None,
        }
    }

    /// Token kind, if this is a terminal.
    pub fn token_kind(&self) -> Option<TokenKind> {
        match self.kind {
            NodeKind::Token(token) => Some(token),
            NodeKind::Rule(_) => None,
        }
    }

    /// True if this node was produced by `rule`.
    pub fn is_rule(&self, rule: &RuleKind) -> bool {
        self.rule_kind() == Some(rule)
    }

    /// Source text of the node.
    ///
    /// For a terminal this is its lexeme; for a rule it is the concatenated
    /// lexemes of all terminals below it, without the whitespace between them.
    pub fn text(&self) -> String {
        match &self.text {
            Some(text) if self.children.is_empty() => text.clone(),
            _ => {
                let mut out = String::new();
                self.collect_text(&mut out);
                out
            }
        }
    }

    fn collect_text(&self, out: &mut String) {
        if self.children.is_empty() {
            if let Some(text) = &self.text {
                out.push_str(text);
            }
            return;
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// First child captured under `field`.
    ///
    /// ## Example
    ///
    /// ```rust,ignore
    /// let left = node.child_by_field("left");
    /// ```
    pub fn child_by_field(&self, field: &str) -> Option<&CstNode> {
        self.children
            .iter()
            .find(|c| c.field.as_deref() == Some(field))
    }

    /// All children captured under `field`, in source order.
    pub fn children_by_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a CstNode> + 'a {
        self.children
            .iter()
            .filter(move |c| c.field.as_deref() == Some(field))
    }

    /// First child produced by `rule`.
    pub fn find_rule(&self, rule: &RuleKind) -> Option<&CstNode> {
        self.children.iter().find(|c| c.is_rule(rule))
    }

    /// All children produced by `rule`, in source order.
    pub fn find_rules(&self, rule: &RuleKind) -> Vec<&CstNode> {
        self.children.iter().filter(|c| c.is_rule(rule)).collect()
    }

    /// First child that is an expression alternative.
    pub fn find_expression(&self) -> Option<&CstNode> {
        self.children
            .iter()
            .find(|c| c.rule_kind().is_some_and(RuleKind::is_expression))
    }

    /// First child that is a type literal alternative.
    pub fn find_type_literal(&self) -> Option<&CstNode> {
        self.children
            .iter()
            .find(|c| c.rule_kind().is_some_and(RuleKind::is_type_literal))
    }

    /// First terminal child of `kind`.
    pub fn find_token(&self, kind: TokenKind) -> Option<&CstNode> {
        self.children.iter().find(|c| c.token_kind() == Some(kind))
    }

    /// Non-terminal children, in source order.
    pub fn rule_children(&self) -> impl Iterator<Item = &CstNode> {
        self.children.iter().filter(|c| c.rule_kind().is_some())
    }
}

impl Spanned for CstNode {
    fn span(&self) -> Span {
        self.span
    }
}

// =============================================================================
// TESTS
// =============================================================================
