//! # Expression Transformation
//!
//! Builds every non-literal expression. Assignment shares the binary shape;
//! the operator field is the only thing telling `a = b` from `a + b`.
//!
//! ## CST Structure
//!
//! ```text
//! BinaryExpr / AssignmentExpr
//! ├── Expression (left)
//! ├── Token (op)
//! └── Expression (right)
//!
//! MemberAccessExpr
//! ├── Expression
//! ├── Token .
//! └── SimpleName | Token StringLiteral
//! ```

use super::operators::{binary_operator, unary_operator};
use super::registry::Registry;
use super::translation::{required, Translation};
use crate::ast::*;
use crate::error::TransformError;
use crate::node::Node;
use zenscript_cst::{CstNode, RuleKind, TokenKind};

pub(super) fn register(registry: &mut Registry) {
    registry
        .register(RuleKind::ReferenceExpr, reference_expr)
        .register(RuleKind::FunctionExpr, function_expr)
        .register(RuleKind::BracketHandlerExpr, bracket_handler_expr)
        .register(RuleKind::ArrayLiteral, array_literal)
        .register(RuleKind::MapLiteral, map_literal)
        .register(RuleKind::MapEntry, map_entry)
        .register(RuleKind::ParensExpr, parens_expr)
        .register(RuleKind::InstanceOfExpr, instance_of_expr)
        .register(RuleKind::TypeCastExpr, type_cast_expr)
        .register(RuleKind::CallExpr, call_expr)
        .register(RuleKind::ArrayAccessExpr, array_access_expr)
        .register(RuleKind::MemberAccessExpr, member_access_expr)
        .register(RuleKind::IntRangeExpr, int_range_expr)
        .register(RuleKind::UnaryExpr, unary_expr)
        .register(RuleKind::BinaryExpr, binary_expr)
        .register(RuleKind::AssignmentExpr, binary_expr)
        .register(RuleKind::TernaryExpr, ternary_expr);
}

fn expression(e: Expression) -> Result<Node, TransformError> {
    Ok(Node::Expression(e))
}

// =============================================================================
// PRIMARY
// =============================================================================

fn reference_expr(_: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    let name = required(node, node.find_rule(&RuleKind::SimpleName), "simple name")?;
    expression(Expression::Reference {
        reference: ReferenceByName::new(name.text(), name.span),
        span: node.span,
    })
}

/// `function(x as int) as int { ... }`
fn function_expr(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    expression(Expression::Function {
        parameters: t.field_list(node, "parameters")?,
        return_type_literal: t.optional_field(node, "returnType")?,
        body: t.body(node, RuleKind::FunctionBody)?,
        span: node.span,
    })
}

/// `<minecraft:stone>`; the content between the brackets is kept as text.
fn bracket_handler_expr(_: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    let content = required(node, node.find_rule(&RuleKind::Content), "content")?;
    expression(Expression::BracketHandler {
        content: content.text(),
        span: node.span,
    })
}

fn array_literal(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    expression(Expression::ArrayLiteral {
        elements: t.expression_list(node)?,
        span: node.span,
    })
}

fn map_literal(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    expression(Expression::MapLiteral {
        entries: t.field_list(node, "entries")?,
        span: node.span,
    })
}

fn map_entry(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    Ok(Node::MapEntry(MapEntry {
        key: t.field(node, "key")?,
        value: t.field(node, "value")?,
        span: node.span,
    }))
}

fn parens_expr(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    expression(Expression::Parens {
        expression: t.expression(node)?,
        span: node.span,
    })
}

// =============================================================================
// TYPE TESTS
// =============================================================================

fn instance_of_expr(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    expression(Expression::InstanceOf {
        expression: t.expression(node)?,
        type_literal: t.type_literal(node)?,
        span: node.span,
    })
}

fn type_cast_expr(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    expression(Expression::Cast {
        expression: t.expression(node)?,
        type_literal: t.type_literal(node)?,
        span: node.span,
    })
}

// =============================================================================
// POSTFIX
// =============================================================================

fn call_expr(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    expression(Expression::Call {
        receiver: t.field(node, "receiver")?,
        arguments: t.field_list(node, "arguments")?,
        span: node.span,
    })
}

fn array_access_expr(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    expression(Expression::ArrayAccess {
        receiver: t.field(node, "receiver")?,
        index: t.field(node, "index")?,
        span: node.span,
    })
}

/// `x.y` and `x."y"` both access member `y`.
fn member_access_expr(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    let receiver = t.expression(node)?;
    let member = node
        .find_rule(&RuleKind::SimpleName)
        .or_else(|| node.find_token(TokenKind::StringLiteral));
    let member = required(node, member, "member name")?;
    expression(Expression::MemberAccess {
        receiver,
        member: ReferenceByName::new(unquote(&member.text()), member.span),
        span: node.span,
    })
}

/// Strip one pair of matching quotes, if present.
fn unquote(text: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = text
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    text
}

fn int_range_expr(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    expression(Expression::IntRange {
        from: t.field(node, "from")?,
        to: t.field(node, "to")?,
        span: node.span,
    })
}

// =============================================================================
// OPERATORS
// =============================================================================

fn unary_expr(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    let op = required(node, node.child_by_field("op"), "op")?;
    expression(Expression::Unary {
        operator: unary_operator(op)?,
        expression: t.expression(node)?,
        span: node.span,
    })
}

/// Binary operators and every assignment form.
fn binary_expr(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    let op = required(node, node.child_by_field("op"), "op")?;
    let left = t.field(node, "left")?;
    let operator = binary_operator(op)?;
    expression(Expression::Binary {
        left,
        operator,
        right: t.field(node, "right")?,
        span: node.span,
    })
}

fn ternary_expr(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    expression(Expression::Ternary {
        condition: t.field(node, "condition")?,
        true_part: t.field(node, "truePart")?,
        false_part: t.field(node, "falsePart")?,
        span: node.span,
    })
}

// =============================================================================
// TESTS
// =============================================================================
