//! # Operator Interpretation
//!
//! Closed tables from lexer tokens to declaring kinds and operators.
//!
//! A token outside a table means the grammar and the mapper disagree, so a
//! miss is a defect rather than a recoverable issue.
//!
//! ## Example
//!
//! ```rust
//! use zenscript_ast::ast::{BinaryOperator, DeclaringKind};
//! use zenscript_ast::cst_to_ast::operators::{binary_operator_of, declaring_kind_of};
//! use zenscript_cst::TokenKind;
//!
//! assert_eq!(declaring_kind_of(TokenKind::Val), Some(DeclaringKind::Val));
//! assert_eq!(binary_operator_of(TokenKind::AddAssign), Some(BinaryOperator::AddAssign));
//! ```

use crate::ast::{BinaryOperator, DeclaringKind, UnaryOperator};
use crate::error::TransformError;
use zenscript_cst::{CstNode, TokenKind};

// =============================================================================
// TABLES
// =============================================================================

pub fn declaring_kind_of(token: TokenKind) -> Option<DeclaringKind> {
    match token {
        TokenKind::Var => Some(DeclaringKind::Var),
        TokenKind::Val => Some(DeclaringKind::Val),
        TokenKind::Static => Some(DeclaringKind::Static),
        TokenKind::Global => Some(DeclaringKind::Global),
        _ => None,
    }
}

pub fn unary_operator_of(token: TokenKind) -> Option<UnaryOperator> {
    match token {
        TokenKind::Not => Some(UnaryOperator::Not),
        TokenKind::Sub => Some(UnaryOperator::Neg),
        _ => None,
    }
}

/// Binary operator for `token`, assignment forms included.
pub fn binary_operator_of(token: TokenKind) -> Option<BinaryOperator> {
    use BinaryOperator as B;
    let operator = match token {
        TokenKind::Add => B::Add,
        TokenKind::Sub => B::Sub,
        TokenKind::Mul => B::Mul,
        TokenKind::Div => B::Div,
        TokenKind::Mod => B::Mod,
        TokenKind::Concat => B::Concat,
        TokenKind::Less => B::Less,
        TokenKind::LessEqual => B::LessEqual,
        TokenKind::Greater => B::Greater,
        TokenKind::GreaterEqual => B::GreaterEqual,
        TokenKind::Equal => B::Equal,
        TokenKind::NotEqual => B::NotEqual,
        TokenKind::And => B::And,
        TokenKind::Or => B::Or,
        TokenKind::BitAnd => B::BitAnd,
        TokenKind::BitOr => B::BitOr,
        TokenKind::Xor => B::Xor,
        TokenKind::In => B::In,
        TokenKind::Has => B::Has,
        TokenKind::Assign => B::Assign,
        TokenKind::AddAssign => B::AddAssign,
        TokenKind::SubAssign => B::SubAssign,
        TokenKind::MulAssign => B::MulAssign,
        TokenKind::DivAssign => B::DivAssign,
        TokenKind::ModAssign => B::ModAssign,
        TokenKind::ConcatAssign => B::ConcatAssign,
        TokenKind::AndAssign => B::AndAssign,
        TokenKind::OrAssign => B::OrAssign,
        TokenKind::XorAssign => B::XorAssign,
        _ => return None,
    };
    Some(operator)
}

// =============================================================================
// CST INTERPRETATION
// =============================================================================

/// Declaring kind of an optional prefix token; no prefix means
/// [`DeclaringKind::None`].
pub fn declaring_kind(prefix: Option<&CstNode>) -> Result<DeclaringKind, TransformError> {
    match prefix {
        None => Ok(DeclaringKind::None),
        Some(node) => lookup(node, "declaring kind", declaring_kind_of),
    }
}

pub fn unary_operator(node: &CstNode) -> Result<UnaryOperator, TransformError> {
    lookup(node, "unary operator", unary_operator_of)
}

pub fn binary_operator(node: &CstNode) -> Result<BinaryOperator, TransformError> {
    lookup(node, "binary operator", binary_operator_of)
}

fn lookup<T>(
    node: &CstNode,
    mapping: &'static str,
    table: fn(TokenKind) -> Option<T>,
) -> Result<T, TransformError> {
    let found = node.token_kind().ok_or(TransformError::ShapeMismatch {
        expected: "token",
        found: "rule",
        span: node.span,
    })?;
    table(found).ok_or(TransformError::UnexpectedToken {
        mapping,
        found,
        span: node.span,
    })
}

// =============================================================================
// TESTS
// =============================================================================
