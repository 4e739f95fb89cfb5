//! # Literal Transformation
//!
//! Interprets literal lexemes and builds literal expressions.
//!
//! ## Supported Literals
//!
//! - Integers: `42`, `0x1F`, `0b101`, `0o17`, widened to long past `i32::MAX`
//! - Longs: `42L`, `0xFFl`
//! - Floats: `1.5f`, doubles: `1.5`, `1.5d`
//! - Booleans, strings (raw lexeme), `null`, `this`
//!
//! A lexeme that no value can represent is not a defect: it is reported as an
//! issue and handled by the same policy as an unmapped shape.
//!
//! ## Example
//!
//! ```rust
//! use zenscript_ast::cst_to_ast::literals::{parse_integer, IntegerValue};
//!
//! assert_eq!(parse_integer("0x1F"), Ok(IntegerValue::Int { value: 31, radix: 16 }));
//! assert_eq!(
//!     parse_integer("2147483648"),
//!     Ok(IntegerValue::Long { value: 2147483648, radix: 10 })
//! );
//! ```

use super::registry::Registry;
use super::translation::Translation;
use crate::ast::Expression;
use crate::error::TransformError;
use crate::node::Node;
use std::num::IntErrorKind;
use thiserror::Error;
use zenscript_cst::{CstNode, RuleKind};

// =============================================================================
// VALUES
// =============================================================================

/// Integer value with the radix it was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerValue {
    Int { value: i32, radix: u32 },
    Long { value: i64, radix: u32 },
}

impl IntegerValue {
    fn into_expression(self, span: zenscript_cst::Span) -> Expression {
        match self {
            Self::Int { value, radix } => Expression::IntLiteral { value, radix, span },
            Self::Long { value, radix } => Expression::LongLiteral { value, radix, span },
        }
    }
}

/// Why a lexeme has no value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("integer literal '{0}' does not fit in 64 bits")]
    OutOfRange(String),
    #[error("malformed {kind} literal '{text}'")]
    Malformed { kind: &'static str, text: String },
}

// =============================================================================
// RADIX
// =============================================================================

/// Radix selected by the lexeme's prefix.
///
/// ```text
/// 0x / 0X -> 16
/// 0b / 0B -> 2
/// 0o / 0O -> 8
/// other   -> 10
/// ```
pub fn radix_of(text: &str) -> u32 {
    match text.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0b" | "0B") => 2,
        Some("0o" | "0O") => 8,
        _ => 10,
    }
}

/// Digits of the lexeme with any radix prefix removed.
pub fn digits_of(text: &str) -> &str {
    if radix_of(text) == 10 {
        text
    } else {
        &text[2..]
    }
}

// =============================================================================
// INTERPRETERS
// =============================================================================

/// Interpret an integer lexeme, widening to long when it exceeds `i32`.
pub fn parse_integer(text: &str) -> Result<IntegerValue, LiteralError> {
    let radix = radix_of(text);
    let digits = digits_of(text);
    match i32::from_str_radix(digits, radix) {
        Ok(value) => Ok(IntegerValue::Int { value, radix }),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            parse_digits_as_long(text, digits, radix)
        }
        Err(_) => Err(malformed("integer", text)),
    }
}

/// Interpret a long lexeme; the `l`/`L` suffix is optional.
pub fn parse_long(text: &str) -> Result<IntegerValue, LiteralError> {
    let unsuffixed = text.strip_suffix(['l', 'L']).unwrap_or(text);
    let radix = radix_of(unsuffixed);
    parse_digits_as_long(text, digits_of(unsuffixed), radix)
}

fn parse_digits_as_long(text: &str, digits: &str, radix: u32) -> Result<IntegerValue, LiteralError> {
    match i64::from_str_radix(digits, radix) {
        Ok(value) => Ok(IntegerValue::Long { value, radix }),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            Err(LiteralError::OutOfRange(text.to_string()))
        }
        Err(_) => Err(malformed("long", text)),
    }
}

/// Interpret a float lexeme; the `f`/`F` suffix is optional.
pub fn parse_float(text: &str) -> Result<f32, LiteralError> {
    text.strip_suffix(['f', 'F'])
        .unwrap_or(text)
        .parse()
        .map_err(|_| malformed("float", text))
}

/// Interpret a double lexeme; the `d`/`D` suffix is optional.
pub fn parse_double(text: &str) -> Result<f64, LiteralError> {
    text.strip_suffix(['d', 'D'])
        .unwrap_or(text)
        .parse()
        .map_err(|_| malformed("double", text))
}

pub fn parse_bool(text: &str) -> Result<bool, LiteralError> {
    match text {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(malformed("bool", text)),
    }
}

fn malformed(kind: &'static str, text: &str) -> LiteralError {
    LiteralError::Malformed {
        kind,
        text: text.to_string(),
    }
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

pub(super) fn register(registry: &mut Registry) {
    registry
        .register(RuleKind::ThisExpr, this_expr)
        .register(RuleKind::NullLiteral, null_literal)
        .register(RuleKind::BoolLiteral, bool_literal)
        .register(RuleKind::IntLiteral, int_literal)
        .register(RuleKind::LongLiteral, long_literal)
        .register(RuleKind::FloatLiteral, float_literal)
        .register(RuleKind::DoubleLiteral, double_literal)
        .register(RuleKind::StringLiteral, string_literal);
}

fn this_expr(_: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    Ok(Node::Expression(Expression::This { span: node.span }))
}

fn null_literal(_: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    Ok(Node::Expression(Expression::NullLiteral { span: node.span }))
}

/// Lexeme kept verbatim, quotes and escapes included.
fn string_literal(_: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    Ok(Node::Expression(Expression::StringLiteral {
        value: node.text(),
        span: node.span,
    }))
}

fn bool_literal(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    interpret(t, node, parse_bool, |value, span| Expression::BoolLiteral { value, span })
}

fn int_literal(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    interpret(t, node, parse_integer, IntegerValue::into_expression)
}

fn long_literal(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    interpret(t, node, parse_long, IntegerValue::into_expression)
}

fn float_literal(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    interpret(t, node, parse_float, |value, span| Expression::FloatLiteral { value, span })
}

fn double_literal(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    interpret(t, node, parse_double, |value, span| Expression::DoubleLiteral { value, span })
}

/// Run `parse` over the node's lexeme and wrap the value, or hand the node to
/// the rejection policy.
fn interpret<V>(
    t: &mut Translation<'_>,
    node: &CstNode,
    parse: fn(&str) -> Result<V, LiteralError>,
    build: impl FnOnce(V, zenscript_cst::Span) -> Expression,
) -> Result<Node, TransformError> {
    let text = node.text();
    match parse(&text) {
        Ok(value) => Ok(Node::Expression(build(value, node.span))),
        Err(e) => t.reject(node, e.to_string(), "the value cannot be represented"),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radix_prefixes() {
        assert_eq!(radix_of("0x1F"), 16);
        assert_eq!(radix_of("0X1F"), 16);
        assert_eq!(radix_of("0b101"), 2);
        assert_eq!(radix_of("0o17"), 8);
        assert_eq!(radix_of("017"), 10);
        assert_eq!(radix_of("7"), 10);
        assert_eq!(digits_of("0b101"), "101");
        assert_eq!(digits_of("42"), "42");
    }

    #[test]
    fn test_int_boundary() {
        assert_eq!(
            parse_integer("2147483647"),
            Ok(IntegerValue::Int { value: i32::MAX, radix: 10 })
        );
        assert_eq!(
            parse_integer("2147483648"),
            Ok(IntegerValue::Long { value: 2_147_483_648, radix: 10 })
        );
    }

    #[test]
    fn test_prefixed_integers() {
        assert_eq!(parse_integer("0x1F"), Ok(IntegerValue::Int { value: 31, radix: 16 }));
        assert_eq!(parse_integer("0b101"), Ok(IntegerValue::Int { value: 5, radix: 2 }));
        assert_eq!(parse_integer("0o17"), Ok(IntegerValue::Int { value: 15, radix: 8 }));
        assert_eq!(
            parse_integer("0xFFFFFFFF"),
            Ok(IntegerValue::Long { value: 0xFFFF_FFFF, radix: 16 })
        );
    }

    #[test]
    fn test_integer_beyond_long_is_out_of_range() {
        assert_eq!(
            parse_integer("99999999999999999999"),
            Err(LiteralError::OutOfRange("99999999999999999999".into()))
        );
    }

    #[test]
    fn test_malformed_integer() {
        assert!(matches!(parse_integer("0x"), Err(LiteralError::Malformed { kind: "integer", .. })));
        assert!(matches!(parse_integer("12ab"), Err(LiteralError::Malformed { .. })));
    }

    #[test]
    fn test_long_suffix() {
        assert_eq!(parse_long("10L"), Ok(IntegerValue::Long { value: 10, radix: 10 }));
        assert_eq!(parse_long("0xFFl"), Ok(IntegerValue::Long { value: 255, radix: 16 }));
        assert_eq!(parse_long("7"), Ok(IntegerValue::Long { value: 7, radix: 10 }));
    }

    #[test]
    fn test_float_and_double_suffixes() {
        assert_eq!(parse_float("1.5f"), Ok(1.5));
        assert_eq!(parse_float("2F"), Ok(2.0));
        assert_eq!(parse_double("1.5"), Ok(1.5));
        assert_eq!(parse_double("2.25D"), Ok(2.25));
        assert!(parse_double("1.2.3").is_err());
    }

    #[test]
    fn test_bool_text() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("false"), Ok(false));
        assert!(parse_bool("True").is_err());
    }
}
