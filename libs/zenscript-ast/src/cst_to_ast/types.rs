//! # Type Literal Transformation
//!
//! ```text
//! int[]                  -> Array { base_type: Primitive("int") }
//! [string]               -> List { base_type: Primitive("string") }
//! string[int]            -> Map { key_type: int, value_type: string }
//! function(int)string    -> Function { parameter_types: [int], return_type: string }
//! crafttweaker.item.IItemStack -> Reference("crafttweaker.item.IItemStack")
//! ```

use super::registry::Registry;
use super::translation::{required, Translation};
use crate::ast::TypeLiteral;
use crate::error::TransformError;
use crate::node::Node;
use zenscript_cst::{CstNode, RuleKind};

pub(super) fn register(registry: &mut Registry) {
    registry
        .register(RuleKind::ReferenceType, reference_type)
        .register(RuleKind::ArrayType, array_type)
        .register(RuleKind::ListType, list_type)
        .register(RuleKind::MapType, map_type)
        .register(RuleKind::FunctionType, function_type)
        .register(RuleKind::PrimitiveType, primitive_type);
}

fn type_literal(t: TypeLiteral) -> Result<Node, TransformError> {
    Ok(Node::TypeLiteral(t))
}

fn reference_type(_: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    let name = required(node, node.find_rule(&RuleKind::QualifiedName), "qualified name")?;
    type_literal(TypeLiteral::Reference {
        type_name: name.text(),
        span: node.span,
    })
}

fn array_type(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    type_literal(TypeLiteral::Array {
        base_type: t.type_literal(node)?,
        span: node.span,
    })
}

fn list_type(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    type_literal(TypeLiteral::List {
        base_type: t.type_literal(node)?,
        span: node.span,
    })
}

fn map_type(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    type_literal(TypeLiteral::Map {
        key_type: t.field(node, "keyType")?,
        value_type: t.field(node, "valueType")?,
        span: node.span,
    })
}

fn function_type(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    type_literal(TypeLiteral::Function {
        parameter_types: t.field_list(node, "parameterTypes")?,
        return_type: t.field(node, "returnType")?,
        span: node.span,
    })
}

fn primitive_type(_: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    type_literal(TypeLiteral::Primitive {
        type_name: node.text(),
        span: node.span,
    })
}
