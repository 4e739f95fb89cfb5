//! # Declaration Transformation
//!
//! Builds the compilation unit, names, imports, classes and every
//! function-like declaration.
//!
//! ## CST Structure
//!
//! ```text
//! FunctionDeclaration
//! ├── Token (prefix)            optional: var | val | static | global
//! ├── Token function
//! ├── SimpleName                optional for anonymous functions
//! ├── FormalParameter (parameters)*
//! ├── TypeLiteral (returnType)  optional
//! └── FunctionBody
//!     └── Statement*
//! ```

use super::operators::declaring_kind;
use super::registry::Registry;
use super::translation::{required, Translation};
use crate::ast::*;
use crate::error::TransformError;
use crate::node::Node;
use zenscript_cst::{CstNode, RuleKind};

pub(super) fn register(registry: &mut Registry) {
    registry
        .register(RuleKind::CompilationUnit, compilation_unit)
        .register(RuleKind::ToplevelEntity, pass_through)
        .register(RuleKind::ClassBodyEntity, pass_through)
        .register(RuleKind::SimpleName, name)
        .register(RuleKind::QualifiedName, name)
        .register(RuleKind::ImportDeclaration, import_declaration)
        .register(RuleKind::ClassDeclaration, class_declaration)
        .register(RuleKind::FieldDeclaration, field_declaration)
        .register(RuleKind::ConstructorDeclaration, constructor_declaration)
        .register(RuleKind::MethodDeclaration, method_declaration)
        .register(RuleKind::FunctionDeclaration, function_declaration)
        .register(RuleKind::ExpandFunctionDeclaration, expand_function_declaration)
        .register(RuleKind::FormalParameter, formal_parameter)
        .register(RuleKind::VariableDeclaration, variable_declaration);
}

/// Wrapper rules stand for their single rule child.
pub(super) fn pass_through(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    t.translate_only_child(node)
}

// =============================================================================
// ROOT AND NAMES
// =============================================================================

fn compilation_unit(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    Ok(Node::CompilationUnit(CompilationUnit {
        toplevel_entities: t.translate_list(node.rule_children())?,
        span: node.span,
    }))
}

/// Simple and qualified names keep their source text, dots included.
fn name(_: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    Ok(Node::Name(Name::new(node.text(), node.span)))
}

// =============================================================================
// IMPORTS AND CLASSES
// =============================================================================

/// `import a.b.C as D;`
///
/// The bound name is the alias when present, else the last segment.
fn import_declaration(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    let qualified = required(node, node.find_rule(&RuleKind::QualifiedName), "qualified name")?;
    let qualified_name: Name = t.translate(qualified)?;
    let alias: Option<Name> = t.optional_field(node, "alias")?;
    let simple_name = match &alias {
        Some(alias) => alias.clone(),
        None => {
            let last = qualified.find_rules(&RuleKind::SimpleName).last().copied();
            t.translate(required(qualified, last, "simple name")?)?
        }
    };
    Ok(Node::Import(ImportDeclaration {
        qualified_name,
        alias,
        simple_name,
        span: node.span,
    }))
}

fn class_declaration(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    let simple_name = t.simple_name(node)?;
    let class_body_entities = match node.find_rule(&RuleKind::ClassBody) {
        Some(body) => t.translate_list(body.rule_children())?,
        None => Vec::new(),
    };
    Ok(Node::Class(ClassDeclaration {
        simple_name,
        class_body_entities,
        span: node.span,
    }))
}

// =============================================================================
// VARIABLES
// =============================================================================

struct Binding {
    declaring_kind: DeclaringKind,
    simple_name: Name,
    type_literal: Option<TypeLiteral>,
    initializer: Option<Expression>,
}

/// `prefix name (as type)? (= initializer)?`, shared by fields and variables.
fn binding(t: &mut Translation<'_>, node: &CstNode) -> Result<Binding, TransformError> {
    Ok(Binding {
        declaring_kind: declaring_kind(node.child_by_field("prefix"))?,
        simple_name: t.simple_name(node)?,
        type_literal: t.optional_type_literal(node)?,
        initializer: t.optional_field(node, "initializer")?,
    })
}

fn field_declaration(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    let b = binding(t, node)?;
    Ok(Node::Field(FieldDeclaration {
        declaring_kind: b.declaring_kind,
        simple_name: b.simple_name,
        type_literal: b.type_literal,
        initializer: b.initializer,
        span: node.span,
    }))
}

fn variable_declaration(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    let b = binding(t, node)?;
    Ok(Node::Statement(Statement::Variable(VariableDeclaration {
        declaring_kind: b.declaring_kind,
        simple_name: b.simple_name,
        type_literal: b.type_literal,
        initializer: b.initializer,
        span: node.span,
    })))
}

fn formal_parameter(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    Ok(Node::Parameter(ParameterDeclaration {
        simple_name: t.simple_name(node)?,
        type_literal: t.optional_type_literal(node)?,
        default_value: t.optional_field(node, "defaultValue")?,
        span: node.span,
    }))
}

// =============================================================================
// FUNCTIONS
// =============================================================================

fn constructor_declaration(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    Ok(Node::Constructor(ConstructorDeclaration {
        parameters: t.translate_list(node.find_rules(&RuleKind::FormalParameter))?,
        body: t.body(node, RuleKind::ConstructorBody)?,
        span: node.span,
    }))
}

/// Methods are always named; only top-level functions may be anonymous.
fn method_declaration(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    let simple_name = t.simple_name(node)?;
    function(t, node, Some(simple_name), RuleKind::MethodBody).map(Node::Function)
}

fn function_declaration(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    let simple_name = t.translate_optional(node.find_rule(&RuleKind::SimpleName))?;
    function(t, node, simple_name, RuleKind::FunctionBody).map(Node::Function)
}

/// `$expand string$shout() as string { ... }`
///
/// The receiver is the unlabelled type literal; the return type is labelled.
fn expand_function_declaration(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    let receiver = t.type_literal(node)?;
    let function = FunctionDeclaration {
        declaring_kind: DeclaringKind::None,
        simple_name: Some(t.simple_name(node)?),
        parameters: t.field_list(node, "parameters")?,
        return_type_literal: t.optional_field(node, "returnType")?,
        body: t.body(node, RuleKind::FunctionBody)?,
        span: node.span,
    };
    Ok(Node::ExpandFunction(ExpandFunctionDeclaration {
        receiver,
        function,
        span: node.span,
    }))
}

fn function(
    t: &mut Translation<'_>,
    node: &CstNode,
    simple_name: Option<Name>,
    body: RuleKind,
) -> Result<FunctionDeclaration, TransformError> {
    Ok(FunctionDeclaration {
        declaring_kind: declaring_kind(node.child_by_field("prefix"))?,
        simple_name,
        parameters: t.field_list(node, "parameters")?,
        return_type_literal: t.optional_field(node, "returnType")?,
        body: t.body(node, body)?,
        span: node.span,
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cst_to_ast::Mapper;
    use zenscript_cst::{CstBuilder, TokenKind};

    fn build(node: &CstNode) -> Result<Node, TransformError> {
        let mapper = Mapper::default();
        let mut t = Translation::new(&mapper);
        t.translate_node(node)
    }

    #[test]
    fn test_import_without_alias_binds_last_segment() {
        let b = CstBuilder::new();
        let node = b.rule(
            RuleKind::ImportDeclaration,
            vec![
                b.token(TokenKind::Import, "import"),
                b.qualified_name(&["crafttweaker", "item", "IItemStack"]),
                b.token(TokenKind::Semicolon, ";"),
            ],
        );
        let Node::Import(import) = build(&node).unwrap() else {
            panic!("expected import");
        };
        assert_eq!(import.qualified_name.as_str(), "crafttweaker.item.IItemStack");
        assert!(import.alias.is_none());
        assert_eq!(import.simple_name.as_str(), "IItemStack");
    }

    #[test]
    fn test_import_alias_is_bound_name() {
        let b = CstBuilder::new();
        let node = b.rule(
            RuleKind::ImportDeclaration,
            vec![
                b.token(TokenKind::Import, "import"),
                b.qualified_name(&["a", "B"]),
                b.token(TokenKind::As, "as"),
                b.simple_name("C").labeled("alias"),
            ],
        );
        let Node::Import(import) = build(&node).unwrap() else {
            panic!("expected import");
        };
        assert_eq!(import.simple_name.as_str(), "C");
        assert_eq!(import.alias.map(|a| a.text), Some("C".to_string()));
    }

    #[test]
    fn test_field_prefix_and_type() {
        let b = CstBuilder::new();
        let node = b.rule(
            RuleKind::FieldDeclaration,
            vec![
                b.token(TokenKind::Var, "var").labeled("prefix"),
                b.simple_name("count"),
                b.token(TokenKind::As, "as"),
                b.rule(RuleKind::PrimitiveType, vec![b.token(TokenKind::Int, "int")]),
            ],
        );
        let Node::Field(field) = build(&node).unwrap() else {
            panic!("expected field");
        };
        assert_eq!(field.declaring_kind, DeclaringKind::Var);
        assert_eq!(field.simple_name.as_str(), "count");
        assert!(matches!(
            field.type_literal,
            Some(TypeLiteral::Primitive { ref type_name, .. }) if type_name == "int"
        ));
        assert!(field.initializer.is_none());
    }

    #[test]
    fn test_anonymous_function_without_body() {
        let b = CstBuilder::new();
        let node = b.rule(
            RuleKind::FunctionDeclaration,
            vec![
                b.token(TokenKind::Function, "function"),
                b.token(TokenKind::ParenOpen, "("),
                b.token(TokenKind::ParenClose, ")"),
            ],
        );
        let Node::Function(function) = build(&node).unwrap() else {
            panic!("expected function");
        };
        assert!(function.simple_name.is_none());
        assert_eq!(function.declaring_kind, DeclaringKind::None);
        assert!(function.body.is_empty());
    }

    #[test]
    fn test_expand_function_receiver() {
        let b = CstBuilder::new();
        let node = b.rule(
            RuleKind::ExpandFunctionDeclaration,
            vec![
                b.token(TokenKind::Expand, "$expand"),
                b.rule(RuleKind::PrimitiveType, vec![b.token(TokenKind::String, "string")]),
                b.simple_name("shout"),
                b.token(TokenKind::ParenOpen, "("),
                b.token(TokenKind::ParenClose, ")"),
                b.token(TokenKind::As, "as"),
                b.rule(RuleKind::PrimitiveType, vec![b.token(TokenKind::Void, "void")])
                    .labeled("returnType"),
                b.rule(RuleKind::FunctionBody, vec![]),
            ],
        );
        let Node::ExpandFunction(expand) = build(&node).unwrap() else {
            panic!("expected expand function");
        };
        assert!(matches!(expand.receiver, TypeLiteral::Primitive { ref type_name, .. } if type_name == "string"));
        assert!(matches!(
            expand.function.return_type_literal,
            Some(TypeLiteral::Primitive { ref type_name, .. }) if type_name == "void"
        ));
        assert_eq!(expand.function.simple_name.unwrap().as_str(), "shout");
    }

    #[test]
    fn test_class_without_name_is_defect() {
        let b = CstBuilder::new();
        let node = b.rule(
            RuleKind::ClassDeclaration,
            vec![b.token(TokenKind::ZenClass, "zenClass")],
        );
        let err = build(&node).unwrap_err();
        assert!(matches!(err, TransformError::MissingChild { field: "simple name", .. }));
    }

    #[test]
    fn test_method_without_name_is_defect() {
        let b = CstBuilder::new();
        let node = b.rule(
            RuleKind::MethodDeclaration,
            vec![
                b.token(TokenKind::Function, "function"),
                b.token(TokenKind::ParenOpen, "("),
                b.token(TokenKind::ParenClose, ")"),
                b.rule(RuleKind::MethodBody, vec![]),
            ],
        );
        let err = build(&node).unwrap_err();
        assert!(matches!(
            err,
            TransformError::MissingChild { rule: RuleKind::MethodDeclaration, field: "simple name", .. }
        ));
    }
}
