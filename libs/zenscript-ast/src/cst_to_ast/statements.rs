//! # Statement Transformation
//!
//! ## CST Structure
//!
//! ```text
//! IfStatement
//! ├── Token if
//! ├── Expression              condition
//! ├── Statement (thenPart)
//! ├── Token else              optional
//! └── Statement (elsePart)    optional
//!
//! ForeachStatement
//! ├── Token for
//! ├── ForeachVariable (variables)+
//! ├── Token in
//! ├── Expression (iterable)
//! └── ForeachBody
//!     └── Statement*
//! ```

use super::declarations::pass_through;
use super::registry::Registry;
use super::translation::{required, Translation};
use crate::ast::*;
use crate::error::TransformError;
use crate::node::Node;
use zenscript_cst::{CstNode, RuleKind};

pub(super) fn register(registry: &mut Registry) {
    registry
        .register(RuleKind::Statement, pass_through)
        .register(RuleKind::BlockStatement, block_statement)
        .register(RuleKind::ReturnStatement, return_statement)
        .register(RuleKind::BreakStatement, break_statement)
        .register(RuleKind::ContinueStatement, continue_statement)
        .register(RuleKind::IfStatement, if_statement)
        .register(RuleKind::ForeachStatement, foreach_statement)
        .register(RuleKind::ForeachVariable, foreach_variable)
        .register(RuleKind::WhileStatement, while_statement)
        .register(RuleKind::ExpressionStatement, expression_statement);
}

fn statement(s: Statement) -> Result<Node, TransformError> {
    Ok(Node::Statement(s))
}

fn block_statement(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    statement(Statement::Block(BlockStatement {
        statements: t.translate_list(node.rule_children())?,
        span: node.span,
    }))
}

fn return_statement(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    statement(Statement::Return(ReturnStatement {
        value: t.optional_expression(node)?,
        span: node.span,
    }))
}

fn break_statement(_: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    statement(Statement::Break(BreakStatement { span: node.span }))
}

fn continue_statement(_: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    statement(Statement::Continue(ContinueStatement { span: node.span }))
}

fn if_statement(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    statement(Statement::If(IfStatement {
        condition: t.expression(node)?,
        then_part: t.field(node, "thenPart")?,
        else_part: t.optional_field(node, "elsePart")?,
        span: node.span,
    }))
}

fn foreach_statement(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    statement(Statement::Foreach(ForeachStatement {
        variables: t.field_list(node, "variables")?,
        iterable: t.field(node, "iterable")?,
        body: t.body(node, RuleKind::ForeachBody)?,
        span: node.span,
    }))
}

/// Loop variables carry no storage modifier.
fn foreach_variable(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    statement(Statement::Variable(VariableDeclaration {
        declaring_kind: DeclaringKind::None,
        simple_name: t.simple_name(node)?,
        type_literal: None,
        initializer: None,
        span: node.span,
    }))
}

fn while_statement(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    let body = required(node, node.find_rule(&RuleKind::Statement), "body")?;
    statement(Statement::While(WhileStatement {
        condition: t.expression(node)?,
        body: t.translate(body)?,
        span: node.span,
    }))
}

fn expression_statement(t: &mut Translation<'_>, node: &CstNode) -> Result<Node, TransformError> {
    statement(Statement::Expression(ExpressionStatement {
        expression: t.expression(node)?,
        span: node.span,
    }))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cst_to_ast::Mapper;
    use zenscript_cst::{CstBuilder, TokenKind};

    fn build(node: &CstNode) -> Statement {
        let mapper = Mapper::default();
        let mut t = Translation::new(&mapper);
        t.translate(node).unwrap()
    }

    fn reference(b: &CstBuilder, name: &str) -> CstNode {
        b.rule(RuleKind::ReferenceExpr, vec![b.simple_name(name)])
    }

    fn wrapped(b: &CstBuilder, inner: CstNode) -> CstNode {
        b.rule(RuleKind::Statement, vec![inner])
    }

    fn break_stmt(b: &CstBuilder) -> CstNode {
        wrapped(
            b,
            b.rule(
                RuleKind::BreakStatement,
                vec![b.token(TokenKind::Break, "break"), b.token(TokenKind::Semicolon, ";")],
            ),
        )
    }

    #[test]
    fn test_block_preserves_order() {
        let b = CstBuilder::new();
        let block = b.rule(
            RuleKind::BlockStatement,
            vec![
                b.token(TokenKind::BraceOpen, "{"),
                break_stmt(&b),
                wrapped(
                    &b,
                    b.rule(
                        RuleKind::ContinueStatement,
                        vec![b.token(TokenKind::Continue, "continue")],
                    ),
                ),
                b.token(TokenKind::BraceClose, "}"),
            ],
        );
        let Statement::Block(block) = build(&block) else {
            panic!("expected block");
        };
        assert_eq!(block.statements.len(), 2);
        assert!(matches!(block.statements[0], Statement::Break(_)));
        assert!(matches!(block.statements[1], Statement::Continue(_)));
    }

    #[test]
    fn test_if_with_optional_else() {
        let b = CstBuilder::new();
        let node = b.rule(
            RuleKind::IfStatement,
            vec![
                b.token(TokenKind::If, "if"),
                reference(&b, "ready"),
                break_stmt(&b).labeled("thenPart"),
            ],
        );
        let Statement::If(stmt) = build(&node) else {
            panic!("expected if");
        };
        assert!(matches!(stmt.condition, Expression::Reference { ref reference, .. } if reference.name == "ready"));
        assert!(matches!(*stmt.then_part, Statement::Break(_)));
        assert!(stmt.else_part.is_none());
    }

    #[test]
    fn test_foreach_variables_have_no_declaring_kind() {
        let b = CstBuilder::new();
        let variable = |name: &str| {
            b.rule(RuleKind::ForeachVariable, vec![b.simple_name(name)])
                .labeled("variables")
        };
        let node = b.rule(
            RuleKind::ForeachStatement,
            vec![
                b.token(TokenKind::For, "for"),
                variable("i"),
                b.token(TokenKind::Comma, ","),
                variable("item"),
                b.token(TokenKind::In, "in"),
                reference(&b, "items").labeled("iterable"),
                b.rule(RuleKind::ForeachBody, vec![break_stmt(&b)]),
            ],
        );
        let Statement::Foreach(stmt) = build(&node) else {
            panic!("expected foreach");
        };
        assert_eq!(stmt.variables.len(), 2);
        assert!(stmt
            .variables
            .iter()
            .all(|v| v.declaring_kind == DeclaringKind::None));
        assert_eq!(stmt.variables[1].simple_name.as_str(), "item");
        assert_eq!(stmt.body.len(), 1);
    }

    #[test]
    fn test_while_body() {
        let b = CstBuilder::new();
        let node = b.rule(
            RuleKind::WhileStatement,
            vec![
                b.token(TokenKind::While, "while"),
                reference(&b, "running"),
                break_stmt(&b),
            ],
        );
        let Statement::While(stmt) = build(&node) else {
            panic!("expected while");
        };
        assert!(matches!(*stmt.body, Statement::Break(_)));
    }

    #[test]
    fn test_return_without_value() {
        let b = CstBuilder::new();
        let node = b.rule(
            RuleKind::ReturnStatement,
            vec![b.token(TokenKind::Return, "return"), b.token(TokenKind::Semicolon, ";")],
        );
        assert!(matches!(build(&node), Statement::Return(ReturnStatement { value: None, .. })));
    }
}
