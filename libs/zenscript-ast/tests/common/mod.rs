//! Hand-built CST fragments shared by the integration tests.

#![allow(dead_code)]

use zenscript_cst::{CstBuilder, CstNode, RuleKind, TokenKind};

/// `compilation_unit` whose entities are each wrapped in `toplevel_entity`.
pub fn unit(b: &CstBuilder, entities: Vec<CstNode>) -> CstNode {
    let wrapped = entities
        .into_iter()
        .map(|e| b.rule(RuleKind::ToplevelEntity, vec![e]))
        .collect();
    b.rule(RuleKind::CompilationUnit, wrapped)
}

/// `statement` wrapper around one statement alternative.
pub fn stmt(b: &CstBuilder, inner: CstNode) -> CstNode {
    b.rule(RuleKind::Statement, vec![inner])
}

pub fn expr_stmt(b: &CstBuilder, expr: CstNode) -> CstNode {
    let semicolon = b.token(TokenKind::Semicolon, ";");
    stmt(b, b.rule(RuleKind::ExpressionStatement, vec![expr, semicolon]))
}

pub fn reference(b: &CstBuilder, name: &str) -> CstNode {
    b.rule(RuleKind::ReferenceExpr, vec![b.simple_name(name)])
}

pub fn int(b: &CstBuilder, lexeme: &str) -> CstNode {
    b.rule(RuleKind::IntLiteral, vec![b.token(TokenKind::IntLiteral, lexeme)])
}

pub fn binary(b: &CstBuilder, rule: RuleKind, left: CstNode, op: TokenKind, symbol: &str, right: CstNode) -> CstNode {
    b.rule(
        rule,
        vec![
            left.labeled("left"),
            b.token(op, symbol).labeled("op"),
            right.labeled("right"),
        ],
    )
}

/// `prefix name = initializer;` as a statement.
pub fn variable(b: &CstBuilder, prefix: Option<(TokenKind, &str)>, name: &str, initializer: CstNode) -> CstNode {
    let mut children = Vec::new();
    if let Some((kind, text)) = prefix {
        children.push(b.token(kind, text).labeled("prefix"));
    }
    children.push(b.simple_name(name));
    children.push(b.token(TokenKind::Assign, "="));
    children.push(initializer.labeled("initializer"));
    children.push(b.token(TokenKind::Semicolon, ";"));
    stmt(b, b.rule(RuleKind::VariableDeclaration, children))
}

pub fn import(b: &CstBuilder, segments: &[&str]) -> CstNode {
    b.rule(
        RuleKind::ImportDeclaration,
        vec![
            b.token(TokenKind::Import, "import"),
            b.qualified_name(segments),
            b.token(TokenKind::Semicolon, ";"),
        ],
    )
}
