mod common;

use common::*;
use zenscript_ast::*;
use zenscript_cst::{CstBuilder, CstNode, RuleKind, TokenKind};

fn statements(root: &CstNode) -> Vec<Statement> {
    transform(root)
        .unwrap()
        .unit
        .unwrap()
        .toplevel_entities
        .into_iter()
        .map(|e| match e {
            ToplevelEntity::Statement(s) => s,
            other => panic!("expected statement, got {other:?}"),
        })
        .collect()
}

#[test]
fn assignment_and_addition_differ_only_in_operator() {
    let b = CstBuilder::new();
    let assign = binary(&b, RuleKind::AssignmentExpr, reference(&b, "a"), TokenKind::Assign, "=", reference(&b, "b"));
    let add = binary(&b, RuleKind::BinaryExpr, reference(&b, "a"), TokenKind::Add, "+", reference(&b, "b"));
    let root = unit(&b, vec![expr_stmt(&b, assign), expr_stmt(&b, add)]);

    let shapes: Vec<_> = statements(&root)
        .into_iter()
        .map(|s| match s {
            Statement::Expression(ExpressionStatement {
                expression: Expression::Binary { left, operator, right, .. },
                ..
            }) => (*left, operator, *right),
            other => panic!("expected binary, got {other:?}"),
        })
        .collect();

    assert_eq!(shapes[0].1, BinaryOperator::Assign);
    assert_eq!(shapes[1].1, BinaryOperator::Add);
    for (left, _, right) in &shapes {
        assert!(matches!(left, Expression::Reference { reference, .. } if reference.name == "a"));
        assert!(matches!(right, Expression::Reference { reference, .. } if reference.name == "b"));
    }
}

#[test]
fn compound_assignment_is_not_desugared() {
    let b = CstBuilder::new();
    let concat = binary(&b, RuleKind::AssignmentExpr, reference(&b, "s"), TokenKind::ConcatAssign, "~=", reference(&b, "t"));
    let root = unit(&b, vec![expr_stmt(&b, concat)]);

    let statements = statements(&root);
    let Statement::Expression(stmt) = &statements[0] else {
        panic!("expected expression statement");
    };
    let Expression::Binary { operator, .. } = &stmt.expression else {
        panic!("expected binary");
    };
    assert!(operator.is_compound_assignment());
    assert_eq!(operator.symbol(), "~=");
}

#[test]
fn foreach_variables_are_undeclared() {
    let b = CstBuilder::new();
    let foreach = b.rule(
        RuleKind::ForeachStatement,
        vec![
            b.token(TokenKind::For, "for"),
            b.rule(RuleKind::ForeachVariable, vec![b.simple_name("k")]).labeled("variables"),
            b.token(TokenKind::Comma, ","),
            b.rule(RuleKind::ForeachVariable, vec![b.simple_name("v")]).labeled("variables"),
            b.token(TokenKind::In, "in"),
            reference(&b, "map").labeled("iterable"),
            b.rule(RuleKind::ForeachBody, vec![expr_stmt(&b, reference(&b, "k"))]),
        ],
    );
    let root = unit(&b, vec![stmt(&b, foreach)]);

    let statements = statements(&root);
    let Statement::Foreach(foreach) = &statements[0] else {
        panic!("expected foreach");
    };
    let names: Vec<_> = foreach.variables.iter().map(|v| v.simple_name.as_str()).collect();
    assert_eq!(names, ["k", "v"]);
    assert!(foreach.variables.iter().all(|v| v.declaring_kind == DeclaringKind::None));
    assert_eq!(foreach.body.len(), 1);
}

#[test]
fn member_access_forms_resolve_to_same_name() {
    let b = CstBuilder::new();
    let plain = b.rule(
        RuleKind::MemberAccessExpr,
        vec![reference(&b, "x"), b.token(TokenKind::Dot, "."), b.simple_name("y")],
    );
    let quoted = b.rule(
        RuleKind::MemberAccessExpr,
        vec![
            reference(&b, "x"),
            b.token(TokenKind::Dot, "."),
            b.token(TokenKind::StringLiteral, "\"y\""),
        ],
    );
    let root = unit(&b, vec![expr_stmt(&b, plain), expr_stmt(&b, quoted)]);

    let members: Vec<_> = statements(&root)
        .into_iter()
        .map(|s| match s {
            Statement::Expression(ExpressionStatement {
                expression: Expression::MemberAccess { member, .. },
                ..
            }) => member.name,
            other => panic!("expected member access, got {other:?}"),
        })
        .collect();
    assert_eq!(members, ["y", "y"]);
}

#[test]
fn references_are_collected_in_source_order() {
    let b = CstBuilder::new();
    // val total = price * count; print(total);
    let product = binary(&b, RuleKind::BinaryExpr, reference(&b, "price"), TokenKind::Mul, "*", reference(&b, "count"));
    let declaration = variable(&b, Some((TokenKind::Val, "val")), "total", product);
    let call = b.rule(
        RuleKind::CallExpr,
        vec![
            reference(&b, "print").labeled("receiver"),
            b.token(TokenKind::ParenOpen, "("),
            reference(&b, "total").labeled("arguments"),
            b.token(TokenKind::ParenClose, ")"),
        ],
    );
    let root = unit(&b, vec![declaration, expr_stmt(&b, call)]);

    let unit = transform(&root).unwrap().unit.unwrap();
    let names: Vec<_> = collect_references(&unit)
        .into_iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, ["price", "count", "print", "total"]);
}

#[test]
fn ternary_map_and_range_expressions() {
    let b = CstBuilder::new();
    let ternary = b.rule(
        RuleKind::TernaryExpr,
        vec![
            reference(&b, "ok").labeled("condition"),
            b.token(TokenKind::Question, "?"),
            b.rule(
                RuleKind::MapLiteral,
                vec![
                    b.token(TokenKind::BraceOpen, "{"),
                    b.rule(
                        RuleKind::MapEntry,
                        vec![
                            reference(&b, "k").labeled("key"),
                            b.token(TokenKind::Colon, ":"),
                            int(&b, "1").labeled("value"),
                        ],
                    )
                    .labeled("entries"),
                    b.token(TokenKind::BraceClose, "}"),
                ],
            )
            .labeled("truePart"),
            b.token(TokenKind::Colon, ":"),
            b.rule(
                RuleKind::IntRangeExpr,
                vec![
                    int(&b, "0").labeled("from"),
                    b.token(TokenKind::DotDot, ".."),
                    int(&b, "10").labeled("to"),
                ],
            )
            .labeled("falsePart"),
        ],
    );
    let root = unit(&b, vec![expr_stmt(&b, ternary)]);

    let statements = statements(&root);
    let Statement::Expression(stmt) = &statements[0] else {
        panic!("expected expression statement");
    };
    let Expression::Ternary { true_part, false_part, .. } = &stmt.expression else {
        panic!("expected ternary");
    };
    assert!(matches!(&**true_part, Expression::MapLiteral { entries, .. } if entries.len() == 1));
    assert!(matches!(
        &**false_part,
        Expression::IntRange { to, .. } if matches!(**to, Expression::IntLiteral { value: 10, .. })
    ));
}

#[test]
fn cast_carries_type_literal() {
    let b = CstBuilder::new();
    let cast = b.rule(
        RuleKind::TypeCastExpr,
        vec![
            reference(&b, "x"),
            b.token(TokenKind::As, "as"),
            b.rule(
                RuleKind::ArrayType,
                vec![
                    b.rule(RuleKind::PrimitiveType, vec![b.token(TokenKind::Int, "int")]),
                    b.token(TokenKind::BrackOpen, "["),
                    b.token(TokenKind::BrackClose, "]"),
                ],
            ),
        ],
    );
    let root = unit(&b, vec![expr_stmt(&b, cast)]);

    let statements = statements(&root);
    let Statement::Expression(stmt) = &statements[0] else {
        panic!("expected expression statement");
    };
    assert!(matches!(
        &stmt.expression,
        Expression::Cast { type_literal: TypeLiteral::Array { .. }, .. }
    ));
}

fn expressions(root: &CstNode) -> Vec<Expression> {
    statements(root)
        .into_iter()
        .map(|s| match s {
            Statement::Expression(ExpressionStatement { expression, .. }) => expression,
            other => panic!("expected expression statement, got {other:?}"),
        })
        .collect()
}

fn literal(b: &CstBuilder, rule: RuleKind, token: TokenKind, lexeme: &str) -> CstNode {
    b.rule(rule, vec![b.token(token, lexeme)])
}

fn primitive(b: &CstBuilder, token: TokenKind, name: &str) -> CstNode {
    b.rule(RuleKind::PrimitiveType, vec![b.token(token, name)])
}

#[test]
fn scalar_literals_carry_their_values() {
    let b = CstBuilder::new();
    let root = unit(
        &b,
        vec![
            expr_stmt(&b, literal(&b, RuleKind::FloatLiteral, TokenKind::FloatLiteral, "1.5f")),
            expr_stmt(&b, literal(&b, RuleKind::DoubleLiteral, TokenKind::DoubleLiteral, "2.25d")),
            expr_stmt(&b, literal(&b, RuleKind::BoolLiteral, TokenKind::True, "true")),
            expr_stmt(&b, literal(&b, RuleKind::BoolLiteral, TokenKind::False, "false")),
            expr_stmt(&b, literal(&b, RuleKind::NullLiteral, TokenKind::Null, "null")),
        ],
    );

    let exprs = expressions(&root);
    assert!(matches!(exprs[0], Expression::FloatLiteral { value, .. } if value == 1.5));
    assert!(matches!(exprs[1], Expression::DoubleLiteral { value, .. } if value == 2.25));
    assert!(matches!(exprs[2], Expression::BoolLiteral { value: true, .. }));
    assert!(matches!(exprs[3], Expression::BoolLiteral { value: false, .. }));
    assert!(matches!(exprs[4], Expression::NullLiteral { .. }));
}

#[test]
fn parens_wrap_unary_operators() {
    let b = CstBuilder::new();
    // (!ready); -delta;
    let not = b.rule(
        RuleKind::UnaryExpr,
        vec![b.token(TokenKind::Not, "!").labeled("op"), reference(&b, "ready")],
    );
    let parens = b.rule(
        RuleKind::ParensExpr,
        vec![b.token(TokenKind::ParenOpen, "("), not, b.token(TokenKind::ParenClose, ")")],
    );
    let neg = b.rule(
        RuleKind::UnaryExpr,
        vec![b.token(TokenKind::Sub, "-").labeled("op"), reference(&b, "delta")],
    );
    let root = unit(&b, vec![expr_stmt(&b, parens), expr_stmt(&b, neg)]);

    let exprs = expressions(&root);
    let Expression::Parens { expression, .. } = &exprs[0] else {
        panic!("expected parens");
    };
    let Expression::Unary { operator, expression, .. } = &**expression else {
        panic!("expected unary");
    };
    assert_eq!(*operator, UnaryOperator::Not);
    assert!(matches!(&**expression, Expression::Reference { reference, .. } if reference.name == "ready"));
    assert!(matches!(exprs[1], Expression::Unary { operator: UnaryOperator::Neg, .. }));
}

#[test]
fn array_access_keeps_receiver_and_index() {
    let b = CstBuilder::new();
    let access = b.rule(
        RuleKind::ArrayAccessExpr,
        vec![
            reference(&b, "items").labeled("receiver"),
            b.token(TokenKind::BrackOpen, "["),
            int(&b, "2").labeled("index"),
            b.token(TokenKind::BrackClose, "]"),
        ],
    );
    let root = unit(&b, vec![expr_stmt(&b, access)]);

    let exprs = expressions(&root);
    let Expression::ArrayAccess { receiver, index, .. } = &exprs[0] else {
        panic!("expected array access");
    };
    assert!(matches!(&**receiver, Expression::Reference { reference, .. } if reference.name == "items"));
    assert!(matches!(**index, Expression::IntLiteral { value: 2, .. }));
}

#[test]
fn instanceof_carries_nested_type_literal() {
    let b = CstBuilder::new();
    // x instanceof [int[]]
    let array = b.rule(
        RuleKind::ArrayType,
        vec![
            primitive(&b, TokenKind::Int, "int"),
            b.token(TokenKind::BrackOpen, "["),
            b.token(TokenKind::BrackClose, "]"),
        ],
    );
    let list = b.rule(
        RuleKind::ListType,
        vec![b.token(TokenKind::BrackOpen, "["), array, b.token(TokenKind::BrackClose, "]")],
    );
    let test = b.rule(
        RuleKind::InstanceOfExpr,
        vec![reference(&b, "x"), b.token(TokenKind::InstanceOf, "instanceof"), list],
    );
    let root = unit(&b, vec![expr_stmt(&b, test)]);

    let exprs = expressions(&root);
    let Expression::InstanceOf { expression, type_literal, .. } = &exprs[0] else {
        panic!("expected instanceof");
    };
    assert!(matches!(&**expression, Expression::Reference { reference, .. } if reference.name == "x"));
    let TypeLiteral::List { base_type, .. } = type_literal else {
        panic!("expected list type");
    };
    let TypeLiteral::Array { base_type, .. } = &**base_type else {
        panic!("expected array type");
    };
    assert!(matches!(&**base_type, TypeLiteral::Primitive { type_name, .. } if type_name == "int"));
}

#[test]
fn function_expression_returns_its_value() {
    let b = CstBuilder::new();
    // function(n as int) as int { return n; }
    let function = b.rule(
        RuleKind::FunctionExpr,
        vec![
            b.token(TokenKind::Function, "function"),
            b.token(TokenKind::ParenOpen, "("),
            b.rule(
                RuleKind::FormalParameter,
                vec![b.simple_name("n"), b.token(TokenKind::As, "as"), primitive(&b, TokenKind::Int, "int")],
            )
            .labeled("parameters"),
            b.token(TokenKind::ParenClose, ")"),
            b.token(TokenKind::As, "as"),
            primitive(&b, TokenKind::Int, "int").labeled("returnType"),
            b.rule(
                RuleKind::FunctionBody,
                vec![stmt(
                    &b,
                    b.rule(
                        RuleKind::ReturnStatement,
                        vec![
                            b.token(TokenKind::Return, "return"),
                            reference(&b, "n"),
                            b.token(TokenKind::Semicolon, ";"),
                        ],
                    ),
                )],
            ),
        ],
    );
    let root = unit(&b, vec![expr_stmt(&b, function)]);

    let exprs = expressions(&root);
    let Expression::Function { parameters, return_type_literal, body, .. } = &exprs[0] else {
        panic!("expected function expression");
    };
    assert_eq!(parameters.len(), 1);
    assert_eq!(parameters[0].simple_name.as_str(), "n");
    assert!(matches!(
        return_type_literal,
        Some(TypeLiteral::Primitive { type_name, .. }) if type_name == "int"
    ));
    assert!(matches!(
        &body[..],
        [Statement::Return(ReturnStatement { value: Some(Expression::Reference { reference, .. }), .. })]
            if reference.name == "n"
    ));
}
