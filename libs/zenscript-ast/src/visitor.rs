use crate::ast::*;

/// Read-only walk over the AST in source order.
///
/// Every method defaults to visiting the node's children, so an implementor
/// overrides only the hooks it cares about.
pub trait Visitor<'ast> {
    fn visit_compilation_unit(&mut self, unit: &'ast CompilationUnit) {
        unit.toplevel_entities
            .iter()
            .for_each(|e| self.visit_toplevel_entity(e))
    }

    fn visit_toplevel_entity(&mut self, entity: &'ast ToplevelEntity) {
        match entity {
            ToplevelEntity::Import(_) | ToplevelEntity::Generic(_) => {}
            ToplevelEntity::Class(c) => c
                .class_body_entities
                .iter()
                .for_each(|e| self.visit_class_body_entity(e)),
            ToplevelEntity::Function(f) => self.visit_function(f),
            ToplevelEntity::ExpandFunction(f) => {
                self.visit_type_literal(&f.receiver);
                self.visit_function(&f.function)
            }
            ToplevelEntity::Statement(s) => self.visit_statement(s),
        }
    }

    fn visit_class_body_entity(&mut self, entity: &'ast ClassBodyEntity) {
        match entity {
            ClassBodyEntity::Field(f) => {
                if let Some(t) = &f.type_literal {
                    self.visit_type_literal(t)
                }
                if let Some(e) = &f.initializer {
                    self.visit_expression(e)
                }
            }
            ClassBodyEntity::Constructor(c) => {
                c.parameters.iter().for_each(|p| self.visit_parameter(p));
                c.body.iter().for_each(|s| self.visit_statement(s))
            }
            ClassBodyEntity::Method(f) => self.visit_function(f),
            ClassBodyEntity::Generic(_) => {}
        }
    }

    fn visit_function(&mut self, function: &'ast FunctionDeclaration) {
        function.parameters.iter().for_each(|p| self.visit_parameter(p));
        if let Some(t) = &function.return_type_literal {
            self.visit_type_literal(t)
        }
        function.body.iter().for_each(|s| self.visit_statement(s))
    }

    fn visit_parameter(&mut self, parameter: &'ast ParameterDeclaration) {
        if let Some(t) = &parameter.type_literal {
            self.visit_type_literal(t)
        }
        if let Some(e) = &parameter.default_value {
            self.visit_expression(e)
        }
    }

    fn visit_statement(&mut self, stmt: &'ast Statement) {
        match stmt {
            Statement::Block(b) => b.statements.iter().for_each(|s| self.visit_statement(s)),
            Statement::Return(r) => {
                if let Some(v) = &r.value {
                    self.visit_expression(v)
                }
            }
            Statement::Break(_) | Statement::Continue(_) | Statement::Generic(_) => {}
            Statement::If(i) => {
                self.visit_expression(&i.condition);
                self.visit_statement(&i.then_part);
                if let Some(e) = &i.else_part {
                    self.visit_statement(e)
                }
            }
            Statement::Foreach(f) => {
                f.variables.iter().for_each(|v| self.visit_variable(v));
                self.visit_expression(&f.iterable);
                f.body.iter().for_each(|s| self.visit_statement(s))
            }
            Statement::While(w) => {
                self.visit_expression(&w.condition);
                self.visit_statement(&w.body)
            }
            Statement::Expression(e) => self.visit_expression(&e.expression),
            Statement::Variable(v) => self.visit_variable(v),
        }
    }

    fn visit_variable(&mut self, variable: &'ast VariableDeclaration) {
        if let Some(t) = &variable.type_literal {
            self.visit_type_literal(t)
        }
        if let Some(e) = &variable.initializer {
            self.visit_expression(e)
        }
    }

    fn visit_expression(&mut self, expr: &'ast Expression) {
        match expr {
            Expression::This { .. }
            | Expression::NullLiteral { .. }
            | Expression::BoolLiteral { .. }
            | Expression::IntLiteral { .. }
            | Expression::LongLiteral { .. }
            | Expression::FloatLiteral { .. }
            | Expression::DoubleLiteral { .. }
            | Expression::StringLiteral { .. }
            | Expression::BracketHandler { .. }
            | Expression::Generic(_) => {}
            Expression::Reference { reference, .. } => self.visit_reference(reference),
            Expression::Function {
                parameters,
                return_type_literal,
                body,
                ..
            } => {
                parameters.iter().for_each(|p| self.visit_parameter(p));
                if let Some(t) = return_type_literal {
                    self.visit_type_literal(t)
                }
                body.iter().for_each(|s| self.visit_statement(s))
            }
            Expression::ArrayLiteral { elements, .. } => {
                elements.iter().for_each(|e| self.visit_expression(e))
            }
            Expression::MapLiteral { entries, .. } => entries.iter().for_each(|e| {
                self.visit_expression(&e.key);
                self.visit_expression(&e.value)
            }),
            Expression::Parens { expression, .. } => self.visit_expression(expression),
            Expression::InstanceOf {
                expression,
                type_literal,
                ..
            }
            | Expression::Cast {
                expression,
                type_literal,
                ..
            } => {
                self.visit_expression(expression);
                self.visit_type_literal(type_literal)
            }
            Expression::Call {
                receiver,
                arguments,
                ..
            } => {
                self.visit_expression(receiver);
                arguments.iter().for_each(|a| self.visit_expression(a))
            }
            Expression::ArrayAccess { receiver, index, .. } => {
                self.visit_expression(receiver);
                self.visit_expression(index)
            }
            Expression::MemberAccess {
                receiver, member, ..
            } => {
                self.visit_expression(receiver);
                self.visit_reference(member)
            }
            Expression::IntRange { from, to, .. } => {
                self.visit_expression(from);
                self.visit_expression(to)
            }
            Expression::Unary { expression, .. } => self.visit_expression(expression),
            Expression::Binary { left, right, .. } => {
                self.visit_expression(left);
                self.visit_expression(right)
            }
            Expression::Ternary {
                condition,
                true_part,
                false_part,
                ..
            } => {
                self.visit_expression(condition);
                self.visit_expression(true_part);
                self.visit_expression(false_part)
            }
        }
    }

    fn visit_type_literal(&mut self, _type_literal: &'ast TypeLiteral) {}

    fn visit_reference(&mut self, _reference: &'ast ReferenceByName) {}
}

/// Every unresolved reference in `unit`, in source order.
///
/// Covers reference expressions and member accesses; the receiver of a
/// member access comes before the member.
pub fn collect_references(unit: &CompilationUnit) -> Vec<&ReferenceByName> {
    struct Collector<'ast>(Vec<&'ast ReferenceByName>);

    impl<'ast> Visitor<'ast> for Collector<'ast> {
        fn visit_reference(&mut self, reference: &'ast ReferenceByName) {
            self.0.push(reference)
        }
    }

    let mut collector = Collector(Vec::new());
    collector.visit_compilation_unit(unit);
    collector.0
}
