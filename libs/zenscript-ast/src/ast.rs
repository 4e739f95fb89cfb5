//! # AST Node Model
//!
//! Typed ZenScript syntax. The tree is strict: every node is owned by exactly
//! one parent. Names that still need binding are [`ReferenceByName`] values,
//! never links to the declaring node.

use serde::{Deserialize, Serialize};
use zenscript_cst::{Span, Spanned};

// =============================================================================
// ROOT
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilationUnit {
    pub toplevel_entities: Vec<ToplevelEntity>,
    pub span: Span,
}

/// Forms allowed at file level, in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ToplevelEntity {
    Import(ImportDeclaration),
    Class(ClassDeclaration),
    Function(FunctionDeclaration),
    ExpandFunction(ExpandFunctionDeclaration),
    Statement(Statement),
    Generic(GenericNode),
}

/// Forms allowed inside a `zenClass` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClassBodyEntity {
    Field(FieldDeclaration),
    Constructor(ConstructorDeclaration),
    Method(FunctionDeclaration),
    Generic(GenericNode),
}

/// An identifier as written, simple (`foo`) or qualified (`a.b.Foo`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Name {
    pub text: String,
    pub span: Span,
}

impl Name {
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Unresolved, name-keyed reference.
///
/// Holds only the looked-up name; a later resolution pass binds it through a
/// symbol table keyed by name and scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReferenceByName {
    pub name: String,
    pub span: Span,
}

impl ReferenceByName {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// Placeholder for a rule shape with no typed mapping.
///
/// Only produced when the mapper runs with the permissive policy; typed passes
/// skip it and diagnostics report it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericNode {
    /// Grammar name of the unmapped shape.
    pub shape: String,
    /// Source text the shape covered.
    pub text: String,
    pub span: Span,
}

// =============================================================================
// DECLARATIONS
// =============================================================================

/// Storage modifier prefixing a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeclaringKind {
    #[default]
    None,
    Var,
    Val,
    Static,
    Global,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportDeclaration {
    pub qualified_name: Name,
    pub alias: Option<Name>,
    /// Name the import binds: the alias, or else the last segment.
    pub simple_name: Name,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDeclaration {
    pub simple_name: Name,
    pub class_body_entities: Vec<ClassBodyEntity>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    pub declaring_kind: DeclaringKind,
    pub simple_name: Name,
    pub type_literal: Option<TypeLiteral>,
    pub initializer: Option<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub declaring_kind: DeclaringKind,
    pub simple_name: Name,
    pub type_literal: Option<TypeLiteral>,
    pub initializer: Option<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorDeclaration {
    pub parameters: Vec<ParameterDeclaration>,
    pub body: Vec<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub declaring_kind: DeclaringKind,
    /// `None` for anonymous functions.
    pub simple_name: Option<Name>,
    pub parameters: Vec<ParameterDeclaration>,
    pub return_type_literal: Option<TypeLiteral>,
    pub body: Vec<Statement>,
    pub span: Span,
}

/// A function attached to an existing type: `$expand string$shout() { ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpandFunctionDeclaration {
    pub receiver: TypeLiteral,
    pub function: FunctionDeclaration,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDeclaration {
    pub simple_name: Name,
    pub type_literal: Option<TypeLiteral>,
    pub default_value: Option<Expression>,
    pub span: Span,
}

// =============================================================================
// STATEMENTS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Block(BlockStatement),
    Return(ReturnStatement),
    Break(BreakStatement),
    Continue(ContinueStatement),
    If(IfStatement),
    Foreach(ForeachStatement),
    While(WhileStatement),
    Expression(ExpressionStatement),
    Variable(VariableDeclaration),
    Generic(GenericNode),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStatement {
    pub value: Option<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakStatement {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinueStatement {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStatement {
    pub condition: Expression,
    pub then_part: Box<Statement>,
    pub else_part: Option<Box<Statement>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeachStatement {
    /// Loop variables; always [`DeclaringKind::None`].
    pub variables: Vec<VariableDeclaration>,
    pub iterable: Expression,
    pub body: Vec<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileStatement {
    pub condition: Expression,
    pub body: Box<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionStatement {
    pub expression: Expression,
    pub span: Span,
}

// =============================================================================
// EXPRESSIONS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    This { span: Span },
    NullLiteral { span: Span },
    BoolLiteral { value: bool, span: Span },
    IntLiteral { value: i32, radix: u32, span: Span },
    LongLiteral { value: i64, radix: u32, span: Span },
    FloatLiteral { value: f32, span: Span },
    DoubleLiteral { value: f64, span: Span },
    /// Lexeme as delimited by the lexer, quotes included.
    StringLiteral { value: String, span: Span },
    Reference { reference: ReferenceByName, span: Span },
    Function {
        parameters: Vec<ParameterDeclaration>,
        return_type_literal: Option<TypeLiteral>,
        body: Vec<Statement>,
        span: Span,
    },
    BracketHandler { content: String, span: Span },
    ArrayLiteral { elements: Vec<Expression>, span: Span },
    MapLiteral { entries: Vec<MapEntry>, span: Span },
    Parens { expression: Box<Expression>, span: Span },
    InstanceOf { expression: Box<Expression>, type_literal: TypeLiteral, span: Span },
    Cast { expression: Box<Expression>, type_literal: TypeLiteral, span: Span },
    Call { receiver: Box<Expression>, arguments: Vec<Expression>, span: Span },
    ArrayAccess { receiver: Box<Expression>, index: Box<Expression>, span: Span },
    MemberAccess { receiver: Box<Expression>, member: ReferenceByName, span: Span },
    IntRange { from: Box<Expression>, to: Box<Expression>, span: Span },
    Unary { operator: UnaryOperator, expression: Box<Expression>, span: Span },
    /// Also carries assignment; `operator` tells them apart.
    Binary {
        left: Box<Expression>,
        operator: BinaryOperator,
        right: Box<Expression>,
        span: Span,
    },
    Ternary {
        condition: Box<Expression>,
        true_part: Box<Expression>,
        false_part: Box<Expression>,
        span: Span,
    },
    Generic(GenericNode),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapEntry {
    pub key: Expression,
    pub value: Expression,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOperator {
    Not,
    Neg,
}

impl UnaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Neg => "-",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Concat,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Equal,
    NotEqual,
    And,
    Or,
    BitAnd,
    BitOr,
    Xor,
    In,
    Has,
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    ConcatAssign,
    AndAssign,
    OrAssign,
    XorAssign,
}

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Concat => "~",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::And => "&&",
            Self::Or => "||",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::Xor => "^",
            Self::In => "in",
            Self::Has => "has",
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
            Self::ModAssign => "%=",
            Self::ConcatAssign => "~=",
            Self::AndAssign => "&=",
            Self::OrAssign => "|=",
            Self::XorAssign => "^=",
        }
    }

    /// `=` or any compound assignment.
    pub fn is_assignment(&self) -> bool {
        *self == Self::Assign || self.is_compound_assignment()
    }

    /// `+=`, `~=`, ... Left as written; no read-modify-write expansion.
    pub fn is_compound_assignment(&self) -> bool {
        matches!(
            self,
            Self::AddAssign
                | Self::SubAssign
                | Self::MulAssign
                | Self::DivAssign
                | Self::ModAssign
                | Self::ConcatAssign
                | Self::AndAssign
                | Self::OrAssign
                | Self::XorAssign
        )
    }
}

// =============================================================================
// TYPE LITERALS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeLiteral {
    Reference { type_name: String, span: Span },
    Array { base_type: Box<TypeLiteral>, span: Span },
    List { base_type: Box<TypeLiteral>, span: Span },
    Map { key_type: Box<TypeLiteral>, value_type: Box<TypeLiteral>, span: Span },
    Function { parameter_types: Vec<TypeLiteral>, return_type: Box<TypeLiteral>, span: Span },
    Primitive { type_name: String, span: Span },
    Generic(GenericNode),
}

// =============================================================================
// SPANS
// =============================================================================

impl Spanned for CompilationUnit {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for Name {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for GenericNode {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for ToplevelEntity {
    fn span(&self) -> Span {
        match self {
            Self::Import(n) => n.span,
            Self::Class(n) => n.span,
            Self::Function(n) => n.span,
            Self::ExpandFunction(n) => n.span,
            Self::Statement(n) => n.span(),
            Self::Generic(n) => n.span,
        }
    }
}

impl Spanned for ClassBodyEntity {
    fn span(&self) -> Span {
        match self {
            Self::Field(n) => n.span,
            Self::Constructor(n) => n.span,
            Self::Method(n) => n.span,
            Self::Generic(n) => n.span,
        }
    }
}

impl Spanned for Statement {
    fn span(&self) -> Span {
        match self {
            Self::Block(n) => n.span,
            Self::Return(n) => n.span,
            Self::Break(n) => n.span,
            Self::Continue(n) => n.span,
            Self::If(n) => n.span,
            Self::Foreach(n) => n.span,
            Self::While(n) => n.span,
            Self::Expression(n) => n.span,
            Self::Variable(n) => n.span,
            Self::Generic(n) => n.span,
        }
    }
}

impl Spanned for Expression {
    fn span(&self) -> Span {
        match self {
            Self::This { span }
            | Self::NullLiteral { span }
            | Self::BoolLiteral { span, .. }
            | Self::IntLiteral { span, .. }
            | Self::LongLiteral { span, .. }
            | Self::FloatLiteral { span, .. }
            | Self::DoubleLiteral { span, .. }
            | Self::StringLiteral { span, .. }
            | Self::Reference { span, .. }
            | Self::Function { span, .. }
            | Self::BracketHandler { span, .. }
            | Self::ArrayLiteral { span, .. }
            | Self::MapLiteral { span, .. }
            | Self::Parens { span, .. }
            | Self::InstanceOf { span, .. }
            | Self::Cast { span, .. }
            | Self::Call { span, .. }
            | Self::ArrayAccess { span, .. }
            | Self::MemberAccess { span, .. }
            | Self::IntRange { span, .. }
            | Self::Unary { span, .. }
            | Self::Binary { span, .. }
            | Self::Ternary { span, .. } => *span,
            Self::Generic(n) => n.span,
        }
    }
}

impl Spanned for TypeLiteral {
    fn span(&self) -> Span {
        match self {
            Self::Reference { span, .. }
            | Self::Array { span, .. }
            | Self::List { span, .. }
            | Self::Map { span, .. }
            | Self::Function { span, .. }
            | Self::Primitive { span, .. } => *span,
            Self::Generic(n) => n.span,
        }
    }
}
