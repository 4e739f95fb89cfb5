//! # Dispatch Results
//!
//! Every construction procedure returns a [`Node`]; callers narrow it to the
//! shape they expect through [`FromNode`]. A node of the wrong shape is handed
//! back so the caller can report what it actually got.
//!
//! [`GenericNode`] placeholders narrow into every enum that has a `Generic`
//! variant, which is how opaque nodes slot into any expression, statement,
//! type or entity position.

use crate::ast::*;
use zenscript_cst::{Span, Spanned};

/// Output of one construction procedure.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    CompilationUnit(CompilationUnit),
    Name(Name),
    Import(ImportDeclaration),
    Class(ClassDeclaration),
    Field(FieldDeclaration),
    Constructor(ConstructorDeclaration),
    Function(FunctionDeclaration),
    ExpandFunction(ExpandFunctionDeclaration),
    Parameter(ParameterDeclaration),
    Statement(Statement),
    Expression(Expression),
    MapEntry(MapEntry),
    TypeLiteral(TypeLiteral),
    Generic(GenericNode),
}

impl Node {
    /// Human-readable shape, used in mismatch reports.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::CompilationUnit(_) => "compilation unit",
            Self::Name(_) => "name",
            Self::Import(_) => "import declaration",
            Self::Class(_) => "class declaration",
            Self::Field(_) => "field declaration",
            Self::Constructor(_) => "constructor declaration",
            Self::Function(_) => "function declaration",
            Self::ExpandFunction(_) => "expand function declaration",
            Self::Parameter(_) => "parameter declaration",
            Self::Statement(Statement::Variable(_)) => "variable declaration",
            Self::Statement(_) => "statement",
            Self::Expression(_) => "expression",
            Self::MapEntry(_) => "map entry",
            Self::TypeLiteral(_) => "type literal",
            Self::Generic(_) => "generic node",
        }
    }
}

impl Spanned for Node {
    fn span(&self) -> Span {
        match self {
            Self::CompilationUnit(n) => n.span,
            Self::Name(n) => n.span,
            Self::Import(n) => n.span,
            Self::Class(n) => n.span,
            Self::Field(n) => n.span,
            Self::Constructor(n) => n.span,
            Self::Function(n) => n.span,
            Self::ExpandFunction(n) => n.span,
            Self::Parameter(n) => n.span,
            Self::Statement(n) => n.span(),
            Self::Expression(n) => n.span(),
            Self::MapEntry(n) => n.span,
            Self::TypeLiteral(n) => n.span(),
            Self::Generic(n) => n.span,
        }
    }
}

/// Narrowing from a dispatch result to a concrete AST shape.
pub trait FromNode: Sized {
    /// Shape name reported when narrowing fails.
    const SHAPE: &'static str;

    /// Narrow `node`, or give it back unchanged.
    fn from_node(node: Node) -> Result<Self, Node>;
}

macro_rules! narrow_exact {
    ($($ty:ty => $variant:ident, $shape:literal;)*) => {
        $(
            impl FromNode for $ty {
                const SHAPE: &'static str = $shape;

                fn from_node(node: Node) -> Result<Self, Node> {
                    match node {
                        Node::$variant(n) => Ok(n),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

narrow_exact! {
    CompilationUnit => CompilationUnit, "compilation unit";
    Name => Name, "name";
    ImportDeclaration => Import, "import declaration";
    ClassDeclaration => Class, "class declaration";
    FieldDeclaration => Field, "field declaration";
    ConstructorDeclaration => Constructor, "constructor declaration";
    FunctionDeclaration => Function, "function declaration";
    ExpandFunctionDeclaration => ExpandFunction, "expand function declaration";
    ParameterDeclaration => Parameter, "parameter declaration";
    MapEntry => MapEntry, "map entry";
}

impl FromNode for VariableDeclaration {
    const SHAPE: &'static str = "variable declaration";

    fn from_node(node: Node) -> Result<Self, Node> {
        match node {
            Node::Statement(Statement::Variable(n)) => Ok(n),
            other => Err(other),
        }
    }
}

impl FromNode for Statement {
    const SHAPE: &'static str = "statement";

    fn from_node(node: Node) -> Result<Self, Node> {
        match node {
            Node::Statement(n) => Ok(n),
            Node::Generic(n) => Ok(Statement::Generic(n)),
            other => Err(other),
        }
    }
}

impl FromNode for Expression {
    const SHAPE: &'static str = "expression";

    fn from_node(node: Node) -> Result<Self, Node> {
        match node {
            Node::Expression(n) => Ok(n),
            Node::Generic(n) => Ok(Expression::Generic(n)),
            other => Err(other),
        }
    }
}

impl FromNode for TypeLiteral {
    const SHAPE: &'static str = "type literal";

    fn from_node(node: Node) -> Result<Self, Node> {
        match node {
            Node::TypeLiteral(n) => Ok(n),
            Node::Generic(n) => Ok(TypeLiteral::Generic(n)),
            other => Err(other),
        }
    }
}

impl FromNode for ToplevelEntity {
    const SHAPE: &'static str = "toplevel entity";

    fn from_node(node: Node) -> Result<Self, Node> {
        match node {
            Node::Import(n) => Ok(ToplevelEntity::Import(n)),
            Node::Class(n) => Ok(ToplevelEntity::Class(n)),
            Node::Function(n) => Ok(ToplevelEntity::Function(n)),
            Node::ExpandFunction(n) => Ok(ToplevelEntity::ExpandFunction(n)),
            Node::Statement(n) => Ok(ToplevelEntity::Statement(n)),
            Node::Generic(n) => Ok(ToplevelEntity::Generic(n)),
            other => Err(other),
        }
    }
}

impl FromNode for ClassBodyEntity {
    const SHAPE: &'static str = "class body entity";

    fn from_node(node: Node) -> Result<Self, Node> {
        match node {
            Node::Field(n) => Ok(ClassBodyEntity::Field(n)),
            Node::Constructor(n) => Ok(ClassBodyEntity::Constructor(n)),
            Node::Function(n) => Ok(ClassBodyEntity::Method(n)),
            Node::Generic(n) => Ok(ClassBodyEntity::Generic(n)),
            other => Err(other),
        }
    }
}

impl<T: FromNode> FromNode for Box<T> {
    const SHAPE: &'static str = T::SHAPE;

    fn from_node(node: Node) -> Result<Self, Node> {
        T::from_node(node).map(Box::new)
    }
}
