//! # Rule Shapes
//!
//! Identifying tags for the grammar rule that produced a CST node.
//!
//! Rule kinds serialize as their grammar names (`"binary_expr"`,
//! `"foreach_statement"`, ...). A name this crate does not know becomes
//! [`RuleKind::Other`], so trees from a newer grammar still load.
//!
//! ## Example
//!
//! ```rust
//! use zenscript_cst::RuleKind;
//!
//! assert_eq!(RuleKind::from("binary_expr"), RuleKind::BinaryExpr);
//! assert_eq!(RuleKind::BinaryExpr.name(), "binary_expr");
//! assert_eq!(RuleKind::from("switch_statement"), RuleKind::Other("switch_statement".into()));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! rule_kinds {
    ($($(#[$doc:meta])* $variant:ident => $name:literal,)*) => {
        /// Grammar rule that produced a CST node.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum RuleKind {
            $($(#[$doc])* $variant,)*
            /// A rule this crate has no tag for.
            Other(String),
        }

        impl RuleKind {
            /// Grammar name of the rule.
            pub fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $name,)*
                    Self::Other(name) => name,
                }
            }

            fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

rule_kinds! {
    // Structure
    /// Root of a source file.
    CompilationUnit => "compilation_unit",
    /// Wrapper over the forms allowed at file level.
    ToplevelEntity => "toplevel_entity",
    /// Single identifier.
    SimpleName => "simple_name",
    /// Dotted identifier path.
    QualifiedName => "qualified_name",

    // Declarations
    /// `import a.b.C as D;`
    ImportDeclaration => "import_declaration",
    /// `zenClass Foo { ... }`
    ClassDeclaration => "class_declaration",
    /// `{ ... }` of a class.
    ClassBody => "class_body",
    /// Wrapper over the forms allowed in a class body.
    ClassBodyEntity => "class_body_entity",
    /// `var x as int = 1;` inside a class.
    FieldDeclaration => "field_declaration",
    /// `zenConstructor(...) { ... }`
    ConstructorDeclaration => "constructor_declaration",
    /// Body of a constructor.
    ConstructorBody => "constructor_body",
    /// `function foo() { ... }` inside a class.
    MethodDeclaration => "method_declaration",
    /// Body of a method.
    MethodBody => "method_body",
    /// `function foo() { ... }` at file level.
    FunctionDeclaration => "function_declaration",
    /// Body of a function or function expression.
    FunctionBody => "function_body",
    /// `$expand string$foo() { ... }`
    ExpandFunctionDeclaration => "expand_function_declaration",
    /// `x as int = 1` in a parameter list.
    FormalParameter => "formal_parameter",
    /// `var x = 1;` as a statement.
    VariableDeclaration => "variable_declaration",

    // Statements
    /// Wrapper over every statement form.
    Statement => "statement",
    /// `{ ... }`
    BlockStatement => "block_statement",
    /// `return x;`
    ReturnStatement => "return_statement",
    /// `break;`
    BreakStatement => "break_statement",
    /// `continue;`
    ContinueStatement => "continue_statement",
    /// `if (c) a else b`
    IfStatement => "if_statement",
    /// `for k, v in map { ... }`
    ForeachStatement => "foreach_statement",
    /// One loop variable of a foreach.
    ForeachVariable => "foreach_variable",
    /// Body of a foreach.
    ForeachBody => "foreach_body",
    /// `while (c) body`
    WhileStatement => "while_statement",
    /// `expr;`
    ExpressionStatement => "expression_statement",

    // Expressions
    /// `this`
    ThisExpr => "this_expr",
    /// `true` / `false`
    BoolLiteral => "bool_literal",
    /// `10`, `0x1F`
    IntLiteral => "int_literal",
    /// `10L`
    LongLiteral => "long_literal",
    /// `1.5f`
    FloatLiteral => "float_literal",
    /// `1.5`
    DoubleLiteral => "double_literal",
    /// `"text"`
    StringLiteral => "string_literal",
    /// `null`
    NullLiteral => "null_literal",
    /// A bare identifier used as a value.
    ReferenceExpr => "reference_expr",
    /// `function(x) { ... }`
    FunctionExpr => "function_expr",
    /// `<item:minecraft:stone>`
    BracketHandlerExpr => "bracket_handler_expr",
    /// Inner text of a bracket handler.
    Content => "content",
    /// `[a, b]`
    ArrayLiteral => "array_literal",
    /// `{a: b}`
    MapLiteral => "map_literal",
    /// `a: b` inside a map literal.
    MapEntry => "map_entry",
    /// `(expr)`
    ParensExpr => "parens_expr",
    /// `x instanceof T`
    InstanceOfExpr => "instance_of_expr",
    /// `x as T`
    TypeCastExpr => "type_cast_expr",
    /// `f(a, b)`
    CallExpr => "call_expr",
    /// `a[i]`
    ArrayAccessExpr => "array_access_expr",
    /// `a.b` or `a."b"`
    MemberAccessExpr => "member_access_expr",
    /// `a .. b` or `a to b`
    IntRangeExpr => "int_range_expr",
    /// `!x`, `-x`
    UnaryExpr => "unary_expr",
    /// `a + b`
    BinaryExpr => "binary_expr",
    /// `c ? a : b`
    TernaryExpr => "ternary_expr",
    /// `a = b`, `a += b`
    AssignmentExpr => "assignment_expr",

    // Type literals
    /// `crafttweaker.item.IItemStack`
    ReferenceType => "reference_type",
    /// `int[]`
    ArrayType => "array_type",
    /// `[int]`
    ListType => "list_type",
    /// `string[int]`
    MapType => "map_type",
    /// `function(int)string`
    FunctionType => "function_type",
    /// `int`, `bool`, `any`
    PrimitiveType => "primitive_type",
}

impl RuleKind {
    /// True for every expression alternative.
    pub fn is_expression(&self) -> bool {
        matches!(
            self,
            Self::ThisExpr
                | Self::BoolLiteral
                | Self::IntLiteral
                | Self::LongLiteral
                | Self::FloatLiteral
                | Self::DoubleLiteral
                | Self::StringLiteral
                | Self::NullLiteral
                | Self::ReferenceExpr
                | Self::FunctionExpr
                | Self::BracketHandlerExpr
                | Self::ArrayLiteral
                | Self::MapLiteral
                | Self::ParensExpr
                | Self::InstanceOfExpr
                | Self::TypeCastExpr
                | Self::CallExpr
                | Self::ArrayAccessExpr
                | Self::MemberAccessExpr
                | Self::IntRangeExpr
                | Self::UnaryExpr
                | Self::BinaryExpr
                | Self::TernaryExpr
                | Self::AssignmentExpr
        )
    }

    /// True for every literal alternative.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::BoolLiteral
                | Self::IntLiteral
                | Self::LongLiteral
                | Self::FloatLiteral
                | Self::DoubleLiteral
                | Self::StringLiteral
                | Self::NullLiteral
        )
    }

    /// True for every type literal alternative.
    pub fn is_type_literal(&self) -> bool {
        matches!(
            self,
            Self::ReferenceType
                | Self::ArrayType
                | Self::ListType
                | Self::MapType
                | Self::FunctionType
                | Self::PrimitiveType
        )
    }
}

impl From<String> for RuleKind {
    fn from(name: String) -> Self {
        Self::from_name(&name).unwrap_or(Self::Other(name))
    }
}

impl From<&str> for RuleKind {
    fn from(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| Self::Other(name.to_string()))
    }
}

impl From<RuleKind> for String {
    fn from(kind: RuleKind) -> Self {
        match kind {
            RuleKind::Other(name) => name,
            known => known.name().to_string(),
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
