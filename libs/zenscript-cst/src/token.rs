//! # Token Kinds
//!
//! Lexical kinds a ZenScript lexer tags terminal nodes with.
//!
//! ## Example
//!
//! ```rust
//! use zenscript_cst::TokenKind;
//!
//! assert!(TokenKind::Var.is_declaring_prefix());
//! assert!(!TokenKind::Identifier.is_declaring_prefix());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of tokens.
///
/// Mirrors the ZenScript lexer vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    // Declaring prefixes
    /// `var`
    Var,
    /// `val`
    Val,
    /// `static`
    Static,
    /// `global`
    Global,

    // Keywords
    /// `import`
    Import,
    /// `as`
    As,
    /// `function`
    Function,
    /// `zenClass`
    ZenClass,
    /// `zenConstructor`
    ZenConstructor,
    /// `$expand`
    Expand,
    /// `return`
    Return,
    /// `break`
    Break,
    /// `continue`
    Continue,
    /// `if`
    If,
    /// `else`
    Else,
    /// `for`
    For,
    /// `while`
    While,
    /// `in`
    In,
    /// `has`
    Has,
    /// `instanceof`
    InstanceOf,
    /// `to`
    To,
    /// `this`
    This,
    /// `null`
    Null,
    /// `true`
    True,
    /// `false`
    False,

    // Primitive type names
    /// `any`
    Any,
    /// `byte`
    Byte,
    /// `short`
    Short,
    /// `int`
    Int,
    /// `long`
    Long,
    /// `float`
    Float,
    /// `double`
    Double,
    /// `bool`
    Bool,
    /// `void`
    Void,
    /// `string`
    String,

    // Literals and names
    /// Identifier like `foo`
    Identifier,
    /// Integer literal like `10` or `0x1F`
    IntLiteral,
    /// Long literal like `10L`
    LongLiteral,
    /// Float literal like `1.5f`
    FloatLiteral,
    /// Double literal like `1.5`
    DoubleLiteral,
    /// String literal like `"hello"` or `'hello'`
    StringLiteral,

    // Punctuation
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `[`
    BrackOpen,
    /// `]`
    BrackClose,
    /// `{`
    BraceOpen,
    /// `}`
    BraceClose,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `..`
    DotDot,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `?`
    Question,

    // Operators
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `~`
    Concat,
    /// `!`
    Not,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `^`
    Xor,
    /// `=`
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MulAssign,
    /// `/=`
    DivAssign,
    /// `%=`
    ModAssign,
    /// `~=`
    ConcatAssign,
    /// `&=`
    AndAssign,
    /// `|=`
    OrAssign,
    /// `^=`
    XorAssign,

    /// Token the lexer could not classify.
    Error,
}

impl TokenKind {
    /// True for the storage modifiers that may prefix a declaration.
    pub const fn is_declaring_prefix(&self) -> bool {
        matches!(self, Self::Var | Self::Val | Self::Static | Self::Global)
    }

    /// True for `=` and every compound assignment.
    pub const fn is_assignment(&self) -> bool {
        matches!(
            self,
            Self::Assign
                | Self::AddAssign
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

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
