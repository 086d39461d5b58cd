//! Token types for interface type expressions

use logos::Logos;

/// The kind of token found in a declared field type such as
/// `sequence<geometry_msgs/Point, 4>` or `string<=32[<=5]`
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r]+")]
pub enum TokenKind {
    /// Type, package or keyword name
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    /// Decimal size literal
    #[regex(r"[0-9]+")]
    Int,

    #[token("/")]
    Slash,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    /// Upper-bound marker used by bounded strings and sequences
    #[token("<=")]
    LtEq,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    #[token(",")]
    Comma,

    /// End of the type expression
    Eof,

    /// Lexer error - invalid character
    Error,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ident => write!(f, "identifier"),
            Self::Int => write!(f, "integer"),
            Self::Slash => write!(f, "'/'"),
            Self::LBracket => write!(f, "'['"),
            Self::RBracket => write!(f, "']'"),
            Self::LtEq => write!(f, "'<='"),
            Self::Lt => write!(f, "'<'"),
            Self::Gt => write!(f, "'>'"),
            Self::Comma => write!(f, "','"),
            Self::Eof => write!(f, "end of type"),
            Self::Error => write!(f, "error"),
        }
    }
}
