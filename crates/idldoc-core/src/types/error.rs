//! Classification error types

use thiserror::Error;

use crate::lexer::Span;

/// A declared type that matches none of the known type shapes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported type '{declaration}': {reason}")]
pub struct UnsupportedTypeError {
    /// The declaration exactly as written
    pub declaration: String,
    pub reason: UnsupportedReason,
}

impl UnsupportedTypeError {
    pub fn new(declaration: impl Into<String>, reason: UnsupportedReason) -> Self {
        Self {
            declaration: declaration.into(),
            reason,
        }
    }
}

/// Why a declaration was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnsupportedReason {
    #[error("empty type")]
    Empty,

    #[error("unexpected {found} at column {column}, expected {expected}", column = .at.column())]
    Unexpected {
        found: String,
        expected: &'static str,
        at: Span,
    },

    #[error("unknown type name '{0}'")]
    UnknownName(String),

    #[error("'{0}' is not a valid package name")]
    InvalidPackage(String),

    #[error("too many namespace segments in '{0}'")]
    TooManySegments(String),

    #[error("arrays and sequences cannot be nested")]
    NestedCollection,

    #[error("size {0} is out of range")]
    InvalidSize(String),

    #[error("bound must be greater than zero")]
    ZeroBound,
}
