//! Parser error types for interface definitions

use crate::types::UnsupportedTypeError;
use thiserror::Error;

/// A parse error with the 1-based line it was found on
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// 0 for errors that concern the file as a whole
    pub line: usize,
    pub hint: Option<String>,
}

impl ParseError {
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize) -> Self {
        Self {
            kind,
            line,
            hint: None,
        }
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// The unsupported type behind this error, if that is what failed
    pub fn unsupported_type(&self) -> Option<&UnsupportedTypeError> {
        match &self.kind {
            ParseErrorKind::UnsupportedType { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.line > 0 {
            write!(f, "{} at line {}", self.kind, self.line)?;
        } else {
            write!(f, "{}", self.kind)?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("missing member name after type '{0}'")]
    MissingName(String),

    #[error("invalid field name '{0}'")]
    InvalidFieldName(String),

    #[error("invalid constant name '{0}'")]
    InvalidConstantName(String),

    #[error("field '{field}' has {error}")]
    UnsupportedType {
        field: String,
        error: UnsupportedTypeError,
    },

    #[error("constant '{0}' must have a basic or string type")]
    InvalidConstantType(String),

    #[error("constant '{0}' has no value")]
    MissingConstantValue(String),

    #[error("invalid value '{value}' for '{member}': {reason}")]
    InvalidLiteral {
        member: String,
        value: String,
        reason: String,
    },

    #[error("duplicate member name '{0}'")]
    DuplicateMember(String),

    #[error("expected {expected} sections separated by '---', found {found}")]
    SectionCount { expected: usize, found: usize },
}
