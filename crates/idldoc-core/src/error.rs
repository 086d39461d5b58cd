//! Error taxonomy for documentation generation
//!
//! Every variant except `Io` on the output directory is local to a single
//! interface: the generator records it and moves on to the next one.

use std::path::PathBuf;

use thiserror::Error;

use crate::ast::InterfaceId;
use crate::parser::{ParseError, ParseErrorKind};
use crate::types::UnsupportedTypeError;

#[derive(Error, Debug)]
pub enum DocError {
    #[error("malformed interface identifier '{0}'")]
    MalformedIdentifier(String),

    #[error("{interface}: field '{field}' has {error}")]
    UnsupportedType {
        interface: String,
        field: String,
        error: UnsupportedTypeError,
    },

    #[error("{interface}: no source file found")]
    MissingSource {
        interface: String,
        searched: Vec<PathBuf>,
    },

    #[error("{interface}: {error}")]
    Parse { interface: String, error: ParseError },

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("interface source error: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl DocError {
    /// Attribute a parse failure to `id`, lifting unsupported types into
    /// their own variant
    pub fn from_parse(id: &InterfaceId, error: ParseError) -> Self {
        match error {
            ParseError {
                kind: ParseErrorKind::UnsupportedType { field, error },
                ..
            } => DocError::UnsupportedType {
                interface: id.to_string(),
                field,
                error,
            },
            error => DocError::Parse {
                interface: id.to_string(),
                error,
            },
        }
    }

    pub fn missing_source(id: &InterfaceId, searched: Vec<PathBuf>) -> Self {
        DocError::MissingSource {
            interface: id.to_string(),
            searched,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DocError::Io {
            path: path.into(),
            source,
        }
    }

    /// Short machine-friendly name of the failure class
    pub fn category(&self) -> &'static str {
        match self {
            DocError::MalformedIdentifier(_) => "malformed-identifier",
            DocError::UnsupportedType { .. } => "unsupported-type",
            DocError::MissingSource { .. } => "missing-source",
            DocError::Parse { .. } => "parse",
            DocError::Io { .. } => "io",
            DocError::Source(_) => "source",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::InterfaceKind;
    use crate::parser::Parser;

    #[test]
    fn unsupported_type_is_lifted() {
        let id = InterfaceId::new("demo_msgs", InterfaceKind::Message, "Odd");
        let err = Parser::parse_interface(&id, "widget w").unwrap_err();
        let doc_err = DocError::from_parse(&id, err);
        assert_eq!(doc_err.category(), "unsupported-type");
        let text = doc_err.to_string();
        assert!(text.contains("demo_msgs/msg/Odd"));
        assert!(text.contains("'w'"));
    }

    #[test]
    fn other_parse_errors_stay_parse_errors() {
        let id = InterfaceId::new("demo_msgs", InterfaceKind::Message, "Odd");
        let err = Parser::parse_interface(&id, "int32 Bad").unwrap_err();
        assert_eq!(DocError::from_parse(&id, err).category(), "parse");
    }
}
