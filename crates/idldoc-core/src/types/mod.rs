//! Type classification
//!
//! Turns a declared type expression into a [`FieldType`]. The expression is
//! tokenized first, so classification inspects structure rather than
//! searching for substrings. Shapes are tried in a fixed order:
//!
//! 1. bounded strings (`string<=N`, `wstring<=N`)
//! 2. sequence markers (`sequence<T>`, `sequence<T, N>`)
//! 3. basic scalar names, in both the `.msg` and IDL spellings
//! 4. namespaced message references (`Type`, `pkg/Type`, `pkg/kind/Type`)
//!
//! followed by at most one collection suffix (`[]`, `[N]`, `[<=N]`).

mod error;

pub use error::{UnsupportedReason, UnsupportedTypeError};

use crate::ast::{BasicType, FieldType, NamedType};
use crate::lexer::{LexError, Lexer, Span, Token, TokenKind};

/// Package that owns the implicit `Header` type
pub const HEADER_PACKAGE: &str = "std_msgs";

/// Look up a scalar type by any of its accepted spellings
pub fn lookup_basic(name: &str) -> Option<BasicType> {
    let basic = match name {
        "bool" | "boolean" => BasicType::Bool,
        "byte" | "octet" => BasicType::Byte,
        "char" => BasicType::Char,
        "wchar" => BasicType::WChar,
        "float32" | "float" => BasicType::Float32,
        "float64" | "double" => BasicType::Float64,
        "long double" => BasicType::LongDouble,
        "int8" => BasicType::Int8,
        "uint8" => BasicType::UInt8,
        "int16" | "short" => BasicType::Int16,
        "uint16" | "unsigned short" => BasicType::UInt16,
        "int32" | "long" => BasicType::Int32,
        "uint32" | "unsigned long" => BasicType::UInt32,
        "int64" | "long long" => BasicType::Int64,
        "uint64" | "unsigned long long" => BasicType::UInt64,
        _ => return None,
    };
    Some(basic)
}

/// Classify a declared type.
///
/// `package` is the package of the interface being parsed; bare message
/// names resolve into its `msg` namespace, except `Header` which always
/// means `std_msgs/msg/Header`.
pub fn classify(declaration: &str, package: &str) -> Result<FieldType, UnsupportedTypeError> {
    let (tokens, errors) = Lexer::tokenize(declaration);
    if let Some(err) = errors.first() {
        let LexError::UnexpectedChar(bad) = err.error;
        return Err(UnsupportedTypeError::new(
            declaration,
            UnsupportedReason::Unexpected {
                found: format!("character '{bad}'"),
                expected: "a type expression",
                at: err.span,
            },
        ));
    }

    let mut classifier = Classifier {
        declaration,
        package,
        tokens,
        pos: 0,
    };
    let ty = classifier.field_type()?;
    classifier.expect_end()?;
    Ok(ty)
}

struct Classifier<'a> {
    declaration: &'a str,
    package: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl Classifier<'_> {
    fn field_type(&mut self) -> Result<FieldType, UnsupportedTypeError> {
        if self.peek_kind() == TokenKind::Eof {
            return Err(self.error(UnsupportedReason::Empty));
        }

        let element = self.element()?;
        if self.peek_kind() != TokenKind::LBracket {
            return Ok(element);
        }
        if element.is_collection() {
            return Err(self.error(UnsupportedReason::NestedCollection));
        }

        self.advance();
        let element = Box::new(element);
        let ty = match self.peek_kind() {
            TokenKind::RBracket => FieldType::UnboundedSequence(element),
            TokenKind::LtEq => {
                self.advance();
                let max_size = self.bound()?;
                FieldType::BoundedSequence { element, max_size }
            }
            TokenKind::Int => {
                let size = self.bound()?;
                FieldType::Array { element, size }
            }
            _ => return Err(self.unexpected("']', '<=' or an array size")),
        };
        self.expect(TokenKind::RBracket, "']'")?;

        if self.peek_kind() == TokenKind::LBracket {
            return Err(self.error(UnsupportedReason::NestedCollection));
        }
        Ok(ty)
    }

    fn element(&mut self) -> Result<FieldType, UnsupportedTypeError> {
        let first = self.expect(TokenKind::Ident, "a type name")?;
        let next = self.peek_kind();

        // (a) bounded string
        if matches!(first.lexeme.as_str(), "string" | "wstring") {
            let wide = first.lexeme == "wstring";
            let max_size = if next == TokenKind::LtEq {
                self.advance();
                Some(self.bound()?)
            } else {
                None
            };
            return Ok(FieldType::GenericString { wide, max_size });
        }

        // (b) sequence marker
        if first.lexeme == "sequence" && next == TokenKind::Lt {
            self.advance();
            let element = self.field_type()?;
            if element.is_collection() {
                return Err(self.error(UnsupportedReason::NestedCollection));
            }
            let ty = if self.peek_kind() == TokenKind::Comma {
                self.advance();
                let max_size = self.bound()?;
                FieldType::BoundedSequence {
                    element: Box::new(element),
                    max_size,
                }
            } else {
                FieldType::UnboundedSequence(Box::new(element))
            };
            self.expect(TokenKind::Gt, "'>'")?;
            return Ok(ty);
        }

        // (c) basic scalar, possibly spelled with several words
        if next != TokenKind::Slash {
            let mut name = first.lexeme.clone();
            while self.peek_kind() == TokenKind::Ident {
                let word = self.advance();
                name.push(' ');
                name.push_str(&word.lexeme);
            }
            if let Some(basic) = lookup_basic(&name) {
                return Ok(FieldType::Basic(basic));
            }
            if name.contains(' ') {
                return Err(self.error(UnsupportedReason::UnknownName(name)));
            }
        }

        // (d) namespaced reference
        let mut segments = vec![first.lexeme];
        while self.peek_kind() == TokenKind::Slash {
            self.advance();
            let segment = self.expect(TokenKind::Ident, "a name after '/'")?;
            segments.push(segment.lexeme);
        }
        self.named(segments).map(FieldType::Named)
    }

    fn named(&self, segments: Vec<String>) -> Result<NamedType, UnsupportedTypeError> {
        let joined = segments.join("/");
        let mut segments = segments.into_iter();
        let named = match (segments.next(), segments.next(), segments.next(), segments.next()) {
            (Some(name), None, None, None) => {
                if name == "Header" {
                    NamedType::message(HEADER_PACKAGE, name)
                } else {
                    NamedType::message(self.package, name)
                }
            }
            (Some(package), Some(name), None, None) => NamedType::message(package, name),
            (Some(package), Some(kind), Some(name), None) => NamedType {
                package,
                kind,
                name,
            },
            _ => return Err(self.error(UnsupportedReason::TooManySegments(joined))),
        };

        if !is_package_name(&named.package) {
            return Err(self.error(UnsupportedReason::InvalidPackage(named.package)));
        }
        if !is_type_name(&named.name) {
            return Err(self.error(UnsupportedReason::UnknownName(joined)));
        }
        Ok(named)
    }

    fn bound(&mut self) -> Result<u64, UnsupportedTypeError> {
        let token = self.expect(TokenKind::Int, "a size")?;
        let value: u64 = token
            .lexeme
            .parse()
            .map_err(|_| self.error(UnsupportedReason::InvalidSize(token.lexeme.clone())))?;
        if value == 0 {
            return Err(self.error(UnsupportedReason::ZeroBound));
        }
        Ok(value)
    }

    fn expect_end(&self) -> Result<(), UnsupportedTypeError> {
        if self.peek_kind() == TokenKind::Eof {
            Ok(())
        } else {
            Err(self.unexpected("end of type"))
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token, UnsupportedTypeError> {
        if self.peek_kind() == kind {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn peek_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos)
            .map_or(TokenKind::Eof, |token| token.kind)
    }

    fn advance(&mut self) -> Token {
        let token = self
            .tokens
            .get(self.pos)
            .cloned()
            .unwrap_or_else(|| Token::new(TokenKind::Eof, Default::default(), ""));
        self.pos += 1;
        token
    }

    fn unexpected(&self, expected: &'static str) -> UnsupportedTypeError {
        let end = Span::new(self.declaration.len(), self.declaration.len());
        let (found, at) = match self.tokens.get(self.pos) {
            Some(token) if token.kind != TokenKind::Eof => (format!("'{}'", token.lexeme), token.span),
            Some(token) => (TokenKind::Eof.to_string(), token.span),
            None => (TokenKind::Eof.to_string(), end),
        };
        self.error(UnsupportedReason::Unexpected { found, expected, at })
    }

    fn error(&self, reason: UnsupportedReason) -> UnsupportedTypeError {
        UnsupportedTypeError::new(self.declaration, reason)
    }
}

/// `[a-z][a-z0-9_]*`, the package naming rule
pub fn is_package_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// `[A-Z][A-Za-z0-9_]*`, the message naming rule
pub fn is_type_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(decl: &str) -> FieldType {
        classify(decl, "demo_msgs").unwrap()
    }

    fn reason(decl: &str) -> UnsupportedReason {
        classify(decl, "demo_msgs").unwrap_err().reason
    }

    #[test]
    fn classify_basic_spellings() {
        assert_eq!(ok("int32"), FieldType::Basic(BasicType::Int32));
        assert_eq!(ok("boolean"), FieldType::Basic(BasicType::Bool));
        assert_eq!(ok("float"), FieldType::Basic(BasicType::Float32));
        assert_eq!(ok("byte"), FieldType::Basic(BasicType::Byte));
    }

    #[test]
    fn classify_strings() {
        assert_eq!(ok("string"), FieldType::string());
        assert_eq!(
            ok("wstring<=8"),
            FieldType::GenericString {
                wide: true,
                max_size: Some(8)
            }
        );
    }

    #[test]
    fn classify_collections() {
        assert_eq!(
            ok("float64[3]"),
            FieldType::Array {
                element: Box::new(FieldType::Basic(BasicType::Float64)),
                size: 3
            }
        );
        assert_eq!(
            ok("uint8[]"),
            FieldType::UnboundedSequence(Box::new(FieldType::Basic(BasicType::UInt8)))
        );
        assert_eq!(
            ok("string<=5[<=10]"),
            FieldType::BoundedSequence {
                element: Box::new(FieldType::GenericString {
                    wide: false,
                    max_size: Some(5)
                }),
                max_size: 10
            }
        );
    }

    #[test]
    fn classify_sequence_marker() {
        assert_eq!(
            ok("sequence<int32, 10>"),
            FieldType::BoundedSequence {
                element: Box::new(FieldType::Basic(BasicType::Int32)),
                max_size: 10
            }
        );
        assert_eq!(
            ok("sequence<unsigned long long>"),
            FieldType::UnboundedSequence(Box::new(FieldType::Basic(BasicType::UInt64)))
        );
    }

    #[test]
    fn classify_named_references() {
        assert_eq!(
            ok("geometry_msgs/Pose"),
            FieldType::Named(NamedType::message("geometry_msgs", "Pose"))
        );
        assert_eq!(
            ok("Status"),
            FieldType::Named(NamedType::message("demo_msgs", "Status"))
        );
        assert_eq!(
            ok("Header"),
            FieldType::Named(NamedType::message("std_msgs", "Header"))
        );
        assert_eq!(
            ok("demo_msgs/action/Count_Goal"),
            FieldType::Named(NamedType {
                package: "demo_msgs".into(),
                kind: "action".into(),
                name: "Count_Goal".into()
            })
        );
    }

    #[test]
    fn reject_unknown_and_malformed() {
        assert_eq!(reason("integer"), UnsupportedReason::UnknownName("integer".into()));
        assert_eq!(reason(""), UnsupportedReason::Empty);
        assert!(matches!(reason("a/b/c/D"), UnsupportedReason::TooManySegments(_)));
        assert!(matches!(reason("Bad-Pkg/Type"), UnsupportedReason::Unexpected { .. }));
        assert_eq!(reason("int32[0]"), UnsupportedReason::ZeroBound);
    }

    #[test]
    fn unexpected_token_reports_column() {
        let err = classify("int32[3", "demo_msgs").unwrap_err();
        assert!(matches!(
            err.reason,
            UnsupportedReason::Unexpected { at, .. } if at.column() == 8
        ));

        let err = classify("int32$", "demo_msgs").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported type 'int32$': unexpected character '$' at column 6, expected a type expression"
        );
    }

    #[test]
    fn reject_nested_collections() {
        assert_eq!(reason("int32[3][4]"), UnsupportedReason::NestedCollection);
        assert_eq!(reason("sequence<int32[2]>"), UnsupportedReason::NestedCollection);
        assert_eq!(reason("sequence<int32>[2]"), UnsupportedReason::NestedCollection);
    }
}
