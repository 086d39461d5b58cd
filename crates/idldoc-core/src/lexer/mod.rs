//! Lexer for declared field types
//!
//! Interface files are line oriented, so the parser splits each declaration
//! into its type expression, name and value by hand. Only the type expression
//! has nested structure (`sequence<pkg/Type, 8>`, `string<=10[<=3]`); this
//! lexer turns it into tokens with byte spans so the structure can be parsed
//! without substring searches.

mod span;
mod token;

pub use span::Span;
pub use token::TokenKind;

use logos::Logos;
use thiserror::Error;

/// A token with its kind, span, and source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub lexeme: String,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, span: Span, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            lexeme: lexeme.into(),
        }
    }
}

/// Lexer error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
}

/// A lexer error with location information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedError {
    pub error: LexError,
    pub span: Span,
}

/// Tokenizer over one type expression
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, TokenKind>,
    finished: bool,
    errors: Vec<SpannedError>,
}

impl<'source> Lexer<'source> {
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
            finished: false,
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire expression, returning all tokens (terminated by
    /// `Eof`) and any errors
    #[must_use]
    pub fn tokenize(source: &str) -> (Vec<Token>, Vec<SpannedError>) {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        while let Some(token) = lexer.next_token() {
            tokens.push(token);
        }
        (tokens, lexer.errors)
    }

    /// Get the next token; yields `Eof` once, then `None`
    pub fn next_token(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        match self.inner.next() {
            Some(Ok(kind)) => Some(Token::new(
                kind,
                Span::from(self.inner.span()),
                self.inner.slice(),
            )),
            Some(Err(())) => {
                let span = Span::from(self.inner.span());
                let bad = self.inner.slice().chars().next().unwrap_or('\u{fffd}');
                self.errors.push(SpannedError {
                    error: LexError::UnexpectedChar(bad),
                    span,
                });
                Some(Token::new(TokenKind::Error, span, self.inner.slice()))
            }
            None => {
                self.finished = true;
                let end = self.inner.source().len();
                Some(Token::new(TokenKind::Eof, Span::new(end, end), ""))
            }
        }
    }
}
