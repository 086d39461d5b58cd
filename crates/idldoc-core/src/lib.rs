//! idldoc core - interface definition documentation engine
//!
//! This crate provides:
//! - Lexer and parser for `.msg`, `.srv` and `.action` interface files
//! - Type classifier over the interface type system
//! - Compact definition extraction (constants and fields as a flat table)
//! - HTML page, index and stylesheet generation
//! - A parallel batch generator driven by an [`InterfaceSource`]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lexer module - tokenization of type expressions
pub mod lexer;

/// Parsed representation of interfaces
pub mod ast;

/// Interface file parser
pub mod parser;

/// Type classification
pub mod types;

/// Resource names (`pkg/kind/Name`)
pub mod resource;

/// Interface sources and catalogs
pub mod source;

/// Compact definitions and HTML rendering
pub mod doc;

/// Batch generation of a documentation tree
pub mod generate;

mod error;

pub use ast::{Interface, InterfaceId, InterfaceKind};
pub use doc::{assemble, CompactDefinition, FieldNameStyle};
pub use error::DocError;
pub use generate::{GenerationReport, Generator, GeneratorOptions, SkippedInterface};
pub use parser::{ParseError, Parser};
pub use resource::resource_name;
pub use source::{InterfaceCatalog, InterfaceSource, MemorySource, PackageInterfaces};
pub use types::{classify, UnsupportedTypeError};
