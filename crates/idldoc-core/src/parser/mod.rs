//! Parser for `.msg`, `.srv` and `.action` interface files
//!
//! Each non-blank, non-comment line declares one member:
//!
//! ```text
//! int32 count                 # field
//! float64 ratio 0.5           # field with a default value
//! uint8 MODE_FAST=1           # constant
//! string GREETING=hello # all  # unquoted string constants run to end of line
//! string QUOTED="hi"  # ok      # quoted ones stop at the closing quote
//! ```
//!
//! Services are two messages (request, response) and actions three (goal,
//! result, feedback), separated by `---` lines.

mod error;
mod literal;

pub use error::{ParseError, ParseErrorKind};

use std::collections::HashSet;

use crate::ast::{Constant, Definition, Field, FieldType, Interface, InterfaceId, InterfaceKind, Message};
use crate::types;

use literal::{parse_literal, strip_comment};

/// Line that separates the sections of services and actions
pub const SECTION_SEPARATOR: &str = "---";

/// Interface file parser
pub struct Parser;

impl Parser {
    /// Parse the source of the interface identified by `id`
    pub fn parse_interface(id: &InterfaceId, source: &str) -> Result<Interface, ParseError> {
        let definition = Self::parse_definition(id, source)?;
        Ok(Interface {
            id: id.clone(),
            definition,
        })
    }

    fn parse_definition(id: &InterfaceId, source: &str) -> Result<Definition, ParseError> {
        let sections = split_sections(source);
        let expected = match id.kind {
            InterfaceKind::Message => 1,
            InterfaceKind::Service => 2,
            InterfaceKind::Action => 3,
        };
        if sections.len() != expected {
            return Err(ParseError::new(
                ParseErrorKind::SectionCount {
                    expected,
                    found: sections.len(),
                },
                0,
            ));
        }

        let package = id.package.as_str();
        let section = |index: usize, suffix: &str| {
            let (first_line, lines) = &sections[index];
            let name = if suffix.is_empty() {
                id.name.clone()
            } else {
                format!("{}_{}", id.name, suffix)
            };
            parse_lines(package, name, *first_line, lines)
        };

        let definition = match id.kind {
            InterfaceKind::Message => Definition::Message(section(0, "")?),
            InterfaceKind::Service => Definition::Service {
                request: section(0, "Request")?,
                response: section(1, "Response")?,
            },
            InterfaceKind::Action => Definition::Action {
                goal: section(0, "Goal")?,
                result: section(1, "Result")?,
                feedback: section(2, "Feedback")?,
            },
        };
        Ok(definition)
    }

    /// Parse a single message body
    pub fn parse_message(package: &str, name: &str, source: &str) -> Result<Message, ParseError> {
        let lines: Vec<&str> = source.lines().collect();
        parse_lines(package, name.to_string(), 1, &lines)
    }
}

/// Split into `---` separated sections, remembering each section's first line number
fn split_sections(source: &str) -> Vec<(usize, Vec<&str>)> {
    let mut sections = vec![(1, Vec::new())];
    for (index, line) in source.lines().enumerate() {
        if line.trim() == SECTION_SEPARATOR {
            sections.push((index + 2, Vec::new()));
        } else if let Some((_, current)) = sections.last_mut() {
            current.push(line);
        }
    }
    sections
}

fn parse_lines(
    package: &str,
    name: String,
    first_line: usize,
    lines: &[&str],
) -> Result<Message, ParseError> {
    let mut message = Message::new(name);
    let mut seen = HashSet::new();

    for (offset, raw) in lines.iter().enumerate() {
        let line_no = first_line + offset;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let member = parse_member(package, line, line_no)?;
        let member_name = match &member {
            Member::Field(field) => field.name.clone(),
            Member::Constant(constant) => constant.name.clone(),
        };
        if !seen.insert(member_name.clone()) {
            return Err(ParseError::new(ParseErrorKind::DuplicateMember(member_name), line_no));
        }
        match member {
            Member::Field(field) => message.fields.push(field),
            Member::Constant(constant) => message.constants.push(constant),
        }
    }

    Ok(message)
}

enum Member {
    Field(Field),
    Constant(Constant),
}

fn parse_member(package: &str, line: &str, line_no: usize) -> Result<Member, ParseError> {
    let (type_text, rest) = split_type(line);
    let rest = rest.trim_start();

    let name_end = rest
        .find(|c: char| c.is_whitespace() || c == '=' || c == '#')
        .unwrap_or(rest.len());
    let name = &rest[..name_end];
    if name.is_empty() {
        return Err(ParseError::new(
            ParseErrorKind::MissingName(type_text.to_string()),
            line_no,
        ));
    }

    let ty = types::classify(type_text, package).map_err(|error| {
        ParseError::new(
            ParseErrorKind::UnsupportedType {
                field: name.to_string(),
                error,
            },
            line_no,
        )
    })?;

    let after_name = rest[name_end..].trim_start();
    if let Some(value) = after_name.strip_prefix('=') {
        parse_constant(name, ty, value, line_no).map(Member::Constant)
    } else {
        parse_field(name, ty, after_name, line_no).map(Member::Field)
    }
}

/// Split off the type expression: everything up to the first whitespace
/// outside of `<...>`
fn split_type(line: &str) -> (&str, &str) {
    let mut depth = 0usize;
    let mut chars = line.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            '<' if chars.peek().is_some_and(|&(_, next)| next == '=') => {}
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => return (&line[..i], &line[i..]),
            _ => {}
        }
    }
    (line, "")
}

fn parse_constant(
    name: &str,
    ty: FieldType,
    value: &str,
    line_no: usize,
) -> Result<Constant, ParseError> {
    if !is_constant_name(name) {
        return Err(
            ParseError::new(ParseErrorKind::InvalidConstantName(name.to_string()), line_no)
                .with_hint("constant names are UPPER_CASE"),
        );
    }
    let allowed = matches!(
        ty,
        FieldType::Basic(_) | FieldType::GenericString { max_size: None, .. }
    );
    if !allowed {
        return Err(ParseError::new(
            ParseErrorKind::InvalidConstantType(name.to_string()),
            line_no,
        ));
    }

    // Unquoted string constants keep everything up to the end of the line
    let value = value.trim();
    let value = if ty.is_string() && !value.starts_with(['"', '\'']) {
        value
    } else {
        strip_comment(value).trim()
    };
    if value.is_empty() {
        return Err(ParseError::new(
            ParseErrorKind::MissingConstantValue(name.to_string()),
            line_no,
        ));
    }

    let literal = parse_literal(value, &ty).map_err(|reason| invalid_literal(name, value, reason, line_no))?;
    Ok(Constant {
        name: name.to_string(),
        ty,
        value: literal,
    })
}

fn parse_field(name: &str, ty: FieldType, rest: &str, line_no: usize) -> Result<Field, ParseError> {
    if !is_field_name(name) {
        return Err(
            ParseError::new(ParseErrorKind::InvalidFieldName(name.to_string()), line_no)
                .with_hint("field names are lower_snake_case"),
        );
    }

    let default_text = strip_comment(rest).trim();
    let mut field = Field::new(name, ty);
    if !default_text.is_empty() {
        let literal = parse_literal(default_text, &field.ty)
            .map_err(|reason| invalid_literal(name, default_text, reason, line_no))?;
        field.default = Some(literal);
    }
    Ok(field)
}

fn invalid_literal(member: &str, value: &str, reason: String, line_no: usize) -> ParseError {
    ParseError::new(
        ParseErrorKind::InvalidLiteral {
            member: member.to_string(),
            value: value.to_string(),
            reason,
        },
        line_no,
    )
}

/// `[a-z][a-z0-9_]*` without a trailing or doubled underscore
fn is_field_name(name: &str) -> bool {
    types::is_package_name(name) && !name.ends_with('_') && !name.contains("__")
}

/// `[A-Z][A-Z0-9_]*`
fn is_constant_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
