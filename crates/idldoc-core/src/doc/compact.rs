//! Compact definitions: the flat, renderable table of an interface
//!
//! A plain message yields one [`MessageTable`]. Services and actions yield
//! one table per sub-message in canonical order (request, response or
//! goal, result, feedback), each tagged with its section name.

use indexmap::IndexMap;
use serde::Serialize;

use crate::ast::{Interface, InterfaceKind, Message};

use super::constants;
use super::render::{render_field, FieldNameStyle};

/// Parallel columns describing one message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MessageTable {
    pub constant_names: Vec<String>,
    pub constant_types: Vec<String>,
    pub field_names: Vec<String>,
    pub field_types: Vec<String>,
    /// Link relative to the documentation root, or empty
    pub relative_paths: Vec<String>,
    /// `=value` for fields with a default, empty otherwise
    pub field_default_values: Vec<String>,
}

impl MessageTable {
    /// Build the table for one message
    pub fn from_message(message: &Message, style: FieldNameStyle) -> Self {
        let (constant_names, constant_types) = constants::extract(message);
        let mut table = MessageTable {
            constant_names,
            constant_types,
            ..MessageTable::default()
        };

        for field in &message.fields {
            let rendered = render_field(field, style);
            table.field_names.push(rendered.name);
            table.field_types.push(rendered.display_type);
            table.relative_paths.push(rendered.link);
            table.field_default_values.push(rendered.default_suffix);
        }
        table
    }

    pub fn is_empty(&self) -> bool {
        self.constant_names.is_empty() && self.field_names.is_empty()
    }

    /// Rows of `(type, name, default, link)` in declaration order
    pub fn field_rows(&self) -> impl Iterator<Item = (&str, &str, &str, &str)> {
        self.field_types
            .iter()
            .zip(&self.field_names)
            .zip(&self.field_default_values)
            .zip(&self.relative_paths)
            .map(|(((ty, name), default), link)| {
                (ty.as_str(), name.as_str(), default.as_str(), link.as_str())
            })
    }

    /// Rows of `(type, NAME=value)` in declaration order
    pub fn constant_rows(&self) -> impl Iterator<Item = (&str, &str)> {
        self.constant_types
            .iter()
            .zip(&self.constant_names)
            .map(|(ty, name)| (ty.as_str(), name.as_str()))
    }
}

/// One sub-message of a compact definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// `request`, `response`, `goal`, `result` or `feedback`; `None` for
    /// plain messages
    pub name: Option<&'static str>,
    /// Presentation hint: a `---` separator follows this section
    pub separator: bool,
    pub table: MessageTable,
}

impl Section {
    /// Key suffix used in the flat view (`_request`, ...), empty for messages
    pub fn key_suffix(&self) -> String {
        self.name.map(|name| format!("_{name}")).unwrap_or_default()
    }
}

/// The compact definition of one interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompactDefinition {
    pub kind: InterfaceKind,
    pub sections: Vec<Section>,
}

impl CompactDefinition {
    /// Flat dictionary view with per-section key suffixes
    /// (`field_names_request`, ...), in section order
    pub fn to_flat_map(&self) -> IndexMap<String, Vec<String>> {
        let mut map = IndexMap::new();
        for section in &self.sections {
            let suffix = section.key_suffix();
            let table = &section.table;
            let columns = [
                ("constant_names", &table.constant_names),
                ("constant_types", &table.constant_types),
                ("field_names", &table.field_names),
                ("field_types", &table.field_types),
                ("relative_paths", &table.relative_paths),
                ("field_default_values", &table.field_default_values),
            ];
            for (key, values) in columns {
                map.insert(format!("{key}{suffix}"), values.clone());
            }
        }
        map
    }

    /// The table of the named section
    pub fn section(&self, name: &str) -> Option<&MessageTable> {
        self.sections
            .iter()
            .find(|section| section.name == Some(name))
            .map(|section| &section.table)
    }
}

/// Reduce a parsed interface to its compact definition.
///
/// Pure: the same interface and style always give an identical result.
pub fn assemble(interface: &Interface, style: FieldNameStyle) -> CompactDefinition {
    let kind = interface.definition.kind();
    let sections = interface
        .definition
        .sections()
        .into_iter()
        .map(|(name, message)| Section {
            name,
            separator: name == Some("request"),
            table: MessageTable::from_message(message, style),
        })
        .collect();
    CompactDefinition { kind, sections }
}
