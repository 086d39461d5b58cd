//! Parsed representation of message, service and action definitions

mod types;

pub use types::{BasicType, FieldType, NamedType};

use std::fmt;

use serde::Serialize;

/// The three interface families, each living in its own package subdirectory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceKind {
    Message,
    Service,
    Action,
}

impl InterfaceKind {
    pub const ALL: [InterfaceKind; 3] = [
        InterfaceKind::Message,
        InterfaceKind::Service,
        InterfaceKind::Action,
    ];

    /// Package subdirectory and resource-name segment (`msg`, `srv`, `action`)
    pub fn dir_name(self) -> &'static str {
        match self {
            InterfaceKind::Message => "msg",
            InterfaceKind::Service => "srv",
            InterfaceKind::Action => "action",
        }
    }

    /// Source file extension
    pub fn extension(self) -> &'static str {
        self.dir_name()
    }

    /// Heading used on generated pages
    pub fn label(self) -> &'static str {
        match self {
            InterfaceKind::Message => "Message",
            InterfaceKind::Service => "Service",
            InterfaceKind::Action => "Action",
        }
    }

    /// Plural heading used on index pages
    pub fn plural_label(self) -> &'static str {
        match self {
            InterfaceKind::Message => "Messages",
            InterfaceKind::Service => "Services",
            InterfaceKind::Action => "Actions",
        }
    }

    pub fn from_dir_name(name: &str) -> Option<Self> {
        match name {
            "msg" => Some(InterfaceKind::Message),
            "srv" => Some(InterfaceKind::Service),
            "action" => Some(InterfaceKind::Action),
            _ => None,
        }
    }
}

impl fmt::Display for InterfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Identifies one interface: package, kind and base name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InterfaceId {
    pub package: String,
    pub kind: InterfaceKind,
    pub name: String,
}

impl InterfaceId {
    pub fn new(package: impl Into<String>, kind: InterfaceKind, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            kind,
            name: name.into(),
        }
    }
}

impl fmt::Display for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.package, self.kind, self.name)
    }
}

/// A literal value attached to a constant or used as a field default
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Bool(bool),
    Int(i128),
    Float(f64),
    String(String),
    Array(Vec<Literal>),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Int(i) => write!(f, "{i}"),
            // Debug keeps the fractional part of whole numbers (`1.0`, not `1`)
            Literal::Float(x) => write!(f, "{x:?}"),
            Literal::String(s) => write!(f, "{s:?}"),
            Literal::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// A structural member of a message
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: FieldType,
    pub default: Option<Literal>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            default: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, default: Literal) -> Self {
        self.default = Some(default);
        self
    }
}

/// A named literal declared inside a message
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    pub name: String,
    /// Always `Basic` or an unbounded `GenericString`
    pub ty: FieldType,
    pub value: Literal,
}

/// One structure: a plain message or a service/action sub-message
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Message {
    pub name: String,
    pub constants: Vec<Constant>,
    pub fields: Vec<Field>,
}

impl Message {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// The parsed body of an interface file
#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    Message(Message),
    Service {
        request: Message,
        response: Message,
    },
    Action {
        goal: Message,
        result: Message,
        feedback: Message,
    },
}

impl Definition {
    pub fn kind(&self) -> InterfaceKind {
        match self {
            Definition::Message(_) => InterfaceKind::Message,
            Definition::Service { .. } => InterfaceKind::Service,
            Definition::Action { .. } => InterfaceKind::Action,
        }
    }

    /// Sub-messages in their canonical order with their section names
    pub fn sections(&self) -> Vec<(Option<&'static str>, &Message)> {
        match self {
            Definition::Message(message) => vec![(None, message)],
            Definition::Service { request, response } => {
                vec![(Some("request"), request), (Some("response"), response)]
            }
            Definition::Action {
                goal,
                result,
                feedback,
            } => vec![
                (Some("goal"), goal),
                (Some("result"), result),
                (Some("feedback"), feedback),
            ],
        }
    }
}

/// A parsed interface together with its identity
#[derive(Debug, Clone, PartialEq)]
pub struct Interface {
    pub id: InterfaceId,
    pub definition: Definition,
}
