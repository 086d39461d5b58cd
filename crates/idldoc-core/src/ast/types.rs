//! Field type algebra

use std::fmt;

/// Scalar types available to interface fields and constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicType {
    Bool,
    Byte,
    Char,
    WChar,
    Float32,
    Float64,
    LongDouble,
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
}

impl BasicType {
    /// Every scalar type, in a fixed order
    pub const ALL: [BasicType; 15] = [
        BasicType::Bool,
        BasicType::Byte,
        BasicType::Char,
        BasicType::WChar,
        BasicType::Float32,
        BasicType::Float64,
        BasicType::LongDouble,
        BasicType::Int8,
        BasicType::UInt8,
        BasicType::Int16,
        BasicType::UInt16,
        BasicType::Int32,
        BasicType::UInt32,
        BasicType::Int64,
        BasicType::UInt64,
    ];

    /// The IDL spelling of this type
    pub fn idl_name(self) -> &'static str {
        match self {
            BasicType::Bool => "boolean",
            BasicType::Byte => "octet",
            BasicType::Char => "char",
            BasicType::WChar => "wchar",
            BasicType::Float32 => "float",
            BasicType::Float64 => "double",
            BasicType::LongDouble => "long double",
            BasicType::Int8 => "int8",
            BasicType::UInt8 => "uint8",
            BasicType::Int16 => "int16",
            BasicType::UInt16 => "uint16",
            BasicType::Int32 => "int32",
            BasicType::UInt32 => "uint32",
            BasicType::Int64 => "int64",
            BasicType::UInt64 => "uint64",
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            BasicType::Byte
                | BasicType::Int8
                | BasicType::UInt8
                | BasicType::Int16
                | BasicType::UInt16
                | BasicType::Int32
                | BasicType::UInt32
                | BasicType::Int64
                | BasicType::UInt64
        )
    }

    pub fn is_float(self) -> bool {
        matches!(
            self,
            BasicType::Float32 | BasicType::Float64 | BasicType::LongDouble
        )
    }

    /// Inclusive value range for integer types
    pub fn integer_range(self) -> Option<(i128, i128)> {
        let range = match self {
            BasicType::Byte | BasicType::UInt8 => (0, i128::from(u8::MAX)),
            BasicType::Int8 => (i128::from(i8::MIN), i128::from(i8::MAX)),
            BasicType::Int16 => (i128::from(i16::MIN), i128::from(i16::MAX)),
            BasicType::UInt16 => (0, i128::from(u16::MAX)),
            BasicType::Int32 => (i128::from(i32::MIN), i128::from(i32::MAX)),
            BasicType::UInt32 => (0, i128::from(u32::MAX)),
            BasicType::Int64 => (i128::from(i64::MIN), i128::from(i64::MAX)),
            BasicType::UInt64 => (0, i128::from(u64::MAX)),
            _ => return None,
        };
        Some(range)
    }
}

/// A reference to another interface's message type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedType {
    pub package: String,
    /// Namespace segment, `msg` for plain messages
    pub kind: String,
    pub name: String,
}

impl NamedType {
    pub fn message(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            kind: "msg".to_string(),
            name: name.into(),
        }
    }
}

impl fmt::Display for NamedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.package, self.kind, self.name)
    }
}

/// The declared type of a field, one variant per shape the IDL allows.
///
/// Element types of arrays and sequences are never themselves arrays or
/// sequences; the classifier rejects such declarations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Basic(BasicType),
    /// `string`/`wstring`, optionally bounded by a maximum length
    GenericString { wide: bool, max_size: Option<u64> },
    Array { element: Box<FieldType>, size: u64 },
    UnboundedSequence(Box<FieldType>),
    BoundedSequence { element: Box<FieldType>, max_size: u64 },
    Named(NamedType),
}

impl FieldType {
    pub fn string() -> Self {
        FieldType::GenericString {
            wide: false,
            max_size: None,
        }
    }

    /// The element type for collections, `self` otherwise
    pub fn element(&self) -> &FieldType {
        match self {
            FieldType::Array { element, .. }
            | FieldType::UnboundedSequence(element)
            | FieldType::BoundedSequence { element, .. } => element,
            other => other,
        }
    }

    pub fn is_collection(&self) -> bool {
        matches!(
            self,
            FieldType::Array { .. }
                | FieldType::UnboundedSequence(_)
                | FieldType::BoundedSequence { .. }
        )
    }

    pub fn is_string(&self) -> bool {
        matches!(self, FieldType::GenericString { .. })
    }

    /// The referenced message when this type (or its element) is named
    pub fn named(&self) -> Option<&NamedType> {
        match self.element() {
            FieldType::Named(named) => Some(named),
            _ => None,
        }
    }
}
