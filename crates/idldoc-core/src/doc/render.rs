//! Field rendering: display type, cross-reference link and default suffix

use serde::{Deserialize, Serialize};

use crate::ast::{BasicType, Field, FieldType, NamedType};

/// How the name column is filled for message-typed fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldNameStyle {
    /// Always the declared field identifier
    #[default]
    Declared,
    /// Historical output: a plain message-typed field shows the referenced
    /// type's bare name, and nested references show the full
    /// `pkg/kind/Type` path
    Legacy,
}

/// One row of a compact definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedField {
    pub name: String,
    pub display_type: String,
    /// Link relative to the documentation root, empty for unlinked types
    pub link: String,
    /// `=value` when the field declares a default, empty otherwise
    pub default_suffix: String,
}

/// Display token for a scalar type
pub fn basic_display_name(basic: BasicType) -> &'static str {
    match basic {
        BasicType::Bool => "bool",
        BasicType::Byte => "byte",
        BasicType::Char => "char",
        BasicType::WChar => "wchar",
        BasicType::Float32 => "float32",
        BasicType::Float64 => "float64",
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

/// Documentation page of a referenced message, relative to the root.
///
/// References always point into the `msg` tree, whatever namespace the
/// referenced type lives in.
pub fn named_link(named: &NamedType) -> String {
    format!("{}/msg/{}.html", named.package, named.name)
}

/// Render a field type to `(display type, link)`
pub fn render_type(ty: &FieldType, style: FieldNameStyle) -> (String, String) {
    render_inner(ty, style, false)
}

fn render_inner(ty: &FieldType, style: FieldNameStyle, nested: bool) -> (String, String) {
    match ty {
        FieldType::Basic(basic) => (basic_display_name(*basic).to_string(), String::new()),
        FieldType::GenericString { wide, max_size } => {
            let base = if *wide { "wstring" } else { "string" };
            let display = match max_size {
                Some(max) => format!("{base}[<={max}]"),
                None => base.to_string(),
            };
            (display, String::new())
        }
        FieldType::Array { element, size } => {
            let (display, link) = render_inner(element, style, true);
            (format!("{display}[{size}]"), link)
        }
        FieldType::UnboundedSequence(element) => {
            let (display, link) = render_inner(element, style, true);
            (format!("{display}[]"), link)
        }
        FieldType::BoundedSequence { element, max_size } => {
            let (display, link) = render_inner(element, style, true);
            (format!("{display}[<={max_size}]"), link)
        }
        FieldType::Named(named) => (named_display(named, style, nested), named_link(named)),
    }
}

fn named_display(named: &NamedType, style: FieldNameStyle, nested: bool) -> String {
    if (style == FieldNameStyle::Legacy && nested) || named.kind != "msg" {
        named.to_string()
    } else {
        format!("{}/{}", named.package, named.name)
    }
}

/// `=literal`, or empty when there is no default
pub fn default_suffix(field: &Field) -> String {
    field
        .default
        .as_ref()
        .map(|value| format!("={value}"))
        .unwrap_or_default()
}

/// Render one field into its table row
pub fn render_field(field: &Field, style: FieldNameStyle) -> RenderedField {
    let (display_type, link) = render_type(&field.ty, style);
    let name = match (&field.ty, style) {
        (FieldType::Named(named), FieldNameStyle::Legacy) => named.name.clone(),
        _ => field.name.clone(),
    };
    RenderedField {
        name,
        display_type,
        link,
        default_suffix: default_suffix(field),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Literal;

    fn boxed(ty: FieldType) -> Box<FieldType> {
        Box::new(ty)
    }

    #[test]
    fn basic_types_never_link() {
        for basic in BasicType::ALL {
            let (display, link) = render_type(&FieldType::Basic(basic), FieldNameStyle::Declared);
            assert_eq!(display, basic_display_name(basic));
            assert!(link.is_empty());
        }
    }

    #[test]
    fn collections_append_size_suffix() {
        let int32 = FieldType::Basic(BasicType::Int32);
        let cases = [
            (
                FieldType::Array {
                    element: boxed(int32.clone()),
                    size: 4,
                },
                "int32[4]",
            ),
            (FieldType::UnboundedSequence(boxed(int32.clone())), "int32[]"),
            (
                FieldType::BoundedSequence {
                    element: boxed(int32),
                    max_size: 10,
                },
                "int32[<=10]",
            ),
            (
                FieldType::UnboundedSequence(boxed(FieldType::GenericString {
                    wide: false,
                    max_size: Some(8),
                })),
                "string[<=8][]",
            ),
        ];
        for (ty, expected) in cases {
            let (display, link) = render_type(&ty, FieldNameStyle::Declared);
            assert_eq!(display, expected);
            assert!(link.is_empty());
        }
    }

    #[test]
    fn named_links_into_msg_tree() {
        let goal = NamedType {
            package: "nav2_msgs".into(),
            kind: "action".into(),
            name: "NavigateToPose_Goal".into(),
        };
        let (display, link) = render_type(&FieldType::Named(goal), FieldNameStyle::Declared);
        assert_eq!(display, "nav2_msgs/action/NavigateToPose_Goal");
        assert_eq!(link, "nav2_msgs/msg/NavigateToPose_Goal.html");
    }

    #[test]
    fn named_field_name_styles() {
        let field = Field::new(
            "pose",
            FieldType::Named(NamedType::message("other_pkg", "Pose")),
        );
        let declared = render_field(&field, FieldNameStyle::Declared);
        assert_eq!(declared.name, "pose");
        assert_eq!(declared.display_type, "other_pkg/Pose");
        assert_eq!(declared.link, "other_pkg/msg/Pose.html");

        let legacy = render_field(&field, FieldNameStyle::Legacy);
        assert_eq!(legacy.name, "Pose");
        assert_eq!(legacy.display_type, "other_pkg/Pose");
    }

    #[test]
    fn nested_named_keeps_declared_name() {
        let field = Field::new(
            "poses",
            FieldType::UnboundedSequence(boxed(FieldType::Named(NamedType::message(
                "geometry_msgs",
                "Pose",
            )))),
        );
        let legacy = render_field(&field, FieldNameStyle::Legacy);
        assert_eq!(legacy.name, "poses");
        assert_eq!(legacy.display_type, "geometry_msgs/msg/Pose[]");
        assert_eq!(legacy.link, "geometry_msgs/msg/Pose.html");

        let declared = render_field(&field, FieldNameStyle::Declared);
        assert_eq!(declared.display_type, "geometry_msgs/Pose[]");
    }

    #[test]
    fn default_suffixes() {
        let plain = Field::new("n", FieldType::Basic(BasicType::Int32));
        assert_eq!(default_suffix(&plain), "");

        let with_list = Field::new(
            "v",
            FieldType::UnboundedSequence(boxed(FieldType::Basic(BasicType::Int32))),
        )
        .with_default(Literal::Array(vec![Literal::Int(1), Literal::Int(2)]));
        assert_eq!(default_suffix(&with_list), "=[1, 2]");
    }
}
