//! Constant extraction

use crate::ast::Message;

use super::render::{render_type, FieldNameStyle};

/// Name and type columns for every constant of `message`, in declaration
/// order. Names carry their value as `NAME=value`.
pub fn extract(message: &Message) -> (Vec<String>, Vec<String>) {
    message
        .constants
        .iter()
        .map(|constant| {
            let (display_type, _) = render_type(&constant.ty, FieldNameStyle::Declared);
            (format!("{}={}", constant.name, constant.value), display_type)
        })
        .unzip()
}
