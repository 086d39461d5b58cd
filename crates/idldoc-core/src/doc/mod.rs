//! Documentation rendering for interface definitions
//!
//! [`assemble`] reduces a parsed interface to a [`CompactDefinition`]; the
//! [`PageGenerator`] serializes compact definitions and catalogs to HTML.

mod compact;
pub mod constants;
mod html;
mod raw;
pub mod render;
pub mod style;

pub use compact::{assemble, CompactDefinition, MessageTable, Section};
pub use html::{escape_html, InterfacePage, PageGenerator};
pub use raw::render_raw_text;
pub use render::{render_field, render_type, FieldNameStyle, RenderedField};
