//! `idldoc show`

use anyhow::{Context, Result};
use idldoc_core::doc::MessageTable;
use idldoc_core::{CompactDefinition, Generator, InterfaceId};
use std::fmt::Write;

use crate::sources::Settings;

/// Output format of `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
    Flat,
}

/// Print the compact definition of one interface.
pub fn run(settings: &Settings, interface: &str, format: Format) -> Result<()> {
    let id = InterfaceId::parse(interface)?;
    let generator = Generator::new(&settings.source, settings.generator_options(Default::default()));
    let compact = generator
        .compact_definition(&id)
        .with_context(|| format!("Failed to load '{id}'"))?;

    let output = match format {
        Format::Json => serde_json::to_string_pretty(&compact)?,
        Format::Flat => serde_json::to_string_pretty(&compact.to_flat_map())?,
        Format::Text => render_text(&compact),
    };
    println!("{output}");
    Ok(())
}

/// Aligned plain-text rendering, one member per line.
pub fn render_text(compact: &CompactDefinition) -> String {
    let mut output = String::new();
    for section in &compact.sections {
        if let Some(name) = section.name {
            let _ = writeln!(output, "[{name}]");
        }
        write_table(&mut output, &section.table);
        if section.separator {
            let _ = writeln!(output, "---");
        }
    }
    output.trim_end().to_string()
}

fn write_table(output: &mut String, table: &MessageTable) {
    let width = table
        .constant_types
        .iter()
        .chain(&table.field_types)
        .map(String::len)
        .max()
        .unwrap_or(0);

    for (ty, name) in table.constant_rows() {
        let _ = writeln!(output, "{ty:<width$}  {name}");
    }
    for (ty, name, default, link) in table.field_rows() {
        let line = format!("{ty:<width$}  {name}{default}");
        if link.is_empty() {
            let _ = writeln!(output, "{line}");
        } else {
            let _ = writeln!(output, "{line}  -> {link}");
        }
    }
}
