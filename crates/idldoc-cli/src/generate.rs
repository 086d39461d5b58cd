//! `idldoc generate`

use anyhow::{Context, Result};
use idldoc_core::{GenerationReport, Generator};
use std::path::Path;
use tracing::info;

use crate::sources::Settings;

/// Subdirectory of the output directory that receives the pages.
pub const HTML_DIR: &str = "html";

/// Generate the documentation tree under `<output_dir>/html`.
pub fn run(settings: &Settings) -> Result<()> {
    let html_dir = settings.output_dir.join(HTML_DIR);
    let options = settings.generator_options(html_dir.clone());
    let report = Generator::new(&settings.source, options)
        .run()
        .with_context(|| format!("Failed to generate documentation in '{}'", html_dir.display()))?;

    for skipped in &report.skipped {
        eprintln!("skipped {}: {}", skipped.id, skipped.error);
    }
    info!(output = %html_dir.display(), "done");
    println!("{}", summary(&report, &html_dir));
    Ok(())
}

fn summary(report: &GenerationReport, html_dir: &Path) -> String {
    let mut line = format!(
        "Documented {} from {} in {}",
        count(report.pages.len(), "interface"),
        count(report.packages, "package"),
        html_dir.display()
    );
    if !report.skipped.is_empty() {
        line.push_str(&format!(" ({} skipped)", report.skipped.len()));
    }
    line
}

fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}
