//! Batch documentation generation
//!
//! The generator walks a catalog, renders one page per interface in
//! parallel and writes package indexes, the root index and the shared
//! stylesheets. A failing interface is skipped and reported; only I/O on
//! the output tree ends the run.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::ast::{InterfaceId, InterfaceKind};
use crate::doc::{assemble, style, CompactDefinition, FieldNameStyle, InterfacePage, PageGenerator};
use crate::error::DocError;
use crate::parser::Parser;
use crate::source::{InterfaceCatalog, InterfaceSource};

/// `strftime` pattern of the page footer timestamp
pub const TIMESTAMP_FORMAT: &str = "%a, %d %b %Y %H:%M:%S";

/// Settings for one generation run
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    /// Documentation root; pages go directly below it
    pub output_dir: PathBuf,
    /// Packages to document; empty means all
    pub packages: Vec<String>,
    pub field_names: FieldNameStyle,
    /// Fixed generation time, `None` for the current time
    pub timestamp: Option<DateTime<Utc>>,
}

impl GeneratorOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }
}

/// An interface that produced no page
#[derive(Debug)]
pub struct SkippedInterface {
    pub id: InterfaceId,
    pub error: DocError,
}

/// Outcome of a generation run
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    pub timestamp: String,
    pub packages: usize,
    /// Written interface pages, in catalog order
    pub pages: Vec<PathBuf>,
    pub skipped: Vec<SkippedInterface>,
}

impl GenerationReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

enum PageOutcome {
    Written(InterfaceId, PathBuf),
    Skipped(SkippedInterface),
}

/// Renders a documentation tree from an [`InterfaceSource`]
pub struct Generator<'a> {
    source: &'a dyn InterfaceSource,
    options: GeneratorOptions,
}

impl<'a> Generator<'a> {
    pub fn new(source: &'a dyn InterfaceSource, options: GeneratorOptions) -> Self {
        Self { source, options }
    }

    /// The catalog after package selection
    pub fn catalog(&self) -> Result<InterfaceCatalog, DocError> {
        Ok(self.source.catalog()?.select(&self.options.packages))
    }

    /// Compact definition of a single interface
    pub fn compact_definition(&self, id: &InterfaceId) -> Result<CompactDefinition, DocError> {
        let interface = self.source.definition(id)?;
        Ok(assemble(&interface, self.options.field_names))
    }

    /// Generate the whole documentation tree
    pub fn run(&self) -> Result<GenerationReport, DocError> {
        let catalog = self.catalog()?;
        let root = &self.options.output_dir;
        let timestamp = self
            .options
            .timestamp
            .unwrap_or_else(Utc::now)
            .format(TIMESTAMP_FORMAT)
            .to_string();

        info!(
            packages = catalog.package_count(),
            interfaces = catalog.interface_count(),
            output = %root.display(),
            "generating interface documentation"
        );

        create_dir(root)?;
        for (package, interfaces) in catalog.packages() {
            create_dir(&root.join(package))?;
            for kind in InterfaceKind::ALL {
                if !interfaces.names(kind).is_empty() {
                    create_dir(&root.join(package).join(kind.dir_name()))?;
                }
            }
        }

        // One task per interface; each owns exactly one output path
        let outcomes = catalog
            .interface_ids()
            .into_par_iter()
            .map(|id| self.document(id, &timestamp))
            .collect::<Result<Vec<_>, DocError>>()?;

        let mut report = GenerationReport {
            output_dir: root.clone(),
            timestamp,
            ..GenerationReport::default()
        };
        let mut documented = InterfaceCatalog::new();
        for (package, interfaces) in catalog.packages() {
            let entry = documented.ensure_package(package);
            entry.version.clone_from(&interfaces.version);
            entry.description.clone_from(&interfaces.description);
        }
        for outcome in outcomes {
            match outcome {
                PageOutcome::Written(id, path) => {
                    documented.insert(&id);
                    report.pages.push(path);
                }
                PageOutcome::Skipped(skipped) => report.skipped.push(skipped),
            }
        }

        for (package, interfaces) in documented.packages() {
            let html = PageGenerator::package_index(package, interfaces, &report.timestamp);
            write_file(&root.join(PageGenerator::package_index_path(package)), &html)?;
        }
        let index = PageGenerator::root_index(documented.packages(), &report.timestamp);
        write_file(&root.join("index.html"), &index)?;
        for (name, contents) in style::stylesheets() {
            write_file(&root.join(name), contents)?;
        }

        report.packages = documented.package_count();
        info!(
            pages = report.pages.len(),
            skipped = report.skipped.len(),
            "documentation written"
        );
        Ok(report)
    }

    /// Render and write one interface page. Interface-local failures become
    /// a skip; write failures end the run.
    fn document(&self, id: InterfaceId, timestamp: &str) -> Result<PageOutcome, DocError> {
        let rendered = self.source.read_source(&id).and_then(|raw| {
            let interface =
                Parser::parse_interface(&id, &raw).map_err(|e| DocError::from_parse(&id, e))?;
            let compact = assemble(&interface, self.options.field_names);
            Ok(PageGenerator::interface_page(&InterfacePage {
                id: &id,
                compact: &compact,
                raw_source: raw.trim_end(),
                timestamp,
            }))
        });

        match rendered {
            Ok(html) => {
                let path = self.options.output_dir.join(PageGenerator::interface_path(&id));
                write_file(&path, &html)?;
                debug!(interface = %id, "page written");
                Ok(PageOutcome::Written(id, path))
            }
            Err(error) => {
                warn!(interface = %id, category = error.category(), "skipping interface: {error}");
                Ok(PageOutcome::Skipped(SkippedInterface { id, error }))
            }
        }
    }
}

fn create_dir(path: &Path) -> Result<(), DocError> {
    fs::create_dir_all(path).map_err(|e| DocError::io(path, e))
}

fn write_file(path: &Path, contents: &str) -> Result<(), DocError> {
    fs::write(path, contents).map_err(|e| DocError::io(path, e))
}
