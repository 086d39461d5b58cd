//! Resolving configuration file and flags into a run configuration.

use anyhow::{bail, Context, Result};
use idldoc_core::{FieldNameStyle, GeneratorOptions};
use idldoc_pkg::{AmentIndex, CombinedSource, Config, SourceTree, AMENT_PREFIX_PATH};
use std::env;
use std::path::PathBuf;
use tracing::debug;

use crate::SourceArgs;

/// Effective settings after merging `idldoc.toml` with command-line flags.
pub struct Settings {
    pub output_dir: PathBuf,
    pub packages: Vec<String>,
    pub field_names: FieldNameStyle,
    pub source: CombinedSource,
}

impl Settings {
    /// Flags override the configuration file; list flags replace rather
    /// than extend the configured lists.
    pub fn resolve(args: &SourceArgs, output_dir: Option<PathBuf>) -> Result<Self> {
        let config = match &args.config {
            Some(path) => Config::from_path(path)
                .with_context(|| format!("Failed to load config '{}'", path.display()))?,
            None => {
                let cwd = env::current_dir().context("Failed to get current directory")?;
                Config::discover(cwd).context("Failed to load idldoc.toml")?
            }
        };

        let prefixes = pick(&args.prefixes, config.prefixes.clone());
        let source_roots = pick(&args.source_roots, config.source_roots.clone());
        let packages = pick(&args.packages, config.packages.clone());
        let field_names = if args.legacy_field_names {
            FieldNameStyle::Legacy
        } else {
            config.field_names
        };
        let output_dir = output_dir.unwrap_or_else(|| config.output_dir());

        let mut source = CombinedSource::new();
        if !source_roots.is_empty() {
            let tree = SourceTree::scan(&source_roots).context("Failed to scan source roots")?;
            source.push(tree);
        }
        if !prefixes.is_empty() {
            source.push(AmentIndex::new(prefixes));
        } else if env::var_os(AMENT_PREFIX_PATH).is_some() {
            source.push(AmentIndex::from_env()?);
        } else if source.is_empty() {
            bail!(
                "No interface sources: set {AMENT_PREFIX_PATH} or pass --prefix / --source-root"
            );
        }
        debug!(sources = source.len(), "interface sources ready");

        Ok(Self {
            output_dir,
            packages,
            field_names,
            source,
        })
    }

    /// Generator options writing into `dir`.
    pub fn generator_options(&self, dir: PathBuf) -> GeneratorOptions {
        GeneratorOptions {
            packages: self.packages.clone(),
            field_names: self.field_names,
            ..GeneratorOptions::new(dir)
        }
    }
}

fn pick<T: Clone>(flags: &[T], configured: Vec<T>) -> Vec<T> {
    if flags.is_empty() {
        configured
    } else {
        flags.to_vec()
    }
}
