//! Generator configuration (`idldoc.toml`).
//!
//! ```toml
//! output_dir = "api"
//! packages = ["std_msgs", "geometry_msgs"]
//! prefixes = ["/opt/ros/rolling"]
//! source_roots = ["src"]
//! field_names = "declared"   # or "legacy"
//! ```

use std::path::{Path, PathBuf};

use idldoc_core::FieldNameStyle;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The configuration filename.
pub const CONFIG_FILE: &str = "idldoc.toml";

/// Output directory used when none is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "api";

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for a documentation run. Command-line flags override them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory that receives the `html/` tree.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Packages to document; empty means all.
    #[serde(default)]
    pub packages: Vec<String>,

    /// Install prefixes to search; empty means `AMENT_PREFIX_PATH`.
    #[serde(default)]
    pub prefixes: Vec<PathBuf>,

    /// Source trees to scan for packages.
    #[serde(default)]
    pub source_roots: Vec<PathBuf>,

    /// Name column style for message-typed fields.
    #[serde(default)]
    pub field_names: FieldNameStyle,
}

impl Config {
    /// Load configuration from a file, resolving relative paths against the
    /// file's directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        Ok(match path.parent() {
            Some(base) => config.resolve_paths(base),
            None => config,
        })
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid TOML or unknown keys.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load `idldoc.toml` from `dir` if present, defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but is invalid.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = dir.as_ref().join(CONFIG_FILE);
        if path.is_file() {
            Self::from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Make relative paths relative to `base`.
    #[must_use]
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        if let Some(output_dir) = self.output_dir.as_mut() {
            resolve(output_dir);
        }
        self.prefixes.iter_mut().for_each(resolve);
        self.source_roots.iter_mut().for_each(resolve);
        self
    }

    /// The configured output directory or the default.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parse_full_config() {
        let config = Config::parse(
            r#"
output_dir = "docs"
packages = ["std_msgs"]
prefixes = ["/opt/ros/rolling"]
source_roots = ["src"]
field_names = "legacy"
"#,
        )
        .unwrap();
        assert_eq!(config.output_dir(), PathBuf::from("docs"));
        assert_eq!(config.packages, vec!["std_msgs"]);
        assert_eq!(config.field_names, FieldNameStyle::Legacy);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output_dir(), PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(config.field_names, FieldNameStyle::Declared);
    }

    #[test]
    fn unknown_keys_rejected() {
        let err = Config::parse("outputdir = \"x\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_field_style_rejected() {
        assert!(Config::parse("field_names = \"fancy\"").is_err());
    }

    #[test]
    fn relative_paths_follow_the_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "output_dir = \"out\"\nprefixes = [\"/abs\"]\nsource_roots = [\"src\"]\n",
        )
        .unwrap();

        let config = Config::discover(tmp.path()).unwrap();
        assert_eq!(config.output_dir(), tmp.path().join("out"));
        assert_eq!(config.prefixes, vec![PathBuf::from("/abs")]);
        assert_eq!(config.source_roots, vec![tmp.path().join("src")]);
    }

    #[test]
    fn discover_without_file() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(Config::discover(tmp.path()).unwrap(), Config::default());
    }
}
