//! Interface package discovery for idldoc.
//!
//! This crate provides:
//! - Installed interfaces through the ament resource index (`AMENT_PREFIX_PATH`)
//! - Interfaces in source trees marked by `package.xml`
//! - Reading of `package.xml` manifests
//! - `idldoc.toml` configuration

mod ament;
mod combined;
mod config;
mod error;
mod manifest;
mod tree;

pub use ament::{interface_path, AmentIndex, AMENT_PREFIX_PATH, RESOURCE_INDEX_DIR, RESOURCE_TYPE};
pub use combined::CombinedSource;
pub use config::{Config, ConfigError, CONFIG_FILE, DEFAULT_OUTPUT_DIR};
pub use error::DiscoveryError;
pub use manifest::{ManifestError, PackageManifest, MANIFEST_FILE};
pub use tree::{SourcePackage, SourceTree, IGNORE_MARKER};
