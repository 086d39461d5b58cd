//! Interface discovery through the ament resource index of install prefixes.
//!
//! Each prefix may register packages under
//! ```text
//! <prefix>/share/ament_index/resource_index/rosidl_interfaces/<package>
//! ```
//! whose content lists the package's interface files, one per line
//! (`msg/Bool.idl`, `msg/Bool.msg`, `srv/Trigger.srv`, ...). Sources are read
//! from `<prefix>/share/<package>/<kind>/<Name>.<ext>`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use idldoc_core::{DocError, InterfaceCatalog, InterfaceId, InterfaceKind, InterfaceSource};
use tracing::{debug, trace};

use crate::error::DiscoveryError;
use crate::manifest::{PackageManifest, MANIFEST_FILE};

/// Environment variable listing install prefixes.
pub const AMENT_PREFIX_PATH: &str = "AMENT_PREFIX_PATH";

/// Resource type under which interface packages are registered.
pub const RESOURCE_TYPE: &str = "rosidl_interfaces";

/// Resource index directory relative to a prefix.
pub const RESOURCE_INDEX_DIR: &str = "share/ament_index/resource_index";

/// Interfaces installed in a set of ament prefixes.
#[derive(Debug, Clone, Default)]
pub struct AmentIndex {
    prefixes: Vec<PathBuf>,
}

impl AmentIndex {
    /// Search the given prefixes, earlier prefixes taking precedence.
    pub fn new(prefixes: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Read prefixes from `AMENT_PREFIX_PATH`.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is unset.
    pub fn from_env() -> Result<Self, DiscoveryError> {
        let value =
            std::env::var_os(AMENT_PREFIX_PATH).ok_or(DiscoveryError::NoPrefixPath(AMENT_PREFIX_PATH))?;
        Ok(Self::new(
            std::env::split_paths(&value).filter(|p| !p.as_os_str().is_empty()),
        ))
    }

    /// Registered packages mapped to the prefix that provides them.
    ///
    /// # Errors
    ///
    /// Returns an error if a resource directory exists but cannot be read.
    pub fn packages(&self) -> Result<BTreeMap<String, PathBuf>, DiscoveryError> {
        let mut packages = BTreeMap::new();
        for prefix in &self.prefixes {
            let dir = resource_dir(prefix);
            if !dir.is_dir() {
                trace!(prefix = %prefix.display(), "no interface resources");
                continue;
            }
            let entries = fs::read_dir(&dir).map_err(|e| DiscoveryError::io(&dir, e))?;
            for entry in entries {
                let entry = entry.map_err(|e| DiscoveryError::io(&dir, e))?;
                let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                    continue;
                };
                if name.starts_with('.') {
                    continue;
                }
                packages.entry(name).or_insert_with(|| prefix.clone());
            }
        }
        Ok(packages)
    }

    /// Interface entries registered by `package` in `prefix`, in file order.
    fn resources(prefix: &Path, package: &str) -> Result<Vec<(InterfaceKind, String)>, DiscoveryError> {
        let path = resource_dir(prefix).join(package);
        let content = fs::read_to_string(&path).map_err(|e| DiscoveryError::io(&path, e))?;
        Ok(parse_resource(&content))
    }

    fn prefix_of(&self, package: &str) -> Option<&Path> {
        self.prefixes
            .iter()
            .find(|prefix| resource_dir(prefix).join(package).is_file())
            .map(PathBuf::as_path)
    }
}

impl InterfaceSource for AmentIndex {
    fn catalog(&self) -> Result<InterfaceCatalog, DocError> {
        let mut catalog = InterfaceCatalog::new();
        for (package, prefix) in self.packages()? {
            let interfaces = catalog.ensure_package(package.clone());
            let manifest_path = prefix.join("share").join(&package).join(MANIFEST_FILE);
            if manifest_path.is_file() {
                match PackageManifest::from_path(&manifest_path) {
                    Ok(manifest) => {
                        interfaces.version = manifest.version;
                        interfaces.description = manifest.description;
                    }
                    Err(error) => {
                        debug!(path = %manifest_path.display(), %error, "ignoring unreadable manifest");
                    }
                }
            }
            for (kind, name) in Self::resources(&prefix, &package)? {
                interfaces.push(kind, name);
            }
            debug!(package = %package, count = interfaces.len(), "package indexed");
        }
        Ok(catalog)
    }

    fn read_source(&self, id: &InterfaceId) -> Result<String, DocError> {
        let Some(prefix) = self.prefix_of(&id.package) else {
            return Err(DocError::missing_source(id, Vec::new()));
        };
        let path = interface_path(prefix, id);
        if !path.is_file() {
            return Err(DocError::missing_source(id, vec![path]));
        }
        fs::read_to_string(&path).map_err(|e| DocError::io(path, e))
    }
}

fn resource_dir(prefix: &Path) -> PathBuf {
    prefix.join(RESOURCE_INDEX_DIR).join(RESOURCE_TYPE)
}

/// Installed source file of an interface.
#[must_use]
pub fn interface_path(prefix: &Path, id: &InterfaceId) -> PathBuf {
    prefix
        .join("share")
        .join(&id.package)
        .join(id.kind.dir_name())
        .join(format!("{}.{}", id.name, id.kind.extension()))
}

/// Parse resource lines into `(kind, name)` pairs.
///
/// Lines look like `msg/Bool.idl`; the extension is dropped and names are
/// deduplicated in first-seen order. Unknown kinds are ignored.
fn parse_resource(content: &str) -> Vec<(InterfaceKind, String)> {
    let mut entries: Vec<(InterfaceKind, String)> = Vec::new();
    for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let Some((dir, file)) = line.split_once('/') else {
            continue;
        };
        let Some(kind) = InterfaceKind::from_dir_name(dir) else {
            continue;
        };
        let name = file.rsplit_once('.').map_or(file, |(stem, _)| stem);
        if name.is_empty() || name.contains('/') {
            continue;
        }
        if !entries.iter().any(|(k, n)| *k == kind && n == name) {
            entries.push((kind, name.to_string()));
        }
    }
    entries
}
