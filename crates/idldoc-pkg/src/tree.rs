//! Interface discovery in source trees.
//!
//! A source tree is any directory containing packages, each marked by a
//! `package.xml`:
//! ```text
//! src/
//! ├── demo_msgs/
//! │   ├── package.xml
//! │   ├── msg/Point.msg
//! │   ├── srv/Reset.srv
//! │   └── action/Dock.action
//! └── vendor/
//!     └── COLCON_IGNORE     # skipped with everything below it
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use idldoc_core::{DocError, InterfaceCatalog, InterfaceId, InterfaceKind, InterfaceSource};
use tracing::{debug, warn};

use crate::error::DiscoveryError;
use crate::manifest::{PackageManifest, MANIFEST_FILE};

/// Marker file that hides a directory from discovery.
pub const IGNORE_MARKER: &str = "COLCON_IGNORE";

/// A package found in a source tree.
#[derive(Debug, Clone)]
pub struct SourcePackage {
    pub manifest: PackageManifest,
    pub root: PathBuf,
}

/// Packages found under a set of source roots.
#[derive(Debug, Clone, Default)]
pub struct SourceTree {
    packages: BTreeMap<String, SourcePackage>,
}

impl SourceTree {
    /// Scan the given roots for packages.
    ///
    /// When two packages share a name the one found first wins.
    ///
    /// # Errors
    ///
    /// Returns an error if a root does not exist or a manifest is invalid.
    pub fn scan(roots: &[PathBuf]) -> Result<Self, DiscoveryError> {
        let mut packages: BTreeMap<String, SourcePackage> = BTreeMap::new();

        for root in roots {
            if !root.is_dir() {
                return Err(DiscoveryError::RootNotFound(root.clone()));
            }

            let pattern = root.join("**").join(MANIFEST_FILE);
            let mut manifests = Vec::new();
            for entry in glob::glob(&pattern.to_string_lossy())? {
                let path = entry.map_err(|e| {
                    let path = e.path().to_path_buf();
                    DiscoveryError::io(path, e.into_error())
                })?;
                if !is_ignored(&path, root) {
                    manifests.push(path);
                }
            }
            manifests.sort();

            for manifest_path in manifests {
                let manifest = PackageManifest::from_path(&manifest_path).map_err(|source| {
                    DiscoveryError::Manifest {
                        path: manifest_path.clone(),
                        source,
                    }
                })?;
                let package_root = manifest_path
                    .parent()
                    .map_or_else(|| root.clone(), Path::to_path_buf);

                if let Some(existing) = packages.get(&manifest.name) {
                    warn!(
                        package = %manifest.name,
                        kept = %existing.root.display(),
                        ignored = %package_root.display(),
                        "duplicate package"
                    );
                    continue;
                }
                debug!(package = %manifest.name, root = %package_root.display(), "package found");
                packages.insert(
                    manifest.name.clone(),
                    SourcePackage {
                        manifest,
                        root: package_root,
                    },
                );
            }
        }

        Ok(Self { packages })
    }

    #[must_use]
    pub fn package(&self, name: &str) -> Option<&SourcePackage> {
        self.packages.get(name)
    }

    /// Interface names of one kind in a package, sorted.
    fn interface_names(root: &Path, kind: InterfaceKind) -> Result<Vec<String>, DiscoveryError> {
        let pattern = root
            .join(kind.dir_name())
            .join(format!("*.{}", kind.extension()));
        let mut names = Vec::new();
        for entry in glob::glob(&pattern.to_string_lossy())? {
            let path = entry.map_err(|e| {
                let path = e.path().to_path_buf();
                DiscoveryError::io(path, e.into_error())
            })?;
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

impl InterfaceSource for SourceTree {
    fn catalog(&self) -> Result<InterfaceCatalog, DocError> {
        let mut catalog = InterfaceCatalog::new();
        for (name, package) in &self.packages {
            let interfaces = catalog.ensure_package(name.clone());
            interfaces.version.clone_from(&package.manifest.version);
            interfaces.description.clone_from(&package.manifest.description);
            for kind in InterfaceKind::ALL {
                for interface in Self::interface_names(&package.root, kind)? {
                    interfaces.push(kind, interface);
                }
            }
        }
        Ok(catalog)
    }

    fn read_source(&self, id: &InterfaceId) -> Result<String, DocError> {
        let Some(package) = self.package(&id.package) else {
            return Err(DocError::missing_source(id, Vec::new()));
        };
        let path = package
            .root
            .join(id.kind.dir_name())
            .join(format!("{}.{}", id.name, id.kind.extension()));
        if !path.is_file() {
            return Err(DocError::missing_source(id, vec![path]));
        }
        fs::read_to_string(&path).map_err(|e| DocError::io(path, e))
    }
}

/// Whether any directory from `root` down to the manifest's directory holds
/// an ignore marker.
fn is_ignored(manifest: &Path, root: &Path) -> bool {
    manifest
        .ancestors()
        .skip(1)
        .take_while(|dir| dir.starts_with(root))
        .any(|dir| dir.join(IGNORE_MARKER).exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_package(dir: &Path, name: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(
            dir.join(MANIFEST_FILE),
            format!("<package format=\"3\"><name>{name}</name><version>0.1.0</version></package>"),
        )
        .unwrap();
    }

    fn add_interface(dir: &Path, file: &str, content: &str) {
        let path = dir.join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn scan_finds_nested_packages() {
        let tmp = TempDir::new().unwrap();
        let pkg = tmp.path().join("interfaces/demo_msgs");
        create_package(&pkg, "demo_msgs");
        add_interface(&pkg, "msg/Zeta.msg", "int32 z\n");
        add_interface(&pkg, "msg/Alpha.msg", "int32 a\n");
        add_interface(&pkg, "srv/Reset.srv", "---\n");
        add_interface(&pkg, "action/Dock.action", "---\n---\n");
        add_interface(&pkg, "msg/notes.txt", "ignored");

        let tree = SourceTree::scan(&[tmp.path().to_path_buf()]).unwrap();
        let catalog = tree.catalog().unwrap();
        let interfaces = catalog.package("demo_msgs").unwrap();
        assert_eq!(interfaces.messages, vec!["Alpha", "Zeta"]);
        assert_eq!(interfaces.services, vec!["Reset"]);
        assert_eq!(interfaces.actions, vec!["Dock"]);
        assert_eq!(interfaces.version.as_deref(), Some("0.1.0"));
        assert_eq!(interfaces.description, None);

        let id = InterfaceId::parse("demo_msgs/msg/Alpha").unwrap();
        assert_eq!(tree.read_source(&id).unwrap(), "int32 a\n");
    }

    #[test]
    fn colcon_ignore_hides_subtree() {
        let tmp = TempDir::new().unwrap();
        create_package(&tmp.path().join("kept_msgs"), "kept_msgs");
        create_package(&tmp.path().join("vendor/hidden_msgs"), "hidden_msgs");
        fs::write(tmp.path().join("vendor").join(IGNORE_MARKER), "").unwrap();

        let tree = SourceTree::scan(&[tmp.path().to_path_buf()]).unwrap();
        assert!(tree.package("kept_msgs").is_some());
        assert!(tree.package("hidden_msgs").is_none());
    }

    #[test]
    fn duplicate_package_keeps_first_root() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        create_package(&first.path().join("demo_msgs"), "demo_msgs");
        create_package(&second.path().join("demo_msgs"), "demo_msgs");

        let tree =
            SourceTree::scan(&[first.path().to_path_buf(), second.path().to_path_buf()]).unwrap();
        assert_eq!(
            tree.package("demo_msgs").unwrap().root,
            first.path().join("demo_msgs")
        );
    }

    #[test]
    fn missing_root_is_an_error() {
        let err = SourceTree::scan(&[PathBuf::from("/nonexistent/source/root")]).unwrap_err();
        assert!(matches!(err, DiscoveryError::RootNotFound(_)));
    }

    #[test]
    fn invalid_manifest_is_reported() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(MANIFEST_FILE), "<package>").unwrap();
        let err = SourceTree::scan(&[tmp.path().to_path_buf()]).unwrap_err();
        assert!(matches!(err, DiscoveryError::Manifest { .. }));
    }

    #[test]
    fn missing_interface_file() {
        let tmp = TempDir::new().unwrap();
        create_package(&tmp.path().join("demo_msgs"), "demo_msgs");
        let tree = SourceTree::scan(&[tmp.path().to_path_buf()]).unwrap();
        let id = InterfaceId::parse("demo_msgs/msg/Nope").unwrap();
        assert_eq!(tree.read_source(&id).unwrap_err().category(), "missing-source");
    }
}
