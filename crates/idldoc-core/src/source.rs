//! Where interfaces come from
//!
//! An [`InterfaceSource`] enumerates the available interfaces as an
//! [`InterfaceCatalog`] and hands out their raw text. Filesystem-backed
//! sources live in `idldoc-pkg`; [`MemorySource`] serves fixtures and
//! embedded definitions.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::ast::{Interface, InterfaceId, InterfaceKind};
use crate::error::DocError;
use crate::parser::Parser;

/// Interface names of one package, grouped by kind, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackageInterfaces {
    /// Version from the package manifest, when one was read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub messages: Vec<String>,
    pub services: Vec<String>,
    pub actions: Vec<String>,
}

impl PackageInterfaces {
    pub fn names(&self, kind: InterfaceKind) -> &[String] {
        match kind {
            InterfaceKind::Message => &self.messages,
            InterfaceKind::Service => &self.services,
            InterfaceKind::Action => &self.actions,
        }
    }

    fn names_mut(&mut self, kind: InterfaceKind) -> &mut Vec<String> {
        match kind {
            InterfaceKind::Message => &mut self.messages,
            InterfaceKind::Service => &mut self.services,
            InterfaceKind::Action => &mut self.actions,
        }
    }

    /// Add a name, ignoring duplicates. Returns whether it was new.
    pub fn push(&mut self, kind: InterfaceKind, name: impl Into<String>) -> bool {
        let name = name.into();
        let names = self.names_mut(kind);
        if names.contains(&name) {
            return false;
        }
        names.push(name);
        true
    }

    pub fn len(&self) -> usize {
        self.messages.len() + self.services.len() + self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// All known interfaces, keyed by package name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InterfaceCatalog {
    packages: BTreeMap<String, PackageInterfaces>,
}

impl InterfaceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an interface. Returns `false` if it was already known.
    pub fn insert(&mut self, id: &InterfaceId) -> bool {
        self.packages
            .entry(id.package.clone())
            .or_default()
            .push(id.kind, id.name.clone())
    }

    /// Register a package even if it declares no interfaces
    pub fn ensure_package(&mut self, package: impl Into<String>) -> &mut PackageInterfaces {
        self.packages.entry(package.into()).or_default()
    }

    pub fn package(&self, name: &str) -> Option<&PackageInterfaces> {
        self.packages.get(name)
    }

    pub fn contains_package(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    /// Packages in name order
    pub fn packages(&self) -> impl Iterator<Item = (&str, &PackageInterfaces)> {
        self.packages.iter().map(|(name, interfaces)| (name.as_str(), interfaces))
    }

    /// Keep only the named packages; an empty selection keeps everything
    pub fn select<S: AsRef<str>>(mut self, selection: &[S]) -> Self {
        if !selection.is_empty() {
            self.packages
                .retain(|name, _| selection.iter().any(|wanted| wanted.as_ref() == name));
        }
        self
    }

    /// Every interface: packages in name order, then messages, services
    /// and actions in discovery order
    pub fn interface_ids(&self) -> Vec<InterfaceId> {
        let mut ids = Vec::with_capacity(self.interface_count());
        for (package, interfaces) in &self.packages {
            for kind in InterfaceKind::ALL {
                for name in interfaces.names(kind) {
                    ids.push(InterfaceId::new(package.clone(), kind, name.clone()));
                }
            }
        }
        ids
    }

    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    pub fn interface_count(&self) -> usize {
        self.packages.values().map(PackageInterfaces::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl<'a> FromIterator<&'a InterfaceId> for InterfaceCatalog {
    fn from_iter<I: IntoIterator<Item = &'a InterfaceId>>(iter: I) -> Self {
        let mut catalog = InterfaceCatalog::new();
        for id in iter {
            catalog.insert(id);
        }
        catalog
    }
}

/// A provider of interface definitions
pub trait InterfaceSource: Send + Sync {
    /// Enumerate every available interface
    fn catalog(&self) -> Result<InterfaceCatalog, DocError>;

    /// Raw text of an interface file
    fn read_source(&self, id: &InterfaceId) -> Result<String, DocError>;

    /// Parsed definition of an interface
    fn definition(&self, id: &InterfaceId) -> Result<Interface, DocError> {
        let source = self.read_source(id)?;
        Parser::parse_interface(id, &source).map_err(|error| DocError::from_parse(id, error))
    }
}

/// Interfaces held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: BTreeMap<InterfaceId, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an interface from its `pkg/kind/Name` resource name
    pub fn with(mut self, resource: &str, text: impl Into<String>) -> Result<Self, DocError> {
        let id = InterfaceId::parse(resource)?;
        self.insert(id, text);
        Ok(self)
    }

    pub fn insert(&mut self, id: InterfaceId, text: impl Into<String>) {
        self.files.insert(id, text.into());
    }
}

impl InterfaceSource for MemorySource {
    fn catalog(&self) -> Result<InterfaceCatalog, DocError> {
        Ok(self.files.keys().collect())
    }

    fn read_source(&self, id: &InterfaceId) -> Result<String, DocError> {
        self.files
            .get(id)
            .cloned()
            .ok_or_else(|| DocError::missing_source(id, Vec::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Definition;

    fn source() -> MemorySource {
        MemorySource::new()
            .with("std_msgs/msg/Bool", "bool data\n")
            .unwrap()
            .with("std_srvs/srv/Trigger", "---\nbool success\nstring message\n")
            .unwrap()
            .with("std_msgs/msg/Empty", "")
            .unwrap()
    }

    #[test]
    fn catalog_groups_by_package() {
        let catalog = source().catalog().unwrap();
        let names: Vec<_> = catalog.packages().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["std_msgs", "std_srvs"]);
        assert_eq!(
            catalog.package("std_msgs").unwrap().messages,
            vec!["Bool", "Empty"]
        );
        assert_eq!(catalog.interface_count(), 3);
    }

    #[test]
    fn selection_filters_packages() {
        let catalog = source().catalog().unwrap();
        let selected = catalog.clone().select(&["std_srvs"]);
        assert_eq!(selected.package_count(), 1);
        assert!(selected.contains_package("std_srvs"));

        let everything = catalog.clone().select::<&str>(&[]);
        assert_eq!(everything, catalog);
    }

    #[test]
    fn duplicate_names_are_ignored() {
        let mut interfaces = PackageInterfaces::default();
        assert!(interfaces.push(InterfaceKind::Message, "Bool"));
        assert!(!interfaces.push(InterfaceKind::Message, "Bool"));
        assert_eq!(interfaces.len(), 1);
    }

    #[test]
    fn interface_ids_order() {
        let ids: Vec<_> = source()
            .catalog()
            .unwrap()
            .interface_ids()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            ids,
            vec!["std_msgs/msg/Bool", "std_msgs/msg/Empty", "std_srvs/srv/Trigger"]
        );
    }

    #[test]
    fn definition_parses_source() {
        let id = InterfaceId::parse("std_srvs/srv/Trigger").unwrap();
        let iface = source().definition(&id).unwrap();
        assert!(matches!(iface.definition, Definition::Service { .. }));
    }

    #[test]
    fn unknown_interface_is_missing_source() {
        let id = InterfaceId::parse("std_msgs/msg/Nope").unwrap();
        let err = source().read_source(&id).unwrap_err();
        assert_eq!(err.category(), "missing-source");
    }
}
