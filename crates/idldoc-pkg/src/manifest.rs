//! Package manifest (`package.xml`) reading.

use std::path::Path;

use idldoc_core::types::is_package_name;
use sxd_document::dom::Document;
use thiserror::Error;

/// The manifest filename.
pub const MANIFEST_FILE: &str = "package.xml";

/// Errors that can occur when reading a manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("failed to read manifest file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed manifest XML: {0}")]
    Xml(String),

    #[error("failed to query manifest: {0}")]
    Query(String),

    #[error("missing required element: {0}")]
    MissingField(&'static str),

    #[error("invalid package name '{0}'")]
    InvalidName(String),
}

/// The parts of a `package.xml` the documentation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManifest {
    /// Package name (required).
    pub name: String,

    /// Package version.
    pub version: Option<String>,

    /// Short description.
    pub description: Option<String>,
}

impl PackageManifest {
    /// Load a manifest from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid manifest.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a manifest from XML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the XML is malformed, the name is missing or the
    /// name is not a valid package name.
    pub fn parse(content: &str) -> Result<Self, ManifestError> {
        let package =
            sxd_document::parser::parse(content).map_err(|e| ManifestError::Xml(format!("{e:?}")))?;
        let document = package.as_document();

        let name = query(&document, "/package/name")?.ok_or(ManifestError::MissingField("name"))?;
        if !is_package_name(&name) {
            return Err(ManifestError::InvalidName(name));
        }

        Ok(Self {
            name,
            version: query(&document, "/package/version")?,
            description: query(&document, "/package/description")?,
        })
    }
}

/// Trimmed text of the first node matching `path`, `None` if absent or empty.
fn query(document: &Document<'_>, path: &str) -> Result<Option<String>, ManifestError> {
    let value = sxd_xpath::evaluate_xpath(document, &format!("string({path})"))
        .map_err(|e| ManifestError::Query(format!("{e:?}")))?;
    let text = value.string();
    let text = text.trim();
    Ok((!text.is_empty()).then(|| text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"<?xml version="1.0"?>
<package format="3">
  <name>demo_msgs</name>
  <version>1.2.0</version>
  <description>
    Demo interfaces
  </description>
  <maintainer email="dev@example.com">Dev</maintainer>
  <export>
    <build_type>ament_cmake</build_type>
  </export>
</package>
"#;

    #[test]
    fn parse_full_manifest() {
        let manifest = PackageManifest::parse(MANIFEST).unwrap();
        assert_eq!(manifest.name, "demo_msgs");
        assert_eq!(manifest.version.as_deref(), Some("1.2.0"));
        assert_eq!(manifest.description.as_deref(), Some("Demo interfaces"));
    }

    #[test]
    fn missing_name() {
        let err = PackageManifest::parse("<package><version>1</version></package>").unwrap_err();
        assert!(matches!(err, ManifestError::MissingField("name")));
    }

    #[test]
    fn invalid_name() {
        let err = PackageManifest::parse("<package><name>Bad-Name</name></package>").unwrap_err();
        assert!(matches!(err, ManifestError::InvalidName(ref n) if n == "Bad-Name"));
    }

    #[test]
    fn malformed_xml() {
        let err = PackageManifest::parse("<package><name>x</package>").unwrap_err();
        assert!(matches!(err, ManifestError::Xml(_)));
    }
}
