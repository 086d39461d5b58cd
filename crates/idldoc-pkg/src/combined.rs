//! Several interface sources searched in order.

use std::path::PathBuf;

use idldoc_core::{DocError, InterfaceCatalog, InterfaceId, InterfaceSource};

/// Sources consulted in order; a package belongs to the first source that
/// lists it.
#[derive(Default)]
pub struct CombinedSource {
    sources: Vec<Box<dyn InterfaceSource>>,
}

impl CombinedSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source with lower precedence than those already added.
    pub fn push(&mut self, source: impl InterfaceSource + 'static) {
        self.sources.push(Box::new(source));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl InterfaceSource for CombinedSource {
    fn catalog(&self) -> Result<InterfaceCatalog, DocError> {
        let mut merged = InterfaceCatalog::new();
        for source in &self.sources {
            let catalog = source.catalog()?;
            for (package, interfaces) in catalog.packages() {
                if merged.contains_package(package) {
                    continue;
                }
                *merged.ensure_package(package) = interfaces.clone();
            }
        }
        Ok(merged)
    }

    fn read_source(&self, id: &InterfaceId) -> Result<String, DocError> {
        let mut searched: Vec<PathBuf> = Vec::new();
        for source in &self.sources {
            match source.read_source(id) {
                Err(DocError::MissingSource { searched: paths, .. }) => searched.extend(paths),
                result => return result,
            }
        }
        Err(DocError::missing_source(id, searched))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idldoc_core::MemorySource;

    #[test]
    fn earlier_sources_win() {
        let mut combined = CombinedSource::new();
        combined.push(
            MemorySource::new()
                .with("demo_msgs/msg/New", "int32 a\n")
                .unwrap(),
        );
        combined.push(
            MemorySource::new()
                .with("demo_msgs/msg/Old", "int32 b\n")
                .unwrap()
                .with("base_msgs/msg/Base", "int32 c\n")
                .unwrap(),
        );

        let catalog = combined.catalog().unwrap();
        assert_eq!(catalog.package("demo_msgs").unwrap().messages, vec!["New"]);
        assert_eq!(catalog.package("base_msgs").unwrap().messages, vec!["Base"]);

        let id = InterfaceId::parse("base_msgs/msg/Base").unwrap();
        assert_eq!(combined.read_source(&id).unwrap(), "int32 c\n");
    }

    #[test]
    fn missing_everywhere() {
        let mut combined = CombinedSource::new();
        combined.push(MemorySource::new());
        let id = InterfaceId::parse("demo_msgs/msg/Gone").unwrap();
        assert_eq!(combined.read_source(&id).unwrap_err().category(), "missing-source");
    }
}
