//! Errors raised while discovering interface packages.

use std::path::PathBuf;

use idldoc_core::DocError;
use thiserror::Error;

use crate::manifest::ManifestError;

/// Errors that can occur while locating packages on disk.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("environment variable {0} is not set")]
    NoPrefixPath(&'static str),

    #[error("source root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("invalid manifest {}: {source}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: ManifestError,
    },

    #[error("glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),

    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DiscoveryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<DiscoveryError> for DocError {
    fn from(error: DiscoveryError) -> Self {
        DocError::Source(Box::new(error))
    }
}
