//! Error types for corpus loading, parsing and serialization.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning MIB text into an OID tree.
#[derive(Debug, Error)]
pub enum MibError {
    /// The corpus imports modules that it never defines.
    ///
    /// Module names are rendered as `<name>.mib`, deduplicated, in the order
    /// the imports were first seen.
    #[error("missing dependencies, required files: {}", .modules.join(", "))]
    MissingDependency { modules: Vec<String> },

    /// A parent-reference chain revisited a name while resolving OIDs.
    #[error("cycle detected in parent chain at '{name}'")]
    CycleDetected { name: String },

    /// Reading a file or directory failed.
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output encoding could not represent the nodes.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl MibError {
    /// Create a missing dependency error.
    pub fn missing_dependency(modules: Vec<String>) -> Self {
        Self::MissingDependency { modules }
    }

    /// Create a cycle error naming the revisited node.
    pub fn cycle(name: impl Into<String>) -> Self {
        Self::CycleDetected { name: name.into() }
    }

    /// Create an IO error for a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Module names carried by a [`MibError::MissingDependency`].
    pub fn missing_modules(&self) -> Option<&[String]> {
        match self {
            Self::MissingDependency { modules } => Some(modules),
            _ => None,
        }
    }
}

#[cfg(feature = "interchange")]
impl From<serde_json::Error> for MibError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MibError>;
