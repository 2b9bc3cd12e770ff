use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{MibError, Result};

/// Where and how to look for module files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Directory holding the module files.
    pub path: PathBuf,
    /// Accepted extensions without the dot, compared case-insensitively.
    /// `None` accepts every regular file.
    pub extensions: Option<Vec<String>>,
    /// Descend into subdirectories.
    pub recursive: bool,
}

impl LoaderConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            extensions: None,
            recursive: false,
        }
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Whether `path` passes the extension filter.
    pub fn accepts(&self, path: &Path) -> bool {
        let Some(allowed) = &self.extensions else {
            return true;
        };
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| allowed.iter().any(|a| a.eq_ignore_ascii_case(ext)))
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

/// Collect module file paths under `config.path`, sorted for a stable corpus order.
pub fn collect_file_paths(config: &LoaderConfig) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    collect_recursive(&config.path, config, &mut paths)?;
    paths.sort();
    debug!(dir = %config.path.display(), count = paths.len(), "collected module files");
    Ok(paths)
}

fn collect_recursive(dir: &Path, config: &LoaderConfig, paths: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| MibError::io(dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| MibError::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| MibError::io(&path, e))?;

        // Symlinked directories are not followed; a link back up the tree would never end.
        if file_type.is_dir() {
            if config.recursive {
                collect_recursive(&path, config, paths)?;
            }
        } else if (file_type.is_file() || (file_type.is_symlink() && path.is_file()))
            && config.accepts(&path)
        {
            paths.push(path);
        }
    }
    Ok(())
}
