use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, warn};

use super::collection::{LoaderConfig, collect_file_paths};
use crate::base::Corpus;
use crate::error::{MibError, Result};

/// A file that could not be read; its lines are absent from the corpus.
#[derive(Debug)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub error: MibError,
}

/// The concatenated corpus plus every per-file failure.
#[derive(Debug, Default)]
pub struct LoadedCorpus {
    pub corpus: Corpus,
    pub failures: Vec<LoadFailure>,
}

/// Read one file into its ordered lines.
pub fn load_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| MibError::io(path, e))?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Read every collected file and concatenate them in sorted path order.
///
/// Files are read in parallel; the corpus order depends only on the sorted
/// path list. An unreadable file is logged and skipped. Failing to list the
/// directory itself is an error.
pub fn load_corpus(config: &LoaderConfig) -> Result<LoadedCorpus> {
    let paths = collect_file_paths(config)?;

    let results: Vec<(PathBuf, Result<Vec<String>>)> = paths
        .into_par_iter()
        .map(|path| {
            let lines = load_file(&path);
            (path, lines)
        })
        .collect();

    let mut loaded = LoadedCorpus::default();
    for (path, result) in results {
        match result {
            Ok(lines) => loaded.corpus.push_file(path, lines),
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping unreadable module file");
                loaded.failures.push(LoadFailure { path, error });
            }
        }
    }

    debug!(
        files = loaded.corpus.files().len(),
        lines = loaded.corpus.len(),
        failures = loaded.failures.len(),
        "loaded corpus"
    );
    Ok(loaded)
}
