use std::path::PathBuf;

use super::file_loader::{LoadedCorpus, LoaderConfig, load_corpus};
use crate::error::Result;
use crate::semantic::{Forest, OidNode, ParseOptions, build_tree, parse_corpus};

/// Directory-level entry point: load module files, then run the pipeline.
///
/// Every call re-reads the directory; nothing is cached between calls.
#[derive(Debug, Clone, Default)]
pub struct MibParser {
    config: LoaderConfig,
    options: ParseOptions,
}

impl MibParser {
    /// Parser over every file directly inside `path`, with default options.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_options(LoaderConfig::new(path), ParseOptions::default())
    }

    pub fn with_options(config: LoaderConfig, options: ParseOptions) -> Self {
        Self { config, options }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn read_corpus(&self) -> Result<LoadedCorpus> {
        load_corpus(&self.config)
    }

    /// Flat resolved nodes, in extraction order.
    pub fn parse(&self) -> Result<Vec<OidNode>> {
        let loaded = self.read_corpus()?;
        parse_corpus(loaded.corpus.lines(), &self.options)
    }

    /// Resolved nodes grouped into a forest.
    pub fn tree(&self) -> Result<Forest> {
        let nodes = self.parse()?;
        Ok(build_tree(&nodes, &self.options.root_labels))
    }

    /// Flat nodes as a JSON array.
    #[cfg(feature = "interchange")]
    pub fn objects_json(&self) -> Result<String> {
        crate::interchange::to_json(&self.parse()?)
    }

    /// Forest roots as a JSON array with nested `children`.
    #[cfg(feature = "interchange")]
    pub fn tree_json(&self) -> Result<String> {
        crate::interchange::to_json(&self.tree()?.roots)
    }
}
