use tracing::debug;

use super::extractor::extract_nodes;
use super::node::OidNode;
use super::resolver::resolve_oids;
use super::tree::{Forest, RootLabels, build_tree};
use super::validator::validate_corpus;
use crate::base::SourceLine;
use crate::error::Result;

/// Options for a single pipeline run.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Parent names that mark forest roots.
    pub root_labels: RootLabels,
    /// Run the import/definition gate before extraction.
    pub check_dependencies: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root_labels(mut self, root_labels: RootLabels) -> Self {
        self.root_labels = root_labels;
        self
    }

    /// Extract from corpora that reference modules kept elsewhere.
    pub fn skip_dependency_check(mut self) -> Self {
        self.check_dependencies = false;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            root_labels: RootLabels::default(),
            check_dependencies: true,
        }
    }
}

/// Validate, extract and resolve: corpus lines to flat resolved nodes.
pub fn parse_corpus(lines: &[SourceLine], options: &ParseOptions) -> Result<Vec<OidNode>> {
    if options.check_dependencies {
        validate_corpus(lines)?;
    } else {
        debug!("dependency check skipped");
    }
    let extracted = extract_nodes(lines);
    resolve_oids(&extracted)
}

/// [`parse_corpus`] followed by [`build_tree`].
pub fn parse_forest(lines: &[SourceLine], options: &ParseOptions) -> Result<Forest> {
    let nodes = parse_corpus(lines, options)?;
    Ok(build_tree(&nodes, &options.root_labels))
}
