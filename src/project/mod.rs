//! Corpus collection from disk and the [`MibParser`] facade.
//!
//! The pipeline in [`crate::semantic`] never touches the filesystem. This
//! module turns a directory of module files into one deterministically
//! ordered [`Corpus`](crate::base::Corpus) and hands it over.

pub mod file_loader;
mod mib_parser;

pub use file_loader::{
    LoadFailure, LoadedCorpus, LoaderConfig, collect_file_paths, load_corpus, load_file,
};
pub use mib_parser::MibParser;
