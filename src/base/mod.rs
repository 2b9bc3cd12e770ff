//! Foundation types for the mibtree pipeline.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`SourceLine`] - One line of corpus text with its sequence position
//! - [`Corpus`] - The ordered, concatenated line sequence handed to the core
//! - [`CorpusFile`] - Which file contributed which range of lines
//! - Keyword and root constants
//!
//! This module has NO dependencies on other mibtree modules.

pub mod constants;
mod corpus;

pub use corpus::{Corpus, CorpusFile, SourceLine};

#[cfg(test)]
mod tests;
