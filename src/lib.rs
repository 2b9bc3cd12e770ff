//! # mibtree
//!
//! Extracts a hierarchical OID naming tree from SNMP MIB module text without
//! implementing a grammar-validating compiler.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! interchange → JSON output of flat nodes and forests
//!   ↓
//! project     → Directory loading, MibParser facade
//!   ↓
//! semantic    → Validator, Extractor, Resolver, Assembler
//!   ↓
//! syntax      → Line recognizers for imports, headers and declarations
//!   ↓
//! base        → Primitives (SourceLine, Corpus, constants)
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! Corpus ─▶ validate_corpus ─▶ extract_nodes ─▶ resolve_oids ─▶ build_tree
//!            (pass/fail)        ExtractedNode     OidNode          Forest
//! ```
//!
//! Every stage is a pure function of its input. Line order matters: the
//! extractor looks ahead from typed declarations, so callers must supply a
//! deterministic ordering (see [`project::load_corpus`]).

// ============================================================================
// MODULES (dependency order: base → syntax → semantic → project → interchange)
// ============================================================================

/// Foundation types: SourceLine, Corpus, keyword constants
pub mod base;

/// Crate-wide error type
pub mod error;

/// Line recognizers for the two declaration shapes and module references
pub mod syntax;

/// Validator, Extractor, Resolver and Assembler
pub mod semantic;

/// Corpus loading from disk and the MibParser facade
pub mod project;

/// JSON output of resolved nodes
#[cfg(feature = "interchange")]
pub mod interchange;

pub use base::{Corpus, CorpusFile, SourceLine};
pub use error::{MibError, Result};
pub use project::{LoaderConfig, MibParser};
pub use semantic::{
    ExtractedNode, Forest, OidNode, ParseOptions, RootLabels, build_tree, extract_nodes,
    parse_corpus, parse_forest, resolve_oids, validate_corpus,
};
