//! # Semantic pipeline
//!
//! Turns an ordered line sequence into OID nodes in four stages:
//!
//! 1. [`validate_corpus`] - every `FROM <module>` must have a matching
//!    `<module> DEFINITIONS ::= BEGIN` somewhere in the corpus
//! 2. [`extract_nodes`] - one forward pass over both declaration shapes
//! 3. [`resolve_oids`] - parent-name walk to a dotted OID, cycle-guarded
//! 4. [`build_tree`] - optional grouping into a parent/children forest
//!
//! [`parse_corpus`] runs stages 1-3. The flat node list it returns and the
//! forest built from it are both valid outputs.

mod extractor;
mod index;
mod node;
mod pipeline;
mod resolver;
mod tree;
mod validator;

pub use extractor::extract_nodes;
pub use node::{ExtractedNode, OidNode};
pub use pipeline::{ParseOptions, parse_corpus, parse_forest};
pub use resolver::resolve_oids;
pub use tree::{Forest, RootLabels, build_tree, flatten};
pub use validator::{
    DependencyReport, ModuleReference, ReferenceKind, module_references, validate_corpus,
};
