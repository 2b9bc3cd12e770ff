//! Line recognizers for MIB module text.
//!
//! Nothing here builds a syntax tree. Each recognizer looks at a single line
//! and either pulls out the fields the pipeline needs or declines. Callers
//! decide what a declined line means (usually: skip it).

mod lines;

pub use lines::{
    Declaration, assignment, brace_pair, description_start, import_sources, is_identifier,
    module_header, split_assignment, starts_assignment, strip_comment, subtree_declaration,
    typed_declaration_name,
};

#[cfg(test)]
mod tests;
