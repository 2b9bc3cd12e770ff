//! Corpus validation: every imported module must be defined in the corpus.

use indexmap::IndexSet;
use tracing::{debug, warn};

use crate::base::SourceLine;
use crate::base::constants::MIB_EXT;
use crate::error::{MibError, Result};
use crate::syntax;

/// How a module name entered the corpus scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// `... FROM <module>`
    Import,
    /// `<module> DEFINITIONS ::= BEGIN`
    Definition,
}

/// A module name seen on a corpus line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleReference {
    pub name: String,
    pub position: usize,
    pub kind: ReferenceKind,
}

/// Every module reference in the corpus, in line order.
pub fn module_references(lines: &[SourceLine]) -> Vec<ModuleReference> {
    let mut refs = Vec::new();
    for line in lines {
        for name in syntax::import_sources(&line.text) {
            refs.push(ModuleReference {
                name: name.to_string(),
                position: line.position,
                kind: ReferenceKind::Import,
            });
        }
        if let Some(name) = syntax::module_header(&line.text) {
            refs.push(ModuleReference {
                name: name.to_string(),
                position: line.position,
                kind: ReferenceKind::Definition,
            });
        }
    }
    refs
}

/// Required and defined module sets, both in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct DependencyReport {
    pub required: IndexSet<String>,
    pub defined: IndexSet<String>,
}

impl DependencyReport {
    pub fn from_lines(lines: &[SourceLine]) -> Self {
        let mut report = Self::default();
        for reference in module_references(lines) {
            match reference.kind {
                ReferenceKind::Import => report.required.insert(reference.name),
                ReferenceKind::Definition => report.defined.insert(reference.name),
            };
        }
        report
    }

    /// `required − defined`, in first-seen order.
    pub fn unresolved(&self) -> Vec<&str> {
        self.required
            .iter()
            .filter(|name| !self.defined.contains(*name))
            .map(String::as_str)
            .collect()
    }

    pub fn is_satisfied(&self) -> bool {
        self.required.iter().all(|name| self.defined.contains(name))
    }

    /// Fail with [`MibError::MissingDependency`] naming each `<module>.mib`.
    pub fn check(&self) -> Result<()> {
        let missing: Vec<String> = self
            .unresolved()
            .into_iter()
            .map(|name| format!("{name}.{MIB_EXT}"))
            .collect();
        if missing.is_empty() {
            return Ok(());
        }
        warn!(missing = ?missing, "corpus imports modules it does not define");
        Err(MibError::missing_dependency(missing))
    }
}

/// Gate before extraction: every imported module must be defined somewhere in `lines`.
pub fn validate_corpus(lines: &[SourceLine]) -> Result<()> {
    let report = DependencyReport::from_lines(lines);
    debug!(
        required = report.required.len(),
        defined = report.defined.len(),
        "scanned module references"
    );
    report.check()
}
