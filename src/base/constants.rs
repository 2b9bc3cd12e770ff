//! Keyword literals and fixed labels of the MIB naming tree.

/// Name that marks a node as a root of the assembled forest.
pub const ROOT_LABEL: &str = "iso";

/// Arc prefixed to every resolved OID; models the top-level `iso` arc.
pub const ROOT_ARC: &str = "1";

/// Extension appended to module names in dependency reports.
pub const MIB_EXT: &str = "mib";

// Module references
pub const KW_FROM: &str = "FROM";
pub const MODULE_HEADER: &str = "DEFINITIONS ::= BEGIN";

// Declaration anchors
pub const OBJECT_IDENTIFIER: &str = "OBJECT IDENTIFIER";
pub const OBJECT_TYPE: &str = "OBJECT-TYPE";
pub const OBJECT_IDENTITY: &str = "OBJECT-IDENTITY";
pub const MODULE_IDENTITY: &str = "MODULE-IDENTITY";
pub const KW_MACRO: &str = "MACRO";
pub const KW_DESCRIPTION: &str = "DESCRIPTION";

/// Value assignment operator, as in `::= { parent id }`.
pub const ASSIGNMENT: &str = "::=";

/// ASN.1 comment introducer.
pub const COMMENT: &str = "--";
