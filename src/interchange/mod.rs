//! Output formats for resolved OID nodes.
//!
//! Formats implement [`NodeFormat`] and operate on plain [`OidNode`](crate::semantic::OidNode)
//! slices, so the same encoder writes the flat list and the forest.

mod format;
mod json;

pub use format::NodeFormat;
pub use json::{Json, from_json, to_json, to_json_pretty};
