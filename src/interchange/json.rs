//! JSON output.
//!
//! Each node becomes one record:
//!
//! ```json
//! {
//!   "name": "top",
//!   "oid": "1.1",
//!   "id": "1",
//!   "parent": "iso",
//!   "description": "",
//!   "children": [ ... ]
//! }
//! ```
//!
//! `children` only appears on forest nodes that have children.

use super::format::NodeFormat;
use crate::error::Result;
use crate::semantic::OidNode;

/// JSON format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json {
    pub pretty: bool,
}

impl Json {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl NodeFormat for Json {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn write(&self, nodes: &[OidNode]) -> Result<Vec<u8>> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(nodes)?
        } else {
            serde_json::to_vec(nodes)?
        };
        Ok(bytes)
    }

    fn read(&self, input: &[u8]) -> Result<Vec<OidNode>> {
        Ok(serde_json::from_slice(input)?)
    }
}

/// Compact JSON array of node records.
pub fn to_json(nodes: &[OidNode]) -> Result<String> {
    Ok(serde_json::to_string(nodes)?)
}

/// Indented JSON array of node records.
pub fn to_json_pretty(nodes: &[OidNode]) -> Result<String> {
    Ok(serde_json::to_string_pretty(nodes)?)
}

/// Parse a JSON array of node records.
pub fn from_json(input: &str) -> Result<Vec<OidNode>> {
    Ok(serde_json::from_str(input)?)
}
