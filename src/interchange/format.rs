//! Common trait for node output formats.

use crate::error::Result;
use crate::semantic::OidNode;

/// Serialization between resolved nodes and an external encoding.
///
/// The same record shape carries both outputs: pass the flat node list for
/// the flat form, or forest roots (with nested `children`) for the tree form.
pub trait NodeFormat: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// File extension(s) for this format.
    fn extensions(&self) -> &'static [&'static str];

    /// MIME type for this format.
    fn mime_type(&self) -> &'static str;

    /// Encode nodes to bytes.
    fn write(&self, nodes: &[OidNode]) -> Result<Vec<u8>>;

    /// Decode nodes previously written by [`NodeFormat::write`].
    fn read(&self, input: &[u8]) -> Result<Vec<OidNode>>;
}
