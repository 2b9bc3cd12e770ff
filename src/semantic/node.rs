//! Node generations produced by the pipeline.
//!
//! [`ExtractedNode`] is what the extractor emits: no OID yet.
//! [`OidNode`] is what the resolver emits: OID set, optionally carrying
//! children once the assembler has run.

/// A declaration recovered from the corpus, before OID resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedNode {
    /// Declared identifier; later declarations with the same name win lookups.
    pub name: String,
    /// Arc label relative to `parent`, verbatim from the braces.
    pub local_id: String,
    /// By-name reference to the parent node or a root label.
    pub parent: String,
    /// Only populated by typed declarations; empty otherwise.
    pub description: String,
    /// Corpus position of the anchor line.
    pub position: usize,
}

impl ExtractedNode {
    pub fn new(
        name: impl Into<String>,
        parent: impl Into<String>,
        local_id: impl Into<String>,
        position: usize,
    ) -> Self {
        Self {
            name: name.into(),
            local_id: local_id.into(),
            parent: parent.into(),
            description: String::new(),
            position,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A node with its full dotted OID.
///
/// `children` is `None` in the flat output and on leaves of the forest; the
/// assembler only ever sets it to a non-empty sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct OidNode {
    pub name: String,
    pub oid: String,
    #[cfg_attr(feature = "interchange", serde(rename = "id"))]
    pub local_id: String,
    pub parent: String,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub description: String,
    #[cfg_attr(
        feature = "interchange",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub children: Option<Vec<OidNode>>,
}

impl OidNode {
    /// Carry an extracted node into the resolved generation.
    pub fn resolved(node: &ExtractedNode, oid: String) -> Self {
        Self {
            name: node.name.clone(),
            oid,
            local_id: node.local_id.clone(),
            parent: node.parent.clone(),
            description: node.description.clone(),
            children: None,
        }
    }

    pub fn children(&self) -> &[OidNode] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Numeric arcs of the OID, or `None` if any component is not an integer.
    pub fn arcs(&self) -> Option<Vec<u32>> {
        self.oid.split('.').map(|arc| arc.parse().ok()).collect()
    }
}
