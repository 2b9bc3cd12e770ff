//! OID resolution by walking parent names.
//!
//! For each node the walk starts at its own arc and prepends the arc of every
//! ancestor found in the name index, stopping at the first name that is not
//! declared in the corpus (typically a root label such as `iso`). The result
//! is prefixed with the fixed root arc:
//!
//! ```text
//! top   ::= { iso 1 }   →  1.1
//! child ::= { top 2 }   →  1.1.2
//! ```
//!
//! Each walk tracks the names it has visited, so a parent cycle fails with
//! [`MibError::CycleDetected`] after at most one step per distinct name.

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use super::index::NameIndex;
use super::node::{ExtractedNode, OidNode};
use crate::base::constants::ROOT_ARC;
use crate::error::{MibError, Result};

/// Resolve the full dotted OID of every node.
///
/// Output order matches input order; every field other than the OID is
/// copied verbatim.
pub fn resolve_oids(nodes: &[ExtractedNode]) -> Result<Vec<OidNode>> {
    let index = NameIndex::build(nodes.iter().map(|node| node.name.as_str()));
    let resolved = nodes
        .iter()
        .map(|node| {
            let oid = resolve_oid(node, nodes, &index)?;
            Ok(OidNode::resolved(node, oid))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(count = resolved.len(), distinct = index.len(), "resolved OIDs");
    Ok(resolved)
}

fn resolve_oid(
    node: &ExtractedNode,
    nodes: &[ExtractedNode],
    index: &NameIndex<'_>,
) -> Result<String> {
    let mut arcs = vec![node.local_id.as_str()];
    let mut visited = FxHashSet::default();
    let mut cursor = node.parent.as_str();

    while let Some(slot) = index.get(cursor) {
        if !visited.insert(cursor) {
            return Err(MibError::cycle(cursor));
        }
        let ancestor = &nodes[slot];
        arcs.push(ancestor.local_id.as_str());
        cursor = ancestor.parent.as_str();
    }

    arcs.push(ROOT_ARC);
    arcs.reverse();
    let oid = arcs.join(".");
    trace!(node = %node.name, %oid, stopped_at = cursor, "resolved");
    Ok(oid)
}
