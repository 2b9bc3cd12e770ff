//! Forest assembly from resolved nodes.

use indexmap::IndexSet;
use tracing::{debug, warn};

use super::index::NameIndex;
use super::node::OidNode;
use crate::base::constants::ROOT_LABEL;

/// Parent names that make a node a root of the forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootLabels {
    labels: IndexSet<String>,
}

impl RootLabels {
    /// No root labels at all; every node is either a child or an orphan.
    pub fn empty() -> Self {
        Self {
            labels: IndexSet::new(),
        }
    }

    pub fn with(mut self, label: impl Into<String>) -> Self {
        self.labels.insert(label.into());
        self
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }
}

impl Default for RootLabels {
    fn default() -> Self {
        Self::empty().with(ROOT_LABEL)
    }
}

impl<S: Into<String>> FromIterator<S> for RootLabels {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Assembled forest plus the names left out of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    pub roots: Vec<OidNode>,
    /// Every node left out of `roots`: nodes whose parent is neither a root
    /// label nor a declared name, plus everything beneath them.
    pub orphans: Vec<String>,
}

impl Forest {
    /// Pre-order walk over every node in the forest.
    pub fn flatten(&self) -> Vec<&OidNode> {
        flatten(&self.roots)
    }

    pub fn len(&self) -> usize {
        self.flatten().len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// Pre-order walk over `roots` and all their descendants.
pub fn flatten(roots: &[OidNode]) -> Vec<&OidNode> {
    let mut out = Vec::new();
    let mut stack: Vec<&OidNode> = roots.iter().rev().collect();
    while let Some(node) = stack.pop() {
        out.push(node);
        stack.extend(node.children().iter().rev());
    }
    out
}

/// Group resolved nodes into a parent/children forest.
///
/// Children keep the order in which nodes appear in `nodes`, not numeric
/// arc order. Nodes are attached under the last declaration of their parent
/// name. Orphans stay out of the forest; callers still have them in `nodes`.
pub fn build_tree(nodes: &[OidNode], roots: &RootLabels) -> Forest {
    let index = NameIndex::build(nodes.iter().map(|node| node.name.as_str()));
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
    let mut root_slots = Vec::new();

    for (slot, node) in nodes.iter().enumerate() {
        if roots.contains(&node.parent) {
            root_slots.push(slot);
        } else if let Some(parent) = index.get(&node.parent) {
            children[parent].push(slot);
        }
    }

    let mut placed = vec![false; nodes.len()];
    let forest_roots: Vec<OidNode> = root_slots
        .into_iter()
        .filter_map(|slot| attach(slot, nodes, &children, &mut placed))
        .collect();

    // Unplaced slots hang off an undeclared parent, directly or transitively.
    let orphans: Vec<String> = nodes
        .iter()
        .zip(&placed)
        .filter(|(_, placed)| !**placed)
        .map(|(node, _)| node.name.clone())
        .collect();
    if !orphans.is_empty() {
        warn!(count = orphans.len(), "nodes without a path to a root left out of the forest");
    }

    debug!(roots = forest_roots.len(), "assembled forest");
    Forest {
        roots: forest_roots,
        orphans,
    }
}

/// Clone `nodes[slot]` with its subtree; each slot is placed at most once.
fn attach(
    slot: usize,
    nodes: &[OidNode],
    children: &[Vec<usize>],
    placed: &mut [bool],
) -> Option<OidNode> {
    if placed[slot] {
        return None;
    }
    placed[slot] = true;

    let mut node = nodes[slot].clone();
    let kids: Vec<OidNode> = children[slot]
        .iter()
        .filter_map(|&child| attach(child, nodes, children, placed))
        .collect();
    node.children = (!kids.is_empty()).then_some(kids);
    Some(node)
}
