//! Best-effort extraction of node declarations.
//!
//! Two anchor shapes are recognized per line:
//!
//! ```text
//! name OBJECT IDENTIFIER ::= { parent id }      -- subtree form, one line
//!
//! name OBJECT-TYPE                              -- typed form
//!     ...
//!     DESCRIPTION "text that may span
//!                  several lines"
//!     ::= { parent id }
//! ```
//!
//! Lines matching neither are ignored. A typed declaration whose assignment
//! line never appears, or whose braces hold fewer than two tokens, is dropped
//! without error.

use tracing::{debug, trace};

use super::node::ExtractedNode;
use crate::base::SourceLine;
use crate::syntax;

/// What the lookahead after a typed anchor found.
struct TypedBody {
    parent: String,
    local_id: String,
    description: String,
}

/// Scan the corpus once and emit every recognizable declaration, in line order.
pub fn extract_nodes(lines: &[SourceLine]) -> Vec<ExtractedNode> {
    let mut nodes = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        if let Some(decl) = syntax::subtree_declaration(&line.text) {
            nodes.push(ExtractedNode::new(
                decl.name,
                decl.parent,
                decl.local_id,
                line.position,
            ));
        } else if let Some(name) = syntax::typed_declaration_name(&line.text) {
            match scan_typed_body(&lines[idx + 1..]) {
                Some(body) => nodes.push(
                    ExtractedNode::new(name, body.parent, body.local_id, line.position)
                        .with_description(body.description),
                ),
                None => {
                    trace!(node = name, position = line.position, "dropped typed declaration")
                }
            }
        }
    }

    debug!(count = nodes.len(), "extracted nodes");
    nodes
}

/// Look ahead from the line after a typed anchor for DESCRIPTION and `::= {`.
///
/// Description text runs until the first line holding an assignment. When
/// that assignment shares its line with the closing description text, the
/// text before `::=` stays in the description and the braces give the parent.
fn scan_typed_body(rest: &[SourceLine]) -> Option<TypedBody> {
    let mut description = String::new();
    let mut idx = 0;

    while idx < rest.len() {
        let text = rest[idx].trimmed();

        if syntax::starts_assignment(text) {
            return typed_body(text, description);
        }

        if let Some(first) = syntax::description_start(text) {
            let mut parts = Vec::new();
            let mut current = first;
            loop {
                if let Some((before, assignment)) = syntax::split_assignment(current) {
                    parts.push(before.trim());
                    return typed_body(assignment, join_description(&parts));
                }
                parts.push(current);
                idx += 1;
                match rest.get(idx) {
                    Some(line) => current = line.trimmed(),
                    None => break,
                }
            }
            description = join_description(&parts);
            continue;
        }

        idx += 1;
    }

    None
}

fn typed_body(assignment: &str, description: String) -> Option<TypedBody> {
    let (parent, local_id) = syntax::assignment(assignment)?;
    Some(TypedBody {
        parent: parent.to_string(),
        local_id: local_id.to_string(),
        description,
    })
}

fn join_description(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
