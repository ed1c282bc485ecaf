//! Tree validation run before any rendering work.
//!
//! The walk is iterative so a pathologically deep tree is reported as
//! [`RenderError::TooDeep`] rather than overflowing the stack. Once a tree has
//! passed, the recursive renderers are bounded by the same limit.

use crate::error::{RenderError, RenderResult};
use crate::node::Node;

/// Default maximum nesting depth below the document root.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Hard ceiling on the depth limit. Rendering recurses once per level, and
/// trees up to this depth render within a 2 MiB thread stack.
pub const MAX_SUPPORTED_DEPTH: usize = 256;

/// Shape of a validated tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    /// Number of nodes below the root.
    pub nodes: usize,
    /// Deepest nesting level; top-level children are at depth 1.
    pub max_depth: usize,
}

/// Checks that `root` is a well-formed document no deeper than `max_depth`.
///
/// Errors are reported for the first offending node in document order.
pub fn validate_document(root: &Node, max_depth: usize) -> RenderResult<TreeStats> {
    let Node::Document(document) = root else {
        return Err(RenderError::NotADocument { kind: root.kind() });
    };
    validate_children(&document.children, max_depth)
}

/// Checks the top-level children of a document.
pub fn validate_children(children: &[Node], max_depth: usize) -> RenderResult<TreeStats> {
    let mut stats = TreeStats::default();
    let mut stack: Vec<(&Node, Vec<usize>)> = children
        .iter()
        .enumerate()
        .rev()
        .map(|(i, child)| (child, vec![i]))
        .collect();

    while let Some((node, path)) = stack.pop() {
        let depth = path.len();
        if depth > max_depth {
            return Err(RenderError::TooDeep {
                depth,
                limit: max_depth,
            });
        }

        match node {
            Node::Document(_) => return Err(RenderError::NestedDocument { path }),
            Node::Heading(heading) if !(1..=6).contains(&heading.level) => {
                return Err(RenderError::InvalidHeadingLevel {
                    level: heading.level,
                    path,
                });
            }
            _ => {}
        }

        stats.nodes += 1;
        stats.max_depth = stats.max_depth.max(depth);

        for (i, child) in node.children().iter().enumerate().rev() {
            let mut child_path = path.clone();
            child_path.push(i);
            stack.push((child, child_path));
        }
    }

    Ok(stats)
}
