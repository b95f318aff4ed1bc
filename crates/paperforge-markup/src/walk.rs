//! Depth-first tree rewriting.

use crate::node::Node;

/// Walks `nodes` depth first in document order, letting the visitor replace
/// nodes as it goes.
///
/// For each node the visitor returns either `None` (keep the node, descend
/// into its children) or `Some(replacement)` (splice the replacement into
/// the parent's child list where the node stood). An empty replacement
/// deletes the node.
///
/// Two rules matter to callers that carry state, such as a running blank
/// number:
///
/// * Replacement nodes are never themselves visited; the walk resumes at
///   the sibling after them.
/// * After a replacement, the walk still descends into the children of the
///   node that was replaced. Those children are detached from the output
///   tree, but the visitor observes them, so anything nested inside a
///   replaced node still advances the visitor's state without appearing in
///   the output. Visitors that match container elements should match only
///   leaf markers if that is not intended.
pub fn walk(nodes: &mut Vec<Node>, mut visitor: impl FnMut(&Node) -> Option<Vec<Node>>) {
    walk_nodes(nodes, &mut visitor);
}

fn walk_nodes<F>(nodes: &mut Vec<Node>, visitor: &mut F)
where
    F: FnMut(&Node) -> Option<Vec<Node>>,
{
    let mut i = 0;
    while i < nodes.len() {
        match visitor(&nodes[i]) {
            Some(replacement) => {
                let mut original = nodes.remove(i);
                let count = replacement.len();
                nodes.splice(i..i, replacement);
                if let Node::Element(el) = &mut original {
                    walk_nodes(&mut el.children, visitor);
                }
                i += count;
            }
            None => {
                if let Node::Element(el) = &mut nodes[i] {
                    walk_nodes(&mut el.children, visitor);
                }
                i += 1;
            }
        }
    }
}
