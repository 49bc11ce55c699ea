//! The join algorithm.
//!
//! Flattens an ordered sequence of nodes into one markup string. Each node
//! contributes a prefix, its resolved content, and a suffix; the prefixes
//! and suffixes are the only source of whitespace between nodes.
//!
//! For the node at index i:
//!
//! - prefix: empty for the first node or when the node does not ask for a
//!   break before itself. Otherwise a single break when the preceding node
//!   already emits a trailing break as its own suffix (the two halves
//!   satisfy each other), a double break when it does not (the full blank
//!   line must come from the prefix alone).
//! - suffix: a single break when the node asks for a break after itself and
//!   is not last. Never doubled; doubling always comes from the next node's
//!   prefix.
//!
//! Composite nodes call [`render`] on their own children with the same
//! context, so the collapsing rule applies uniformly at every nesting depth.

use crate::context::Context;
use crate::node::Node;
use crate::Result;

/// Render a sequence of nodes against a context
pub fn render(nodes: &[Node], context: &Context) -> Result<String> {
    let mut out = String::with_capacity(nodes.len() * 32);

    for (i, node) in nodes.iter().enumerate() {
        let content = node.render(context)?;

        if i > 0 && node.newline_before() {
            if nodes[i - 1].newline_after() {
                out.push('\n');
            } else {
                out.push_str("\n\n");
            }
        }

        out.push_str(&content);

        if i + 1 < nodes.len() && node.newline_after() {
            out.push('\n');
        }
    }

    Ok(out)
}

/// Render with an empty context
pub fn render_default(nodes: &[Node]) -> Result<String> {
    render(nodes, &Context::default())
}
