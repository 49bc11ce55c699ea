//! Inline text formatting marks.
//!
//! Each mark accepts a literal string or another node; nodes are resolved
//! against the render-time context before the mark's delimiters are applied,
//! so marks nest in application order.

use wikirender_core::{Content, Node};

/// Plain text run
pub fn text(content: impl Into<String>) -> Node {
    Node::inline(content)
}

/// Strong emphasis: `**content**`
pub fn strong(content: impl Into<Content>) -> Node {
    Node::wrapping(content, |t| format!("**{t}**"))
}

/// Emphasis: `//content//`
pub fn emphasis(content: impl Into<Content>) -> Node {
    Node::wrapping(content, |t| format!("//{t}//"))
}

/// Strikethrough: `--content--`
pub fn strike(content: impl Into<Content>) -> Node {
    Node::wrapping(content, |t| format!("--{t}--"))
}

/// Monospace: `##content##`
pub fn mono(content: impl Into<Content>) -> Node {
    Node::wrapping(content, |t| format!("##{t}##"))
}

/// Superscript: `^^content^^`
pub fn superscript(content: impl Into<Content>) -> Node {
    Node::wrapping(content, |t| format!("^^{t}^^"))
}

/// Subscript: `,,content,,`
pub fn subscript(content: impl Into<Content>) -> Node {
    Node::wrapping(content, |t| format!(",,{t},,"))
}

/// Underline: `__content__`
pub fn underline(content: impl Into<Content>) -> Node {
    Node::wrapping(content, |t| format!("__{t}__"))
}

/// Link: `[[text>>target]]`
pub fn link(text: impl Into<String>, target: impl Into<String>) -> Node {
    Node::inline(format!("[[{}>>{}]]", text.into(), target.into()))
}

/// Verbatim text, protected from wiki parsing: `{{{content}}}`
pub fn verbatim(content: impl Into<String>) -> Node {
    Node::inline(["{{{", &content.into(), "}}}"].concat())
}
