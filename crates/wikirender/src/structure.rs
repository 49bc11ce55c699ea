//! Structural block elements: headers, paragraphs, rules, quotes,
//! definition lists.

use wikirender_core::{render, Node};

/// Header at a given level (1-6, clamped): `= text =` through
/// `====== text ======`
pub fn header(level: u8, text: impl Into<String>) -> Node {
    let marker = "=".repeat(level.clamp(1, 6) as usize);
    Node::standalone(format!("{marker} {} {marker}", text.into()))
}

pub fn h1(text: impl Into<String>) -> Node {
    header(1, text)
}

pub fn h2(text: impl Into<String>) -> Node {
    header(2, text)
}

pub fn h3(text: impl Into<String>) -> Node {
    header(3, text)
}

pub fn h4(text: impl Into<String>) -> Node {
    header(4, text)
}

pub fn h5(text: impl Into<String>) -> Node {
    header(5, text)
}

pub fn h6(text: impl Into<String>) -> Node {
    header(6, text)
}

/// Paragraph of inline children
pub fn paragraph(children: Vec<Node>) -> Node {
    Node::new(move |context| render(&children, context), false, true)
}

/// Horizontal rule
pub fn hr() -> Node {
    Node::standalone("----")
}

/// Blockquote; every rendered line is prefixed with `> `
pub fn blockquote(children: Vec<Node>) -> Node {
    Node::new(
        move |context| {
            let content = render(&children, context)?;
            let quoted: Vec<String> = content.lines().map(|line| format!("> {line}")).collect();
            Ok(quoted.join("\n"))
        },
        false,
        true,
    )
}

/// Definition term: `; term`
pub fn definition_term(term: impl Into<String>) -> Node {
    Node::block(format!("; {}", term.into()))
}

/// Definition description: `: description`
pub fn definition_description(description: impl Into<String>) -> Node {
    Node::block(format!(": {}", description.into()))
}

/// Definition list of terms and descriptions
pub fn definition_list(children: Vec<Node>) -> Node {
    Node::new(move |context| render(&children, context), false, true)
}
