//! Macro constructs: `{{name param="value"}}...{{/name}}` blocks and
//! self-closing `{{name param="value"/}}` forms.
//!
//! Optional macro parameters contribute a ` name="value"` fragment only when
//! supplied, in declared order; absent parameters leave no residue.

use wikirender_core::{render, Node};

pub(crate) fn attribute(name: &str, value: Option<&str>) -> String {
    value
        .map(|value| format!(" {name}=\"{value}\""))
        .unwrap_or_default()
}

pub(crate) fn numeric_attribute(name: &str, value: Option<u32>) -> String {
    value
        .map(|value| format!(" {name}=\"{value}\""))
        .unwrap_or_default()
}

fn macro_open(name: &str, attributes: &str) -> String {
    format!("{{{{{name}{attributes}}}}}")
}

fn macro_close(name: &str) -> String {
    format!("{{{{/{name}}}}}")
}

fn self_closing(name: &str, attributes: &str) -> String {
    format!("{{{{{name}{attributes}/}}}}")
}

/// Standalone macro block; children render recursively between the opening
/// and closing markers, each marker on its own line.
fn macro_block(name: &'static str, attributes: String, children: Vec<Node>) -> Node {
    Node::new(
        move |context| {
            let body = render(&children, context)?;
            Ok(format!(
                "{}\n{body}\n{}",
                macro_open(name, &attributes),
                macro_close(name)
            ))
        },
        true,
        true,
    )
}

/// Box: `{{box}}` or `{{box title="..."}}`
pub fn boxed(children: Vec<Node>, title: Option<&str>) -> Node {
    macro_block("box", attribute("title", title), children)
}

/// Info banner
pub fn info_banner(children: Vec<Node>) -> Node {
    macro_block("info", String::new(), children)
}

/// Warning banner
pub fn warning_banner(children: Vec<Node>) -> Node {
    macro_block("warning", String::new(), children)
}

/// Success banner
pub fn success_banner(children: Vec<Node>) -> Node {
    macro_block("success", String::new(), children)
}

/// Error banner
pub fn error_banner(children: Vec<Node>) -> Node {
    macro_block("error", String::new(), children)
}

/// Raw HTML embed
pub fn html(children: Vec<Node>) -> Node {
    macro_block("html", String::new(), children)
}

/// HTML embed with wiki syntax enabled inside
pub fn html_with_wiki(children: Vec<Node>) -> Node {
    macro_block("html", " wiki=true".to_string(), children)
}

/// Container: `{{container}}` or `{{container class="..."}}`
pub fn container(children: Vec<Node>, class: Option<&str>) -> Node {
    macro_block("container", attribute("class", class), children)
}

/// Image gallery
pub fn gallery(children: Vec<Node>) -> Node {
    macro_block("gallery", String::new(), children)
}

/// Collapsible show/hide section: `{{showhide}}` or
/// `{{showhide title="..."}}`
pub fn showhide(children: Vec<Node>, title: Option<&str>) -> Node {
    macro_block("showhide", attribute("title", title), children)
}

/// FAQ section
pub fn faq(children: Vec<Node>) -> Node {
    macro_block("faq", String::new(), children)
}

/// Hidden editorial comment, kept inline
pub fn comment(content: impl Into<String>) -> Node {
    Node::inline(format!(
        "{}{}{}",
        macro_open("comment", ""),
        content.into(),
        macro_close("comment")
    ))
}

/// Footnote reference, kept inline at the point of use
pub fn footnote(content: impl Into<String>) -> Node {
    Node::inline(format!(
        "{}{}{}",
        macro_open("footnote", ""),
        content.into(),
        macro_close("footnote")
    ))
}

/// Code fragment.
///
/// Single-line content stays inline with no surrounding blank lines;
/// content with at least one line break becomes an isolated block with the
/// raw content on its own lines between the markers.
pub fn code(content: impl Into<String>, language: Option<&str>) -> Node {
    let content = content.into();
    let attributes = attribute("language", language);
    if content.contains('\n') {
        Node::standalone(format!(
            "{}\n{content}\n{}",
            macro_open("code", &attributes),
            macro_close("code")
        ))
    } else {
        Node::inline(format!(
            "{}{content}{}",
            macro_open("code", &attributes),
            macro_close("code")
        ))
    }
}

/// Transclude another page: `{{include reference="..."/}}`
pub fn transclude(reference: impl Into<String>) -> Node {
    let reference = reference.into();
    Node::standalone(self_closing(
        "include",
        &attribute("reference", Some(reference.as_str())),
    ))
}

/// Table of contents: `{{toc/}}`
pub fn toc() -> Node {
    Node::standalone(self_closing("toc", ""))
}

/// Collect footnotes emitted so far: `{{putFootnotes/}}`
pub fn put_footnotes() -> Node {
    Node::standalone(self_closing("putFootnotes", ""))
}

/// Parameters for [`document_tree`]
#[derive(Debug, Clone, Default)]
pub struct DocumentTreeParams {
    pub root: Option<String>,
    pub limit: Option<u32>,
}

/// Navigable document tree: `{{documentTree root="..." limit="..."/}}`
pub fn document_tree(params: DocumentTreeParams) -> Node {
    let mut attributes = attribute("root", params.root.as_deref());
    attributes.push_str(&numeric_attribute("limit", params.limit));
    Node::standalone(self_closing("documentTree", &attributes))
}

/// Parameters for [`sub_pages`]
#[derive(Debug, Clone, Default)]
pub struct SubPagesParams {
    pub root: Option<String>,
    pub depth: Option<u32>,
}

/// Listing of child pages: `{{children root="..." depth="..."/}}`
pub fn sub_pages(params: SubPagesParams) -> Node {
    let mut attributes = attribute("root", params.root.as_deref());
    attributes.push_str(&numeric_attribute("depth", params.depth));
    Node::standalone(self_closing("children", &attributes))
}

/// Activate client-side table sorting for the page:
/// `{{enableSortableTables/}}`
pub fn enable_sortable_tables() -> Node {
    Node::standalone(self_closing("enableSortableTables", ""))
}
