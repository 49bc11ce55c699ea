//! Tables: rows of `|cell` / `|=header` cells, optional style annotations,
//! and the sortable-table variant.

use wikirender_core::{render, style_attribute, CssProperties, Node};

use crate::macros::attribute;

/// Table of rows; an optional style annotation precedes the first row on
/// its own line.
pub fn table(rows: Vec<Node>, style: Option<&CssProperties>) -> Node {
    let annotation = style_attribute(style);
    Node::new(
        move |context| {
            let body = render(&rows, context)?;
            if annotation.is_empty() {
                Ok(body)
            } else {
                Ok(format!("{annotation}\n{body}"))
            }
        },
        true,
        true,
    )
}

/// Table row; cells concatenate on one line after an optional style
/// annotation.
pub fn row(cells: Vec<Node>, style: Option<&CssProperties>) -> Node {
    let annotation = style_attribute(style);
    Node::new(
        move |context| Ok(format!("{annotation}{}", render(&cells, context)?)),
        false,
        true,
    )
}

/// Table cell: `|content`, with an optional style annotation between the
/// separator and the content
pub fn cell(children: Vec<Node>, style: Option<&CssProperties>) -> Node {
    let annotation = style_attribute(style);
    Node::new(
        move |context| Ok(format!("|{annotation}{}", render(&children, context)?)),
        false,
        false,
    )
}

/// Header cell: `|=content`
pub fn header_cell(children: Vec<Node>) -> Node {
    Node::new(
        move |context| Ok(format!("|={}", render(&children, context)?)),
        false,
        false,
    )
}

/// Sortable table, identified for the page's sorting script.
///
/// The identifier must be unique within the page; uniqueness is a caller
/// obligation, surfaced only by the consuming wiki engine.
pub fn sortable_table(id: impl Into<String>, rows: Vec<Node>) -> Node {
    let annotation = format!(
        "(% class=\"sortable filterable doOddEven\" id=\"{}\" %)",
        id.into()
    );
    Node::new(
        move |context| Ok(format!("{annotation}\n{}", render(&rows, context)?)),
        true,
        true,
    )
}

/// Parameters for [`sortable_row`]
#[derive(Debug, Clone, Default)]
pub struct SortableRowParams {
    pub class: Option<String>,
    pub id: Option<String>,
}

/// Row inside a sortable table; class and id are emitted only when supplied
pub fn sortable_row(cells: Vec<Node>, params: SortableRowParams) -> Node {
    let mut attributes = attribute("class", params.class.as_deref());
    attributes.push_str(&attribute("id", params.id.as_deref()));
    let annotation = if attributes.is_empty() {
        String::new()
    } else {
        format!("(%{attributes} %)")
    };
    Node::new(
        move |context| Ok(format!("{annotation}{}", render(&cells, context)?)),
        false,
        true,
    )
}
