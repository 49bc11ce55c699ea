//! # wikirender
//!
//! Compose XWiki 2.x markup from typed content nodes.
//!
//! Client code builds a sequence of [`Node`]s with the builder functions in
//! this crate (headers, paragraphs, tables, banners, macros) and flattens
//! them into one markup string with [`render`] or [`render_default`]. Each
//! node carries two whitespace directives fixed by its kind; the renderer
//! collapses redundant breaks between neighbors so adjacent fragments are
//! separated by at most one blank line.
//!
//! ## Example
//!
//! ```rust
//! use wikirender::{h1, paragraph, render_default, strong, text};
//!
//! let page = vec![
//!     h1("Release notes"),
//!     paragraph(vec![
//!         text("All changes are "),
//!         strong("backwards compatible"),
//!         text("."),
//!     ]),
//! ];
//!
//! let markup = render_default(&page).unwrap();
//! assert_eq!(
//!     markup,
//!     "= Release notes =\nAll changes are **backwards compatible**."
//! );
//! ```
//!
//! Content that depends on caller-supplied state reads the [`Context`]
//! passed to [`render`]; the context flows through every nesting level and
//! is resolved at render time, not at construction time.

mod format;
mod image;
mod macros;
mod structure;
mod table;

pub use wikirender_core::{
    multiline, render, render_default, style_attribute, Content, Context, CssProperties, Node,
    RenderError, Result,
};

pub use format::*;
pub use image::*;
pub use macros::*;
pub use structure::*;
pub use table::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_then_paragraph() {
        let nodes = vec![h1("Title"), paragraph(vec![text("Content")])];
        assert_eq!(render_default(&nodes).unwrap(), "= Title =\nContent");
    }

    #[test]
    fn test_paragraph_then_box_collapses_to_one_blank_line() {
        let nodes = vec![
            paragraph(vec![text("Some text")]),
            boxed(vec![text("Box content")], None),
        ];
        assert_eq!(
            render_default(&nodes).unwrap(),
            "Some text\n\n{{box}}\nBox content\n{{/box}}"
        );
    }

    #[test]
    fn test_inline_code_embeds_in_a_paragraph() {
        let nodes = vec![paragraph(vec![
            text("Run "),
            code("cargo doc", None),
            text(" to build it."),
        ])];
        assert_eq!(
            render_default(&nodes).unwrap(),
            "Run {{code}}cargo doc{{/code}} to build it."
        );
    }

    #[test]
    fn test_whole_page() {
        let nodes = vec![
            h1("User guide"),
            toc(),
            paragraph(vec![
                text("See the "),
                link("overview", "Main.Overview"),
                text(" first."),
            ]),
            h2("Install"),
            code("cargo install wikirender\ncargo --version", Some("sh")),
            warning_banner(vec![text("Nightly toolchains are unsupported.")]),
            hr(),
            paragraph(vec![text("Questions go in the "), emphasis("FAQ"), text(".")]),
        ];

        let expected = "\
= User guide =\n\
\n\
{{toc/}}\n\
See the [[overview>>Main.Overview]] first.\n\
\n\
== Install ==\n\
\n\
{{code language=\"sh\"}}\n\
cargo install wikirender\n\
cargo --version\n\
{{/code}}\n\
\n\
{{warning}}\n\
Nightly toolchains are unsupported.\n\
{{/warning}}\n\
\n\
----\n\
Questions go in the //FAQ//.";

        assert_eq!(render_default(&nodes).unwrap(), expected);
    }

    #[test]
    fn test_context_driven_page() {
        let nodes = vec![
            h1("Status"),
            paragraph(vec![Node::new(
                |context: &Context| Ok(format!("Deployed version {}", context.require("version")?)),
                false,
                false,
            )]),
        ];

        let context = Context::new().with("version", "1.4.2");
        assert_eq!(
            render(&nodes, &context).unwrap(),
            "= Status =\nDeployed version 1.4.2"
        );

        let err = render_default(&nodes).unwrap_err();
        assert!(matches!(err, RenderError::MissingContext(_)));
    }

    #[test]
    fn test_table_in_document_flow() {
        let nodes = vec![
            paragraph(vec![text("Inventory:")]),
            table(
                vec![
                    row(
                        vec![header_cell(vec![text("Name")]), header_cell(vec![text("Qty")])],
                        None,
                    ),
                    row(
                        vec![cell(vec![text("Bolt")], None), cell(vec![text("42")], None)],
                        None,
                    ),
                ],
                None,
            ),
            paragraph(vec![text("Updated daily.")]),
        ];

        assert_eq!(
            render_default(&nodes).unwrap(),
            "Inventory:\n\n|=Name|=Qty\n|Bolt|42\nUpdated daily."
        );
    }
}
