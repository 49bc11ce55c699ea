//! wikirender-core - node model and markup rendering
//!
//! This crate provides the building blocks for composing XWiki 2.x markup:
//! a [`Node`] carrying a render closure plus two whitespace directives, a
//! read-only [`Context`] threaded through every render call, the [`render`]
//! join algorithm that collapses redundant line breaks between neighbors,
//! and the inline style serializer.
//!
//! # Architecture
//!
//! ```text
//! Builders ──▶ ┌───────────────┐
//!              │   Node tree   │ ──render──▶ Markup String
//! Primitives ─▶│               │
//!              └───────────────┘
//! ```
//!
//! Structure is decided at construction time (which node kind, which
//! whitespace directives); only literal content is resolved at render time.
//!
//! # Example
//!
//! ```rust
//! use wikirender_core::{render, Context, Node};
//!
//! let nodes = vec![
//!     Node::standalone("= Title ="),
//!     Node::block("First paragraph."),
//! ];
//!
//! let markup = render(&nodes, &Context::default()).unwrap();
//! assert_eq!(markup, "= Title =\nFirst paragraph.");
//! ```

mod context;
mod node;
mod render;
mod style;

pub use context::Context;
pub use node::{multiline, Content, Node, RenderFn};
pub use render::{render, render_default};
pub use style::{style_attribute, CssProperties};

/// Error type for rendering operations
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("missing context value: {0}")]
    MissingContext(String),

    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;
