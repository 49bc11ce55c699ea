//! Renderable markup fragments.
//!
//! A [`Node`] pairs a content-producing closure with two whitespace
//! directives fixed at construction time: whether the node wants a line
//! break before itself and after itself. The directives describe the node's
//! kind, never its neighbors; collapsing redundant breaks between adjacent
//! nodes is the renderer's job.

use std::fmt;

use crate::context::Context;
use crate::Result;

/// Type alias for render closures
pub type RenderFn = Box<dyn Fn(&Context) -> Result<String> + Send + Sync>;

/// A renderable markup fragment.
///
/// Nodes are immutable pure values: `render` may be called any number of
/// times and must be free of observable side effects. Composite nodes close
/// over their children and render them recursively, so a whole document is
/// an acyclic tree with no back-references.
pub struct Node {
    render: RenderFn,
    newline_before: bool,
    newline_after: bool,
}

impl Node {
    /// Create a node from a render closure and its whitespace directives
    pub fn new<F>(render: F, newline_before: bool, newline_after: bool) -> Self
    where
        F: Fn(&Context) -> Result<String> + Send + Sync + 'static,
    {
        Self {
            render: Box::new(render),
            newline_before,
            newline_after,
        }
    }

    /// Literal content with no whitespace preference (text runs, marks)
    pub fn inline(content: impl Into<String>) -> Self {
        let content = content.into();
        Self::new(move |_| Ok(content.clone()), false, false)
    }

    /// Literal content that wants a break after itself (paragraphs)
    pub fn block(content: impl Into<String>) -> Self {
        let content = content.into();
        Self::new(move |_| Ok(content.clone()), false, true)
    }

    /// Literal content that wants isolation on both sides (headers, macros)
    pub fn standalone(content: impl Into<String>) -> Self {
        let content = content.into();
        Self::new(move |_| Ok(content.clone()), true, true)
    }

    /// Inline node that applies `wrapper` to its resolved content.
    ///
    /// The content may be a literal string or another node; a node is
    /// resolved against the render-time context before the wrapper runs, so
    /// nested formatting marks compose on resolved text:
    ///
    /// ```rust
    /// use wikirender_core::{Context, Node};
    ///
    /// let emphasized = Node::wrapping("hello", |t| format!("//{t}//"));
    /// let strong = Node::wrapping(emphasized, |t| format!("**{t}**"));
    /// assert_eq!(strong.render(&Context::default()).unwrap(), "**//hello//**");
    /// ```
    pub fn wrapping<C, F>(content: C, wrapper: F) -> Self
    where
        C: Into<Content>,
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        let content = content.into();
        Self::new(
            move |context| Ok(wrapper(&content.resolve(context)?)),
            false,
            false,
        )
    }

    /// Resolve this node's content against a context
    pub fn render(&self, context: &Context) -> Result<String> {
        (self.render)(context)
    }

    /// Whether this node wants a line break separating it from its
    /// predecessor
    pub fn newline_before(&self) -> bool {
        self.newline_before
    }

    /// Whether this node wants a line break separating it from its successor
    pub fn newline_after(&self) -> bool {
        self.newline_after
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("newline_before", &self.newline_before)
            .field("newline_after", &self.newline_after)
            .finish_non_exhaustive()
    }
}

/// Content accepted by wrapping constructors: a literal string or a node
/// resolved at render time.
pub enum Content {
    Text(String),
    Node(Node),
}

impl Content {
    fn resolve(&self, context: &Context) -> Result<String> {
        match self {
            Content::Text(text) => Ok(text.clone()),
            Content::Node(node) => node.render(context),
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<Node> for Content {
    fn from(node: Node) -> Self {
        Content::Node(node)
    }
}

/// Multi-child aggregate rendered between `(((` and `)))` group markers,
/// one child per line.
pub fn multiline(children: Vec<Node>) -> Node {
    Node::new(
        move |context| {
            let lines = children
                .iter()
                .map(|child| child.render(context))
                .collect::<Result<Vec<_>>>()?;
            Ok(format!("(((\n{}\n)))", lines.join("\n")))
        },
        true,
        false,
    )
}
