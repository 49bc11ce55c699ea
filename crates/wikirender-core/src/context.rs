//! Render-time context.

use indexmap::IndexMap;

use crate::{RenderError, Result};

/// Key-value state supplied by the caller at render time.
///
/// The context flows downward through the whole render call tree and is
/// never mutated during rendering; a leaf node's render closure may read it
/// to produce content that depends on caller-supplied state rather than on
/// anything fixed at construction time.
#[derive(Debug, Clone, Default)]
pub struct Context {
    values: IndexMap<String, String>,
}

impl Context {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, consuming and returning the context
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Add a value in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up a value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Look up a value that must be present
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| RenderError::MissingContext(key.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
