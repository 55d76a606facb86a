//! Options for format-specific parsers.

use std::fmt;
use std::sync::Arc;

use ion_tree::{ElementSystem, ValueFactory};

/// Options for an [`IonParser`](crate::IonParser).
#[derive(Clone)]
pub struct ParserOptions {
    /// Name of the source, used when rendering diagnostics (default: "<input>")
    pub source_name: String,

    /// Factory handed to consumers that need to build elements (default: [`ElementSystem`])
    pub factory: Arc<dyn ValueFactory>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            source_name: "<input>".to_string(),
            factory: Arc::new(ElementSystem),
        }
    }
}

impl fmt::Debug for ParserOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserOptions")
            .field("source_name", &self.source_name)
            .finish_non_exhaustive()
    }
}

impl ParserOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source name shown in diagnostics.
    pub fn source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self
    }

    /// Use a custom value factory.
    pub fn factory(mut self, factory: Arc<dyn ValueFactory>) -> Self {
        self.factory = factory;
        self
    }
}
