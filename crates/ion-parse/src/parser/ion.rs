//! The Ion-aware parser.

use ion_tree::ValueFactory;

use super::{FactoryCapable, StreamingParser};
use crate::{ParserOptions, Token, TokenStream};

/// A parser over Ion tokens that exposes the factory its values are built with.
#[derive(Debug, Clone)]
pub struct IonParser {
    stream: TokenStream,
    options: ParserOptions,
}

impl IonParser {
    /// Create a parser with default options.
    pub fn new(stream: TokenStream) -> Self {
        Self::with_options(stream, ParserOptions::default())
    }

    pub fn with_options(stream: TokenStream, options: ParserOptions) -> Self {
        Self { stream, options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }
}

impl StreamingParser for IonParser {
    fn current_token(&self) -> Option<&Token> {
        self.stream.current()
    }

    fn position(&self) -> usize {
        self.stream.position()
    }

    fn advance(&mut self) -> Option<&Token> {
        self.stream.advance()
    }

    fn source_name(&self) -> &str {
        &self.options.source_name
    }

    fn factory_capability(&self) -> Option<&dyn FactoryCapable> {
        Some(self)
    }
}

impl FactoryCapable for IonParser {
    fn value_factory(&self) -> &dyn ValueFactory {
        self.options.factory.as_ref()
    }
}
