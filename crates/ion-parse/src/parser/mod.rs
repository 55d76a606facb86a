//! Streaming parser interface.
//!
//! [`StreamingParser`] is what every parser offers: a cursor over tokens and
//! the embedded object of the current token. Parsers that know how to build
//! Ion elements additionally implement [`FactoryCapable`] and advertise it
//! through [`StreamingParser::factory_capability`].

use ion_tree::ValueFactory;

use crate::{EmbeddedObject, Token, TokenStream};

mod ion;
pub use ion::IonParser;

#[cfg(test)]
mod tests;

/// A cursor over a token stream.
pub trait StreamingParser {
    /// The token under the cursor, `None` before the first token and after the last.
    fn current_token(&self) -> Option<&Token>;

    /// Cursor position: 0 before the first token, `n` on the `n`th token,
    /// and one past the last token once the stream is exhausted.
    fn position(&self) -> usize;

    /// Move to the next token.
    fn advance(&mut self) -> Option<&Token>;

    /// Name of the source the tokens came from.
    fn source_name(&self) -> &str;

    /// The current token's embedded object.
    ///
    /// `None` unless the cursor is on a [`TokenKind::EmbeddedObject`](crate::TokenKind::EmbeddedObject) token.
    fn embedded_object(&self) -> Option<&EmbeddedObject> {
        self.current_token().and_then(Token::embedded_object)
    }

    /// The element-building capability, if this parser has one.
    fn factory_capability(&self) -> Option<&dyn FactoryCapable> {
        None
    }
}

/// Capability of format-specific parsers: they can hand out a [`ValueFactory`].
pub trait FactoryCapable {
    /// The factory elements for this parser's values are built with.
    fn value_factory(&self) -> &dyn ValueFactory;
}

/// A parser with no knowledge of Ion elements.
#[derive(Debug, Clone)]
pub struct TokenParser {
    stream: TokenStream,
    source_name: String,
}

impl TokenParser {
    /// Create a parser over `stream`.
    pub fn new(stream: TokenStream) -> Self {
        Self {
            stream,
            source_name: "<input>".to_string(),
        }
    }

    /// Set the source name shown in diagnostics.
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self
    }
}

impl StreamingParser for TokenParser {
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
        &self.source_name
    }
}
