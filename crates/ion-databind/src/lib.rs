//! Deserialize Ion parser output into element trees.
//!
//! A streaming parser stops at tokens whose value it already decoded: an
//! *embedded object*. This crate turns that object into an [`Element`],
//! using the parser's [`ValueFactory`](ion_tree::ValueFactory) when the object
//! is a bare primitive.
//!
//! # Example
//!
//! ```
//! use ion_databind::deserialize_element;
//! use ion_parse::{IonParser, Span, StreamingParser, Token, TokenStream};
//!
//! let token = Token::embedded(vec![0xcau8, 0xfe], Span::new(0, 2));
//! let mut parser = IonParser::new(TokenStream::new(vec![token]));
//! parser.advance();
//!
//! let element = deserialize_element(&parser).unwrap();
//! assert_eq!(element.as_blob(), Some(&[0xca, 0xfe][..]));
//! ```

use std::sync::Arc;

use ion_parse::StreamingParser;
use ion_tree::Element;

mod element;
mod error;
mod registry;
mod timestamp;
mod tracing_macros;

pub(crate) use tracing_macros::trace;

pub use element::ElementDeserializer;
pub use error::{DatabindError, DatabindErrorKind, Result};
pub use registry::{DeserializerRegistry, ElementModule, Module, ValueDeserializer};
pub use timestamp::TimestampDeserializer;

/// Deserialize the parser's current embedded object into an element.
pub fn deserialize_element(parser: &dyn StreamingParser) -> Result<Arc<Element>> {
    ElementDeserializer.deserialize(parser)
}
