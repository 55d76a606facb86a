//! Streaming token parsers for Ion.
//!
//! Scanning text or binary Ion into tokens happens elsewhere; this crate
//! defines what a parser exposes once tokens exist: a cursor, the current
//! token's already-decoded [`EmbeddedObject`], and, for Ion-aware parsers,
//! the [`ValueFactory`](ion_tree::ValueFactory) used to build elements.

mod embedded;
mod options;
mod parser;
mod span;
mod stream;
mod token;

pub use embedded::{EmbeddedObject, Primitive};
pub use options::ParserOptions;
pub use parser::{FactoryCapable, IonParser, StreamingParser, TokenParser};
pub use span::Span;
pub use stream::TokenStream;
pub use token::{Token, TokenKind};
