//! Token types produced by an Ion scanner.

use crate::{EmbeddedObject, Span};

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Structural tokens
    /// `{`
    StartStruct,
    /// `}`
    EndStruct,
    /// `[` or `(`
    StartList,
    /// `]` or `)`
    EndList,
    /// A struct field name.
    FieldName,

    // Value tokens
    /// A scalar whose value is carried as text.
    Scalar,
    /// A value the scanner already decoded; see [`Token::embedded`].
    EmbeddedObject,
    /// `null` or a typed null.
    Null,

    /// End of input
    Eof,
}

/// A token with its kind, span, and payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The span in the source.
    pub span: Span,
    /// Text of field names and text scalars.
    pub text: Option<String>,
    /// Decoded value of an [`TokenKind::EmbeddedObject`] token.
    pub embedded: Option<EmbeddedObject>,
}

impl Token {
    /// Create a token with no payload.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self {
            kind,
            span,
            text: None,
            embedded: None,
        }
    }

    /// Create a field name or text scalar token.
    pub fn with_text(kind: TokenKind, span: Span, text: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            text: Some(text.into()),
            embedded: None,
        }
    }

    /// Create an embedded object token.
    pub fn embedded(object: impl Into<EmbeddedObject>, span: Span) -> Self {
        Self {
            kind: TokenKind::EmbeddedObject,
            span,
            text: None,
            embedded: Some(object.into()),
        }
    }

    /// The embedded object, if this is an embedded object token.
    pub fn embedded_object(&self) -> Option<&EmbeddedObject> {
        match self.kind {
            TokenKind::EmbeddedObject => self.embedded.as_ref(),
            _ => None,
        }
    }
}
