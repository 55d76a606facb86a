//! Deserialization of embedded objects into elements.

use std::sync::Arc;

use ion_parse::{EmbeddedObject, StreamingParser};
use ion_tree::{Element, ValueFactory};

use crate::ValueDeserializer;
use crate::error::{DatabindError, DatabindErrorKind, Result};

const TARGET: &str = "element";

/// Turns the current token's embedded object into an [`Element`].
///
/// - An embedded element is returned as is (same `Arc`, nothing allocated).
/// - A timestamp becomes a timestamp element, precision and offset intact.
/// - Raw bytes become a blob. Scanners do not record whether bytes came from a
///   blob or a clob, and blob is the reading that never misrepresents binary
///   data as text.
///
/// Everything but passthrough needs the parser's [`ValueFactory`], so on a
/// parser without the factory capability only embedded elements succeed.
/// The parser is never advanced.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementDeserializer;

impl ElementDeserializer {
    pub fn new() -> Self {
        ElementDeserializer
    }
}

impl ValueDeserializer<Arc<Element>> for ElementDeserializer {
    fn deserialize(&self, parser: &dyn StreamingParser) -> Result<Arc<Element>> {
        let embedded = expect_embedded(parser)?;
        match embedded {
            EmbeddedObject::Element(element) => {
                crate::trace!("passing embedded element through");
                Ok(Arc::clone(element))
            }
            EmbeddedObject::Timestamp(timestamp) => {
                let factory = factory_for(parser, embedded)?;
                crate::trace!(%timestamp, "wrapping embedded timestamp");
                Ok(factory.new_timestamp(timestamp))
            }
            EmbeddedObject::Bytes(bytes) => {
                let factory = factory_for(parser, embedded)?;
                crate::trace!(len = bytes.len(), "wrapping embedded bytes as blob");
                Ok(factory.new_blob(Arc::clone(bytes)))
            }
            EmbeddedObject::Other(_) => {
                factory_for(parser, embedded)?;
                Err(DatabindError::at(
                    DatabindErrorKind::UnsupportedEmbeddedKind {
                        embedded_type: embedded.type_name(),
                        target: TARGET,
                    },
                    parser,
                ))
            }
        }
    }
}

/// The embedded object under the cursor.
pub(crate) fn expect_embedded(parser: &dyn StreamingParser) -> Result<&EmbeddedObject> {
    parser.embedded_object().ok_or_else(|| {
        DatabindError::at(
            DatabindErrorKind::NoEmbeddedObject {
                token: parser.current_token().map(|t| t.kind),
            },
            parser,
        )
    })
}

fn factory_for<'p>(
    parser: &'p dyn StreamingParser,
    embedded: &EmbeddedObject,
) -> Result<&'p dyn ValueFactory> {
    match parser.factory_capability() {
        Some(capability) => Ok(capability.value_factory()),
        None => Err(DatabindError::at(
            DatabindErrorKind::UnsupportedParser {
                embedded_type: embedded.type_name(),
                target: TARGET,
            },
            parser,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;
    use ion_parse::{IonParser, Span, Token, TokenKind, TokenParser, TokenStream};
    use ion_tree::Timestamp;

    fn positioned<P: StreamingParser>(mut parser: P) -> P {
        parser.advance();
        parser
    }

    fn ion(token: Token) -> IonParser {
        positioned(IonParser::new(TokenStream::new(vec![token])))
    }

    fn generic(token: Token) -> TokenParser {
        positioned(TokenParser::new(TokenStream::new(vec![token])))
    }

    #[test]
    fn test_timestamp_becomes_timestamp_element() {
        let ts: Timestamp = "2010-06-15T03:30:45.123-07:00".parse().unwrap();
        let parser = ion(Token::embedded(ts.clone(), Span::new(0, 29)));

        let element = ElementDeserializer.deserialize(&parser).unwrap();
        assert_eq!(element.as_timestamp(), Some(&ts));
    }

    #[test]
    fn test_bytes_become_blob() {
        let parser = ion(Token::embedded(vec![0u8, 159, 146, 150], Span::new(0, 4)));

        let element = ElementDeserializer.deserialize(&parser).unwrap();
        assert_eq!(element.as_blob(), Some(&[0u8, 159, 146, 150][..]));
        assert!(element.as_clob().is_none());
    }

    #[test]
    fn test_blob_shares_embedded_bytes() {
        let bytes: Arc<[u8]> = Arc::from(&b"shared"[..]);
        let parser = ion(Token::embedded(Arc::clone(&bytes), Span::new(0, 6)));

        let element = ElementDeserializer.deserialize(&parser).unwrap();
        match &*element {
            Element::Blob(blob) => assert!(Arc::ptr_eq(blob, &bytes)),
            other => panic!("expected blob, got {:?}", other),
        }
    }

    #[test]
    fn test_element_passthrough_on_generic_parser() {
        let node = Arc::new(Element::Symbol("abc".into()));
        let parser = generic(Token::embedded(Arc::clone(&node), Span::new(0, 3)));

        let element = ElementDeserializer.deserialize(&parser).unwrap();
        assert!(Arc::ptr_eq(&element, &node));
    }

    #[test]
    fn test_generic_parser_rejects_primitives_before_kind_check() {
        let parser = generic(Token::embedded(42i64, Span::new(0, 2)));

        let err = ElementDeserializer.deserialize(&parser).unwrap_err();
        assert!(err.is_unsupported_parser(), "got {:?}", err);
    }

    #[test]
    fn test_unknown_primitive_on_ion_parser() {
        let parser = ion(Token::embedded(42i64, Span::new(0, 2)));

        let err = ElementDeserializer.deserialize(&parser).unwrap_err();
        assert!(err.is_unsupported_embedded_kind(), "got {:?}", err);
        assert_eq!(err.span, Some(Span::new(0, 2)));
    }

    #[test]
    fn test_requires_embedded_token() {
        let parser = ion(Token::new(TokenKind::StartStruct, Span::new(0, 1)));

        let err = ElementDeserializer.deserialize(&parser).unwrap_err();
        assert_eq!(
            err.kind,
            DatabindErrorKind::NoEmbeddedObject {
                token: Some(TokenKind::StartStruct)
            }
        );

        let unpositioned = IonParser::new(TokenStream::default());
        let err = ElementDeserializer.deserialize(&unpositioned).unwrap_err();
        assert_eq!(err.kind, DatabindErrorKind::NoEmbeddedObject { token: None });
        assert_eq!(err.span, None);
    }
}
