//! Deserialization of embedded objects into timestamps.

use ion_parse::{EmbeddedObject, StreamingParser};
use ion_tree::Timestamp;

use crate::ValueDeserializer;
use crate::element::expect_embedded;
use crate::error::{DatabindError, DatabindErrorKind, Result};

/// Reads a [`Timestamp`] from an embedded timestamp or timestamp element.
///
/// No element is built, so any parser will do.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampDeserializer;

impl ValueDeserializer<Timestamp> for TimestampDeserializer {
    fn deserialize(&self, parser: &dyn StreamingParser) -> Result<Timestamp> {
        let embedded = expect_embedded(parser)?;
        let timestamp = match embedded {
            EmbeddedObject::Timestamp(timestamp) => Some(timestamp),
            EmbeddedObject::Element(element) => element.as_timestamp(),
            EmbeddedObject::Bytes(_) | EmbeddedObject::Other(_) => None,
        };
        timestamp.cloned().ok_or_else(|| {
            DatabindError::at(
                DatabindErrorKind::UnsupportedEmbeddedKind {
                    embedded_type: embedded.type_name(),
                    target: "timestamp",
                },
                parser,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use facet_testhelpers::test;
    use ion_parse::{Span, Token, TokenParser, TokenStream};
    use ion_tree::Element;

    fn parser(token: Token) -> TokenParser {
        let mut parser = TokenParser::new(TokenStream::new(vec![token]));
        parser.advance();
        parser
    }

    #[test]
    fn test_reads_embedded_timestamp_without_factory() {
        let ts: Timestamp = "1999-12-31T23:59:59Z".parse().unwrap();
        let parser = parser(Token::embedded(ts.clone(), Span::new(0, 20)));
        assert_eq!(TimestampDeserializer.deserialize(&parser).unwrap(), ts);
    }

    #[test]
    fn test_reads_timestamp_element() {
        let ts: Timestamp = "1999-12T".parse().unwrap();
        let node = Arc::new(Element::Timestamp(ts.clone()));
        let parser = parser(Token::embedded(node, Span::new(0, 8)));
        assert_eq!(TimestampDeserializer.deserialize(&parser).unwrap(), ts);
    }

    #[test]
    fn test_rejects_other_elements() {
        let parser = parser(Token::embedded(Element::Int(5), Span::new(0, 1)));
        let err = TimestampDeserializer.deserialize(&parser).unwrap_err();
        assert!(err.is_unsupported_embedded_kind());
        assert!(err.to_string().contains("into timestamp"), "{}", err);
    }
}
