use std::sync::Arc;

use super::*;
use crate::{ParserOptions, Primitive, Span, TokenKind};
use facet_testhelpers::test;
use ion_tree::{Element, ElementSystem, Timestamp};
use tracing::trace;

fn stream() -> TokenStream {
    [
        Token::new(TokenKind::StartStruct, Span::new(0, 1)),
        Token::with_text(TokenKind::FieldName, Span::new(2, 7), "stamp"),
        Token::embedded(
            Timestamp::with_year(2024).unwrap(),
            Span::new(9, 14),
        ),
        Token::new(TokenKind::EndStruct, Span::new(15, 16)),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_stream_starts_before_first_token() {
    let mut parser = TokenParser::new(stream());
    assert_eq!(parser.position(), 0);
    assert!(parser.current_token().is_none());
    assert!(parser.embedded_object().is_none());

    let kind = parser.advance().map(|t| t.kind);
    assert_eq!(kind, Some(TokenKind::StartStruct));
    assert_eq!(parser.position(), 1);
}

#[test]
fn test_embedded_object_only_on_embedded_tokens() {
    let mut parser = TokenParser::new(stream());
    parser.advance();
    parser.advance();
    assert_eq!(parser.current_token().map(|t| t.kind), Some(TokenKind::FieldName));
    assert!(parser.embedded_object().is_none());

    parser.advance();
    let embedded = parser.embedded_object().expect("embedded timestamp");
    trace!(?embedded, "embedded");
    assert!(matches!(embedded, EmbeddedObject::Timestamp(_)));
}

#[test]
fn test_embedded_payload_ignored_on_other_kinds() {
    let mut token = Token::new(TokenKind::Scalar, Span::new(0, 1));
    token.embedded = Some(EmbeddedObject::Other(Primitive::Int(1)));
    assert!(token.embedded_object().is_none());
}

#[test]
fn test_stream_exhaustion() {
    let mut parser = TokenParser::new(stream());
    for _ in 0..4 {
        assert!(parser.advance().is_some());
    }
    assert!(parser.advance().is_none());
    assert!(parser.current_token().is_none());
    assert_eq!(parser.position(), 5);
    assert!(parser.advance().is_none());
    assert_eq!(parser.position(), 5);
}

#[test]
fn test_only_ion_parser_is_factory_capable() {
    let generic = TokenParser::new(stream());
    assert!(generic.factory_capability().is_none());

    let ion = IonParser::new(stream());
    let capability = ion.factory_capability().expect("ion parser has a factory");
    let node = capability.value_factory().new_int(3);
    assert_eq!(*node, Element::Int(3));
}

#[test]
fn test_ion_parser_uses_configured_factory() {
    let factory: Arc<dyn ion_tree::ValueFactory> = Arc::new(ElementSystem);
    let options = ParserOptions::new()
        .source_name("config.ion")
        .factory(Arc::clone(&factory));
    let parser = IonParser::with_options(stream(), options);

    assert_eq!(parser.source_name(), "config.ion");
    assert!(Arc::ptr_eq(&parser.options().factory, &factory));
}

#[test]
fn test_source_names() {
    assert_eq!(TokenParser::new(stream()).source_name(), "<input>");
    assert_eq!(
        TokenParser::new(stream())
            .with_source_name("a.ion")
            .source_name(),
        "a.ion"
    );
    assert_eq!(IonParser::new(stream()).source_name(), "<input>");
}
