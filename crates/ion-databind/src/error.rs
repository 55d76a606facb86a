//! Error types for ion-databind.

use std::fmt;

use ariadne::{Color, Label, Report, ReportKind, Source};
use ion_parse::{Span, StreamingParser, TokenKind};

/// Error raised while deserializing a value from a parser.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabindError {
    pub kind: DatabindErrorKind,
    /// Span of the token the parser was on, if any.
    pub span: Option<Span>,
}

/// Kind of databind error.
#[derive(Debug, Clone, PartialEq)]
pub enum DatabindErrorKind {
    /// The embedded object needs a factory to become an element and the parser has none.
    UnsupportedParser {
        embedded_type: &'static str,
        target: &'static str,
    },
    /// The embedded object is of a type that cannot become the target.
    UnsupportedEmbeddedKind {
        embedded_type: &'static str,
        target: &'static str,
    },
    /// The parser is not positioned on an embedded object token.
    NoEmbeddedObject { token: Option<TokenKind> },
    /// Nothing is registered for the requested target type.
    NoDeserializer { target: &'static str },
}

impl DatabindError {
    pub fn new(kind: DatabindErrorKind, span: Option<Span>) -> Self {
        Self { kind, span }
    }

    /// An error located at the parser's current token.
    pub(crate) fn at(kind: DatabindErrorKind, parser: &dyn StreamingParser) -> Self {
        Self::new(kind, parser.current_token().map(|t| t.span))
    }

    /// Whether the parser lacked the factory capability.
    pub fn is_unsupported_parser(&self) -> bool {
        matches!(self.kind, DatabindErrorKind::UnsupportedParser { .. })
    }

    /// Whether the embedded object had an unsupported type.
    pub fn is_unsupported_embedded_kind(&self) -> bool {
        matches!(self.kind, DatabindErrorKind::UnsupportedEmbeddedKind { .. })
    }

    /// Render this error with ariadne.
    ///
    /// Returns a string containing the formatted error message with source context.
    pub fn render(&self, filename: &str, source: &str) -> String {
        let mut output = Vec::new();
        self.write_report(filename, source, &mut output);
        String::from_utf8(output).unwrap_or_else(|_| format!("{}", self))
    }

    /// Write the error report to a writer.
    pub fn write_report<W: std::io::Write>(&self, filename: &str, source: &str, writer: W) {
        let report = self.build_report(filename);
        let _ = report
            .finish()
            .write((filename, Source::from(source)), writer);
    }

    fn build_report<'a>(
        &self,
        filename: &'a str,
    ) -> ariadne::ReportBuilder<'static, (&'a str, std::ops::Range<usize>)> {
        let range: std::ops::Range<usize> = self.span.unwrap_or_default().into();
        let report = Report::build(ReportKind::Error, (filename, range.clone()))
            .with_message(self.kind.to_string());

        match &self.kind {
            DatabindErrorKind::UnsupportedParser { .. } => report
                .with_label(
                    Label::new((filename, range))
                        .with_message("this value needs an Ion-aware parser")
                        .with_color(Color::Red),
                )
                .with_help("read the input with an IonParser so elements can be built"),

            DatabindErrorKind::UnsupportedEmbeddedKind { .. } => report.with_label(
                Label::new((filename, range))
                    .with_message("unsupported embedded value")
                    .with_color(Color::Red),
            ),

            DatabindErrorKind::NoEmbeddedObject { .. } => report.with_label(
                Label::new((filename, range))
                    .with_message("expected an embedded value here")
                    .with_color(Color::Red),
            ),

            DatabindErrorKind::NoDeserializer { .. } => report
                .with_label(
                    Label::new((filename, range))
                        .with_message("while reading this value")
                        .with_color(Color::Blue),
                )
                .with_help("register a module that provides this deserializer"),
        }
    }
}

impl fmt::Display for DatabindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(span) = &self.span {
            write!(f, " at offset {}", span.start)?;
        }
        Ok(())
    }
}

impl std::error::Error for DatabindError {}

impl fmt::Display for DatabindErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabindErrorKind::UnsupportedParser {
                embedded_type,
                target,
            } => write!(
                f,
                "unsupported parser for deserializing {} into {}",
                embedded_type, target
            ),
            DatabindErrorKind::UnsupportedEmbeddedKind {
                embedded_type,
                target,
            } => write!(
                f,
                "cannot deserialize embedded object type {} into {}",
                embedded_type, target
            ),
            DatabindErrorKind::NoEmbeddedObject { token: Some(kind) } => {
                write!(f, "expected an embedded object, found {:?}", kind)
            }
            DatabindErrorKind::NoEmbeddedObject { token: None } => {
                write!(f, "expected an embedded object, found no token")
            }
            DatabindErrorKind::NoDeserializer { target } => {
                write!(f, "no deserializer registered for {}", target)
            }
        }
    }
}

/// Result type for ion-databind operations.
pub type Result<T> = std::result::Result<T, DatabindError>;
