//! Values a scanner decodes before any element is built.

use std::any::type_name;
use std::sync::Arc;

use ion_tree::{Element, Timestamp};

/// The already-decoded value of an embedded object token.
///
/// Scanners that build whole subtrees hand out [`EmbeddedObject::Element`];
/// others hand out the native primitive and leave element construction to
/// whoever consumes the token.
#[derive(Debug, Clone, PartialEq)]
pub enum EmbeddedObject {
    /// A fully constructed element.
    Element(Arc<Element>),
    /// A timestamp.
    Timestamp(Timestamp),
    /// Raw bytes. The scanner does not say whether they came from a blob or a clob.
    Bytes(Arc<[u8]>),
    /// Any other native primitive.
    Other(Primitive),
}

/// Native primitives that have no dedicated embedded variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl EmbeddedObject {
    /// Name of the concrete Rust type held by this object.
    pub fn type_name(&self) -> &'static str {
        match self {
            EmbeddedObject::Element(_) => type_name::<Element>(),
            EmbeddedObject::Timestamp(_) => type_name::<Timestamp>(),
            EmbeddedObject::Bytes(_) => type_name::<[u8]>(),
            EmbeddedObject::Other(primitive) => primitive.type_name(),
        }
    }
}

impl Primitive {
    /// Name of the concrete Rust type held by this primitive.
    pub fn type_name(&self) -> &'static str {
        match self {
            Primitive::Bool(_) => type_name::<bool>(),
            Primitive::Int(_) => type_name::<i64>(),
            Primitive::Float(_) => type_name::<f64>(),
            Primitive::Text(_) => type_name::<String>(),
        }
    }
}

impl From<Arc<Element>> for EmbeddedObject {
    fn from(value: Arc<Element>) -> Self {
        EmbeddedObject::Element(value)
    }
}

impl From<Element> for EmbeddedObject {
    fn from(value: Element) -> Self {
        EmbeddedObject::Element(Arc::new(value))
    }
}

impl From<Timestamp> for EmbeddedObject {
    fn from(value: Timestamp) -> Self {
        EmbeddedObject::Timestamp(value)
    }
}

impl From<Arc<[u8]>> for EmbeddedObject {
    fn from(value: Arc<[u8]>) -> Self {
        EmbeddedObject::Bytes(value)
    }
}

impl From<Vec<u8>> for EmbeddedObject {
    fn from(value: Vec<u8>) -> Self {
        EmbeddedObject::Bytes(value.into())
    }
}

impl From<&[u8]> for EmbeddedObject {
    fn from(value: &[u8]) -> Self {
        EmbeddedObject::Bytes(value.into())
    }
}

impl From<Primitive> for EmbeddedObject {
    fn from(value: Primitive) -> Self {
        EmbeddedObject::Other(value)
    }
}

impl From<bool> for EmbeddedObject {
    fn from(value: bool) -> Self {
        EmbeddedObject::Other(Primitive::Bool(value))
    }
}

impl From<i64> for EmbeddedObject {
    fn from(value: i64) -> Self {
        EmbeddedObject::Other(Primitive::Int(value))
    }
}

impl From<f64> for EmbeddedObject {
    fn from(value: f64) -> Self {
        EmbeddedObject::Other(Primitive::Float(value))
    }
}

impl From<String> for EmbeddedObject {
    fn from(value: String) -> Self {
        EmbeddedObject::Other(Primitive::Text(value))
    }
}
