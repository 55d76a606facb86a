//! Element types for Ion values.
//!
//! An [`Element`] is one node of an Ion value tree. Scalars carry their value
//! directly; containers own their children. Nodes are shared as
//! `Arc<Element>` once they leave a [`ValueFactory`](crate::ValueFactory),
//! so a node produced by a parser can be handed to a caller without copying.

use std::sync::Arc;

use crate::Timestamp;

/// The Ion type of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IonType {
    Null,
    Bool,
    Int,
    Float,
    Timestamp,
    String,
    Symbol,
    Blob,
    Clob,
    List,
    SExp,
    Struct,
}

impl IonType {
    /// Lowercase Ion keyword for this type (`blob`, `timestamp`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            IonType::Null => "null",
            IonType::Bool => "bool",
            IonType::Int => "int",
            IonType::Float => "float",
            IonType::Timestamp => "timestamp",
            IonType::String => "string",
            IonType::Symbol => "symbol",
            IonType::Blob => "blob",
            IonType::Clob => "clob",
            IonType::List => "list",
            IonType::SExp => "sexp",
            IonType::Struct => "struct",
        }
    }

    /// Whether values of this type hold raw bytes.
    pub fn is_lob(&self) -> bool {
        matches!(self, IonType::Blob | IonType::Clob)
    }
}

impl std::fmt::Display for IonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in an Ion value tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A typed null (`null.blob`, `null.timestamp`, ...). `null` is `Null(IonType::Null)`.
    Null(IonType),
    Bool(bool),
    Int(i64),
    Float(f64),
    Timestamp(Timestamp),
    String(String),
    Symbol(String),
    /// Binary large object.
    Blob(Arc<[u8]>),
    /// Character large object.
    Clob(Arc<[u8]>),
    List(Vec<Element>),
    SExp(Vec<Element>),
    Struct(Struct),
}

/// An Ion struct: ordered fields, duplicate names allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Struct {
    /// Fields in insertion order.
    pub fields: Vec<Field>,
}

/// A named field of a struct.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub value: Element,
}

impl Element {
    /// The Ion type of this element. Typed nulls report their declared type.
    pub fn ion_type(&self) -> IonType {
        match self {
            Element::Null(ty) => *ty,
            Element::Bool(_) => IonType::Bool,
            Element::Int(_) => IonType::Int,
            Element::Float(_) => IonType::Float,
            Element::Timestamp(_) => IonType::Timestamp,
            Element::String(_) => IonType::String,
            Element::Symbol(_) => IonType::Symbol,
            Element::Blob(_) => IonType::Blob,
            Element::Clob(_) => IonType::Clob,
            Element::List(_) => IonType::List,
            Element::SExp(_) => IonType::SExp,
            Element::Struct(_) => IonType::Struct,
        }
    }

    /// Check if this is a null of any type.
    pub fn is_null(&self) -> bool {
        matches!(self, Element::Null(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Element::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Element::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Element::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as string (strings only, not symbols).
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Element::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the symbol text.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Element::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<&Timestamp> {
        match self {
            Element::Timestamp(ts) => Some(ts),
            _ => None,
        }
    }

    /// Blob bytes. `None` for clobs.
    pub fn as_blob(&self) -> Option<&[u8]> {
        match self {
            Element::Blob(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Clob bytes. `None` for blobs.
    pub fn as_clob(&self) -> Option<&[u8]> {
        match self {
            Element::Clob(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Bytes of either lob type.
    pub fn as_lob(&self) -> Option<&[u8]> {
        match self {
            Element::Blob(bytes) | Element::Clob(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Items of a list or s-expression.
    pub fn as_sequence(&self) -> Option<&[Element]> {
        match self {
            Element::List(items) | Element::SExp(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&Struct> {
        match self {
            Element::Struct(s) => Some(s),
            _ => None,
        }
    }
}

impl Struct {
    pub fn new() -> Self {
        Self::default()
    }

    /// First field with the given name.
    pub fn get(&self, name: &str) -> Option<&Element> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.value)
    }

    /// All fields with the given name, in order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.fields
            .iter()
            .filter(move |f| f.name == name)
            .map(|f| &f.value)
    }

    /// Append a field. Existing fields with the same name are kept.
    pub fn push(&mut self, name: impl Into<String>, value: Element) {
        self.fields.push(Field {
            name: name.into(),
            value,
        });
    }

    /// Iterate over (name, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Element)> {
        self.fields.iter().map(|f| (f.name.as_str(), &f.value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<bool> for Element {
    fn from(value: bool) -> Self {
        Element::Bool(value)
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Element::Int(value)
    }
}

impl From<f64> for Element {
    fn from(value: f64) -> Self {
        Element::Float(value)
    }
}

impl From<Timestamp> for Element {
    fn from(value: Timestamp) -> Self {
        Element::Timestamp(value)
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Element::String(value.to_string())
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Element::String(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    #[test]
    fn test_typed_null_reports_declared_type() {
        assert_eq!(Element::Null(IonType::Blob).ion_type(), IonType::Blob);
        assert!(Element::Null(IonType::Blob).is_null());
        assert_eq!(Element::Null(IonType::Null).ion_type().as_str(), "null");
    }

    #[test]
    fn test_lob_accessors_are_disjoint() {
        let blob = Element::Blob(Arc::from(&b"\x00\xff"[..]));
        let clob = Element::Clob(Arc::from(&b"text"[..]));

        assert_eq!(blob.as_blob(), Some(&b"\x00\xff"[..]));
        assert_eq!(blob.as_clob(), None);
        assert_eq!(clob.as_clob(), Some(&b"text"[..]));
        assert_eq!(clob.as_blob(), None);
        assert_eq!(blob.as_lob(), Some(&b"\x00\xff"[..]));
        assert!(blob.ion_type().is_lob());
        assert_ne!(blob.ion_type(), clob.ion_type());
    }

    #[test]
    fn test_struct_fields() {
        let mut s = Struct::new();
        s.push("name", Element::from("Alice"));
        s.push("tag", Element::Symbol("a".into()));
        s.push("tag", Element::Symbol("b".into()));

        assert_eq!(s.len(), 3);
        assert_eq!(s.get("name").and_then(|v| v.as_str()), Some("Alice"));
        assert_eq!(
            s.get_all("tag").filter_map(|v| v.as_symbol()).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
        assert_eq!(s.get("missing"), None);
    }

    #[test]
    fn test_sequence_access() {
        let list = Element::List(vec![Element::Int(1), Element::Bool(true)]);
        let sexp = Element::SExp(vec![Element::Symbol("+".into())]);
        assert_eq!(list.as_sequence().map(|s| s.len()), Some(2));
        assert_eq!(sexp.as_sequence().map(|s| s.len()), Some(1));
        assert_eq!(list.as_struct(), None);
    }
}
