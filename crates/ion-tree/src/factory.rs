//! Construction of elements.

use std::sync::Arc;

use crate::{Element, IonType, Timestamp};

/// Builds correctly typed elements from native values.
///
/// Implementors only provide [`new_element`](ValueFactory::new_element); the
/// typed constructors are derived from it. A factory is shared by every value
/// a parser produces and must not hold per-value state.
pub trait ValueFactory: Send + Sync {
    /// Allocate a node for `element`.
    fn new_element(&self, element: Element) -> Arc<Element>;

    fn new_null(&self, ion_type: IonType) -> Arc<Element> {
        self.new_element(Element::Null(ion_type))
    }

    fn new_bool(&self, value: bool) -> Arc<Element> {
        self.new_element(Element::Bool(value))
    }

    fn new_int(&self, value: i64) -> Arc<Element> {
        self.new_element(Element::Int(value))
    }

    fn new_float(&self, value: f64) -> Arc<Element> {
        self.new_element(Element::Float(value))
    }

    fn new_string(&self, value: &str) -> Arc<Element> {
        self.new_element(Element::String(value.to_string()))
    }

    fn new_symbol(&self, text: &str) -> Arc<Element> {
        self.new_element(Element::Symbol(text.to_string()))
    }

    /// A timestamp node. Precision and offset are kept as given.
    fn new_timestamp(&self, value: &Timestamp) -> Arc<Element> {
        self.new_element(Element::Timestamp(value.clone()))
    }

    /// A blob node sharing `bytes`.
    fn new_blob(&self, bytes: Arc<[u8]>) -> Arc<Element> {
        self.new_element(Element::Blob(bytes))
    }

    /// A clob node sharing `bytes`.
    fn new_clob(&self, bytes: Arc<[u8]>) -> Arc<Element> {
        self.new_element(Element::Clob(bytes))
    }

    fn new_list(&self, items: Vec<Element>) -> Arc<Element> {
        self.new_element(Element::List(items))
    }
}

/// The default factory: one `Arc` allocation per node, no other state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementSystem;

impl ElementSystem {
    pub fn new() -> Self {
        ElementSystem
    }
}

impl ValueFactory for ElementSystem {
    fn new_element(&self, element: Element) -> Arc<Element> {
        Arc::new(element)
    }
}
