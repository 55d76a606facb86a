//! In-memory tree representation of Ion values.
//!
//! This crate provides the value domain that parsers deserialize into:
//! [`Element`] nodes, Ion [`Timestamp`]s with their precision and offset, and
//! the [`ValueFactory`] that parsers use to construct correctly typed nodes.

mod element;
mod factory;
mod timestamp;

pub use element::{Element, Field, IonType, Struct};
pub use factory::{ElementSystem, ValueFactory};
pub use timestamp::{Precision, Timestamp, TimestampError};

#[cfg(test)]
mod tests;
