//! Crate-internal `trace!` for the deserializers.
//!
//! Expands to `tracing::trace!` under `cfg(test)` or the `tracing` feature and
//! to nothing otherwise, so `tracing` stays an optional dependency.

#[cfg(any(test, feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

#[cfg(not(any(test, feature = "tracing")))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

pub(crate) use trace;

#[cfg(test)]
mod tests {
    use facet_testhelpers::test;

    #[test]
    fn test_accepts_field_forms_used_by_deserializers() {
        let name = "ion-element";
        let bytes = [1u8, 2, 3];
        crate::trace!("plain message");
        crate::trace!(%name, "display field");
        crate::trace!(module = name, len = bytes.len(), "named fields");
    }
}
