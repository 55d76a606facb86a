use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use facet_testhelpers::test;

#[test]
fn test_element_system_builds_typed_nodes() {
    let system = ElementSystem::new();

    assert_eq!(*system.new_bool(true), Element::Bool(true));
    assert_eq!(*system.new_int(-7), Element::Int(-7));
    assert_eq!(*system.new_float(0.25), Element::Float(0.25));
    assert_eq!(system.new_string("hi").as_str(), Some("hi"));
    assert_eq!(system.new_symbol("sym").as_symbol(), Some("sym"));
    assert_eq!(system.new_null(IonType::Clob).ion_type(), IonType::Clob);
    assert_eq!(
        system.new_list(vec![Element::Int(1)]).as_sequence(),
        Some(&[Element::Int(1)][..])
    );
}

#[test]
fn test_new_timestamp_keeps_precision_and_offset() {
    let ts: Timestamp = "2001-01-01T00:00:00.123+01:30".parse().unwrap();
    let node = ElementSystem.new_timestamp(&ts);

    let read_back = node.as_timestamp().expect("timestamp node");
    assert_eq!(read_back, &ts);
    assert_eq!(read_back.precision(), Precision::Fractional(3));
    assert_eq!(read_back.offset(), Some(90));
}

#[test]
fn test_new_blob_shares_bytes() {
    let bytes: Arc<[u8]> = Arc::from(&[0xde, 0xad, 0xbe, 0xef][..]);
    let node = ElementSystem.new_blob(Arc::clone(&bytes));

    assert_eq!(node.ion_type(), IonType::Blob);
    match &*node {
        Element::Blob(shared) => assert!(Arc::ptr_eq(shared, &bytes)),
        other => panic!("expected blob, got {:?}", other),
    }
}

#[test]
fn test_typed_constructors_route_through_new_element() {
    struct Counting(AtomicUsize);

    impl ValueFactory for Counting {
        fn new_element(&self, element: Element) -> Arc<Element> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Arc::new(element)
        }
    }

    let factory = Counting(AtomicUsize::new(0));
    factory.new_blob(Arc::from(&b""[..]));
    factory.new_clob(Arc::from(&b""[..]));
    factory.new_timestamp(&Timestamp::with_year(2020).unwrap());
    assert_eq!(factory.0.load(Ordering::SeqCst), 3);
}

mod proptests {
    use crate::Timestamp;
    use proptest::prelude::*;

    fn timestamp() -> impl Strategy<Value = Timestamp> {
        (
            1i32..=9999,
            1u32..=12,
            1u32..=28,
            0u32..24,
            0u32..60,
            0u32..60,
            prop::option::of(-1439i16..=1439),
            0u8..=9,
            0u32..1_000_000_000,
        )
            .prop_map(|(y, mo, d, h, mi, s, offset, digits, nanos)| {
                let ts = Timestamp::with_second(y, mo, d, h, mi, s, offset).unwrap();
                if digits == 0 {
                    ts
                } else {
                    let scale = 10u32.pow(9 - digits as u32);
                    ts.with_fraction(nanos / scale * scale, digits).unwrap()
                }
            })
    }

    proptest! {
        /// Text form must parse back to an identical timestamp
        #[test]
        fn timestamp_text_roundtrip(ts in timestamp()) {
            let text = ts.to_string();
            let parsed: Timestamp = text.parse().unwrap();
            prop_assert_eq!(parsed, ts, "text was {}", text);
        }
    }
}
