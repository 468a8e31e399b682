//! Property-based tests for the lease codec.
//!
//! These tests use proptest to verify the round-trip and robustness laws
//! hold across randomly generated messages and byte strings.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use lease_proto::codec;
use lease_proto::json;
use lease_proto::v1::{AsOfDate, Lease, LeaseEvent, LeaseObservation, NewLease, Payment};
use lease_proto::LeaseStatusValue;
use lease_test_utils::strategies::{
    arb_as_of_date, arb_lease, arb_lease_event, arb_lease_observation, arb_new_lease,
    arb_payment,
};
use prost::{Message, Name};
use proptest::prelude::*;

fn decodes_or_malformed<M: Message + Name + Default>(bytes: &[u8]) -> bool {
    match codec::decode::<M>(bytes) {
        Ok(_) => true,
        Err(err) => err.is_malformed_input(),
    }
}

proptest! {
    #[test]
    fn prop_as_of_date_round_trips(message in arb_as_of_date()) {
        let decoded: AsOfDate = codec::decode(&codec::encode(&message)).expect("decode");
        prop_assert_eq!(decoded, message);
    }

    #[test]
    fn prop_lease_round_trips(message in arb_lease()) {
        let decoded: Lease = codec::decode(&codec::encode(&message)).expect("decode");
        prop_assert_eq!(decoded, message);
    }

    #[test]
    fn prop_new_lease_round_trips(message in arb_new_lease()) {
        let decoded: NewLease = codec::decode(&codec::encode(&message)).expect("decode");
        prop_assert_eq!(decoded, message);
    }

    #[test]
    fn prop_payment_round_trips(message in arb_payment()) {
        let decoded: Payment = codec::decode(&codec::encode(&message)).expect("decode");
        prop_assert_eq!(decoded, message);
    }

    #[test]
    fn prop_lease_event_round_trips(message in arb_lease_event()) {
        let decoded: LeaseEvent = codec::decode(&codec::encode(&message)).expect("decode");
        prop_assert_eq!(decoded, message);
    }

    #[test]
    fn prop_lease_observation_round_trips(message in arb_lease_observation()) {
        let bytes = codec::encode(&message);
        let decoded: LeaseObservation = codec::decode(&bytes).expect("decode");
        prop_assert_eq!(
            LeaseStatusValue::from(decoded.lease_status),
            LeaseStatusValue::from(message.lease_status)
        );
        prop_assert_eq!(decoded, message);
    }

    #[test]
    fn prop_observation_json_round_trips(message in arb_lease_observation()) {
        let value = json::to_json(&message).expect("to json");
        let back: LeaseObservation = json::from_json(value).expect("from json");
        prop_assert_eq!(back, message);
    }

    #[test]
    fn prop_event_json_round_trips(message in arb_lease_event()) {
        let value = json::to_json(&message).expect("to json");
        let back: LeaseEvent = json::from_json(value).expect("from json");
        prop_assert_eq!(back, message);
    }

    #[test]
    fn prop_event_streams_round_trip(events in prop::collection::vec(arb_lease_event(), 0..8)) {
        let bytes = codec::encode_length_delimited_stream(&events);
        let decoded: Vec<LeaseEvent> =
            codec::decode_length_delimited_stream(&bytes).expect("decode");
        prop_assert_eq!(decoded, events);
    }

    /// Arbitrary input either decodes or is reported as malformed; it never panics.
    #[test]
    fn prop_arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assert!(decodes_or_malformed::<AsOfDate>(&bytes));
        prop_assert!(decodes_or_malformed::<Lease>(&bytes));
        prop_assert!(decodes_or_malformed::<NewLease>(&bytes));
        prop_assert!(decodes_or_malformed::<Payment>(&bytes));
        prop_assert!(decodes_or_malformed::<LeaseEvent>(&bytes));
        prop_assert!(decodes_or_malformed::<LeaseObservation>(&bytes));
    }

    /// Appending an unknown field never changes the decoded value.
    #[test]
    fn prop_unknown_trailing_field_is_ignored(
        message in arb_lease(),
        field_number in 6_u32..10_000,
        value in any::<u64>(),
    ) {
        let mut bytes = codec::encode(&message);
        bytes.extend(lease_test_utils::wire::key(field_number, 0));
        bytes.extend(lease_test_utils::wire::varint(value));
        let decoded: Lease = codec::decode(&bytes).expect("decode");
        prop_assert_eq!(decoded, message);
    }
}
