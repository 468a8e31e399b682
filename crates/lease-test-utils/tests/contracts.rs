//! Contract tests for the shared fixtures.
//!
//! Other crates' tests lean on these values being internally consistent, so
//! the relationships between them are pinned here.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use lease_proto::google::protobuf::datetime_from_timestamp;
use lease_proto::v1::{AsOfDate, Lease, LeaseEvent, LeaseObservation, NewLease, Payment};
use lease_test_utils::{LeaseFactory, assert_round_trip, assert_zero_value};

/// Contract: every factory value survives the binary codec.
#[test]
fn contract_factory_values_round_trip() {
    assert_round_trip(&LeaseFactory::lease());
    assert_round_trip(&LeaseFactory::new_lease());
    assert_round_trip(&LeaseFactory::payment("P1"));
    assert_round_trip(&LeaseFactory::observation());
    assert_round_trip(&LeaseFactory::as_of_date());
    assert_round_trip(&LeaseFactory::as_of_both());
    for event in LeaseFactory::history() {
        assert_round_trip(&event);
    }
}

/// Contract: every message decodes an empty buffer to its zero value.
#[test]
fn contract_zero_values() {
    assert_zero_value::<AsOfDate>();
    assert_zero_value::<Lease>();
    assert_zero_value::<NewLease>();
    assert_zero_value::<Payment>();
    assert_zero_value::<LeaseEvent>();
    assert_zero_value::<LeaseObservation>();
}

/// Contract: the creation request describes the same lease as the record.
#[test]
fn contract_new_lease_matches_lease() {
    let lease = LeaseFactory::lease();
    let request = LeaseFactory::new_lease();
    assert_eq!(request.user_id, lease.user_id);
    assert_eq!(request.maturity_date, lease.maturity_date);
    assert_eq!(request.monthly_payment_amount, lease.monthly_payment_amount);
}

/// Contract: the observation's amount due is scheduled minus paid.
#[test]
fn contract_observation_totals_balance() {
    let observation = LeaseFactory::observation();
    let scheduled = observation.total_scheduled.as_ref().unwrap();
    let paid = observation.total_paid.as_ref().unwrap();
    let due = observation.amount_due.as_ref().unwrap();

    assert_eq!(scheduled.currency_code, due.currency_code);
    assert_eq!(paid.currency_code, due.currency_code);
    assert_eq!(
        scheduled.total_nanos() - paid.total_nanos(),
        due.total_nanos()
    );
}

/// Contract: history events are numbered and timestamped in order.
#[test]
fn contract_history_is_ordered() {
    let history = LeaseFactory::history();
    let created: Vec<_> = history
        .iter()
        .map(|event| datetime_from_timestamp(event.event_created_time.as_ref().unwrap()).unwrap())
        .collect();

    assert!(history.windows(2).all(|pair| pair[0].event_id < pair[1].event_id));
    assert!(created.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(history[0].event_type, "LeaseCreated");
}

/// Contract: the `Any` helpers agree with the registry's type URLs.
#[test]
fn contract_pack_any_uses_registry_type_url() {
    let any = lease_proto::codec::pack_any(&LeaseFactory::payment("P7"));
    assert_eq!(any.type_url, lease_proto::MessageKind::Payment.type_url());

    let payment: Payment = lease_proto::codec::unpack_any(&any).unwrap();
    assert_eq!(payment, LeaseFactory::payment("P7"));
}
