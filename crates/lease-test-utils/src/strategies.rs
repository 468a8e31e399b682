//! `proptest` strategies for every lease message.
//!
//! Values cover the whole wire range of each field, including partial dates,
//! mixed-sign money and unnamed `lease_status` numbers, since the codec must
//! carry all of them unchanged.

use lease_proto::google::protobuf::Timestamp;
use lease_proto::google::r#type::{Date, Money};
use lease_proto::v1::{AsOfDate, Lease, LeaseEvent, LeaseObservation, NewLease, Payment};
use proptest::prelude::*;

/// Generates an identifier-like string, sometimes empty.
pub fn arb_id() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[A-Za-z0-9_-]{1,24}"]
}

/// Generates a timestamp with nanos in the canonical range.
pub fn arb_timestamp() -> impl Strategy<Value = Timestamp> {
    (-62_135_596_800_i64..253_402_300_800, 0..1_000_000_000_i32)
        .prop_map(|(seconds, nanos)| Timestamp { seconds, nanos })
}

/// Generates dates, including partial ones with zero components.
pub fn arb_date() -> impl Strategy<Value = Date> {
    (0..=9999_i32, 0..=12_i32, 0..=31_i32).prop_map(|(year, month, day)| Date::new(year, month, day))
}

/// Generates amounts in any currency-like code.
pub fn arb_money() -> impl Strategy<Value = Money> {
    ("[A-Z]{3}", any::<i64>(), -999_999_999..=999_999_999_i32)
        .prop_map(|(code, units, nanos)| Money::new(code, units, nanos))
}

/// Generates [`AsOfDate`] values with either, both or neither field set.
pub fn arb_as_of_date() -> impl Strategy<Value = AsOfDate> {
    (
        proptest::option::of(arb_timestamp()),
        proptest::option::of(arb_date()),
    )
        .prop_map(|(as_at_time, as_on_date)| AsOfDate {
            as_at_time,
            as_on_date,
        })
}

/// Generates [`Lease`] values.
pub fn arb_lease() -> impl Strategy<Value = Lease> {
    (
        arb_id(),
        arb_id(),
        proptest::option::of(arb_date()),
        proptest::option::of(arb_date()),
        proptest::option::of(arb_money()),
    )
        .prop_map(
            |(lease_id, user_id, start_date, maturity_date, monthly_payment_amount)| Lease {
                lease_id,
                user_id,
                start_date,
                maturity_date,
                monthly_payment_amount,
            },
        )
}

/// Generates [`NewLease`] values.
pub fn arb_new_lease() -> impl Strategy<Value = NewLease> {
    (
        arb_id(),
        proptest::option::of(arb_date()),
        proptest::option::of(arb_money()),
    )
        .prop_map(|(user_id, maturity_date, monthly_payment_amount)| NewLease {
            user_id,
            maturity_date,
            monthly_payment_amount,
        })
}

/// Generates [`Payment`] values.
pub fn arb_payment() -> impl Strategy<Value = Payment> {
    (arb_id(), proptest::option::of(arb_money())).prop_map(|(payment_id, payment_amount)| {
        Payment {
            payment_id,
            payment_amount,
        }
    })
}

/// Generates [`LeaseEvent`] values with free-form event types.
pub fn arb_lease_event() -> impl Strategy<Value = LeaseEvent> {
    (
        any::<i32>(),
        proptest::option::of(arb_timestamp()),
        proptest::option::of(arb_date()),
        "\\PC{0,32}",
    )
        .prop_map(
            |(event_id, event_created_time, event_effective_date, event_type)| LeaseEvent {
                event_id,
                event_created_time,
                event_effective_date,
                event_type,
            },
        )
}

/// Generates [`LeaseObservation`] values, including unnamed status numbers.
pub fn arb_lease_observation() -> impl Strategy<Value = LeaseObservation> {
    (
        proptest::option::of(arb_date()),
        proptest::option::of(arb_lease()),
        proptest::option::of(arb_money()),
        proptest::option::of(arb_money()),
        proptest::option::of(arb_money()),
        prop_oneof![0..=2_i32, any::<i32>()],
    )
        .prop_map(
            |(observation_date, lease, total_scheduled, total_paid, amount_due, lease_status)| {
                LeaseObservation {
                    observation_date,
                    lease,
                    total_scheduled,
                    total_paid,
                    amount_due,
                    lease_status,
                }
            },
        )
}
