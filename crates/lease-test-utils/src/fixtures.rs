//! Pre-built test fixtures for common test scenarios.
//!
//! Provides factory functions to create sample messages with sensible defaults.

use lease_proto::google::protobuf::Timestamp;
use lease_proto::google::r#type::{Date, Money};
use lease_proto::v1::{
    AsOfDate, Lease, LeaseEvent, LeaseObservation, LeaseStatus, NewLease, Payment,
};

/// 2024-01-01T00:00:00Z in seconds since the Unix epoch.
pub const JAN_1_2024_SECONDS: i64 = 1_704_067_200;

/// Factory for sample lease messages.
pub struct LeaseFactory;

impl LeaseFactory {
    /// `500.00 USD`.
    pub fn monthly_payment() -> Money {
        Money::new("USD", 500, 0)
    }

    /// Lease `L1` for user `U1`, 2024-01-01 to 2026-01-01 at 500.00 USD a month.
    pub fn lease() -> Lease {
        Lease {
            lease_id: "L1".to_string(),
            user_id: "U1".to_string(),
            start_date: Some(Date::new(2024, 1, 1)),
            maturity_date: Some(Date::new(2026, 1, 1)),
            monthly_payment_amount: Some(Self::monthly_payment()),
        }
    }

    /// Creation request matching [`LeaseFactory::lease`].
    pub fn new_lease() -> NewLease {
        NewLease {
            user_id: "U1".to_string(),
            maturity_date: Some(Date::new(2026, 1, 1)),
            monthly_payment_amount: Some(Self::monthly_payment()),
        }
    }

    /// A payment of the monthly amount.
    pub fn payment(payment_id: &str) -> Payment {
        Payment {
            payment_id: payment_id.to_string(),
            payment_amount: Some(Self::monthly_payment()),
        }
    }

    /// An event recorded at 2024-01-01T00:00:00Z plus `event_id` days.
    pub fn event(event_id: i32, event_type: &str) -> LeaseEvent {
        LeaseEvent {
            event_id,
            event_created_time: Some(Timestamp {
                seconds: JAN_1_2024_SECONDS + i64::from(event_id) * 86_400,
                nanos: 0,
            }),
            event_effective_date: Some(Date::new(2024, 1, 1 + event_id)),
            event_type: event_type.to_string(),
        }
    }

    /// The history of a freshly created lease with one scheduled and one received payment.
    pub fn history() -> Vec<LeaseEvent> {
        vec![
            Self::event(0, "LeaseCreated"),
            Self::event(1, "PaymentScheduled"),
            Self::event(2, "PaymentReceived"),
        ]
    }

    /// An outstanding observation of [`LeaseFactory::lease`] after one payment.
    pub fn observation() -> LeaseObservation {
        let mut observation = LeaseObservation {
            observation_date: Some(Date::new(2024, 2, 1)),
            lease: Some(Self::lease()),
            total_scheduled: Some(Money::new("USD", 1_000, 0)),
            total_paid: Some(Self::monthly_payment()),
            amount_due: Some(Self::monthly_payment()),
            lease_status: 0,
        };
        observation.set_status(LeaseStatus::Outstanding);
        observation
    }

    /// A reference taken on a calendar date only.
    pub fn as_of_date() -> AsOfDate {
        AsOfDate::on_date(Date::new(2024, 6, 30))
    }

    /// A reference with both an instant and a calendar date.
    pub fn as_of_both() -> AsOfDate {
        AsOfDate {
            as_at_time: Some(Timestamp {
                seconds: JAN_1_2024_SECONDS,
                nanos: 123_000_000,
            }),
            as_on_date: Some(Date::new(2024, 1, 1)),
        }
    }
}
