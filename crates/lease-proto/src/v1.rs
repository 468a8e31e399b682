//! Version 1 of the lease contracts (`tutorial.lease.v1`).
//!
//! Every field is optional on the wire: a missing scalar decodes to its zero
//! value and a missing nested message decodes to `None`. Field numbers are
//! fixed; `NewLease` never uses number 2.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::google::protobuf::Timestamp;
use crate::google::r#type::{Date, Money};

/// Protobuf package shared by every message in this module.
pub const PACKAGE: &str = "tutorial.lease.v1";

/// Lifecycle status of a lease.
///
/// Wire values are fixed. `Invalid` is the zero value an unset field decodes to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration,
)]
#[repr(i32)]
pub enum LeaseStatus {
    /// Unset.
    Invalid = 0,
    /// The lease is active and may have an amount due.
    Outstanding = 1,
    /// The lease has been closed.
    Terminated = 2,
}

impl LeaseStatus {
    /// Returns the name used in the schema definition.
    #[must_use]
    pub const fn as_str_name(&self) -> &'static str {
        match self {
            Self::Invalid => "LEASE_STATUS_INVALID",
            Self::Outstanding => "LEASE_STATUS_OUTSTANDING",
            Self::Terminated => "LEASE_STATUS_TERMINATED",
        }
    }

    /// Looks up a status by its schema name.
    #[must_use]
    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "LEASE_STATUS_INVALID" => Some(Self::Invalid),
            "LEASE_STATUS_OUTSTANDING" => Some(Self::Outstanding),
            "LEASE_STATUS_TERMINATED" => Some(Self::Terminated),
            _ => None,
        }
    }
}

/// A `lease_status` value as found on the wire.
///
/// Enums are open: producers on a newer schema may send numbers this version
/// does not name, and those are kept as-is rather than clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LeaseStatusValue {
    /// A status named in this schema version.
    Known(LeaseStatus),
    /// A number with no name in this schema version.
    Unrecognized(i32),
}

impl LeaseStatusValue {
    /// Returns the wire number.
    #[must_use]
    pub fn number(self) -> i32 {
        match self {
            Self::Known(status) => status.into(),
            Self::Unrecognized(value) => value,
        }
    }

    /// Returns the named status, if any.
    #[must_use]
    pub const fn known(self) -> Option<LeaseStatus> {
        match self {
            Self::Known(status) => Some(status),
            Self::Unrecognized(_) => None,
        }
    }
}

impl From<i32> for LeaseStatusValue {
    fn from(value: i32) -> Self {
        LeaseStatus::try_from(value).map_or(Self::Unrecognized(value), Self::Known)
    }
}

impl From<LeaseStatus> for LeaseStatusValue {
    fn from(status: LeaseStatus) -> Self {
        Self::Known(status)
    }
}

impl From<LeaseStatusValue> for i32 {
    fn from(value: LeaseStatusValue) -> Self {
        value.number()
    }
}

impl fmt::Display for LeaseStatusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(status) => f.write_str(status.as_str_name()),
            Self::Unrecognized(value) => write!(f, "{value}"),
        }
    }
}

/// A reference point in time, as an instant or as a calendar date.
///
/// Both fields may be set, or neither; which one applies is up to the reader.
#[derive(Clone, Copy, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AsOfDate {
    /// The instant the reference is taken at.
    #[prost(message, optional, tag = "1")]
    #[serde(
        with = "crate::json::optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub as_at_time: Option<Timestamp>,
    /// The calendar date the reference is taken on.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_on_date: Option<Date>,
}

impl AsOfDate {
    /// Creates a reference at an exact instant.
    #[must_use]
    pub const fn at_time(time: Timestamp) -> Self {
        Self {
            as_at_time: Some(time),
            as_on_date: None,
        }
    }

    /// Creates a reference on a calendar date.
    #[must_use]
    pub const fn on_date(date: Date) -> Self {
        Self {
            as_at_time: None,
            as_on_date: Some(date),
        }
    }
}

/// A lease agreement.
#[derive(Clone, PartialEq, Eq, Hash, prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Lease {
    /// Stable identifier of the lease.
    #[prost(string, tag = "1")]
    #[serde(deserialize_with = "crate::json::null_as_default")]
    pub lease_id: String,
    /// The lessee.
    #[prost(string, tag = "2")]
    #[serde(deserialize_with = "crate::json::null_as_default")]
    pub user_id: String,
    /// First day of the lease term.
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,
    /// Last day of the lease term.
    #[prost(message, optional, tag = "4")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maturity_date: Option<Date>,
    /// Amount due each month.
    #[prost(message, optional, tag = "5")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_payment_amount: Option<Money>,
}

/// Request shape for creating a [`Lease`].
///
/// The lease id and start date are assigned by the receiver, so they are
/// absent here. Field number 2 is skipped and never reused.
#[derive(Clone, PartialEq, Eq, Hash, prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewLease {
    /// The lessee.
    #[prost(string, tag = "1")]
    #[serde(deserialize_with = "crate::json::null_as_default")]
    pub user_id: String,
    /// Last day of the lease term.
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maturity_date: Option<Date>,
    /// Amount due each month.
    #[prost(message, optional, tag = "4")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_payment_amount: Option<Money>,
}

/// A single payment.
#[derive(Clone, PartialEq, Eq, Hash, prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Payment {
    /// Identifier of the payment.
    #[prost(string, tag = "1")]
    #[serde(deserialize_with = "crate::json::null_as_default")]
    pub payment_id: String,
    /// Amount paid.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_amount: Option<Money>,
}

/// An entry in a lease's history.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeaseEvent {
    /// Position of the event within its lease.
    #[prost(int32, tag = "1")]
    #[serde(deserialize_with = "crate::json::null_as_default")]
    pub event_id: i32,
    /// When the event was recorded.
    #[prost(message, optional, tag = "2")]
    #[serde(
        with = "crate::json::optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub event_created_time: Option<Timestamp>,
    /// The date the event takes effect.
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_effective_date: Option<Date>,
    /// Free-form event tag. The schema declares no vocabulary.
    #[prost(string, tag = "4")]
    #[serde(deserialize_with = "crate::json::null_as_default")]
    pub event_type: String,
}

/// The financial state of a lease as of a date.
///
/// The embedded [`Lease`] is a snapshot owned by the observation.
#[derive(Clone, PartialEq, Eq, Hash, prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeaseObservation {
    /// The date the figures are computed for.
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observation_date: Option<Date>,
    /// Snapshot of the observed lease.
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lease: Option<Lease>,
    /// Sum of payments scheduled up to the observation date.
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_scheduled: Option<Money>,
    /// Sum of payments received up to the observation date.
    #[prost(message, optional, tag = "4")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_paid: Option<Money>,
    /// Outstanding balance on the observation date.
    #[prost(message, optional, tag = "5")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_due: Option<Money>,
    /// Raw wire number of the status. See [`LeaseObservation::status`].
    #[prost(enumeration = "LeaseStatus", tag = "6")]
    #[serde(with = "crate::json::lease_status")]
    pub lease_status: i32,
}

impl LeaseObservation {
    /// Returns the status, keeping numbers this version does not name.
    #[must_use]
    pub fn status(&self) -> LeaseStatusValue {
        LeaseStatusValue::from(self.lease_status)
    }

    /// Sets the status from a named or raw value.
    pub fn set_status(&mut self, status: impl Into<LeaseStatusValue>) {
        self.lease_status = status.into().number();
    }
}

macro_rules! impl_name {
    ($($ty:ident),* $(,)?) => {
        $(
            impl prost::Name for $ty {
                const NAME: &'static str = stringify!($ty);
                const PACKAGE: &'static str = PACKAGE;

                fn full_name() -> String {
                    format!("{}.{}", PACKAGE, stringify!($ty))
                }

                fn type_url() -> String {
                    format!("type.googleapis.com/{}.{}", PACKAGE, stringify!($ty))
                }
            }
        )*
    };
}

impl_name!(
    AsOfDate,
    Lease,
    NewLease,
    Payment,
    LeaseEvent,
    LeaseObservation,
);
