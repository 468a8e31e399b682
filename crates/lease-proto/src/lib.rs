//! # lease-proto
//!
//! Protobuf contracts for lease records, their lifecycle events and payment
//! observations (`tutorial.lease.v1`).
//!
//! The crate is a schema and nothing else: message shapes, one open enum,
//! and the plumbing to move them across the wire. No lease arithmetic lives
//! here.
//!
//! ## Layout
//!
//! ```text
//! proto/tutorial/lease/v1/lease.proto  - schema source (embedded as LEASE_PROTO)
//! src/v1.rs                            - messages and LeaseStatus
//! src/google/                          - Timestamp, Date, Money
//! src/codec.rs                         - binary encode/decode, streams, Any
//! src/json.rs                          - proto3-style JSON mapping
//! src/registry.rs                      - runtime lookup by name or type URL
//! ```
//!
//! ## Wire Format Guarantees
//!
//! - All messages follow Protobuf evolution rules
//! - Every field is optional; absent fields decode to zero values
//! - Field numbers are never reused (`NewLease` skips 2)
//! - Unknown fields and unknown enum numbers are tolerated
//! - Incompatible changes go to `tutorial.lease.v2`
//!
//! ## Example
//!
//! ```rust
//! use lease_proto::codec;
//! use lease_proto::google::r#type::Date;
//! use lease_proto::v1::Lease;
//!
//! let lease = Lease {
//!     lease_id: "L1".to_string(),
//!     user_id: "U1".to_string(),
//!     start_date: Some(Date::new(2024, 1, 1)),
//!     maturity_date: Some(Date::new(2026, 1, 1)),
//!     monthly_payment_amount: Some("500.00 USD".parse().unwrap()),
//! };
//!
//! let bytes = codec::encode(&lease);
//! let decoded: Lease = codec::decode(&bytes).unwrap();
//! assert_eq!(decoded, lease);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]
#![allow(clippy::derive_partial_eq_without_eq)]
#![allow(clippy::module_name_repetitions)]

pub mod codec;
pub mod error;
pub mod google;
pub mod json;
pub mod observability;
pub mod registry;
pub mod v1;

pub use error::{Error, Result};
pub use registry::{LEASE_PROTO, MessageKind};
pub use v1::{
    AsOfDate, Lease, LeaseEvent, LeaseObservation, LeaseStatus, LeaseStatusValue, NewLease,
    Payment,
};

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use lease_proto::prelude::*;
/// ```
pub mod prelude {
    pub use crate::codec::{decode, encode};
    pub use crate::error::{Error, Result};
    pub use crate::google::protobuf::Timestamp;
    pub use crate::google::r#type::{Date, Money};
    pub use crate::registry::MessageKind;
    pub use crate::v1::{
        AsOfDate, Lease, LeaseEvent, LeaseObservation, LeaseStatus, LeaseStatusValue, NewLease,
        Payment,
    };
    pub use prost::{Message, Name};
}
