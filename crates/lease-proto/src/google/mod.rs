//! Well-known value types referenced by `tutorial.lease.v1`.
//!
//! The lease messages never reimplement these: `google.protobuf.Timestamp`
//! comes from `prost-types`, and the `google.type` messages below carry the
//! standard field layout so that they encode exactly like any other
//! implementation of `google/type/date.proto` and `google/type/money.proto`.

pub mod protobuf;
pub mod r#type;
