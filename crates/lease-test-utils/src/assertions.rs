//! Custom assertion helpers for contract tests.

use std::fmt::Debug;

use lease_proto::codec;
use lease_proto::{Error, Result};
use prost::{Message, Name};

/// Asserts that a message survives encode then decode unchanged.
///
/// # Panics
///
/// Panics if decoding fails or the decoded value differs.
pub fn assert_round_trip<M>(message: &M)
where
    M: Message + Name + Default + PartialEq,
{
    let bytes = codec::encode(message);
    let decoded: M = codec::decode(&bytes)
        .unwrap_or_else(|e| panic!("{} failed to decode its own encoding: {e}", M::full_name()));
    assert_eq!(
        &decoded,
        message,
        "{} changed across a round trip",
        M::full_name()
    );
}

/// Asserts that decoding an empty buffer yields the zero value.
///
/// # Panics
///
/// Panics if the empty buffer is rejected or decodes to anything but `M::default()`.
pub fn assert_zero_value<M>()
where
    M: Message + Name + Default + PartialEq,
{
    let decoded: M = codec::decode(&[])
        .unwrap_or_else(|e| panic!("{} rejected an empty buffer: {e}", M::full_name()));
    assert_eq!(
        decoded,
        M::default(),
        "{} empty buffer did not decode to zero values",
        M::full_name()
    );
}

/// Asserts that a decode result is a malformed-input error.
///
/// # Panics
///
/// Panics if the result is `Ok` or a different error.
pub fn assert_malformed<T: Debug>(result: Result<T>) {
    match result {
        Err(Error::MalformedInput { .. }) => {}
        Err(other) => panic!("expected MalformedInput, got {other}"),
        Ok(value) => panic!("expected MalformedInput, decoded {value:?}"),
    }
}
