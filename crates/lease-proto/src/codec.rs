//! Binary encode/decode for lease messages.
//!
//! Encoding and decoding go through `prost`, which implements the Protobuf
//! wire format. This module adds typed errors, logging, length-delimited
//! streams and `google.protobuf.Any` packing on top.
//!
//! ## Decode guarantees
//!
//! - An empty buffer decodes to the message's zero value.
//! - Unknown field numbers are skipped.
//! - Enum fields keep numbers this schema version does not name.
//! - Structural errors return [`Error::MalformedInput`]; no partially
//!   populated value is ever returned.
//!
//! ## Example
//!
//! ```rust
//! use lease_proto::codec;
//! use lease_proto::v1::Payment;
//!
//! let payment = Payment {
//!     payment_id: "P1".to_string(),
//!     ..Default::default()
//! };
//! let bytes = codec::encode(&payment);
//! let decoded: Payment = codec::decode(&bytes).unwrap();
//! assert_eq!(decoded, payment);
//! ```

use prost::{Message, Name};

use crate::error::{Error, Result};
use crate::google::protobuf::Any;
use crate::observability::codec_span;

/// Encodes a message to bytes. Never fails.
#[must_use]
pub fn encode<M: Message>(message: &M) -> Vec<u8> {
    message.encode_to_vec()
}

/// Decodes a message from bytes.
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] if the bytes are not a valid encoding of
/// `M`: truncated tags or payloads, invalid wire types, length prefixes past
/// the end of the buffer, or wire types that disagree with the field type.
pub fn decode<M: Message + Name + Default>(bytes: &[u8]) -> Result<M> {
    let message_type = M::full_name();
    let _guard = codec_span("decode", &message_type).entered();
    match M::decode(bytes) {
        Ok(message) => {
            tracing::debug!(len = bytes.len(), "decoded message");
            Ok(message)
        }
        Err(source) => {
            tracing::warn!(
                len = bytes.len(),
                error = %source,
                "rejected malformed input"
            );
            Err(Error::malformed(message_type, source))
        }
    }
}

/// Encodes messages as a stream of varint-length-prefixed frames.
#[must_use]
pub fn encode_length_delimited_stream<'a, M, I>(messages: I) -> Vec<u8>
where
    M: Message + 'a,
    I: IntoIterator<Item = &'a M>,
{
    let mut buf = Vec::new();
    for message in messages {
        buf.extend(message.encode_length_delimited_to_vec());
    }
    buf
}

/// Decodes a stream produced by [`encode_length_delimited_stream`].
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] if any frame is malformed, including a
/// length prefix that runs past the end of the input.
pub fn decode_length_delimited_stream<M: Message + Name + Default>(
    mut bytes: &[u8],
) -> Result<Vec<M>> {
    let message_type = M::full_name();
    let _guard = codec_span("decode_stream", &message_type).entered();
    let mut messages = Vec::new();
    while !bytes.is_empty() {
        let message =
            M::decode_length_delimited(&mut bytes).map_err(|e| Error::malformed(&message_type, e))?;
        messages.push(message);
    }
    tracing::debug!(
        frames = messages.len(),
        "decoded length-delimited stream"
    );
    Ok(messages)
}

/// Wraps a message in `google.protobuf.Any` under its type URL.
#[must_use]
pub fn pack_any<M: Message + Name>(message: &M) -> Any {
    Any {
        type_url: M::type_url(),
        value: message.encode_to_vec(),
    }
}

/// Unwraps a message of type `M` from `google.protobuf.Any`.
///
/// Only the full name after the last `/` is compared, so any host prefix is
/// accepted.
///
/// # Errors
///
/// Returns [`Error::TypeUrlMismatch`] if the envelope holds another type, or
/// [`Error::MalformedInput`] if its payload does not decode.
pub fn unpack_any<M: Message + Name + Default>(any: &Any) -> Result<M> {
    let full_name = any
        .type_url
        .rsplit_once('/')
        .map_or(any.type_url.as_str(), |(_, name)| name);
    if full_name != M::full_name() {
        return Err(Error::TypeUrlMismatch {
            expected: M::type_url(),
            actual: any.type_url.clone(),
        });
    }
    decode(&any.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::google::r#type::{Date, Money};
    use crate::v1::{LeaseEvent, NewLease, Payment};

    #[test]
    fn test_empty_buffer_is_zero_value() {
        let payment: Payment = decode(&[]).expect("empty decodes");
        assert_eq!(payment, Payment::default());
    }

    #[test]
    fn test_partial_tag_is_malformed() {
        let err = decode::<Payment>(&[0x80]).expect_err("partial varint tag");
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_length_past_end_is_malformed() {
        // field 1, length-delimited, claims 10 bytes but carries 2
        let err = decode::<Payment>(&[0x0A, 0x0A, b'P', b'1']).expect_err("overrun");
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_wire_type_mismatch_is_malformed() {
        // field 1 (payment_id, a string) sent as a varint
        let err = decode::<Payment>(&[0x08, 0x01]).expect_err("mismatch");
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_new_lease_never_writes_field_two() {
        let new_lease = NewLease {
            user_id: "U1".into(),
            maturity_date: Some(Date::new(2026, 1, 1)),
            monthly_payment_amount: Some(Money::new("USD", 500, 0)),
        };
        // field 1 is followed directly by field 3
        let bytes = encode(&new_lease);
        assert!(bytes.starts_with(&[0x0A, 0x02, b'U', b'1', 0x1A]));
    }

    #[test]
    fn test_stream_round_trip() {
        let events: Vec<LeaseEvent> = (1..=3)
            .map(|event_id| LeaseEvent {
                event_id,
                event_type: "PaymentScheduled".into(),
                ..Default::default()
            })
            .collect();

        let bytes = encode_length_delimited_stream(&events);
        let decoded: Vec<LeaseEvent> = decode_length_delimited_stream(&bytes).expect("decode");
        assert_eq!(decoded, events);
    }

    #[test]
    fn test_truncated_stream_is_malformed() {
        let events = vec![LeaseEvent {
            event_id: 1,
            event_type: "LeaseCreated".into(),
            ..Default::default()
        }];
        let bytes = encode_length_delimited_stream(&events);
        let err = decode_length_delimited_stream::<LeaseEvent>(&bytes[..bytes.len() - 1])
            .expect_err("truncated frame");
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_any_round_trip_and_mismatch() {
        let payment = Payment {
            payment_id: "P7".into(),
            payment_amount: Some(Money::new("USD", 250, 0)),
        };
        let any = pack_any(&payment);
        assert_eq!(any.type_url, "type.googleapis.com/tutorial.lease.v1.Payment");
        assert_eq!(unpack_any::<Payment>(&any).expect("unpack"), payment);

        let err = unpack_any::<LeaseEvent>(&any).expect_err("wrong type");
        assert!(matches!(err, Error::TypeUrlMismatch { .. }));
    }

    #[test]
    fn test_unpack_any_accepts_other_hosts() {
        let payment = Payment {
            payment_id: "P8".into(),
            payment_amount: Some(Money::new("USD", 100, 0)),
        };
        let any = Any {
            type_url: "example.com/tutorial.lease.v1.Payment".into(),
            value: encode(&payment),
        };
        assert_eq!(unpack_any::<Payment>(&any).expect("unpack"), payment);

        let bare = Any {
            type_url: "tutorial.lease.v1.Payment".into(),
            value: encode(&payment),
        };
        assert_eq!(unpack_any::<Payment>(&bare).expect("unpack"), payment);

        let err = unpack_any::<LeaseEvent>(&any).expect_err("wrong type");
        assert!(matches!(err, Error::TypeUrlMismatch { .. }));
    }
}
