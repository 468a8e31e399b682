//! Error types and result aliases for the lease contracts.
//!
//! Binary encoding never fails for a well-typed value, so every variant here
//! describes input that could not be turned into one of the schema types.

/// The result type used throughout `lease-proto`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding or converting lease messages.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The byte sequence does not follow the Protobuf wire grammar for the
    /// target message (truncated tag or payload, invalid wire type, or a
    /// wire type that does not match the declared field type).
    #[error("malformed {message_type} input: {source}")]
    MalformedInput {
        /// Full name of the message being decoded.
        message_type: String,
        /// The underlying decoder error.
        #[source]
        source: prost::DecodeError,
    },

    /// A JSON document could not be mapped onto a message.
    #[error("invalid {message_type} JSON: {source}")]
    Json {
        /// Full name of the message being mapped.
        message_type: String,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// A packed `google.protobuf.Any` carries a different message type.
    #[error("type URL mismatch: expected {expected}, found {actual}")]
    TypeUrlMismatch {
        /// The type URL of the requested message.
        expected: String,
        /// The type URL found in the envelope.
        actual: String,
    },

    /// No message with the given name exists in `tutorial.lease.v1`.
    #[error("unknown message type: {0}")]
    UnknownMessageType(String),

    /// A `google.type.Date` could not be converted to a calendar date.
    #[error("invalid date: {message}")]
    InvalidDate {
        /// Description of what made the date invalid.
        message: String,
    },

    /// A `google.protobuf.Timestamp` is outside the representable range.
    #[error("invalid timestamp: {message}")]
    InvalidTimestamp {
        /// Description of what made the timestamp invalid.
        message: String,
    },

    /// A monetary amount could not be parsed or converted.
    #[error("invalid money: {message}")]
    InvalidMoney {
        /// Description of what made the amount invalid.
        message: String,
    },
}

impl Error {
    /// Creates a malformed-input error for the given message type.
    #[must_use]
    pub fn malformed(message_type: impl Into<String>, source: prost::DecodeError) -> Self {
        Self::MalformedInput {
            message_type: message_type.into(),
            source,
        }
    }

    /// Creates a JSON mapping error for the given message type.
    #[must_use]
    pub fn json(message_type: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message_type: message_type.into(),
            source,
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid money error.
    #[must_use]
    pub fn invalid_money(message: impl Into<String>) -> Self {
        Self::InvalidMoney {
            message: message.into(),
        }
    }

    /// Returns true if this error was caused by malformed wire input.
    #[must_use]
    pub const fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_input_names_the_message() {
        let source = <prost_types::Timestamp as prost::Message>::decode(&[0x80_u8][..])
            .expect_err("partial varint must not decode");
        let err = Error::malformed("tutorial.lease.v1.Lease", source);
        assert!(err.is_malformed_input());
        assert!(err.to_string().contains("tutorial.lease.v1.Lease"));
    }

    #[test]
    fn test_helper_constructors_set_messages() {
        let err = Error::invalid_money("missing currency code");
        assert_eq!(err.to_string(), "invalid money: missing currency code");
        assert!(!err.is_malformed_input());
    }
}
