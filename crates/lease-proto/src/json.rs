//! JSON mapping for lease messages.
//!
//! Follows the proto3 JSON conventions the lease web clients consume:
//!
//! - field names are lowerCamelCase; missing fields and explicit `null` take
//!   their zero value
//! - `google.protobuf.Timestamp` is an RFC 3339 string in UTC
//! - `int64` values are written as decimal strings and read from strings or numbers
//! - `lease_status` is written as its `LEASE_STATUS_*` name when known, otherwise
//!   as the bare number; both forms are accepted on input

use prost::Name;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Maps a message to a JSON value.
///
/// # Errors
///
/// Returns [`Error::Json`] if the message holds a value JSON cannot carry,
/// such as a timestamp outside the RFC 3339 range.
pub fn to_json<M: Name + Serialize>(message: &M) -> Result<serde_json::Value> {
    serde_json::to_value(message).map_err(|e| Error::json(M::full_name(), e))
}

/// Builds a message from a JSON value.
///
/// # Errors
///
/// Returns [`Error::Json`] if the value does not match the message shape.
pub fn from_json<M: Name + DeserializeOwned>(value: serde_json::Value) -> Result<M> {
    serde_json::from_value(value).map_err(|e| Error::json(M::full_name(), e))
}

/// Builds a message from a JSON string.
///
/// # Errors
///
/// Returns [`Error::Json`] if the text is not JSON or does not match the
/// message shape.
pub fn from_json_str<M: Name + DeserializeOwned>(text: &str) -> Result<M> {
    serde_json::from_str(text).map_err(|e| Error::json(M::full_name(), e))
}

/// Reads an explicit JSON `null` as the field's zero value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    let value: Option<T> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// `Option<Timestamp>` as an RFC 3339 string.
pub(crate) mod optional_timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de, ser};

    use crate::google::protobuf::{Timestamp, datetime_from_timestamp, timestamp_from_datetime};

    pub(crate) fn serialize<S: Serializer>(
        value: &Option<Timestamp>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => {
                let datetime = datetime_from_timestamp(ts).map_err(ser::Error::custom)?;
                serializer.serialize_str(&datetime.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Timestamp>, D::Error> {
        let Some(text) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let datetime = DateTime::parse_from_rfc3339(&text).map_err(|e| {
            de::Error::custom(format!("invalid RFC 3339 timestamp '{text}': {e}"))
        })?;
        Ok(Some(timestamp_from_datetime(datetime.with_timezone(&Utc))))
    }
}

/// `int64` as a decimal string.
pub(crate) mod int64_string {
    use std::fmt;

    use serde::{Deserializer, Serializer, de};

    pub(crate) fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        deserializer.deserialize_any(Int64Visitor)
    }

    struct Int64Visitor;

    impl de::Visitor<'_> for Int64Visitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an int64 as a number or decimal string")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(|_| E::custom(format!("{v} overflows int64")))
        }

        fn visit_unit<E: de::Error>(self) -> Result<i64, E> {
            Ok(0)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
            v.parse()
                .map_err(|_| E::custom(format!("'{v}' is not an int64")))
        }
    }
}

/// `lease_status` as its schema name, or as a number when unnamed.
pub(crate) mod lease_status {
    use std::fmt;

    use serde::{Deserializer, Serializer, de};

    use crate::v1::{LeaseStatus, LeaseStatusValue};

    // serde's `with` passes fields by reference
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub(crate) fn serialize<S: Serializer>(value: &i32, serializer: S) -> Result<S::Ok, S::Error> {
        match LeaseStatusValue::from(*value) {
            LeaseStatusValue::Known(status) => serializer.serialize_str(status.as_str_name()),
            LeaseStatusValue::Unrecognized(number) => serializer.serialize_i32(number),
        }
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
        deserializer.deserialize_any(StatusVisitor)
    }

    struct StatusVisitor;

    impl de::Visitor<'_> for StatusVisitor {
        type Value = i32;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a LEASE_STATUS_* name or an int32")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i32, E> {
            i32::try_from(v).map_err(|_| E::custom(format!("{v} overflows int32")))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i32, E> {
            i32::try_from(v).map_err(|_| E::custom(format!("{v} overflows int32")))
        }

        fn visit_unit<E: de::Error>(self) -> Result<i32, E> {
            Ok(0)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<i32, E> {
            LeaseStatus::from_str_name(v)
                .map(i32::from)
                .ok_or_else(|| E::custom(format!("unknown lease status '{v}'")))
        }
    }
}
