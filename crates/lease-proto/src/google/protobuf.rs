//! `google.protobuf` types and chrono conversions for [`Timestamp`].

use chrono::{DateTime, Utc};

pub use prost_types::{Any, Timestamp};

use crate::error::{Error, Result};

/// Converts a UTC datetime into a Protobuf timestamp.
#[must_use]
pub fn timestamp_from_datetime(datetime: DateTime<Utc>) -> Timestamp {
    Timestamp {
        seconds: datetime.timestamp(),
        // subsec nanos are always below 2e9, including leap seconds
        nanos: i32::try_from(datetime.timestamp_subsec_nanos()).unwrap_or(i32::MAX),
    }
}

/// Converts a Protobuf timestamp into a UTC datetime.
///
/// # Errors
///
/// Returns [`Error::InvalidTimestamp`] if `nanos` is negative or the instant
/// is outside chrono's representable range.
pub fn datetime_from_timestamp(timestamp: &Timestamp) -> Result<DateTime<Utc>> {
    let nanos = u32::try_from(timestamp.nanos).map_err(|_| Error::InvalidTimestamp {
        message: format!("negative nanos {}", timestamp.nanos),
    })?;
    DateTime::<Utc>::from_timestamp(timestamp.seconds, nanos).ok_or_else(|| Error::InvalidTimestamp {
        message: format!("{}s {}ns is out of range", timestamp.seconds, timestamp.nanos),
    })
}
