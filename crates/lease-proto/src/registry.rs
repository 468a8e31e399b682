//! Static registry of the `tutorial.lease.v1` message types.
//!
//! Tools that pick a message type at runtime (by name, type URL, or CLI
//! argument) look it up here and go through [`MessageKind`] to move between
//! binary and JSON without naming the concrete Rust type.

use std::fmt;
use std::str::FromStr;

use prost::{Message, Name};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::codec;
use crate::error::{Error, Result};
use crate::json;
use crate::v1::{AsOfDate, Lease, LeaseEvent, LeaseObservation, NewLease, Payment};

/// The schema source these types were written from.
pub const LEASE_PROTO: &str = include_str!("../proto/tutorial/lease/v1/lease.proto");

/// Path of the schema file relative to the proto root.
pub const LEASE_PROTO_PATH: &str = "tutorial/lease/v1/lease.proto";

/// Per-language file options declared by the schema.
pub mod file_options {
    /// `csharp_namespace`
    pub const CSHARP_NAMESPACE: &str = "Tutorial.Lease.V1";
    /// `go_package`
    pub const GO_PACKAGE: &str = "leasev1";
    /// `java_package`
    pub const JAVA_PACKAGE: &str = "com.tutorial.lease.v1";
    /// `java_outer_classname`
    pub const JAVA_OUTER_CLASSNAME: &str = "LeaseProto";
    /// `objc_class_prefix`
    pub const OBJC_CLASS_PREFIX: &str = "TLX";
    /// `php_namespace`
    pub const PHP_NAMESPACE: &str = "Tutorial\\Lease\\V1";
}

/// A message type declared in `tutorial.lease.v1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MessageKind {
    /// [`AsOfDate`]
    AsOfDate,
    /// [`Lease`]
    Lease,
    /// [`NewLease`]
    NewLease,
    /// [`Payment`]
    Payment,
    /// [`LeaseEvent`]
    LeaseEvent,
    /// [`LeaseObservation`]
    LeaseObservation,
}

impl MessageKind {
    /// Every message type, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::AsOfDate,
        Self::Lease,
        Self::NewLease,
        Self::Payment,
        Self::LeaseEvent,
        Self::LeaseObservation,
    ];

    /// Returns the unqualified message name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AsOfDate => AsOfDate::NAME,
            Self::Lease => Lease::NAME,
            Self::NewLease => NewLease::NAME,
            Self::Payment => Payment::NAME,
            Self::LeaseEvent => LeaseEvent::NAME,
            Self::LeaseObservation => LeaseObservation::NAME,
        }
    }

    /// Returns the kebab-case name used on the command line.
    #[must_use]
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::AsOfDate => "as-of-date",
            Self::Lease => "lease",
            Self::NewLease => "new-lease",
            Self::Payment => "payment",
            Self::LeaseEvent => "lease-event",
            Self::LeaseObservation => "lease-observation",
        }
    }

    /// Returns the package-qualified name, e.g. `tutorial.lease.v1.Lease`.
    #[must_use]
    pub fn full_name(self) -> String {
        format!("{}.{}", crate::v1::PACKAGE, self.name())
    }

    /// Returns the `google.protobuf.Any` type URL.
    #[must_use]
    pub fn type_url(self) -> String {
        format!("type.googleapis.com/{}", self.full_name())
    }

    /// Looks up a message by its package-qualified name.
    #[must_use]
    pub fn from_full_name(full_name: &str) -> Option<Self> {
        let name = full_name
            .strip_prefix(crate::v1::PACKAGE)?
            .strip_prefix('.')?;
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Looks up a message by its type URL. Any host prefix is accepted.
    #[must_use]
    pub fn from_type_url(type_url: &str) -> Option<Self> {
        let full_name = type_url.rsplit_once('/').map_or(type_url, |(_, name)| name);
        Self::from_full_name(full_name)
    }

    /// Returns the body of this message's declaration in [`LEASE_PROTO`],
    /// between the opening and closing braces.
    #[must_use]
    pub fn schema_declaration(self) -> Option<&'static str> {
        let header = format!("message {} {{", self.name());
        let start = LEASE_PROTO.find(header.as_str())? + header.len();
        let body = &LEASE_PROTO[start..];
        let end = body.find("\n}")?;
        Some(&body[..end])
    }

    /// Returns `(field name, field number)` for every field, in number order.
    #[must_use]
    pub const fn field_numbers(self) -> &'static [(&'static str, u32)] {
        match self {
            Self::AsOfDate => &[("as_at_time", 1), ("as_on_date", 2)],
            Self::Lease => &[
                ("lease_id", 1),
                ("user_id", 2),
                ("start_date", 3),
                ("maturity_date", 4),
                ("monthly_payment_amount", 5),
            ],
            Self::NewLease => &[
                ("user_id", 1),
                ("maturity_date", 3),
                ("monthly_payment_amount", 4),
            ],
            Self::Payment => &[("payment_id", 1), ("payment_amount", 2)],
            Self::LeaseEvent => &[
                ("event_id", 1),
                ("event_created_time", 2),
                ("event_effective_date", 3),
                ("event_type", 4),
            ],
            Self::LeaseObservation => &[
                ("observation_date", 1),
                ("lease", 2),
                ("total_scheduled", 3),
                ("total_paid", 4),
                ("amount_due", 5),
                ("lease_status", 6),
            ],
        }
    }

    /// Decodes binary input of this type and maps it to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInput`] if the bytes do not decode.
    pub fn decode_to_json(self, bytes: &[u8]) -> Result<serde_json::Value> {
        match self {
            Self::AsOfDate => decode_json::<AsOfDate>(bytes),
            Self::Lease => decode_json::<Lease>(bytes),
            Self::NewLease => decode_json::<NewLease>(bytes),
            Self::Payment => decode_json::<Payment>(bytes),
            Self::LeaseEvent => decode_json::<LeaseEvent>(bytes),
            Self::LeaseObservation => decode_json::<LeaseObservation>(bytes),
        }
    }

    /// Maps JSON onto this type and encodes it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the value does not match the message shape.
    pub fn encode_from_json(self, value: serde_json::Value) -> Result<Vec<u8>> {
        match self {
            Self::AsOfDate => encode_json::<AsOfDate>(value),
            Self::Lease => encode_json::<Lease>(value),
            Self::NewLease => encode_json::<NewLease>(value),
            Self::Payment => encode_json::<Payment>(value),
            Self::LeaseEvent => encode_json::<LeaseEvent>(value),
            Self::LeaseObservation => encode_json::<LeaseObservation>(value),
        }
    }

    /// Decodes a length-delimited stream of this type into a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInput`] if any frame does not decode.
    pub fn decode_stream_to_json(self, bytes: &[u8]) -> Result<serde_json::Value> {
        match self {
            Self::AsOfDate => decode_stream_json::<AsOfDate>(bytes),
            Self::Lease => decode_stream_json::<Lease>(bytes),
            Self::NewLease => decode_stream_json::<NewLease>(bytes),
            Self::Payment => decode_stream_json::<Payment>(bytes),
            Self::LeaseEvent => decode_stream_json::<LeaseEvent>(bytes),
            Self::LeaseObservation => decode_stream_json::<LeaseObservation>(bytes),
        }
    }

    /// Maps a JSON array onto this type and encodes it as a length-delimited stream.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the value is not an array of matching messages.
    pub fn encode_stream_from_json(self, value: serde_json::Value) -> Result<Vec<u8>> {
        match self {
            Self::AsOfDate => encode_stream_json::<AsOfDate>(value),
            Self::Lease => encode_stream_json::<Lease>(value),
            Self::NewLease => encode_stream_json::<NewLease>(value),
            Self::Payment => encode_stream_json::<Payment>(value),
            Self::LeaseEvent => encode_stream_json::<LeaseEvent>(value),
            Self::LeaseObservation => encode_stream_json::<LeaseObservation>(value),
        }
    }
}

fn decode_json<M>(bytes: &[u8]) -> Result<serde_json::Value>
where
    M: Message + Name + Default + Serialize,
{
    json::to_json(&codec::decode::<M>(bytes)?)
}

fn encode_json<M>(value: serde_json::Value) -> Result<Vec<u8>>
where
    M: Message + Name + DeserializeOwned,
{
    Ok(codec::encode(&json::from_json::<M>(value)?))
}

fn decode_stream_json<M>(bytes: &[u8]) -> Result<serde_json::Value>
where
    M: Message + Name + Default + Serialize,
{
    let messages = codec::decode_length_delimited_stream::<M>(bytes)?;
    serde_json::to_value(&messages).map_err(|e| Error::json(M::full_name(), e))
}

fn encode_stream_json<M>(value: serde_json::Value) -> Result<Vec<u8>>
where
    M: Message + Name + DeserializeOwned,
{
    let messages: Vec<M> =
        serde_json::from_value(value).map_err(|e| Error::json(M::full_name(), e))?;
    Ok(codec::encode_length_delimited_stream(&messages))
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MessageKind {
    type Err = Error;

    /// Accepts the CLI name (`lease-observation`), the message name
    /// (`LeaseObservation`) or the full name (`tutorial.lease.v1.LeaseObservation`).
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.cli_name() == s || kind.name() == s)
            .or_else(|| Self::from_full_name(s))
            .ok_or_else(|| Error::UnknownMessageType(s.to_string()))
    }
}
