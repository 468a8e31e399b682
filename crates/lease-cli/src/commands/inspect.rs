//! Inspect command - unpack a `google.protobuf.Any`.
//!
//! The output follows the proto3 JSON form of `Any`: the embedded message's
//! fields plus an `@type` member holding the type URL.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use lease_proto::MessageKind;
use prost::Message;

use super::{decode_binary, pretty_json, read_input, write_output};
use crate::Config;

/// Arguments for the inspect command.
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Binary `Any` input file (default: stdin).
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// JSON output file (default: stdout).
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Execute the inspect command.
///
/// # Errors
///
/// Returns an error if the input is not an `Any`, names a type outside
/// `tutorial.lease.v1`, or its payload does not decode.
pub fn execute(args: &InspectArgs, config: &Config) -> Result<()> {
    let input = read_input(args.input.as_deref())?;
    let bytes = decode_binary(config.encoding, &input)?;
    let value = inspect_bytes(&bytes)?;
    write_output(args.output.as_deref(), &pretty_json(&value)?)
}

/// Decodes an `Any` and renders its payload as JSON tagged with `@type`.
///
/// # Errors
///
/// Returns an error if the envelope or payload is malformed, or the type URL
/// is not a known lease message.
pub fn inspect_bytes(bytes: &[u8]) -> Result<serde_json::Value> {
    let any = prost_types::Any::decode(bytes).context("input is not a google.protobuf.Any")?;

    let Some(kind) = MessageKind::from_type_url(&any.type_url) else {
        bail!(lease_proto::Error::UnknownMessageType(any.type_url));
    };
    tracing::debug!(message_type = %kind, bytes = any.value.len(), "unpacked Any");

    let mut value = kind
        .decode_to_json(&any.value)
        .with_context(|| format!("failed to decode {} payload", kind.full_name()))?;

    let Some(fields) = value.as_object_mut() else {
        bail!("{} did not map to a JSON object", kind.full_name());
    };
    fields.insert("@type".to_string(), serde_json::Value::String(any.type_url));
    Ok(value)
}
