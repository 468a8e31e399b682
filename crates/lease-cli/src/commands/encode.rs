//! Encode command - JSON to the binary wire format.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lease_proto::MessageKind;
use prost::Message;

use super::{encode_binary, read_input, write_output};
use crate::Config;

/// Arguments for the encode command.
#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// Message type, e.g. `lease`, `LeaseObservation` or `tutorial.lease.v1.Payment`.
    #[arg()]
    pub kind: MessageKind,

    /// JSON input file (default: stdin).
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Treat the input as a JSON array and write length-delimited frames.
    #[arg(long, conflicts_with = "any")]
    pub stream: bool,

    /// Wrap the encoded message in a `google.protobuf.Any`.
    #[arg(long)]
    pub any: bool,
}

/// Execute the encode command.
///
/// # Errors
///
/// Returns an error if the input cannot be read, is not JSON of the chosen
/// message type, or the output cannot be written.
pub fn execute(args: &EncodeArgs, config: &Config) -> Result<()> {
    let input = read_input(args.input.as_deref())?;
    let bytes = encode_json(args, &input)?;
    write_output(args.output.as_deref(), &encode_binary(config.encoding, &bytes))
}

/// Maps JSON text onto the chosen message type and returns its wire bytes.
///
/// # Errors
///
/// Returns an error if the text is not JSON or does not match the message.
pub fn encode_json(args: &EncodeArgs, input: &[u8]) -> Result<Vec<u8>> {
    let value: serde_json::Value =
        serde_json::from_slice(input).context("input is not valid JSON")?;

    let bytes = if args.stream {
        args.kind.encode_stream_from_json(value)
    } else {
        args.kind.encode_from_json(value)
    }
    .with_context(|| format!("failed to encode {}", args.kind.full_name()))?;

    tracing::debug!(
        message_type = %args.kind,
        stream = args.stream,
        bytes = bytes.len(),
        "encoded message"
    );

    if args.any {
        let any = prost_types::Any {
            type_url: args.kind.type_url(),
            value: bytes,
        };
        return Ok(any.encode_to_vec());
    }
    Ok(bytes)
}
