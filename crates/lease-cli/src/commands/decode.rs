//! Decode command - binary wire format to JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lease_proto::MessageKind;

use super::{decode_binary, pretty_json, read_input, write_output};
use crate::Config;

/// Arguments for the decode command.
#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Message type, e.g. `lease`, `LeaseObservation` or `tutorial.lease.v1.Payment`.
    #[arg()]
    pub kind: MessageKind,

    /// Binary input file (default: stdin).
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// JSON output file (default: stdout).
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Read length-delimited frames and print a JSON array.
    #[arg(long)]
    pub stream: bool,
}

/// Execute the decode command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or does not decode as the
/// chosen message type, or the output cannot be written.
pub fn execute(args: &DecodeArgs, config: &Config) -> Result<()> {
    let input = read_input(args.input.as_deref())?;
    let bytes = decode_binary(config.encoding, &input)?;
    let value = decode_bytes(args, &bytes)?;
    write_output(args.output.as_deref(), &pretty_json(&value)?)
}

/// Decodes wire bytes as the chosen message type and maps them to JSON.
///
/// # Errors
///
/// Returns an error if the bytes are malformed for that type.
pub fn decode_bytes(args: &DecodeArgs, bytes: &[u8]) -> Result<serde_json::Value> {
    if args.stream {
        args.kind.decode_stream_to_json(bytes)
    } else {
        args.kind.decode_to_json(bytes)
    }
    .with_context(|| format!("failed to decode {}", args.kind.full_name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use lease_proto::codec;
    use lease_test_utils::LeaseFactory;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: DecodeArgs,
    }

    fn parse(argv: &[&str]) -> DecodeArgs {
        TestCli::parse_from(std::iter::once("test").chain(argv.iter().copied())).args
    }

    #[test]
    fn test_decode_args_parsing() {
        let args = parse(&["tutorial.lease.v1.NewLease", "--input", "-"]);
        assert_eq!(args.kind, MessageKind::NewLease);
        assert_eq!(args.input, Some(PathBuf::from("-")));
        assert!(!args.stream);
    }

    #[test]
    fn test_decodes_observation() {
        let args = parse(&["lease-observation"]);
        let bytes = codec::encode(&LeaseFactory::observation());

        let value = decode_bytes(&args, &bytes).unwrap();
        assert_eq!(value["leaseStatus"], "LEASE_STATUS_OUTSTANDING");
        assert_eq!(value["lease"]["leaseId"], "L1");
        assert_eq!(value["totalScheduled"]["units"], "1000");
    }

    #[test]
    fn test_empty_input_decodes_to_defaults() {
        let args = parse(&["payment"]);
        let value = decode_bytes(&args, &[]).unwrap();
        assert_eq!(value["paymentId"], "");
        assert!(value.get("paymentAmount").is_none());
    }

    #[test]
    fn test_decodes_stream() {
        let args = parse(&["lease-event", "--stream"]);
        let history = LeaseFactory::history();
        let bytes = codec::encode_length_delimited_stream(&history);

        let value = decode_bytes(&args, &bytes).unwrap();
        let events = value.as_array().unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[2]["eventType"], "PaymentReceived");
    }

    #[test]
    fn test_malformed_input_names_the_message() {
        let args = parse(&["lease"]);
        let err = decode_bytes(&args, &[0x0A]).unwrap_err();
        assert!(err.to_string().contains("tutorial.lease.v1.Lease"));
        assert!(err
            .chain()
            .any(|cause| cause
                .downcast_ref::<lease_proto::Error>()
                .is_some_and(lease_proto::Error::is_malformed_input)));
    }
}
