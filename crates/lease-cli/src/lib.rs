//! # lease-cli
//!
//! Command-line tool for the `tutorial.lease.v1` contracts.
//!
//! ## Commands
//!
//! - `lease types` - List the message types and their field numbers
//! - `lease schema` - Print the embedded `.proto` source
//! - `lease encode` - Encode a JSON message to the binary wire format
//! - `lease decode` - Decode binary input to JSON
//! - `lease inspect` - Unpack a `google.protobuf.Any` and print its payload
//!
//! ## Configuration
//!
//! Settings come from command-line flags or environment variables:
//!
//! - `LEASE_ENCODING` - Text form of the binary side: `raw`, `base64` or `hex` (default: `raw`)
//! - `LEASE_LOG_FORMAT` - `pretty` or `json` log lines on stderr (default: `pretty`)
//! - `RUST_LOG` - Log filter (default: `warn`)

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]
// CLI uses print! macros intentionally
#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

pub mod commands;

use clap::{Parser, Subcommand};
use lease_proto::observability::LogFormat;

/// Lease CLI - encode, decode and inspect lease contract messages.
#[derive(Debug, Parser)]
#[command(name = "lease")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Text form of binary input and output.
    #[arg(long, global = true, env = "LEASE_ENCODING", default_value = "raw")]
    pub encoding: BinaryEncoding,

    /// Log line format on stderr (`pretty` or `json`).
    #[arg(long, global = true, env = "LEASE_LOG_FORMAT", default_value = "pretty")]
    pub log_format: LogFormat,

    /// Output format for listings.
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the effective configuration.
    #[must_use]
    pub fn config(&self) -> Config {
        Config {
            encoding: self.encoding,
            log_format: self.log_format,
            format: self.format,
        }
    }
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List message types, type URLs and field numbers.
    Types(commands::types::TypesArgs),
    /// Print the embedded schema source.
    Schema(commands::schema::SchemaArgs),
    /// Encode JSON to the binary wire format.
    Encode(commands::encode::EncodeArgs),
    /// Decode binary input to JSON.
    Decode(commands::decode::DecodeArgs),
    /// Unpack a `google.protobuf.Any` and print the embedded message.
    Inspect(commands::inspect::InspectArgs),
}

/// How binary payloads are represented on stdin, stdout and in files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum BinaryEncoding {
    /// Raw bytes.
    #[default]
    Raw,
    /// Standard base64 with padding.
    Base64,
    /// Lowercase hexadecimal.
    Hex,
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Text form of binary input and output.
    pub encoding: BinaryEncoding,
    /// Log line format.
    pub log_format: LogFormat,
    /// Output format for listings.
    pub format: OutputFormat,
}
