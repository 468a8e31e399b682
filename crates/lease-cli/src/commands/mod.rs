//! CLI subcommands and the input/output plumbing they share.

pub mod decode;
pub mod encode;
pub mod inspect;
pub mod schema;
pub mod types;

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::BinaryEncoding;

/// Reads all of `path`, or stdin when `path` is `None` or `-`.
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read.
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        _ => {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Writes `bytes` to `path`, or stdout when `path` is `None` or `-`.
///
/// # Errors
///
/// Returns an error if the file or stdout cannot be written.
pub fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))
        }
        _ => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes).context("failed to write stdout")?;
            stdout.flush().context("failed to flush stdout")
        }
    }
}

/// Turns binary input in the configured text form back into wire bytes.
///
/// Whitespace around base64 and hex input is ignored.
///
/// # Errors
///
/// Returns an error if the input is not valid base64 or hex.
pub fn decode_binary(encoding: BinaryEncoding, input: &[u8]) -> Result<Vec<u8>> {
    match encoding {
        BinaryEncoding::Raw => Ok(input.to_vec()),
        BinaryEncoding::Base64 => STANDARD
            .decode(input.trim_ascii())
            .context("input is not valid base64"),
        BinaryEncoding::Hex => hex::decode(input.trim_ascii()).context("input is not valid hex"),
    }
}

/// Renders wire bytes in the configured text form.
///
/// Text forms end with a newline.
#[must_use]
pub fn encode_binary(encoding: BinaryEncoding, bytes: &[u8]) -> Vec<u8> {
    match encoding {
        BinaryEncoding::Raw => bytes.to_vec(),
        BinaryEncoding::Base64 => format!("{}\n", STANDARD.encode(bytes)).into_bytes(),
        BinaryEncoding::Hex => format!("{}\n", hex::encode(bytes)).into_bytes(),
    }
}

/// Serializes `value` as pretty JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn pretty_json(value: &serde_json::Value) -> Result<Vec<u8>> {
    let mut out = serde_json::to_vec_pretty(value).context("failed to render JSON")?;
    out.push(b'\n');
    Ok(out)
}
