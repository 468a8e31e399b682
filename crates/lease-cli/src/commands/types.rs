//! Types command - list message types and field numbers.

use anyhow::{Context, Result};
use clap::Args;
use lease_proto::MessageKind;
use owo_colors::OwoColorize;
use serde_json::json;

use crate::{Config, OutputFormat};

/// Arguments for the types command.
#[derive(Debug, Args)]
pub struct TypesArgs {
    /// Show field names and numbers for each message.
    #[arg(long, short = 'f')]
    pub fields: bool,
}

/// Execute the types command.
///
/// # Errors
///
/// Returns an error if the JSON listing cannot be rendered.
pub fn execute(args: &TypesArgs, config: &Config) -> Result<()> {
    match config.format {
        OutputFormat::Json => {
            let listing = json_listing(args.fields);
            println!(
                "{}",
                serde_json::to_string_pretty(&listing).context("failed to render JSON")?
            );
        }
        OutputFormat::Text => {
            for kind in MessageKind::ALL {
                println!("{} ({})", kind.full_name().bold(), kind.cli_name().dimmed());
                if args.fields {
                    for (name, number) in kind.field_numbers() {
                        println!("  {number:>2}  {name}");
                    }
                }
            }
        }
    }
    Ok(())
}

/// Builds the JSON form of the listing.
#[must_use]
pub fn json_listing(fields: bool) -> serde_json::Value {
    MessageKind::ALL
        .into_iter()
        .map(|kind| {
            let mut entry = json!({
                "name": kind.cli_name(),
                "fullName": kind.full_name(),
                "typeUrl": kind.type_url(),
            });
            if fields {
                entry["fields"] = kind
                    .field_numbers()
                    .iter()
                    .map(|(name, number)| json!({ "name": name, "number": number }))
                    .collect();
            }
            entry
        })
        .collect()
}
