//! Schema command - print the embedded `.proto` source.

use anyhow::{Context, Result};
use clap::Args;
use lease_proto::registry::{LEASE_PROTO, LEASE_PROTO_PATH, file_options};
use serde_json::json;

use crate::{Config, OutputFormat};

/// Arguments for the schema command.
#[derive(Debug, Args)]
pub struct SchemaArgs {
    /// Print the file-level language options instead of the source.
    #[arg(long)]
    pub options: bool,
}

/// Execute the schema command.
///
/// # Errors
///
/// Returns an error if the JSON form of the options cannot be rendered.
pub fn execute(args: &SchemaArgs, config: &Config) -> Result<()> {
    if !args.options {
        print!("{LEASE_PROTO}");
        return Ok(());
    }

    match config.format {
        OutputFormat::Json => {
            let options: serde_json::Map<String, serde_json::Value> = file_option_pairs()
                .into_iter()
                .map(|(key, value)| (key.to_string(), json!(value)))
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "path": LEASE_PROTO_PATH, "options": options }))
                    .context("failed to render JSON")?
            );
        }
        OutputFormat::Text => {
            println!("{LEASE_PROTO_PATH}");
            for (key, value) in file_option_pairs() {
                println!("  {key} = {value:?}");
            }
        }
    }
    Ok(())
}

/// Returns `(option name, value)` for each string file option.
#[must_use]
pub fn file_option_pairs() -> [(&'static str, &'static str); 6] {
    [
        ("csharp_namespace", file_options::CSHARP_NAMESPACE),
        ("go_package", file_options::GO_PACKAGE),
        ("java_outer_classname", file_options::JAVA_OUTER_CLASSNAME),
        ("java_package", file_options::JAVA_PACKAGE),
        ("objc_class_prefix", file_options::OBJC_CLASS_PREFIX),
        ("php_namespace", file_options::PHP_NAMESPACE),
    ]
}
