//! Lease CLI - encode, decode and inspect lease contract messages.
//!
//! The main entry point for the `lease` binary.

use anyhow::Result;
use clap::Parser;

use lease_cli::{Cli, Commands};
use lease_proto::observability::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    // Logs go to stderr so stdout stays clean for payloads
    init_logging(config.log_format, "warn");

    match cli.command {
        Commands::Types(args) => lease_cli::commands::types::execute(&args, &config),
        Commands::Schema(args) => lease_cli::commands::schema::execute(&args, &config),
        Commands::Encode(args) => lease_cli::commands::encode::execute(&args, &config),
        Commands::Decode(args) => lease_cli::commands::decode::execute(&args, &config),
        Commands::Inspect(args) => lease_cli::commands::inspect::execute(&args, &config),
    }
}
