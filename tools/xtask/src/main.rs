//! Workspace automation tasks.
//!
//! Run with: `cargo xtask <command>`

use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use lease_proto::{LEASE_PROTO, MessageKind};

/// Attributes every library crate root must carry.
const REQUIRED_CRATE_ATTRIBUTES: [&str; 2] = ["#![forbid(unsafe_code)]", "#![deny(missing_docs)]"];

#[derive(Parser)]
#[command(name = "xtask", about = "Lease workspace automation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all CI checks locally
    Ci,
    /// Validate workspace conventions
    Lint,
    /// Check the embedded schema against the message registry
    Schema,
    /// Generate coverage report
    Coverage,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci => run_ci(),
        Commands::Lint => run_lint(),
        Commands::Schema => run_schema_check(),
        Commands::Coverage => run_coverage(),
    }
}

fn run_ci() -> Result<()> {
    println!("Running CI checks...\n");

    run_cmd("cargo", &["fmt", "--check"])?;
    run_cmd("cargo", &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"])?;
    run_cmd("cargo", &["test", "--workspace"])?;
    run_cmd("cargo", &["doc", "--workspace", "--no-deps"])?;
    run_lint()?;
    run_schema_check()?;

    println!("\nAll CI checks passed!");
    Ok(())
}

fn run_lint() -> Result<()> {
    println!("Validating workspace conventions...\n");

    for entry in fs::read_dir("crates").context("failed to list crates/")? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if !name.starts_with("lease-") {
            bail!("Crate '{name}' does not follow lease-* naming");
        }

        let lib = entry.path().join("src").join("lib.rs");
        if lib.exists() {
            check_crate_attributes(&name, &lib)?;
        }
    }

    println!("All conventions validated!");
    Ok(())
}

fn check_crate_attributes(name: &str, lib: &Path) -> Result<()> {
    let source =
        fs::read_to_string(lib).with_context(|| format!("failed to read {}", lib.display()))?;
    for attribute in REQUIRED_CRATE_ATTRIBUTES {
        if !source.contains(attribute) {
            bail!("Crate '{name}' is missing `{attribute}` in src/lib.rs");
        }
    }
    Ok(())
}

fn run_schema_check() -> Result<()> {
    println!("Checking schema against the registry...\n");

    for kind in MessageKind::ALL {
        let Some(declaration) = kind.schema_declaration() else {
            bail!("{} is registered but not declared in the schema", kind.full_name());
        };
        for (field, number) in kind.field_numbers() {
            let suffix = format!(" {field} = {number};");
            if !declaration.lines().any(|line| line.trim_end().ends_with(&suffix)) {
                bail!("{}.{field} is not declared as field {number}", kind.full_name());
            }
        }
        let declared = declaration.lines().filter(|line| line.contains(" = ")).count();
        if declared != kind.field_numbers().len() {
            bail!(
                "{} declares {declared} fields but the registry knows {}",
                kind.full_name(),
                kind.field_numbers().len()
            );
        }
    }

    let declared = LEASE_PROTO
        .lines()
        .filter(|line| line.trim_start().starts_with("message "))
        .count();
    if declared != MessageKind::ALL.len() {
        bail!(
            "schema declares {declared} messages but the registry knows {}",
            MessageKind::ALL.len()
        );
    }

    println!("Schema matches the registry!");
    Ok(())
}

fn run_coverage() -> Result<()> {
    run_cmd("cargo", &["llvm-cov", "--workspace", "--html"])?;
    println!("\nCoverage report: target/llvm-cov/html/index.html");
    Ok(())
}

fn run_cmd(cmd: &str, args: &[&str]) -> Result<()> {
    println!("$ {} {}", cmd, args.join(" "));
    let status = Command::new(cmd)
        .args(args)
        .status()
        .with_context(|| format!("Failed to run: {} {}", cmd, args.join(" ")))?;

    if !status.success() {
        bail!("Command failed: {} {}", cmd, args.join(" "));
    }
    Ok(())
}
