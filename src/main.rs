//! # podlint CLI Entry Point
//!
//! Validates one manifest file and reports every error on stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};

/// Validate a Pod manifest against the fixed workload schema.
#[derive(Parser, Debug)]
#[command(name = "podlint", version, about)]
struct Cli {
    /// Manifest file to validate.
    file: PathBuf,

    /// Output format for validation errors.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// `<file>:<line> <message>` lines on stderr.
    Text,
    /// JSON array of errors on stdout.
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Usage errors exit with status 2 inside clap.
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the manifest is valid.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let file = cli.file.display().to_string();
    let content = std::fs::read_to_string(&cli.file).context("cannot read file")?;
    let node = podlint::parse(&content).context("cannot unmarshal file content")?;

    tracing::debug!(file = %file, bytes = content.len(), "parsed manifest");
    let result = podlint::validate(&file, &node);

    match cli.format {
        Format::Text => {
            for error in &result.errors {
                eprintln!("{}", error);
            }
        }
        Format::Json => {
            let json = serde_json::to_string_pretty(&result.errors)
                .context("cannot encode errors as JSON")?;
            println!("{}", json);
        }
    }

    Ok(result.is_valid())
}
