//! Photoseq: deterministic chronological renaming for photo listings.
//!
//! Photoseq parses a textual list of photo records — one
//! `<filename>, <location>, <timestamp>` entry per line — and assigns each
//! photo a `<location><sequence><extension>` name, where the sequence
//! number reflects chronological order within the photo's location group,
//! zero-padded to the width of that group's size. The core operates purely
//! on in-memory text; the CLI is a thin wrapper that reads a listing file
//! and prints the result.
//!
//! # Modules
//!
//! - [`listing`]: the parse → group → rename pipeline and the
//!   [`PhotoRecord`](listing::PhotoRecord) model
//! - [`audit`]: per-line rejection reporting for callers that want
//!   strictness on top of the best-effort pipeline
//! - [`error`]: error types for photoseq operations

pub mod audit;
pub mod error;
pub mod listing;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use error::PhotoseqError;

/// The photoseq CLI application.
#[derive(Parser)]
#[command(name = "photoseq")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Compute renamed filenames for a photo listing.
    Rename(RenameArgs),

    /// Report listing lines the rename pipeline would skip.
    Audit(AuditArgs),
}

/// Arguments for the rename subcommand.
#[derive(clap::Args)]
struct RenameArgs {
    /// Listing file to rename (one `filename, location, timestamp` per line).
    input: PathBuf,

    /// Output format ('text' for one name per line, or 'json' for full records).
    #[arg(long, default_value = "text")]
    output: String,
}

/// Arguments for the audit subcommand.
#[derive(clap::Args)]
struct AuditArgs {
    /// Listing file to audit.
    input: PathBuf,

    /// Exit non-zero if any line is rejected.
    #[arg(long)]
    strict: bool,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Run the photoseq CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), PhotoseqError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Rename(args)) => run_rename(args),
        Some(Commands::Audit(args)) => run_audit(args),
        None => {
            println!("photoseq {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Deterministic chronological renaming for photo listings.");
            println!();
            println!("Run 'photoseq --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the rename subcommand.
fn run_rename(args: RenameArgs) -> Result<(), PhotoseqError> {
    let data = fs::read_to_string(&args.input).map_err(PhotoseqError::Io)?;

    match args.output.as_str() {
        "json" => {
            let records = listing::parse(&data);
            let rendered = serde_json::to_string_pretty(&records)
                .map_err(|source| PhotoseqError::RecordsJson { source })?;
            println!("{}", rendered);
        }
        _ => {
            // Default text output: one renamed filename per line.
            let names = listing::list_reformatted_filenames(&data);
            if !names.is_empty() {
                println!("{}", names);
            }
        }
    }

    Ok(())
}

/// Execute the audit subcommand.
fn run_audit(args: AuditArgs) -> Result<(), PhotoseqError> {
    let data = fs::read_to_string(&args.input).map_err(PhotoseqError::Io)?;
    let report = audit::audit_listing(&data);

    match args.output.as_str() {
        "json" => {
            let rendered = serde_json::to_string_pretty(&report)
                .map_err(|source| PhotoseqError::ReportJson { source })?;
            println!("{}", rendered);
        }
        _ => {
            // Default text output
            print!("{}", report);
        }
    }

    if args.strict && !report.is_clean() {
        return Err(PhotoseqError::AuditFailed {
            rejected_count: report.rejected_count(),
            report,
        });
    }

    Ok(())
}
