//! # daogov CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use daogov_cli::schema::{run_schema, SchemaArgs};
use daogov_cli::validate::{run_validate, ValidateArgs};

/// DAO governance proposal toolchain.
///
/// Validates proposal documents against the versioned schema registry and
/// inspects the registry's published revisions.
#[derive(Parser, Debug)]
#[command(name = "daogov", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Load schema revisions from a directory instead of the embedded
    /// registry.
    #[arg(long, global = true, value_name = "DIR")]
    schema_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a proposal document (stdin or file) or a directory of
    /// proposals.
    Validate(ValidateArgs),

    /// List registry revisions or print a revision's schema document.
    Schema(SchemaArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let registry = match daogov_cli::build_registry(cli.schema_dir.as_deref()) {
        Ok(registry) => registry,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(2);
        }
    };

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, &registry),
        Commands::Schema(args) => run_schema(&args, &registry),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
