//! # Schema Subcommand
//!
//! Registry inspection: list the published revisions or print one
//! revision's schema document, matching the artifact the repository
//! publishes for form tooling.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use daogov_core::SpecVersion;
use daogov_schema::SchemaRegistry;

/// Arguments for the `daogov schema` subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    #[command(subcommand)]
    pub command: SchemaCommand,
}

#[derive(Subcommand, Debug)]
pub enum SchemaCommand {
    /// List the registered schema revisions.
    List,
    /// Print the schema document for a revision as pretty JSON.
    Show {
        /// Revision to print. Defaults to the newest registered revision.
        #[arg(long)]
        spec: Option<u32>,
    },
}

/// Execute the schema subcommand. Returns exit code 0; failures are
/// operational and surface as `Err`.
pub fn run_schema(args: &SchemaArgs, registry: &SchemaRegistry) -> Result<u8> {
    match args.command {
        SchemaCommand::List => {
            let latest = registry.latest();
            for version in registry.versions() {
                if Some(version) == latest {
                    println!("{version} (latest)");
                } else {
                    println!("{version}");
                }
            }
            Ok(0)
        }
        SchemaCommand::Show { spec } => {
            let spec = match spec {
                Some(v) => SpecVersion(v),
                None => registry
                    .latest()
                    .context("schema registry holds no revisions")?,
            };
            let schema = registry
                .get(spec)
                .with_context(|| format!("no schema registered for spec revision {spec}"))?;
            let rendered = serde_json::to_string_pretty(schema)
                .context("failed to render schema document")?;
            println!("{rendered}");
            Ok(0)
        }
    }
}
