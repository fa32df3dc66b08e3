//! # Validate Subcommand
//!
//! Checks proposal documents against a compiled schema revision. Three
//! input modes: a single document on stdin, a single named `.json` file,
//! or a directory of proposals validated as a batch.
//!
//! In batch mode a document that fails to read, parse, or validate is
//! reported by name and the rest of the batch still runs. In
//! single-document mode read and parse failures terminate the run.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;

use daogov_core::SpecVersion;
use daogov_schema::{Checker, SchemaRegistry};

/// Arguments for the `daogov validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// A proposal .json file or a directory of proposals. Reads one
    /// document from stdin when omitted.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Schema revision to validate against. Defaults to the newest
    /// registered revision.
    #[arg(long)]
    pub spec: Option<u32>,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 on success, 1 on validation failure, 2 (via `Err`)
/// on operational error.
pub fn run_validate(args: &ValidateArgs, registry: &SchemaRegistry) -> Result<u8> {
    let spec = match args.spec {
        Some(v) => SpecVersion(v),
        None => registry
            .latest()
            .context("schema registry holds no revisions")?,
    };
    let checker = registry
        .checker(spec)
        .with_context(|| format!("failed to compile schema for spec revision {spec}"))?;

    tracing::info!(%spec, "validating against schema revision");

    match &args.path {
        None => validate_stream(&checker, std::io::stdin().lock(), "stdin"),
        Some(path) if path.is_dir() => validate_batch(&checker, path),
        Some(path) => validate_single_file(&checker, path),
    }
}

/// Validate one document read to completion from a stream.
fn validate_stream(checker: &Checker, reader: impl Read, name: &str) -> Result<u8> {
    let report = checker
        .validate_reader(reader, name)
        .context("failed to read proposal document")?;

    if report.is_valid() {
        println!("OK: proposal conforms to spec revision {}", checker.spec());
        Ok(0)
    } else {
        println!("Proposal is invalid");
        println!("{report}");
        Ok(1)
    }
}

/// Validate a single named file. Read and parse failures are terminal,
/// as in stream mode.
fn validate_single_file(checker: &Checker, path: &Path) -> Result<u8> {
    if !path.exists() {
        bail!("path does not exist: {}", path.display());
    }
    let report = checker
        .validate_file(path)
        .with_context(|| format!("failed to read proposal {}", path.display()))?;

    if report.is_valid() {
        println!("OK: {}", path.display());
        Ok(0)
    } else {
        println!("FAIL: {}", path.display());
        println!("{report}");
        Ok(1)
    }
}

/// Validate every proposal in a directory, reporting failures per file.
fn validate_batch(checker: &Checker, dir: &Path) -> Result<u8> {
    let report = checker
        .validate_dir(dir)
        .with_context(|| format!("failed to list proposals in {}", dir.display()))?;

    println!("Proposals: {}/{} passed", report.passed, report.total);

    for failure in &report.failures {
        println!("FAIL: {} — {}", failure.path.display(), failure.error);
    }

    if report.all_passed() {
        Ok(0)
    } else {
        println!(
            "\n{} proposal(s) failed validation out of {} total.",
            report.failed(),
            report.total
        );
        Ok(1)
    }
}
