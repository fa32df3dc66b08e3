//! # daogov-cli — CLI Tool for Governance Proposals
//!
//! Provides the `daogov` command-line interface over the schema registry
//! and validator.
//!
//! ## Subcommands
//!
//! - `daogov validate` — Check a proposal document (stdin or file) or a
//!   directory of proposals against a schema revision.
//! - `daogov schema` — List registry revisions or print a revision's
//!   schema document.
//!
//! ## Exit codes
//!
//! - `0` — every checked document conforms.
//! - `1` — at least one document failed validation (or could not be read
//!   or parsed in batch mode).
//! - `2` — operational error: broken registry, uncompilable schema, or
//!   unreadable input in single-document mode.

pub mod schema;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};

use daogov_schema::SchemaRegistry;

/// Build the schema registry the run will use.
///
/// With `schema_dir` set, revisions are loaded from that directory;
/// otherwise the registry embedded at compile time is used.
pub fn build_registry(schema_dir: Option<&Path>) -> Result<SchemaRegistry> {
    let registry = match schema_dir {
        Some(dir) => SchemaRegistry::from_dir(dir)
            .with_context(|| format!("failed to load schemas from {}", dir.display()))?,
        None => SchemaRegistry::builtin().context("embedded schema registry is broken")?,
    };

    tracing::debug!(revisions = registry.len(), "loaded schema registry");
    Ok(registry)
}
