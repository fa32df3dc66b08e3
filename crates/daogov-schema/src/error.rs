//! # Error Types
//!
//! Two failure families with different blast radii:
//!
//! - [`SchemaError`] — the registry or a schema document itself is broken.
//!   Nothing can be validated; fatal to the whole run.
//! - [`DocumentError`] — one candidate document could not be read or parsed.
//!   Fatal to that document in batch mode, fatal to the run in
//!   single-document mode.
//!
//! A document that parses but does not conform to its schema is *not* an
//! error here: non-conformance is reported as data through
//! [`ValidationReport`](crate::ValidationReport), always recoverable and
//! never aborting subsequent documents.

use thiserror::Error;

use daogov_core::SpecVersion;

/// Errors loading or compiling schema documents.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The requested spec revision is not in the registry.
    #[error("no schema registered for spec revision {spec}")]
    NotFound {
        /// The revision that was requested.
        spec: SpecVersion,
    },

    /// A schema document could not be read or parsed as JSON.
    #[error("failed to load schema {path}: {reason}")]
    Load {
        /// Path or identifier of the schema that failed to load.
        path: String,
        /// Human-readable reason for the failure.
        reason: String,
    },

    /// A schema document is structurally invalid and could not be compiled
    /// into a checker.
    #[error("failed to compile schema for spec revision {spec}: {reason}")]
    Compile {
        /// The revision whose schema failed to compile.
        spec: SpecVersion,
        /// Human-readable reason for the failure.
        reason: String,
    },

    /// I/O error during schema directory operations.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors reading or parsing a candidate proposal document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The input source could not be read.
    #[error("failed to read document {path}: {reason}")]
    Read {
        /// Path or name of the input that failed.
        path: String,
        /// Human-readable reason for the failure.
        reason: String,
    },

    /// The input bytes are not well-formed JSON.
    #[error("document {path} is not well-formed JSON: {reason}")]
    Parse {
        /// Path or name of the input that failed.
        path: String,
        /// Human-readable reason for the failure.
        reason: String,
    },
}
