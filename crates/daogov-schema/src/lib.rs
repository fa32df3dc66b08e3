//! # daogov-schema — Schema Registry & Proposal Validation
//!
//! Holds the versioned JSON Schema documents describing valid governance
//! proposals and validates candidate documents against them.
//!
//! ## Registry (`registry`)
//!
//! One frozen schema document per published spec revision (0 through 2),
//! embedded at compile time from the repository's `schemas/` directory.
//! Append-only evolution: breaking changes allocate a new revision number,
//! a published document is never edited.
//!
//! ## Validation (`checker`, `batch`)
//!
//! [`SchemaRegistry::checker`] compiles a revision once into an immutable
//! [`Checker`], reused across all validation calls. Non-conformant
//! documents produce a [`ValidationReport`] of structured [`Violation`]s
//! (JSON Pointer path, violated constraint, message) — never an error.
//! Unreadable or unparseable input is the only [`DocumentError`];
//! [`Checker::validate_dir`] confines such failures to the document that
//! caused them.
//!
//! ## Crate Policy
//!
//! - Depends only on `daogov-core` internally.
//! - Schema compilation is delegated to the `jsonschema` crate; this crate
//!   never interprets schema semantics itself.

pub mod batch;
pub mod checker;
pub mod error;
pub mod registry;

pub use batch::{BatchError, BatchFailure, BatchReport};
pub use checker::{Checker, ValidationReport, Violation};
pub use error::{DocumentError, SchemaError};
pub use registry::SchemaRegistry;
