//! # Batch Validation
//!
//! Validates every `*.json` proposal in a directory against one compiled
//! checker. Documents are processed sequentially in sorted directory
//! order, each one independently: a document that fails to read, parse,
//! or validate is recorded and the batch moves on.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::checker::{Checker, ValidationReport};
use crate::error::DocumentError;

/// Why one document in a batch failed.
#[derive(Error, Debug)]
pub enum BatchError {
    /// The document could not be read or parsed.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// The document parsed but does not conform to the schema.
    #[error("{} violation(s):\n{report}", .report.violations().len())]
    Invalid {
        /// The violation report; never empty for this variant.
        report: ValidationReport,
    },
}

/// One failing document in a batch.
#[derive(Debug)]
pub struct BatchFailure {
    /// Path to the document that failed.
    pub path: PathBuf,
    /// What went wrong with it.
    pub error: BatchError,
}

/// Summary of a batch validation run.
#[derive(Debug)]
pub struct BatchReport {
    /// Number of `*.json` documents found.
    pub total: usize,
    /// Number that validated successfully.
    pub passed: usize,
    /// Details of each failure, in processing order.
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    /// Number of documents that failed.
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Whether every document in the batch validated.
    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Checker {
    /// Validate every `*.json` file in a directory.
    ///
    /// Files are taken in sorted order; subdirectories and non-JSON files
    /// are ignored. Per-document read, parse, and validation failures are
    /// collected into the report without aborting the batch.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Read`] only if the directory itself cannot
    /// be listed.
    pub fn validate_dir(&self, dir: &Path) -> Result<BatchReport, DocumentError> {
        let mut paths = Vec::new();
        let entries = std::fs::read_dir(dir).map_err(|e| DocumentError::Read {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;
        for entry in entries {
            let entry = entry.map_err(|e| DocumentError::Read {
                path: dir.display().to_string(),
                reason: e.to_string(),
            })?;
            let path = entry.path();
            if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("json") {
                paths.push(path);
            }
        }
        paths.sort();

        let total = paths.len();
        let mut passed = 0usize;
        let mut failures = Vec::new();

        for path in paths {
            match self.validate_file(&path) {
                Ok(report) if report.is_valid() => passed += 1,
                Ok(report) => failures.push(BatchFailure {
                    path,
                    error: BatchError::Invalid { report },
                }),
                Err(e) => failures.push(BatchFailure {
                    path,
                    error: BatchError::Document(e),
                }),
            }
        }

        Ok(BatchReport {
            total,
            passed,
            failures,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use daogov_core::SpecVersion;

    use crate::registry::SchemaRegistry;

    fn checker() -> Checker {
        SchemaRegistry::builtin()
            .unwrap()
            .checker(SpecVersion(2))
            .unwrap()
    }

    const VALID: &str = r#"{
        "spec": 2,
        "id": 1,
        "discussion": "https://forum.example/t/1",
        "content": { "kind": "meta", "prURI": "https://github.com/x/y/pull/1" }
    }"#;

    const INVALID: &str = r#"{
        "spec": 2,
        "id": -1,
        "discussion": "https://forum.example/t/2",
        "content": { "kind": "meta", "prURI": "https://github.com/x/y/pull/2" }
    }"#;

    #[test]
    fn one_bad_document_does_not_block_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("1.json"), VALID).unwrap();
        std::fs::write(dir.path().join("2.json"), INVALID).unwrap();

        let report = checker().validate_dir(dir.path()).unwrap();
        assert_eq!(report.total, 2);
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed(), 1);
        assert!(report.failures[0].path.ends_with("2.json"));
        assert!(matches!(report.failures[0].error, BatchError::Invalid { .. }));
    }

    #[test]
    fn malformed_json_is_a_per_document_failure() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.json"), "{ not json").unwrap();
        std::fs::write(dir.path().join("good.json"), VALID).unwrap();

        let report = checker().validate_dir(dir.path()).unwrap();
        assert_eq!(report.total, 2);
        assert_eq!(report.passed, 1);
        assert!(matches!(
            report.failures[0].error,
            BatchError::Document(DocumentError::Parse { .. })
        ));
    }

    #[test]
    fn non_json_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();
        std::fs::write(dir.path().join("1.json"), VALID).unwrap();

        let report = checker().validate_dir(dir.path()).unwrap();
        assert_eq!(report.total, 1);
        assert!(report.all_passed());
    }

    #[test]
    fn empty_directory_passes_vacuously() {
        let dir = tempfile::tempdir().unwrap();
        let report = checker().validate_dir(dir.path()).unwrap();
        assert_eq!(report.total, 0);
        assert!(report.all_passed());
    }

    #[test]
    fn missing_directory_is_a_read_error() {
        let err = checker()
            .validate_dir(Path::new("/tmp/daogov-no-such-dir"))
            .unwrap_err();
        assert!(matches!(err, DocumentError::Read { .. }));
    }

    #[test]
    fn failures_are_reported_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.json"), INVALID).unwrap();
        std::fs::write(dir.path().join("a.json"), INVALID).unwrap();

        let report = checker().validate_dir(dir.path()).unwrap();
        assert_eq!(report.failed(), 2);
        assert!(report.failures[0].path.ends_with("a.json"));
        assert!(report.failures[1].path.ends_with("b.json"));
    }
}
