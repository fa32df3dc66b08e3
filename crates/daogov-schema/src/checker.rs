//! # Compiled Checkers
//!
//! A [`Checker`] is one schema revision compiled into an immutable
//! validator, built once and reused across every document in a run. There
//! is no per-call recompilation.
//!
//! Validation itself is a pure function of (checker, document): it returns
//! a [`ValidationReport`] carrying zero or more [`Violation`]s and never
//! fails for a merely non-conformant document. Only unreadable or
//! unparseable input surfaces as a [`DocumentError`].

use std::fmt;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use daogov_core::SpecVersion;

use crate::error::{DocumentError, SchemaError};

/// A single schema violation with structured context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the document.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the error.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// Outcome of validating one document against one schema revision.
///
/// A report with no violations means the document conforms.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    spec: SpecVersion,
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// The schema revision the document was checked against.
    pub fn spec(&self) -> SpecVersion {
        self.spec
    }

    /// Whether the document conforms to the schema.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// The individual violations, empty for a conformant document.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes the report and returns the violations.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

// One line per violation; a valid report displays as empty.
impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// One schema revision compiled into a reusable validator.
pub struct Checker {
    spec: SpecVersion,
    validator: jsonschema::Validator,
}

impl fmt::Debug for Checker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checker").field("spec", &self.spec).finish()
    }
}

impl Checker {
    /// Compile a schema document into a checker.
    ///
    /// Deterministic given the same schema; no side effects beyond
    /// constructing the validator.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Compile`] if the schema document is
    /// structurally invalid (unresolved references, contradictory
    /// constraints).
    pub fn compile(spec: SpecVersion, schema: &Value) -> Result<Self, SchemaError> {
        let validator = jsonschema::options()
            .with_draft(jsonschema::Draft::Draft202012)
            .build(schema)
            .map_err(|e| SchemaError::Compile {
                spec,
                reason: e.to_string(),
            })?;
        Ok(Self { spec, validator })
    }

    /// The schema revision this checker enforces.
    pub fn spec(&self) -> SpecVersion {
        self.spec
    }

    /// Validate a parsed JSON document.
    ///
    /// Pure function of the checker and the document. Collects every
    /// violation rather than stopping at the first.
    pub fn validate(&self, document: &Value) -> ValidationReport {
        let violations: Vec<Violation> = self
            .validator
            .iter_errors(document)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        ValidationReport {
            spec: self.spec,
            violations,
        }
    }

    /// Read a stream to completion, parse it once, and validate.
    ///
    /// `name` identifies the source in error messages (e.g. `"stdin"`).
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Read`] if the stream cannot be read, or
    /// [`DocumentError::Parse`] if the bytes are not well-formed JSON.
    pub fn validate_reader(
        &self,
        mut reader: impl Read,
        name: &str,
    ) -> Result<ValidationReport, DocumentError> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|e| DocumentError::Read {
                path: name.to_string(),
                reason: e.to_string(),
            })?;
        let document: Value =
            serde_json::from_str(&content).map_err(|e| DocumentError::Parse {
                path: name.to_string(),
                reason: e.to_string(),
            })?;
        Ok(self.validate(&document))
    }

    /// Validate a single JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Read`] if the file cannot be read, or
    /// [`DocumentError::Parse`] if it is not well-formed JSON.
    pub fn validate_file(&self, path: &Path) -> Result<ValidationReport, DocumentError> {
        let content = std::fs::read_to_string(path).map_err(|e| DocumentError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let document: Value =
            serde_json::from_str(&content).map_err(|e| DocumentError::Parse {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        Ok(self.validate(&document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::registry::SchemaRegistry;

    fn checker(spec: u32) -> Checker {
        SchemaRegistry::builtin()
            .unwrap()
            .checker(SpecVersion(spec))
            .unwrap()
    }

    #[test]
    fn compile_rejects_broken_schema() {
        let schema = json!({ "type": "not-a-type" });
        let err = Checker::compile(SpecVersion(1), &schema).unwrap_err();
        assert!(matches!(err, SchemaError::Compile { .. }));
    }

    #[test]
    fn valid_document_yields_empty_report() {
        let report = checker(2).validate(&json!({
            "spec": 2,
            "id": 1,
            "discussion": "https://x",
            "content": { "kind": "meta", "prURI": "https://github.com/x/y/pull/1" }
        }));
        assert!(report.is_valid());
        assert!(report.violations().is_empty());
        assert_eq!(report.spec(), SpecVersion(2));
    }

    #[test]
    fn missing_required_field_names_it() {
        let report = checker(2).validate(&json!({
            "spec": 2,
            "id": 1,
            "content": { "kind": "meta", "prURI": "https://github.com/x/y/pull/1" }
        }));
        assert!(!report.is_valid());
        assert!(
            report
                .violations()
                .iter()
                .any(|v| v.message.contains("discussion")),
            "expected a violation naming 'discussion', got: {:?}",
            report.violations()
        );
    }

    #[test]
    fn violation_paths_point_at_offending_field() {
        let report = checker(2).validate(&json!({
            "spec": 2,
            "id": 1,
            "discussion": "https://x",
            "content": {
                "kind": "expense",
                "transfers": [{
                    "chainId": 1,
                    "from": "0x336252602b3a8a0be336ed942228305173e8082b",
                    "recipient": "0xZZZ",
                    "token": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
                    "amount": 100
                }]
            }
        }));
        assert!(!report.is_valid());
        assert!(
            report
                .violations()
                .iter()
                .any(|v| v.instance_path.contains("/transfers/0/recipient")),
            "expected an instance path into transfers[0].recipient, got: {:?}",
            report.violations()
        );
    }

    #[test]
    fn validate_reader_parses_then_validates() {
        let doc = br#"{"spec":2,"id":1,"discussion":"https://x","content":{"kind":"meta","prURI":"https://github.com/x/y/pull/1"}}"#;
        let report = checker(2).validate_reader(&doc[..], "stdin").unwrap();
        assert!(report.is_valid());
    }

    #[test]
    fn validate_reader_rejects_malformed_json() {
        let err = checker(2)
            .validate_reader(&b"{ not json"[..], "stdin")
            .unwrap_err();
        assert!(matches!(err, DocumentError::Parse { ref path, .. } if path == "stdin"));
    }

    #[test]
    fn validate_file_missing_file_is_read_error() {
        let err = checker(2)
            .validate_file(Path::new("/tmp/daogov-no-such-proposal.json"))
            .unwrap_err();
        assert!(matches!(err, DocumentError::Read { .. }));
    }

    #[test]
    fn report_display_lists_violations() {
        let report = checker(2).validate(&json!({ "spec": 2 }));
        let rendered = report.to_string();
        assert!(rendered.contains("required"));
    }

    #[test]
    fn violation_display_root() {
        let v = Violation {
            instance_path: String::new(),
            schema_path: "/required".to_string(),
            message: "\"content\" is a required property".to_string(),
        };
        assert!(v.to_string().contains("(root)"));
    }
}
