//! # Schema Registry
//!
//! One JSON Schema document per published spec revision. The registry is
//! append-only versioned data: a revision's document is frozen once
//! published, and breaking changes allocate the next revision number
//! instead of editing an old one.
//!
//! The documents shipped in the repository's `schemas/` directory are
//! embedded at compile time ([`SchemaRegistry::builtin`]); a registry can
//! also be loaded from a directory of `proposal-v<N>.schema.json` files
//! ([`SchemaRegistry::from_dir`]) to check out-of-tree schema work.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use daogov_core::SpecVersion;

use crate::checker::Checker;
use crate::error::SchemaError;

/// Filename prefix and suffix for schema documents on disk.
const SCHEMA_FILE_PREFIX: &str = "proposal-v";
const SCHEMA_FILE_SUFFIX: &str = ".schema.json";

/// The published schema documents, embedded at compile time.
///
/// Append new revisions at the end; never edit an existing entry's source
/// file.
const BUILTIN_SCHEMAS: [(u32, &str); 3] = [
    (0, include_str!("../../../schemas/proposal-v0.schema.json")),
    (1, include_str!("../../../schemas/proposal-v1.schema.json")),
    (2, include_str!("../../../schemas/proposal-v2.schema.json")),
];

/// Lookup table from spec revision to its frozen schema document.
///
/// Exposes no mutation API: the registry is constructed once and read.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: BTreeMap<SpecVersion, Value>,
}

impl SchemaRegistry {
    /// The registry of schema documents shipped with this crate.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Load`] if an embedded document is not valid
    /// JSON. This indicates a broken release rather than a runtime
    /// condition, but the constructor stays fallible so no parse is ever
    /// silently trusted.
    pub fn builtin() -> Result<Self, SchemaError> {
        let mut schemas = BTreeMap::new();
        for (version, raw) in BUILTIN_SCHEMAS {
            let value: Value = serde_json::from_str(raw).map_err(|e| SchemaError::Load {
                path: format!("{SCHEMA_FILE_PREFIX}{version}{SCHEMA_FILE_SUFFIX} (embedded)"),
                reason: e.to_string(),
            })?;
            schemas.insert(SpecVersion(version), value);
        }
        Ok(Self { schemas })
    }

    /// Load a registry from a directory of `proposal-v<N>.schema.json` files.
    ///
    /// Files not matching the naming pattern are ignored. An empty or
    /// missing directory yields an empty registry.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Load`] if a matching file cannot be read or
    /// parsed as JSON.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let dir = dir.as_ref();
        let mut schemas = BTreeMap::new();

        if !dir.is_dir() {
            return Ok(Self { schemas });
        }

        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(version) = parse_schema_filename(name) else {
                continue;
            };

            let content =
                std::fs::read_to_string(&path).map_err(|e| SchemaError::Load {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?;
            let value: Value = serde_json::from_str(&content).map_err(|e| {
                SchemaError::Load {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                }
            })?;

            schemas.insert(version, value);
        }

        Ok(Self { schemas })
    }

    /// Number of registered revisions.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether the registry holds no revisions.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// All registered revisions, ascending.
    pub fn versions(&self) -> Vec<SpecVersion> {
        self.schemas.keys().copied().collect()
    }

    /// The newest registered revision, used for new submissions.
    pub fn latest(&self) -> Option<SpecVersion> {
        self.schemas.keys().next_back().copied()
    }

    /// Look up the frozen schema document for a revision.
    pub fn get(&self, spec: SpecVersion) -> Option<&Value> {
        self.schemas.get(&spec)
    }

    /// Compile the schema for a revision into a reusable [`Checker`].
    ///
    /// Compilation happens once per call; callers keep the checker and
    /// reuse it across documents.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::NotFound`] for an unregistered revision, or
    /// [`SchemaError::Compile`] if the schema document itself is invalid.
    pub fn checker(&self, spec: SpecVersion) -> Result<Checker, SchemaError> {
        let schema = self
            .get(spec)
            .ok_or(SchemaError::NotFound { spec })?;
        Checker::compile(spec, schema)
    }
}

/// Extract the revision number from a `proposal-v<N>.schema.json` filename.
fn parse_schema_filename(name: &str) -> Option<SpecVersion> {
    let version = name
        .strip_prefix(SCHEMA_FILE_PREFIX)?
        .strip_suffix(SCHEMA_FILE_SUFFIX)?;
    version.parse::<u32>().ok().map(SpecVersion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_has_all_published_revisions() {
        let registry = SchemaRegistry::builtin().unwrap();
        assert_eq!(
            registry.versions(),
            vec![SpecVersion(0), SpecVersion(1), SpecVersion(2)]
        );
        assert_eq!(registry.latest(), Some(SpecVersion(2)));
    }

    #[test]
    fn builtin_schemas_all_compile() {
        let registry = SchemaRegistry::builtin().unwrap();
        for spec in registry.versions() {
            registry
                .checker(spec)
                .unwrap_or_else(|e| panic!("schema for spec {spec} failed to compile: {e}"));
        }
    }

    #[test]
    fn unknown_revision_is_not_found() {
        let registry = SchemaRegistry::builtin().unwrap();
        let err = registry.checker(SpecVersion(99)).unwrap_err();
        assert!(matches!(err, SchemaError::NotFound { spec } if spec == SpecVersion(99)));
    }

    #[test]
    fn from_dir_loads_repo_schemas() {
        let mut dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        dir.pop(); // crates/
        dir.pop(); // repo root
        let registry = SchemaRegistry::from_dir(dir.join("schemas")).unwrap();
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn from_dir_missing_directory_is_empty() {
        let registry =
            SchemaRegistry::from_dir("/tmp/daogov-test-nonexistent-schemas").unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.latest(), None);
    }

    #[test]
    fn from_dir_ignores_unrelated_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("README.md"), b"not a schema").unwrap();
        std::fs::write(
            dir.path().join("proposal-v7.schema.json"),
            br#"{"type": "object"}"#,
        )
        .unwrap();
        let registry = SchemaRegistry::from_dir(dir.path()).unwrap();
        assert_eq!(registry.versions(), vec![SpecVersion(7)]);
    }

    #[test]
    fn from_dir_rejects_malformed_schema_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("proposal-v1.schema.json"), b"{ not json").unwrap();
        let err = SchemaRegistry::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, SchemaError::Load { .. }));
    }

    #[test]
    fn filename_parsing() {
        assert_eq!(
            parse_schema_filename("proposal-v2.schema.json"),
            Some(SpecVersion(2))
        );
        assert_eq!(parse_schema_filename("proposal-v2.json"), None);
        assert_eq!(parse_schema_filename("zone.schema.json"), None);
        assert_eq!(parse_schema_filename("proposal-vX.schema.json"), None);
    }
}
