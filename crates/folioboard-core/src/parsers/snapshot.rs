//! Portfolio snapshot parser
//!
//! Loads one snapshot JSON file and validates the invariants the ranking
//! view relies on: unique keys and a total covering the list.

use crate::error::CoreError;
use crate::models::PortfolioSnapshot;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

/// Parser for portfolio measure exports
#[derive(Debug, Default)]
pub struct SnapshotParser;

impl SnapshotParser {
    pub fn new() -> Self {
        Self
    }

    /// Load and validate a snapshot from a file
    pub fn parse(&self, path: &Path) -> Result<PortfolioSnapshot, CoreError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CoreError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                CoreError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let snapshot: PortfolioSnapshot =
            serde_json::from_str(&content).map_err(|e| CoreError::JsonParse {
                path: path.to_path_buf(),
                message: e.to_string(),
                source: e,
            })?;

        self.validate(&snapshot, path)?;

        debug!(
            component = %snapshot.component,
            shown = snapshot.sub_components.len(),
            total = snapshot.total(),
            "Loaded portfolio snapshot"
        );
        Ok(snapshot)
    }

    fn validate(&self, snapshot: &PortfolioSnapshot, path: &Path) -> Result<(), CoreError> {
        let mut seen = HashSet::new();
        for comp in &snapshot.sub_components {
            if !seen.insert(comp.key.as_str()) {
                warn!(key = %comp.key, "Duplicate sub-component key in snapshot");
                return Err(CoreError::InvalidSnapshot {
                    path: path.to_path_buf(),
                    message: format!("duplicate sub-component key: {}", comp.key),
                });
            }
        }

        if let Some(total) = snapshot.total {
            if total < snapshot.sub_components.len() {
                return Err(CoreError::InvalidSnapshot {
                    path: path.to_path_buf(),
                    message: format!(
                        "total ({}) is below the sub-component count ({})",
                        total,
                        snapshot.sub_components.len()
                    ),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_snapshot(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_a_valid_snapshot() {
        let file = write_snapshot(
            r#"{
                "component": "org:folio",
                "name": "My Portfolio",
                "total": 3,
                "subComponents": [
                    {"key": "a", "name": "A", "qualifier": "TRK",
                     "branch": "develop",
                     "measures": {"ncloc": "100", "alert_status": "OK"}},
                    {"key": "b", "name": "B", "qualifier": "APP"}
                ]
            }"#,
        );

        let snapshot = SnapshotParser::new().parse(file.path()).unwrap();
        assert_eq!(snapshot.component, "org:folio");
        assert_eq!(snapshot.sub_components.len(), 2);
        assert_eq!(snapshot.total(), 3);
        assert!(snapshot.is_truncated());
    }

    #[test]
    fn rejects_duplicate_keys() {
        let file = write_snapshot(
            r#"{"component": "c", "subComponents": [
                {"key": "dup", "name": "A", "qualifier": "TRK"},
                {"key": "dup", "name": "B", "qualifier": "TRK"}
            ]}"#,
        );

        let err = SnapshotParser::new().parse(file.path()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSnapshot { .. }));
    }

    #[test]
    fn rejects_total_below_count() {
        let file = write_snapshot(
            r#"{"component": "c", "total": 1, "subComponents": [
                {"key": "a", "name": "A", "qualifier": "TRK"},
                {"key": "b", "name": "B", "qualifier": "TRK"}
            ]}"#,
        );

        let err = SnapshotParser::new().parse(file.path()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSnapshot { .. }));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = SnapshotParser::new()
            .parse(Path::new("/no/such/snapshot.json"))
            .unwrap_err();
        assert!(matches!(err, CoreError::FileNotFound { .. }));
    }

    #[test]
    fn malformed_json_reports_path() {
        let file = write_snapshot("{not json");
        let err = SnapshotParser::new().parse(file.path()).unwrap_err();
        assert!(matches!(err, CoreError::JsonParse { .. }));
    }
}
