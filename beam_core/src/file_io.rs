//! # File I/O Module
//!
//! Reading and writing beam documents and analysis reports:
//! - **Atomic saves**: write to `.tmp`, sync, rename to prevent corruption
//! - **Version validation**: refuse documents from an incompatible schema
//!
//! ## File Format
//!
//! Both documents and reports are pretty-printed JSON.
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_core::beam::SupportType;
//! use beam_core::document::{BeamDocument, BeamInput};
//! use beam_core::file_io::{load_document, save_document};
//! use std::path::Path;
//!
//! let doc = BeamDocument::new("B-1", BeamInput::new(SupportType::Cantilever, 3.0, 0.3));
//! save_document(&doc, Path::new("b1.json"))?;
//!
//! let loaded = load_document(Path::new("b1.json"))?;
//! assert_eq!(loaded.meta.id, doc.meta.id);
//! # Ok::<(), beam_core::errors::BeamError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::analysis::AnalysisReport;
use crate::document::{BeamDocument, SCHEMA_VERSION};
use crate::errors::{BeamError, BeamResult};

/// Save a document with atomic write semantics.
pub fn save_document(document: &BeamDocument, path: &Path) -> BeamResult<()> {
    write_json_atomic(document, path)
}

/// Save an analysis report with atomic write semantics.
pub fn save_report(report: &AnalysisReport, path: &Path) -> BeamResult<()> {
    write_json_atomic(report, path)
}

/// Load a document from a file.
///
/// # Returns
///
/// * `Ok(BeamDocument)` - Successfully loaded document
/// * `Err(BeamError::VersionMismatch)` - File version is incompatible
/// * `Err(BeamError::SerializationError)` - Invalid JSON
/// * `Err(BeamError::FileError)` - I/O error
pub fn load_document(path: &Path) -> BeamResult<BeamDocument> {
    let contents = fs::read_to_string(path)
        .map_err(|e| BeamError::file_error("read", path.display().to_string(), e.to_string()))?;

    let document: BeamDocument = serde_json::from_str(&contents).map_err(|e| {
        BeamError::serialization(format!("Invalid JSON in {}: {}", path.display(), e))
    })?;

    validate_version(&document.meta.version)?;
    debug!("loaded document '{}' ({})", document.meta.label, document.meta.id);

    Ok(document)
}

/// Serialize, write to `<path>.tmp`, sync, then rename over `path`.
fn write_json_atomic<T: Serialize>(value: &T, path: &Path) -> BeamResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| BeamError::serialization(e.to_string()))?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        BeamError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        BeamError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        BeamError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        BeamError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!("wrote {}", path.display());
    Ok(())
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> BeamResult<()> {
    let mismatch = || BeamError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // In 0.x a newer minor may carry breaking changes
    if current_parts[0] == 0 && file_parts.len() > 1 && current_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beam::SupportType;
    use crate::document::{BeamInput, ForceInput};
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("beam_core_test_{}.json", name))
    }

    fn cantilever_doc() -> BeamDocument {
        let mut input = BeamInput::new(SupportType::Cantilever, 3.0, 0.3);
        input.forces.push(ForceInput {
            fx: 0.0,
            fy: -12.0,
            x: 3.0,
            y: 0.0,
            note: String::new(),
        });
        BeamDocument::new("C-1", input)
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("roundtrip");
        let doc = cantilever_doc();
        save_document(&doc, &path).unwrap();

        let loaded = load_document(&path).unwrap();
        assert_eq!(loaded.meta.label, "C-1");
        assert_eq!(loaded.meta.id, doc.meta.id);
        assert_eq!(loaded.beam.forces, doc.beam.forces);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_path("atomic");
        let tmp_path = path.with_extension("json.tmp");

        save_document(&cantilever_doc(), &path).unwrap();
        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_report() {
        let path = temp_path("report");
        let report = cantilever_doc().report().unwrap();
        save_report(&report, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("FixedEndMoment"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_document(&temp_path("does_not_exist")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_invalid_json() {
        let path = temp_path("invalid");
        fs::write(&path, "{ not json").unwrap();
        let err = load_document(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.7").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }
}
