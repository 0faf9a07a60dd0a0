//! # Error Types
//!
//! Structured error types for beam_core. Every variant carries enough context
//! for a front end to explain what was rejected, and the enum serializes to
//! JSON so it can be handed to other tools unchanged.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{BeamError, BeamResult};
//!
//! fn validate_length(length: f64) -> BeamResult<()> {
//!     if !(length > 0.0) {
//!         return Err(BeamError::invalid_input(
//!             "length",
//!             length.to_string(),
//!             "Beam length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_length(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type BeamResult<T> = Result<T, BeamError>;

/// Structured error type for beam analysis.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BeamError {
    /// Support type is ambiguous (both flags set) or unspecified (neither set).
    /// Fatal: no reaction is computed.
    #[error("Invalid beam type: simply_supported={simply_supported}, cantilever={cantilever} - exactly one support type must be set")]
    InvalidBeamType {
        simply_supported: bool,
        cantilever: bool,
    },

    /// An input value is invalid (non-finite, out of range)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl BeamError {
    /// Create an InvalidBeamType error from the offending flags
    pub fn invalid_beam_type(simply_supported: bool, cantilever: bool) -> Self {
        BeamError::InvalidBeamType {
            simply_supported,
            cantilever,
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        BeamError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        BeamError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        BeamError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Whether the error aborts analysis outright (as opposed to I/O trouble
    /// around it)
    pub fn is_fatal_to_analysis(&self) -> bool {
        matches!(
            self,
            BeamError::InvalidBeamType { .. } | BeamError::InvalidInput { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BeamError::InvalidBeamType { .. } => "INVALID_BEAM_TYPE",
            BeamError::InvalidInput { .. } => "INVALID_INPUT",
            BeamError::FileError { .. } => "FILE_ERROR",
            BeamError::SerializationError { .. } => "SERIALIZATION_ERROR",
            BeamError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

/// Reject NaN and infinities for a named field.
pub(crate) fn require_finite(field: impl Into<String>, value: f64) -> BeamResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(BeamError::invalid_input(field, value.to_string(), "Value must be finite"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = BeamError::invalid_beam_type(true, true);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("InvalidBeamType"));
        let roundtrip: BeamError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(BeamError::invalid_beam_type(false, false).error_code(), "INVALID_BEAM_TYPE");
        assert_eq!(BeamError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_display_mentions_flags() {
        let msg = BeamError::invalid_beam_type(false, false).to_string();
        assert!(msg.contains("simply_supported=false"));
        assert!(msg.contains("cantilever=false"));
    }

    #[test]
    fn test_require_finite() {
        assert!(require_finite("x", 1.0).is_ok());
        assert!(require_finite("x", f64::NAN).is_err());
        assert!(require_finite("x", f64::INFINITY).is_err());
    }

    #[test]
    fn test_fatal_classification() {
        assert!(BeamError::invalid_beam_type(true, true).is_fatal_to_analysis());
        assert!(!BeamError::file_error("open", "a.json", "missing").is_fatal_to_analysis());
    }
}
