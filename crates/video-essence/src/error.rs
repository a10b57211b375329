//! Error types for essence lookups.
//!
//! Only structural problems with the supplied device model are errors.
//! An essence that does not exist, or a path that cannot be parsed, is a
//! normal outcome and is reported as `None` or the `{N/A, -1}` locator.

use thiserror::Error;

/// Result type alias for essence operations.
pub type EssenceResult<T> = Result<T, EssenceError>;

/// Errors that can occur while reading a device model.
#[derive(Debug, Error)]
pub enum EssenceError {
    /// The device model has no such subsystem at all.
    #[error("Device model has no '{subsystem}' subsystem")]
    MissingSubsystem {
        /// The subsystem field name (e.g., "video_mixer").
        subsystem: String,
    },

    /// A device model snapshot could not be decoded.
    #[error("Invalid {format} device model snapshot: {message}")]
    Snapshot {
        /// Snapshot format ("json" or "yaml").
        format: String,
        /// Decoder error message.
        message: String,
    },
}

impl EssenceError {
    /// Creates a missing subsystem error.
    pub fn missing_subsystem(subsystem: impl Into<String>) -> Self {
        Self::MissingSubsystem {
            subsystem: subsystem.into(),
        }
    }

    /// Creates a snapshot decoding error.
    pub fn snapshot(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Snapshot {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Returns true if this error means the model lacks a subsystem the
    /// caller relied on being present.
    pub fn is_precondition(&self) -> bool {
        matches!(self, EssenceError::MissingSubsystem { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EssenceError::missing_subsystem("video_mixer");
        assert_eq!(
            err.to_string(),
            "Device model has no 'video_mixer' subsystem"
        );
    }

    #[test]
    fn test_snapshot_error() {
        let err = EssenceError::snapshot("json", "expected value at line 1 column 1");
        assert_eq!(
            err.to_string(),
            "Invalid json device model snapshot: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_is_precondition() {
        assert!(EssenceError::missing_subsystem("re_play").is_precondition());
        assert!(!EssenceError::snapshot("yaml", "bad").is_precondition());
    }
}
