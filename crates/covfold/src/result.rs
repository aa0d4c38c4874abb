//! Result and error types for covfold.

use thiserror::Error;

/// Result type for covfold operations
pub type CovfoldResult<T> = Result<T, CovfoldError>;

/// Errors that can occur in covfold
#[derive(Debug, Error)]
pub enum CovfoldError {
    /// Exclusion pattern failed to compile
    #[error("Invalid exclusion pattern `{pattern}`: {source}")]
    Pattern {
        /// Pattern as written by the caller
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Unknown preset name
    #[error("Unknown preset: {name}")]
    UnknownPreset {
        /// Requested preset name
        name: String,
    },

    /// Invalid coverage target
    #[error("Invalid coverage target {value}: must be between 0 and 100")]
    InvalidTarget {
        /// Requested target percentage
        value: f64,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_error_mentions_pattern() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = CovfoldError::Pattern {
            pattern: "(".to_string(),
            source,
        };
        assert!(err.to_string().contains("`(`"));
    }

    #[test]
    fn test_unknown_preset_error() {
        let err = CovfoldError::UnknownPreset {
            name: "nope".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown preset: nope");
    }

    #[test]
    fn test_invalid_target_error() {
        let err = CovfoldError::InvalidTarget { value: 120.0 };
        assert!(err.to_string().contains("120"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CovfoldError = io_err.into();
        assert!(err.to_string().starts_with("I/O error"));
    }
}
