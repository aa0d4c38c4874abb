//! Error types for the CLI

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// The `--config` file could not be read or parsed
    #[error("Invalid config file {}: {message}", path.display())]
    Config {
        /// Config file path
        path: PathBuf,
        /// What went wrong
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Covfold library error
    #[error("{0}")]
    Covfold(#[from] covfold::CovfoldError),

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// The HTML report could not be written
    #[error("Failed to write HTML report {}: {source}", path.display())]
    HtmlWrite {
        /// Output path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: covfold::CovfoldError,
    },
}

impl CliError {
    /// Create a config file error
    #[must_use]
    pub fn config(path: &Path, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an HTML write error
    #[must_use]
    pub fn html_write(path: &Path, source: covfold::CovfoldError) -> Self {
        Self::HtmlWrite {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_names_file() {
        let err = CliError::config(Path::new("ci/covfold.yaml"), "unknown field `treshold`");
        assert_eq!(
            err.to_string(),
            "Invalid config file ci/covfold.yaml: unknown field `treshold`"
        );
    }

    #[test]
    fn test_invalid_argument_error() {
        let err = CliError::invalid_argument("bad arg");
        assert!(err.to_string().contains("Invalid argument"));
    }

    #[test]
    fn test_html_write_error_names_output() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = CliError::html_write(Path::new("out/index.html"), io_err.into());
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to write HTML report out/index.html"));
        assert!(msg.contains("denied"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let cli_err: CliError = io_err.into();
        assert!(cli_err.to_string().contains("I/O"));
    }

    #[test]
    fn test_covfold_error_passthrough() {
        let err: CliError = covfold::CovfoldError::UnknownPreset {
            name: "x".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Unknown preset: x");
    }
}
