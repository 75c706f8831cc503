//! Structured error types for configuration loading and lookup.

use serde::Serialize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::Format;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Load errors
    MissingFile,
    UnsupportedFormat,
    InvalidFile,
    ReadFailed,

    // Lookup errors
    KeyNotFound,
}

/// Errors raised while loading files or resolving keys.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found: {}", .path.display())]
    MissingFile { path: PathBuf },

    #[error(
        "the file at path {} is not allowed, allowed file types are {}",
        .path.display(),
        .supported.join(", ")
    )]
    UnsupportedFormat {
        path: PathBuf,
        extension: String,
        supported: Vec<String>,
    },

    #[error("file at path {} does not contain valid {format}: {reason}", .path.display())]
    InvalidFile {
        path: PathBuf,
        format: Format,
        reason: String,
    },

    #[error("{key} was not found in the configuration")]
    KeyNotFound { key: String },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    pub fn missing_file(path: impl Into<PathBuf>) -> Self {
        Self::MissingFile { path: path.into() }
    }

    pub fn invalid_file(path: impl Into<PathBuf>, format: Format, reason: impl ToString) -> Self {
        Self::InvalidFile {
            path: path.into(),
            format,
            reason: reason.to_string(),
        }
    }

    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MissingFile { .. } => ErrorCode::MissingFile,
            Self::UnsupportedFormat { .. } => ErrorCode::UnsupportedFormat,
            Self::InvalidFile { .. } => ErrorCode::InvalidFile,
            Self::KeyNotFound { .. } => ErrorCode::KeyNotFound,
            Self::Io { .. } => ErrorCode::ReadFailed,
        }
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_lists_extensions() {
        let err = ConfigError::UnsupportedFormat {
            path: PathBuf::from("/etc/app/config.txt"),
            extension: "txt".to_string(),
            supported: vec!["json".into(), "yml".into(), "yaml".into()],
        };
        assert_eq!(err.code(), ErrorCode::UnsupportedFormat);
        assert!(err.to_string().ends_with("allowed file types are json, yml, yaml"));
    }

    #[test]
    fn test_key_not_found_names_full_key() {
        let err = ConfigError::key_not_found("logger.path");
        assert_eq!(err.to_string(), "logger.path was not found in the configuration");
    }

    #[test]
    fn test_invalid_file_includes_path_and_format() {
        let err = ConfigError::invalid_file("fixtures/bad.yml", Format::Yaml, "root must be a mapping");
        let msg = err.to_string();
        assert!(msg.contains("fixtures/bad.yml"));
        assert!(msg.contains("valid YAML"));
    }

    #[test]
    fn test_error_code_serializes_screaming_snake() {
        let json = serde_json::to_string(&ErrorCode::KeyNotFound).unwrap();
        assert_eq!(json, "\"KEY_NOT_FOUND\"");
    }
}
