// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Error types for codeglow.
//!
//! Highlighting failures are typed with `thiserror` so callers of
//! `try_highlight` can inspect them; the CLI propagates with `anyhow`.

use thiserror::Error;

/// Errors raised while resolving or rendering a code fragment.
///
/// `CodeHighlighter::highlight` absorbs all of these and falls back to the
/// verbatim input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HighlightError {
    #[error("Parser setup failed for {language}: {message}")]
    Parser { language: String, message: String },

    #[error("Highlight query failed to compile for {language}: {message}")]
    Query { language: String, message: String },

    #[error("Parse produced no tree for {0}")]
    ParseFailed(String),

    #[error("Engine error: {0}")]
    Engine(String),

    #[error("Engine panicked: {0}")]
    Panicked(String),
}

impl HighlightError {
    /// Create a generic engine error.
    pub fn engine(message: impl Into<String>) -> Self {
        Self::Engine(message.into())
    }

    /// Language the failure is attributed to, when known.
    pub fn language(&self) -> Option<&str> {
        match self {
            Self::Parser { language, .. } | Self::Query { language, .. } => Some(language.as_str()),
            Self::ParseFailed(language) => Some(language.as_str()),
            Self::Engine(_) | Self::Panicked(_) => None,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Invalid config format: {0}")]
    InvalidFormat(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("IO error reading config: {0}")]
    IoError(String),

    #[error("YAML parsing error: {0}")]
    YamlError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(err.to_string()),
            _ => Self::IoError(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::YamlError(err.to_string())
    }
}

/// Result type alias using anyhow for flexible error handling.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_error_language() {
        let err = HighlightError::Query {
            language: "rust".to_string(),
            message: "bad pattern".to_string(),
        };
        assert_eq!(err.language(), Some("rust"));
        assert_eq!(HighlightError::ParseFailed("go".to_string()).language(), Some("go"));
        assert_eq!(HighlightError::engine("boom").language(), None);
    }

    #[test]
    fn test_highlight_error_display() {
        let err = HighlightError::Parser {
            language: "python".to_string(),
            message: "version mismatch".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("python"));
        assert!(display.contains("version mismatch"));
    }

    #[test]
    fn test_config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let config_err: ConfigError = io_err.into();
        assert!(matches!(config_err, ConfigError::NotFound(_)));

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let config_err: ConfigError = io_err.into();
        assert!(matches!(config_err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_config_error_from_json() {
        let result: std::result::Result<serde_json::Value, _> = serde_json::from_str("invalid json");
        let config_err: ConfigError = result.unwrap_err().into();
        assert!(matches!(config_err, ConfigError::JsonError(_)));
    }

    #[test]
    fn test_config_error_from_yaml() {
        let result: std::result::Result<serde_yaml::Value, _> = serde_yaml::from_str("key: [unclosed");
        let config_err: ConfigError = result.unwrap_err().into();
        assert!(matches!(config_err, ConfigError::YamlError(_)));
    }
}
