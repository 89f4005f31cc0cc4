// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Configuration type definitions.
//!
//! Defines the structure of file and resolved configuration,
//! supporting JSON and YAML formats.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ConfigError;
use crate::highlight::DEFAULT_CLASS_PREFIX;

/// Highlighting configuration as written in a config file.
/// Can be defined in .codeglow.json or .codeglow.yaml in the project root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightConfig {
    /// CSS class prefix for highlight spans
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_prefix: Option<String>,

    /// Wrap fragments in <pre> when rendering from the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap_pre: Option<bool>,

    /// Extra language hints, mapped to a known language name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub aliases: BTreeMap<String, String>,
}

/// Fully resolved configuration with defaults applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub class_prefix: String,
    pub wrap_pre: bool,
    pub aliases: BTreeMap<String, String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            wrap_pre: false,
            aliases: BTreeMap::new(),
        }
    }
}

impl ResolvedConfig {
    /// Check values that end up inside generated markup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_prefix = self
            .class_prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid_prefix {
            return Err(ConfigError::InvalidValue {
                field: "classPrefix".to_string(),
                message: format!(
                    "'{}' may only contain ASCII letters, digits, '-' and '_'",
                    self.class_prefix
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let config: HighlightConfig = serde_json::from_str(
            r#"{"classPrefix": "tok-", "wrapPre": true, "aliases": {"rscript": "rust"}}"#,
        )
        .unwrap();
        assert_eq!(config.class_prefix.as_deref(), Some("tok-"));
        assert_eq!(config.wrap_pre, Some(true));
        assert_eq!(config.aliases.get("rscript").map(String::as_str), Some("rust"));
    }

    #[test]
    fn test_empty_config_serializes_empty() {
        let json = serde_json::to_string(&HighlightConfig::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_validate_prefix() {
        let mut config = ResolvedConfig::default();
        assert!(config.validate().is_ok());

        config.class_prefix = "bad\" onclick=\"x".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));

        config.class_prefix = String::new();
        assert!(config.validate().is_ok());
    }
}
