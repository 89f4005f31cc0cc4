// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Configuration module for codeglow.
//!
//! Handles loading, merging, and validation of configuration from:
//! - Global config: ~/.codeglow/config.json
//! - Workspace config: .codeglow.json, .codeglow.yaml, or codeglow.config.json
//! - CLI options: command-line arguments
//!
//! Configuration is merged with precedence (CLI > workspace > global > defaults).

mod loader;
mod merger;
mod types;

pub use loader::{
    example_config, find_config_root, get_global_config_path, init_config, load_config_file,
    load_global_config, load_workspace_config, CONFIG_FILES, GLOBAL_CONFIG_DIR,
    GLOBAL_CONFIG_FILE,
};
pub use merger::{merge_config, CliOptions};
pub use types::{HighlightConfig, ResolvedConfig};

use crate::error::ConfigError;
use std::path::Path;

/// Load and merge all configuration sources for a directory.
///
/// The workspace config is taken from the nearest ancestor of `dir` that
/// holds a config file.
pub fn load_config(dir: &Path, cli_options: CliOptions) -> Result<ResolvedConfig, ConfigError> {
    let global = load_global_config()?;
    let workspace = match find_config_root(dir) {
        Some(root) => load_workspace_config(&root)?,
        None => None,
    };

    let resolved = merge_config(global, workspace, cli_options);
    resolved.validate()?;
    Ok(resolved)
}

/// Load configuration from an explicit file instead of searching.
pub fn load_config_from(path: &Path, cli_options: CliOptions) -> Result<ResolvedConfig, ConfigError> {
    let global = load_global_config()?;
    let explicit = load_config_file(path)?;

    let resolved = merge_config(global, Some(explicit), cli_options);
    resolved.validate()?;
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_with_no_files() {
        let temp = TempDir::new().unwrap();
        let result = load_config(temp.path(), CliOptions::default());
        // Global config may or may not exist; either way loading succeeds.
        assert!(result.is_ok());
    }

    #[test]
    fn test_load_config_with_workspace_config() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(".codeglow.json"),
            r#"{"classPrefix": "ws-", "aliases": {"rscript": "rust"}}"#,
        )
        .unwrap();

        let config = load_config(temp.path(), CliOptions::default()).unwrap();
        assert_eq!(config.class_prefix, "ws-");
        assert_eq!(config.aliases.get("rscript").map(String::as_str), Some("rust"));
    }

    #[test]
    fn test_cli_overrides_workspace() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(".codeglow.json"), r#"{"classPrefix": "ws-"}"#).unwrap();

        let cli = CliOptions {
            class_prefix: Some("cli-".to_string()),
            ..Default::default()
        };
        let config = load_config(temp.path(), cli).unwrap();
        assert_eq!(config.class_prefix, "cli-");
    }

    #[test]
    fn test_invalid_prefix_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.yaml");
        std::fs::write(&path, "classPrefix: \"a b\"\n").unwrap();

        let err = load_config_from(&path, CliOptions::default()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
