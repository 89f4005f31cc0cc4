// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Configuration loading from files.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;

use super::types::HighlightConfig;

/// Config file names to search for (in order).
pub const CONFIG_FILES: &[&str] = &[
    ".codeglow.json",
    ".codeglow.yaml",
    ".codeglow.yml",
    "codeglow.config.json",
];

/// Global config directory name.
pub const GLOBAL_CONFIG_DIR: &str = ".codeglow";

/// Global config file name.
pub const GLOBAL_CONFIG_FILE: &str = "config.json";

/// Get the global config file path (~/.codeglow/config.json).
pub fn get_global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(GLOBAL_CONFIG_DIR).join(GLOBAL_CONFIG_FILE))
}

/// Load global configuration, if present.
pub fn load_global_config() -> Result<Option<HighlightConfig>, ConfigError> {
    match get_global_config_path() {
        Some(path) if path.exists() => load_config_file(&path).map(Some),
        _ => Ok(None),
    }
}

/// Load configuration from the first config file found in `dir`.
pub fn load_workspace_config(dir: &Path) -> Result<Option<HighlightConfig>, ConfigError> {
    for filename in CONFIG_FILES {
        let path = dir.join(filename);
        if path.exists() {
            return load_config_file(&path).map(Some);
        }
    }
    Ok(None)
}

/// Load a configuration file (JSON or YAML, chosen by extension).
pub fn load_config_file(path: &Path) -> Result<HighlightConfig, ConfigError> {
    debug!(path = %path.display(), "Loading config file");
    let content = std::fs::read_to_string(path)?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&content).map_err(ConfigError::from),
        _ => serde_json::from_str(&content).map_err(ConfigError::from),
    }
}

/// Write a configuration file into `dir`, returning its path.
pub fn init_config(dir: &Path, config: Option<HighlightConfig>) -> Result<PathBuf, ConfigError> {
    let path = dir.join(CONFIG_FILES[0]);
    let content = serde_json::to_string_pretty(&config.unwrap_or_else(example_config))?;
    std::fs::write(&path, content)?;
    Ok(path)
}

/// Find the nearest directory at or above `start` holding a config file.
pub fn find_config_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| CONFIG_FILES.iter().any(|f| dir.join(f).exists()))
        .map(Path::to_path_buf)
}

/// Get an example configuration.
pub fn example_config() -> HighlightConfig {
    HighlightConfig {
        class_prefix: Some("hl-".to_string()),
        wrap_pre: Some(false),
        aliases: [("rs-script".to_string(), "rust".to_string())]
            .into_iter()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_json_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".codeglow.json");
        std::fs::write(&path, r#"{"classPrefix": "tok-"}"#).unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.class_prefix.as_deref(), Some("tok-"));
    }

    #[test]
    fn test_load_yaml_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".codeglow.yaml");
        std::fs::write(&path, "wrapPre: true\naliases:\n  py3: python\n").unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.wrap_pre, Some(true));
        assert_eq!(config.aliases.get("py3").map(String::as_str), Some("python"));
    }

    #[test]
    fn test_load_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("codeglow.config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::JsonError(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = load_config_file(&temp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_workspace_config_search_order() {
        let temp = TempDir::new().unwrap();
        assert!(load_workspace_config(temp.path()).unwrap().is_none());

        std::fs::write(temp.path().join("codeglow.config.json"), r#"{"classPrefix": "b-"}"#)
            .unwrap();
        std::fs::write(temp.path().join(".codeglow.json"), r#"{"classPrefix": "a-"}"#).unwrap();

        let config = load_workspace_config(temp.path()).unwrap().unwrap();
        assert_eq!(config.class_prefix.as_deref(), Some("a-"));
    }

    #[test]
    fn test_init_config_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = init_config(temp.path(), None).unwrap();
        assert!(path.ends_with(".codeglow.json"));

        let loaded = load_config_file(&path).unwrap();
        assert_eq!(loaded, example_config());
    }

    #[test]
    fn test_find_config_root() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(temp.path().join(".codeglow.yml"), "wrapPre: true\n").unwrap();

        assert_eq!(find_config_root(&nested), Some(temp.path().to_path_buf()));
    }
}
