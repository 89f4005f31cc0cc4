// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Configuration merging.

use super::types::{HighlightConfig, ResolvedConfig};

/// CLI options that can override configuration.
#[derive(Debug, Clone, Default)]
pub struct CliOptions {
    pub class_prefix: Option<String>,
    pub wrap_pre: Option<bool>,
}

/// Merge configurations with precedence.
///
/// Precedence (highest to lowest):
/// 1. CLI options
/// 2. Workspace config
/// 3. Global config (~/.codeglow/config.json)
/// 4. Default values
///
/// Aliases are merged key by key.
pub fn merge_config(
    global: Option<HighlightConfig>,
    workspace: Option<HighlightConfig>,
    cli: CliOptions,
) -> ResolvedConfig {
    let mut resolved = ResolvedConfig::default();

    for layer in [global, workspace].into_iter().flatten() {
        if let Some(prefix) = layer.class_prefix {
            resolved.class_prefix = prefix;
        }
        if let Some(wrap_pre) = layer.wrap_pre {
            resolved.wrap_pre = wrap_pre;
        }
        resolved.aliases.extend(layer.aliases);
    }

    if let Some(prefix) = cli.class_prefix {
        resolved.class_prefix = prefix;
    }
    if let Some(wrap_pre) = cli.wrap_pre {
        resolved.wrap_pre = wrap_pre;
    }

    resolved
}
