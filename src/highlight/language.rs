// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Language hints and the languages the tree-sitter engine knows.

use super::queries;

/// Identifier of the generic plain-text language.
pub const PLAIN_TEXT: &str = "plaintext";

/// Languages the tree-sitter engine can highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SupportedLanguage {
    Rust,
    Python,
    JavaScript,
    TypeScript,
    Go,
    Json,
    Bash,
    PlainText,
}

impl SupportedLanguage {
    /// All languages, in listing order.
    pub const ALL: [SupportedLanguage; 8] = [
        SupportedLanguage::Rust,
        SupportedLanguage::Python,
        SupportedLanguage::JavaScript,
        SupportedLanguage::TypeScript,
        SupportedLanguage::Go,
        SupportedLanguage::Json,
        SupportedLanguage::Bash,
        SupportedLanguage::PlainText,
    ];

    /// Detect language from a language name, alias, or file extension.
    ///
    /// The hint is normalized first, so `"Rust"`, `"rs"` and `"rust,ignore"`
    /// all resolve to [`SupportedLanguage::Rust`].
    pub fn from_hint(hint: &str) -> Option<Self> {
        Self::from_normalized(&normalize_hint(hint))
    }

    pub(crate) fn from_normalized(hint: &str) -> Option<Self> {
        match hint {
            "rust" | "rs" => Some(SupportedLanguage::Rust),
            "python" | "python3" | "py" | "pyw" => Some(SupportedLanguage::Python),
            "javascript" | "js" | "jsx" | "mjs" | "cjs" => Some(SupportedLanguage::JavaScript),
            "typescript" | "ts" | "tsx" | "mts" | "cts" => Some(SupportedLanguage::TypeScript),
            "go" | "golang" => Some(SupportedLanguage::Go),
            "json" => Some(SupportedLanguage::Json),
            "bash" | "sh" | "shell" | "zsh" => Some(SupportedLanguage::Bash),
            "plaintext" | "text" | "txt" | "plain" => Some(SupportedLanguage::PlainText),
            _ => None,
        }
    }

    /// Canonical name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            SupportedLanguage::Rust => "rust",
            SupportedLanguage::Python => "python",
            SupportedLanguage::JavaScript => "javascript",
            SupportedLanguage::TypeScript => "typescript",
            SupportedLanguage::Go => "go",
            SupportedLanguage::Json => "json",
            SupportedLanguage::Bash => "bash",
            SupportedLanguage::PlainText => PLAIN_TEXT,
        }
    }

    /// Get the tree-sitter grammar, or `None` for plain text.
    pub fn tree_sitter_language(&self) -> Option<tree_sitter::Language> {
        let language = match self {
            SupportedLanguage::Rust => tree_sitter_rust::LANGUAGE.into(),
            SupportedLanguage::Python => tree_sitter_python::LANGUAGE.into(),
            SupportedLanguage::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            SupportedLanguage::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            SupportedLanguage::Go => tree_sitter_go::LANGUAGE.into(),
            SupportedLanguage::Json => tree_sitter_json::LANGUAGE.into(),
            SupportedLanguage::Bash => tree_sitter_bash::LANGUAGE.into(),
            SupportedLanguage::PlainText => return None,
        };
        Some(language)
    }

    /// Get highlight query for this language.
    pub fn highlight_query(&self) -> &'static str {
        match self {
            SupportedLanguage::Rust => queries::RUST,
            SupportedLanguage::Python => queries::PYTHON,
            SupportedLanguage::JavaScript => queries::JAVASCRIPT,
            SupportedLanguage::TypeScript => queries::TYPESCRIPT,
            SupportedLanguage::Go => queries::GO,
            SupportedLanguage::Json => queries::JSON,
            SupportedLanguage::Bash => queries::BASH,
            SupportedLanguage::PlainText => "",
        }
    }
}

impl std::fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Reduce a language hint to a lookup key.
///
/// Fence info strings carry more than the language (`rust,ignore`,
/// `python title="x"`, `js{1,3}`); only the first token is kept. A leading
/// dot is dropped so `.rs` works like `rs`.
pub fn normalize_hint(hint: &str) -> String {
    let first = hint
        .trim()
        .split(|c: char| c.is_whitespace() || c == ',' || c == '{')
        .next()
        .unwrap_or("");
    first.trim_start_matches('.').to_lowercase()
}
