// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Tree-sitter backed highlighting engine.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use streaming_iterator::StreamingIterator;
use tracing::{debug, trace};
use tree_sitter::{Parser, Query, QueryCursor};

use super::engine::HighlightEngine;
use super::html;
use super::language::{normalize_hint, SupportedLanguage};
use super::HighlightKind;
use crate::config::ResolvedConfig;
use crate::error::{ConfigError, HighlightError};

/// Default CSS class prefix for highlight spans.
pub const DEFAULT_CLASS_PREFIX: &str = "hl-";

/// Syntax highlighting engine using tree-sitter grammars.
///
/// A fresh [`Parser`] is created for every call; only compiled queries are
/// shared, so the engine can be used from several threads at once.
#[derive(Debug)]
pub struct TreeSitterEngine {
    class_prefix: String,
    aliases: HashMap<String, SupportedLanguage>,
    queries: RwLock<HashMap<SupportedLanguage, Arc<Query>>>,
}

impl TreeSitterEngine {
    /// Create an engine with the default class prefix and no aliases.
    pub fn new() -> Self {
        Self {
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            aliases: HashMap::new(),
            queries: RwLock::new(HashMap::new()),
        }
    }

    /// Build an engine from resolved configuration.
    ///
    /// Fails if an alias points at a language the engine does not know.
    pub fn from_config(config: &ResolvedConfig) -> Result<Self, ConfigError> {
        let mut engine = Self::new().with_class_prefix(config.class_prefix.clone());
        for (alias, target) in &config.aliases {
            let language =
                SupportedLanguage::from_hint(target).ok_or_else(|| ConfigError::InvalidValue {
                    field: format!("aliases.{}", alias),
                    message: format!("unknown language '{}'", target),
                })?;
            engine = engine.with_alias(alias, language);
        }
        Ok(engine)
    }

    /// Set the CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Register an extra hint for a language.
    pub fn with_alias(mut self, alias: &str, language: SupportedLanguage) -> Self {
        self.aliases.insert(normalize_hint(alias), language);
        self
    }

    pub fn class_prefix(&self) -> &str {
        &self.class_prefix
    }

    /// Resolve a hint to a language, consulting aliases first.
    pub fn resolve(&self, hint: &str) -> Option<SupportedLanguage> {
        let key = normalize_hint(hint);
        self.aliases
            .get(&key)
            .copied()
            .or_else(|| SupportedLanguage::from_normalized(&key))
    }

    /// Get or compile the highlight query for a language.
    fn query(
        &self,
        lang: SupportedLanguage,
        grammar: &tree_sitter::Language,
    ) -> Result<Arc<Query>, HighlightError> {
        if let Some(query) = self
            .queries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&lang)
        {
            return Ok(Arc::clone(query));
        }

        let query = Query::new(grammar, lang.highlight_query()).map_err(|e| {
            HighlightError::Query {
                language: lang.name().to_string(),
                message: e.to_string(),
            }
        })?;
        let query = Arc::new(query);
        debug!(language = %lang, "Compiled highlight query");

        self.queries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(lang, Arc::clone(&query));
        Ok(query)
    }

    /// Highlight code with a tree-sitter grammar.
    fn highlight_tree(
        &self,
        code: &str,
        lang: SupportedLanguage,
        grammar: tree_sitter::Language,
    ) -> Result<String, HighlightError> {
        let mut parser = Parser::new();
        parser
            .set_language(&grammar)
            .map_err(|e| HighlightError::Parser {
                language: lang.name().to_string(),
                message: e.to_string(),
            })?;

        let tree = parser
            .parse(code, None)
            .ok_or_else(|| HighlightError::ParseFailed(lang.name().to_string()))?;

        let query = self.query(lang, &grammar)?;
        let capture_names = query.capture_names();

        let mut kinds: Vec<Option<HighlightKind>> = vec![None; code.len()];
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, tree.root_node(), code.as_bytes());

        while let Some(m) = matches.next() {
            for capture in m.captures {
                let Some(kind) = capture_names
                    .get(capture.index as usize)
                    .and_then(|name| HighlightKind::from_capture(name))
                else {
                    continue;
                };

                let node = capture.node;
                let end = node.end_byte().min(code.len());
                for slot in &mut kinds[node.start_byte().min(end)..end] {
                    if kind.overrides(*slot) {
                        *slot = Some(kind);
                    }
                }
            }
        }

        trace!(language = %lang, bytes = code.len(), "Rendered highlight runs");
        Ok(html::render_runs(code, &kinds, &self.class_prefix))
    }
}

impl Default for TreeSitterEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightEngine for TreeSitterEngine {
    fn recognizes(&self, language: &str) -> bool {
        self.resolve(language).is_some()
    }

    fn render(&self, code: &str, language: &str) -> Result<String, HighlightError> {
        let lang = self
            .resolve(language)
            .ok_or_else(|| HighlightError::engine(format!("unknown language '{}'", language)))?;

        match lang.tree_sitter_language() {
            Some(grammar) => self.highlight_tree(code, lang, grammar),
            None => Ok(html::escape(code)),
        }
    }

    fn languages(&self) -> Vec<String> {
        SupportedLanguage::ALL
            .iter()
            .map(|lang| lang.name().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_with_alias() {
        let engine = TreeSitterEngine::new().with_alias("Rust-Script", SupportedLanguage::Rust);
        assert_eq!(engine.resolve("rust-script"), Some(SupportedLanguage::Rust));
        assert_eq!(engine.resolve("py"), Some(SupportedLanguage::Python));
        assert_eq!(engine.resolve("cobol"), None);
    }

    #[test]
    fn test_recognizes_plain_text() {
        let engine = TreeSitterEngine::new();
        assert!(engine.recognizes("plaintext"));
        assert!(!engine.recognizes("not-a-real-language"));
    }

    #[test]
    fn test_plain_text_is_escaped() {
        let engine = TreeSitterEngine::new();
        let out = engine.render("<b>&</b>", "plaintext").unwrap();
        assert_eq!(out, "&lt;b&gt;&amp;&lt;/b&gt;");
    }

    #[test]
    fn test_unknown_language_is_an_error() {
        let engine = TreeSitterEngine::new();
        let err = engine.render("x", "cobol").unwrap_err();
        assert!(matches!(err, HighlightError::Engine(_)));
    }

    /// A snippet per grammar and the span it must produce.
    fn sample(lang: SupportedLanguage) -> (&'static str, &'static str) {
        match lang {
            SupportedLanguage::Rust => ("fn main() { let x = 1; }", "keyword\">fn<"),
            SupportedLanguage::Python => ("def f(a):\n    return a + 1", "keyword\">def<"),
            SupportedLanguage::JavaScript => {
                ("function f(a) { return a + 1; }", "keyword\">function<")
            }
            SupportedLanguage::TypeScript => (
                "function f(a: number): number { return a; }",
                "keyword\">function<",
            ),
            SupportedLanguage::Go => ("func main() { x := 1 }", "keyword\">func<"),
            SupportedLanguage::Json => ("{\"a\": [1, true, null]}", "constant\">true<"),
            SupportedLanguage::Bash => ("if [ -f x ]; then echo hi; fi", "keyword\">if<"),
            SupportedLanguage::PlainText => ("plain", ""),
        }
    }

    #[test]
    fn test_every_grammar_renders_spans() {
        let engine = TreeSitterEngine::new();
        for lang in SupportedLanguage::ALL {
            if lang.tree_sitter_language().is_none() {
                continue;
            }
            let (code, expected) = sample(lang);
            let out = engine
                .render(code, lang.name())
                .unwrap_or_else(|e| panic!("{} failed to render: {}", lang, e));
            assert!(
                out.contains(&format!("class=\"hl-{}", expected)),
                "{} missing {}: {}",
                lang,
                expected,
                out
            );
        }
    }

    #[test]
    fn test_bash_renders_and_escapes() {
        let engine = TreeSitterEngine::new();
        let out = engine.render("echo hi", "bash").unwrap();
        assert!(out.contains("<span"), "{}", out);

        let out = engine.render("echo <b> && ls", "sh").unwrap();
        assert!(out.contains("&lt;b&gt;"), "{}", out);
        assert!(!out.contains("<b>"));
    }

    #[test]
    fn test_class_prefix_applies_to_spans() {
        let engine = TreeSitterEngine::new().with_class_prefix("tok-");
        let out = engine.render("fn main() {}", "rust").unwrap();
        assert!(out.contains("<span class=\"tok-keyword\">fn</span>"), "{}", out);
        assert!(!out.contains("class=\"hl-"));
    }

    #[test]
    fn test_from_config_rejects_unknown_alias_target() {
        let mut config = ResolvedConfig::default();
        config
            .aliases
            .insert("mylang".to_string(), "cobol".to_string());
        let err = TreeSitterEngine::from_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_from_config_applies_prefix_and_aliases() {
        let mut config = ResolvedConfig::default();
        config.class_prefix = "x-".to_string();
        config
            .aliases
            .insert("rscript".to_string(), "rust".to_string());
        let engine = TreeSitterEngine::from_config(&config).unwrap();
        assert_eq!(engine.class_prefix(), "x-");
        assert_eq!(engine.resolve("rscript"), Some(SupportedLanguage::Rust));
    }

    #[test]
    fn test_languages_lists_plain_text() {
        let engine = TreeSitterEngine::new();
        let langs = engine.languages();
        assert!(langs.contains(&"plaintext".to_string()));
        assert!(langs.contains(&"rust".to_string()));
    }
}
