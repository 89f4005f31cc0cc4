// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The never-failing highlight entry point.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

use once_cell::sync::Lazy;
use tracing::{debug, instrument, warn};

use super::engine::HighlightEngine;
use super::html;
use super::language::PLAIN_TEXT;
use super::syntax::TreeSitterEngine;
use crate::error::HighlightError;
use crate::telemetry::metrics::{HighlightMetrics, HighlightOutcome, GLOBAL_METRICS};

/// Process-wide highlighter backing [`highlight_code`].
static DEFAULT_HIGHLIGHTER: Lazy<CodeHighlighter> = Lazy::new(CodeHighlighter::new);

/// Highlight `code` with the default tree-sitter engine.
///
/// Returns `code` unchanged if highlighting fails.
pub fn highlight_code(code: &str, lang: &str) -> String {
    DEFAULT_HIGHLIGHTER.highlight(code, lang)
}

/// Wraps a [`HighlightEngine`] so that highlighting never fails.
///
/// Unrecognized language hints are rendered as plain text. Engine errors and
/// panics are logged and the input is returned verbatim.
pub struct CodeHighlighter<E = TreeSitterEngine> {
    engine: E,
    metrics: Arc<HighlightMetrics>,
}

impl CodeHighlighter<TreeSitterEngine> {
    /// Create a highlighter over the default tree-sitter engine.
    pub fn new() -> Self {
        Self::with_engine(TreeSitterEngine::new())
    }
}

impl Default for CodeHighlighter<TreeSitterEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: HighlightEngine> CodeHighlighter<E> {
    /// Create a highlighter over a custom engine.
    pub fn with_engine(engine: E) -> Self {
        Self {
            engine,
            metrics: Arc::clone(&GLOBAL_METRICS),
        }
    }

    /// Record into `metrics` instead of the global collector.
    pub fn with_metrics(mut self, metrics: Arc<HighlightMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn metrics(&self) -> &HighlightMetrics {
        &self.metrics
    }

    /// Language that a hint resolves to: the hint itself when the engine
    /// recognizes it, otherwise `plaintext`.
    pub fn resolve_language(&self, lang: &str) -> String {
        if self.engine.recognizes(lang) {
            lang.to_string()
        } else {
            debug!(lang, "Unrecognized language, using {}", PLAIN_TEXT);
            PLAIN_TEXT.to_string()
        }
    }

    /// Highlight `code`, returning it unmodified on any failure.
    pub fn highlight(&self, code: &str, lang: &str) -> String {
        let start = Instant::now();
        let result = self.attempt(code, lang);

        match result {
            Ok((outcome, fragment)) => {
                self.record(outcome, start);
                fragment
            }
            Err(err) => {
                self.record(HighlightOutcome::Fallback, start);
                warn!(
                    error = %err,
                    lang,
                    language = err.language().unwrap_or(lang),
                    "Error highlighting code, returning it unmodified"
                );
                code.to_string()
            }
        }
    }

    /// Highlight `code` and wrap the fragment in `<pre>`.
    pub fn highlight_block(&self, code: &str, lang: &str) -> String {
        html::wrap_pre(&self.highlight(code, lang))
    }

    /// Highlight `code`, surfacing the engine failure instead of absorbing it.
    ///
    /// Engine panics are converted to [`HighlightError::Panicked`].
    #[instrument(level = "debug", skip(self, code), fields(len = code.len()))]
    pub fn try_highlight(&self, code: &str, lang: &str) -> Result<String, HighlightError> {
        self.attempt(code, lang).map(|(_, fragment)| fragment)
    }

    fn attempt(&self, code: &str, lang: &str) -> Result<(HighlightOutcome, String), HighlightError> {
        let attempt = panic::catch_unwind(AssertUnwindSafe(|| {
            let language = self.resolve_language(lang);
            let outcome = if language == PLAIN_TEXT && lang != PLAIN_TEXT {
                HighlightOutcome::PlainText
            } else {
                HighlightOutcome::Highlighted
            };
            self.engine
                .render(code, &language)
                .map(|fragment| (outcome, fragment))
        }));

        attempt.unwrap_or_else(|payload| Err(HighlightError::Panicked(panic_message(&*payload))))
    }

    #[cfg(feature = "telemetry")]
    fn record(&self, outcome: HighlightOutcome, start: Instant) {
        self.metrics.record(outcome, start.elapsed());
    }

    #[cfg(not(feature = "telemetry"))]
    fn record(&self, _outcome: HighlightOutcome, _start: Instant) {}
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
