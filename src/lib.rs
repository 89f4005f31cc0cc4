// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! codeglow - language-aware code highlighting that never fails.
//!
//! Given a code string and a language hint, codeglow returns an HTML
//! fragment with highlighting markup. Unrecognized hints are rendered as
//! plain text, and if the engine fails the original code comes back
//! unchanged, so a broken code block never breaks the page around it.
//!
//! # Architecture
//!
//! - [`highlight`] - The [`CodeHighlighter`] wrapper, the [`HighlightEngine`]
//!   trait, and the tree-sitter engine
//! - [`error`] - Error types and result aliases
//! - [`config`] - Configuration loading and merging
//! - [`telemetry`] - Logging setup and highlight metrics
//!
//! # Example
//!
//! ```rust,ignore
//! use codeglow::{highlight_code, CodeHighlighter};
//!
//! let html = highlight_code("print('hi')", "python");
//!
//! let highlighter = CodeHighlighter::new();
//! let block = highlighter.highlight_block("fn main() {}", "rust");
//! ```

pub mod config;
pub mod error;
pub mod highlight;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use error::{ConfigError, HighlightError, Result};
pub use highlight::{
    highlight_code, CodeHighlighter, HighlightEngine, SupportedLanguage, TreeSitterEngine,
    PLAIN_TEXT,
};

/// codeglow version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_public_exports() {
        let _highlighter = CodeHighlighter::new();
        assert_eq!(PLAIN_TEXT, "plaintext");
        assert_eq!(highlight_code("hello", "not-a-real-language"), "hello");
    }
}
