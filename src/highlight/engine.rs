// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The highlighting engine seam.

use crate::error::HighlightError;

/// A syntax-highlighting engine.
///
/// Implementations must recognize [`PLAIN_TEXT`](super::PLAIN_TEXT), which is
/// what [`CodeHighlighter`](super::CodeHighlighter) falls back to for
/// unrecognized hints.
pub trait HighlightEngine: Send + Sync {
    /// Check whether the engine has rules for `language`.
    fn recognizes(&self, language: &str) -> bool;

    /// Render `code` as an HTML fragment using `language`'s rules.
    fn render(&self, code: &str, language: &str) -> Result<String, HighlightError>;

    /// Canonical names of the recognized languages.
    fn languages(&self) -> Vec<String> {
        Vec::new()
    }
}

impl<T: HighlightEngine + ?Sized> HighlightEngine for Box<T> {
    fn recognizes(&self, language: &str) -> bool {
        (**self).recognizes(language)
    }

    fn render(&self, code: &str, language: &str) -> Result<String, HighlightError> {
        (**self).render(code, language)
    }

    fn languages(&self) -> Vec<String> {
        (**self).languages()
    }
}

/// Boxed engine for dynamic dispatch.
pub type BoxedEngine = Box<dyn HighlightEngine>;
