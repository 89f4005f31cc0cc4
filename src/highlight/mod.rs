// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Syntax highlighting module.
//!
//! Turns a code string plus a language hint into an HTML fragment. The
//! [`CodeHighlighter`] never fails: unrecognized hints are rendered as plain
//! text and engine failures return the input unchanged.
//!
//! Highlighted tokens are wrapped as `<span class="hl-keyword">fn</span>`;
//! the `hl-` prefix is configurable.

pub mod engine;
pub mod highlighter;
pub mod html;
mod kind;
pub mod language;
mod queries;
pub mod syntax;

pub use engine::{BoxedEngine, HighlightEngine};
pub use highlighter::{highlight_code, CodeHighlighter};
pub use kind::HighlightKind;
pub use language::{normalize_hint, SupportedLanguage, PLAIN_TEXT};
pub use syntax::{TreeSitterEngine, DEFAULT_CLASS_PREFIX};
