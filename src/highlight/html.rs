// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! HTML fragment emission.

use super::HighlightKind;

/// Escape code text for embedding in HTML.
pub fn escape(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// Append one run of text, wrapped in a span when it has a kind.
pub fn push_run(out: &mut String, text: &str, kind: Option<HighlightKind>, class_prefix: &str) {
    if text.is_empty() {
        return;
    }
    let escaped = html_escape::encode_text(text);
    match kind {
        Some(kind) => {
            out.push_str("<span class=\"");
            out.push_str(class_prefix);
            out.push_str(kind.class_name());
            out.push_str("\">");
            out.push_str(&escaped);
            out.push_str("</span>");
        }
        None => out.push_str(&escaped),
    }
}

/// Render `code` given a per-byte kind map.
///
/// Runs of equal kind become one span. Newlines are never tagged, so no span
/// crosses a line boundary.
pub fn render_runs(code: &str, kinds: &[Option<HighlightKind>], class_prefix: &str) -> String {
    let mut out = String::with_capacity(code.len() * 2);
    let mut run_start = 0;
    let mut run_kind = None;

    for (i, c) in code.char_indices() {
        let kind = if c == '\n' {
            None
        } else {
            kinds.get(i).copied().flatten()
        };
        if kind != run_kind {
            push_run(&mut out, &code[run_start..i], run_kind, class_prefix);
            run_start = i;
            run_kind = kind;
        }
    }
    push_run(&mut out, &code[run_start..], run_kind, class_prefix);

    out
}

/// Wrap a fragment the way code blocks are embedded in a page.
pub fn wrap_pre(fragment: &str) -> String {
    format!("<pre>{}</pre>", fragment)
}
