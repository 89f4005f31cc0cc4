// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

/// Token categories the tree-sitter engine tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightKind {
    Comment,
    Keyword,
    String,
    Number,
    Function,
    Type,
    Variable,
    Operator,
    Constant,
    Attribute,
}

impl HighlightKind {
    /// Map a query capture name to a kind.
    ///
    /// Only the first dotted segment matters, so `function.method` and
    /// `function.call` both map to [`HighlightKind::Function`].
    pub fn from_capture(name: &str) -> Option<Self> {
        let head = name.split('.').next().unwrap_or(name);
        match head {
            "comment" => Some(HighlightKind::Comment),
            "keyword" => Some(HighlightKind::Keyword),
            "string" => Some(HighlightKind::String),
            "number" | "integer" | "float" => Some(HighlightKind::Number),
            "function" | "method" => Some(HighlightKind::Function),
            "type" => Some(HighlightKind::Type),
            "variable" => Some(HighlightKind::Variable),
            "operator" => Some(HighlightKind::Operator),
            "constant" | "boolean" => Some(HighlightKind::Constant),
            "attribute" | "decorator" | "annotation" => Some(HighlightKind::Attribute),
            _ => None,
        }
    }

    /// CSS class suffix for this kind.
    pub fn class_name(&self) -> &'static str {
        match self {
            HighlightKind::Comment => "comment",
            HighlightKind::Keyword => "keyword",
            HighlightKind::String => "string",
            HighlightKind::Number => "number",
            HighlightKind::Function => "function",
            HighlightKind::Type => "type",
            HighlightKind::Variable => "variable",
            HighlightKind::Operator => "operator",
            HighlightKind::Constant => "constant",
            HighlightKind::Attribute => "attribute",
        }
    }

    fn priority(&self) -> u8 {
        match self {
            HighlightKind::Variable => 1,
            HighlightKind::Constant => 2,
            HighlightKind::Attribute => 3,
            HighlightKind::Operator => 4,
            HighlightKind::Number => 5,
            HighlightKind::String => 6,
            HighlightKind::Type => 7,
            HighlightKind::Function => 8,
            HighlightKind::Keyword => 9,
            HighlightKind::Comment => 10,
        }
    }

    /// Check if `self` should replace `current` on an overlapping byte.
    pub fn overrides(&self, current: Option<HighlightKind>) -> bool {
        match current {
            None => true,
            Some(current) => self.priority() > current.priority(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_capture() {
        assert_eq!(HighlightKind::from_capture("comment"), Some(HighlightKind::Comment));
        assert_eq!(HighlightKind::from_capture("keyword"), Some(HighlightKind::Keyword));
        assert_eq!(
            HighlightKind::from_capture("function.method"),
            Some(HighlightKind::Function)
        );
        assert_eq!(HighlightKind::from_capture("type.builtin"), Some(HighlightKind::Type));
        assert_eq!(HighlightKind::from_capture("unknown"), None);
    }

    #[test]
    fn test_priority() {
        assert!(HighlightKind::Keyword.overrides(None));
        assert!(HighlightKind::Comment.overrides(Some(HighlightKind::Keyword)));
        assert!(HighlightKind::Function.overrides(Some(HighlightKind::Variable)));
        assert!(!HighlightKind::Variable.overrides(Some(HighlightKind::Function)));
        assert!(!HighlightKind::String.overrides(Some(HighlightKind::String)));
    }
}
