//! Syntax tokens produced for highlighting.

use serde::{Deserialize, Serialize};

/// Classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Keyword,
    String,
    Comment,
    Number,
    Plain,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// Optional emphasis for a token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenStyle {
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
}

impl TokenStyle {
    pub fn bold() -> Self {
        Self {
            font_weight: FontWeight::Bold,
            font_style: FontStyle::Normal,
        }
    }

    pub fn italic() -> Self {
        Self {
            font_weight: FontWeight::Normal,
            font_style: FontStyle::Italic,
        }
    }
}

/// A classified, lossless slice of a source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxToken {
    /// The text content.
    pub content: String,
    /// Token class.
    #[serde(rename = "type")]
    pub kind: TokenKind,
    /// Foreground color as `#rrggbb`.
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TokenStyle>,
}
