//! Trait for providing token colors to the tokenizer.

use crate::model::{TokenKind, TokenStyle};

/// Provides colors and emphasis for syntax tokens.
///
/// Implement this trait to match the presentation layer's theme. Colors are
/// plain `#rrggbb` strings so any renderer can consume them.
///
/// # Example
///
/// ```
/// use gh_diff_narrative::TokenPalette;
///
/// struct LightPalette;
///
/// impl TokenPalette for LightPalette {
///     fn plain_color(&self) -> &str {
///         "#24292e"
///     }
///
///     fn keyword_color(&self) -> &str {
///         "#d73a49"
///     }
/// }
///
/// assert_eq!(LightPalette.string_color(), "#98c379");
/// ```
pub trait TokenPalette: Send + Sync {
    /// Foreground color for plain text.
    fn plain_color(&self) -> &str;

    /// Foreground color for keywords.
    fn keyword_color(&self) -> &str;

    /// Foreground color for string literals.
    fn string_color(&self) -> &str {
        "#98c379"
    }

    /// Foreground color for comments.
    fn comment_color(&self) -> &str {
        "#7f848e"
    }

    /// Foreground color for numeric literals.
    fn number_color(&self) -> &str {
        "#d19a66"
    }

    /// Emphasis for a token kind. Keywords are bold, comments italic.
    fn style(&self, kind: TokenKind) -> Option<TokenStyle> {
        match kind {
            TokenKind::Keyword => Some(TokenStyle::bold()),
            TokenKind::Comment => Some(TokenStyle::italic()),
            _ => None,
        }
    }

    /// Color for a token kind.
    fn color(&self, kind: TokenKind) -> &str {
        match kind {
            TokenKind::Keyword => self.keyword_color(),
            TokenKind::String => self.string_color(),
            TokenKind::Comment => self.comment_color(),
            TokenKind::Number => self.number_color(),
            TokenKind::Plain => self.plain_color(),
        }
    }
}

/// Default palette with dark-mode colors.
#[derive(Debug, Clone, Default)]
pub struct DefaultPalette;

impl TokenPalette for DefaultPalette {
    fn plain_color(&self) -> &str {
        "#abb2bf"
    }

    fn keyword_color(&self) -> &str {
        "#c678dd"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FontWeight;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_palette() {
        let palette = DefaultPalette;
        assert_eq!(palette.color(TokenKind::Plain), "#abb2bf");
        assert_eq!(palette.color(TokenKind::Keyword), "#c678dd");
        assert_eq!(palette.color(TokenKind::Comment), "#7f848e");
        assert_eq!(
            palette.style(TokenKind::Keyword).map(|s| s.font_weight),
            Some(FontWeight::Bold)
        );
        assert_eq!(palette.style(TokenKind::Number), None);
    }
}
