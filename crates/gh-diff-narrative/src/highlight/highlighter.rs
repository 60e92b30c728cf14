//! Caching highlighter for whole diffs.

use super::language::LanguageSpec;
use super::tokenizer::tokenize_with_palette;
use crate::model::{ProcessedDiff, SyntaxToken};
use crate::traits::{DefaultPalette, TokenPalette};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Tokenizes diff lines, caching results by (language, content).
///
/// Diffs repeat lines a lot (braces, blank lines, imports); reuse one
/// highlighter for several files to share the cache. Output is identical to calling
/// [`tokenize_with_palette`](super::tokenize_with_palette) directly.
pub struct DiffHighlighter {
    /// Palette used for token colors.
    palette: Box<dyn TokenPalette>,
    /// Cache of tokenized content by (language, line_content) hash.
    cache: HashMap<u64, Vec<SyntaxToken>>,
    /// Maximum cache size.
    max_cache_size: usize,
}

impl std::fmt::Debug for DiffHighlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiffHighlighter")
            .field("cache_size", &self.cache.len())
            .field("max_cache_size", &self.max_cache_size)
            .finish()
    }
}

impl Default for DiffHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffHighlighter {
    /// Create a new highlighter with the default palette.
    pub fn new() -> Self {
        Self::with_palette(DefaultPalette)
    }

    /// Create a highlighter with a custom palette.
    pub fn with_palette(palette: impl TokenPalette + 'static) -> Self {
        Self {
            palette: Box::new(palette),
            cache: HashMap::new(),
            max_cache_size: 5000,
        }
    }

    /// Tokenize a single line. Results are cached.
    pub fn highlight_line(&mut self, language: &str, content: &str) -> Vec<SyntaxToken> {
        let spec = LanguageSpec::lookup(language);
        let key = cache_key(spec.name, content);
        if let Some(tokens) = self.cache.get(&key) {
            return tokens.clone();
        }

        let tokens = tokenize_with_palette(content, spec, self.palette.as_ref());

        if self.cache.len() >= self.max_cache_size {
            // Drop 20% of entries rather than clearing everything.
            let to_remove = (self.max_cache_size / 5).max(1);
            let keys_to_remove: Vec<_> = self.cache.keys().take(to_remove).copied().collect();
            for key in keys_to_remove {
                self.cache.remove(&key);
            }
        }
        self.cache.insert(key, tokens.clone());

        tokens
    }

    /// Tokenize every line of a diff, in line order.
    ///
    /// Hunk header lines come back as one plain token.
    pub fn highlight_diff(&mut self, diff: &ProcessedDiff) -> Vec<Vec<SyntaxToken>> {
        diff.lines
            .iter()
            .map(|line| match line.kind {
                crate::model::LineKind::Hunk => self.highlight_line("plaintext", &line.content),
                _ => self.highlight_line(&diff.language, &line.content),
            })
            .collect()
    }

    /// Get current cache size.
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

fn cache_key(language: &str, content: &str) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    language.hash(&mut hasher);
    content.hash(&mut hasher);
    hasher.finish()
}
