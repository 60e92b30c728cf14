//! Syntax highlighting as a flat token stream.

mod highlighter;
mod language;
mod tokenizer;

pub use highlighter::DiffHighlighter;
pub use language::{resolve_language, LanguageSpec, PLAIN_TEXT};
pub use tokenizer::{tokenize, tokenize_with_palette};
