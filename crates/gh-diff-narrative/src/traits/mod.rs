//! Extension traits for customizing output.

mod token_palette;

pub use token_palette::{DefaultPalette, TokenPalette};
