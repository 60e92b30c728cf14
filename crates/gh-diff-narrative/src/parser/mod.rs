//! Unified diff parsing.

mod unified;

pub use unified::{parse_patch, HunkHeader, ParseError};
