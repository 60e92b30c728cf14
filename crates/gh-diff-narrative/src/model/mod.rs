//! Data models for diff narration.

mod context;
mod diff;
mod token;
mod walkthrough;

pub use context::{ChangeContext, Importance};
pub use diff::{DiffLine, DiffStats, FileInput, FileStatus, LineKind, ProcessedDiff};
pub use token::{FontStyle, FontWeight, SyntaxToken, TokenKind, TokenStyle};
pub use walkthrough::{FocusType, WalkthroughStep};
