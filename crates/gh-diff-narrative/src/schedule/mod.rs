//! Walkthrough scheduling.

mod walkthrough;

pub use walkthrough::schedule;
