//! Configuration and file management for gh-pr-narrator
//!
//! This crate provides:
//! - File path utilities for config and cache directories
//! - Configuration file loading (TOML)
//! - Narrator configuration (NarratorConfig)

pub mod config_file;
pub mod narrator_config;
pub mod paths;

pub use config_file::load_config_file;
pub use narrator_config::NarratorConfig;
pub use paths::{cache_dir, global_config_path};
