//! Command-line arguments

use clap::Parser;
use gh_diff_narrative::{NarrativeOptions, WalkthroughStep};
use gh_narrative_config::NarratorConfig;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::logger::LogTarget;

#[derive(Parser, Debug)]
#[command(name = "gh-pr-narrator")]
#[command(about = "Turn a pull request's changed files into a narrated walkthrough", long_about = None)]
pub struct Args {
    /// JSON array of changed files (GitHub "list pull request files" shape); reads stdin when omitted or "-"
    pub input: Option<PathBuf>,

    /// Config file to use instead of the discovered .gh-pr-narrator.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Walkthrough budget per file
    #[arg(short, long)]
    pub duration: Option<u32>,

    /// Context lines kept on each side of a change block
    #[arg(long)]
    pub context_size: Option<usize>,

    /// Number of files processed concurrently
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// JSON object mapping file name to an explicit list of walkthrough steps
    #[arg(long)]
    pub steps: Option<PathBuf>,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit compact JSON
    #[arg(long)]
    pub compact: bool,

    /// Include syntax tokens for every diff line
    #[arg(long)]
    pub tokens: bool,

    /// Write logs to a file in the cache directory instead of stderr
    #[arg(long)]
    pub log_file: bool,
}

/// Settings after merging the config file with command-line flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    /// Concurrent files; the runner treats 0 as 1
    pub workers: usize,
    pub pretty: bool,
    pub tokens: bool,
}

impl Args {
    pub fn log_target(&self) -> LogTarget {
        if self.log_file {
            LogTarget::File
        } else {
            LogTarget::Stderr
        }
    }

    /// Reads from stdin when no input path (or "-") was given
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }

    /// Flags win over the config file
    pub fn narrative_options(
        &self,
        config: &NarratorConfig,
        explicit_steps: BTreeMap<String, Vec<WalkthroughStep>>,
    ) -> NarrativeOptions {
        NarrativeOptions {
            context_size: self.context_size.unwrap_or(config.context_size),
            total_duration: self.duration.unwrap_or(config.total_duration),
            language_overrides: config.language_overrides.clone(),
            explicit_steps,
        }
    }

    pub fn run_settings(&self, config: &NarratorConfig) -> RunSettings {
        RunSettings {
            workers: self.workers.unwrap_or(config.workers),
            pretty: config.pretty_output && !self.compact,
            tokens: self.tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("gh-pr-narrator").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults_come_from_config() {
        let args = parse(&["files.json"]);
        let config = NarratorConfig::default();

        let options = args.narrative_options(&config, BTreeMap::new());
        assert_eq!(options.context_size, 3);
        assert_eq!(options.total_duration, 60);
        assert_eq!(
            args.run_settings(&config),
            RunSettings {
                workers: 4,
                pretty: true,
                tokens: false,
            }
        );
        assert_eq!(args.input_path(), Some(&PathBuf::from("files.json")));
    }

    #[test]
    fn test_flags_override_config() {
        let args = parse(&[
            "--duration",
            "90",
            "--context-size",
            "1",
            "--workers",
            "0",
            "--compact",
            "--tokens",
        ]);
        let mut config = NarratorConfig::default();
        config
            .language_overrides
            .insert("h".to_string(), "cpp".to_string());

        let options = args.narrative_options(&config, BTreeMap::new());
        assert_eq!(options.context_size, 1);
        assert_eq!(options.total_duration, 90);
        assert_eq!(options.language_overrides.get("h").map(String::as_str), Some("cpp"));

        let settings = args.run_settings(&config);
        assert_eq!(settings.workers, 0);
        assert!(!settings.pretty);
        assert!(settings.tokens);
    }

    #[test]
    fn test_stdin_input() {
        assert_eq!(parse(&[]).input_path(), None);
        assert_eq!(parse(&["-"]).input_path(), None);
    }

    #[test]
    fn test_log_target() {
        assert_eq!(parse(&[]).log_target(), LogTarget::Stderr);
        assert_eq!(parse(&["--log-file"]).log_target(), LogTarget::File);
    }

    #[test]
    fn test_rejects_bad_duration() {
        let result = Args::try_parse_from(["gh-pr-narrator", "--duration", "-5"]);
        assert!(result.is_err());
    }
}
