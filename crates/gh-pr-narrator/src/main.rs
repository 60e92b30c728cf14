use anyhow::{Context, Result};
use clap::Parser;
use gh_narrative_config::NarratorConfig;
use std::collections::BTreeMap;
use std::io::Write;

mod cli;
mod input;
mod logger;
mod runner;

use cli::Args;
use runner::NarrationReport;

fn load_config(args: &Args) -> Result<NarratorConfig> {
    match &args.config {
        Some(path) => NarratorConfig::load_from(path),
        None => Ok(NarratorConfig::load()),
    }
}

fn write_report(report: &NarrationReport, args: &Args, pretty: bool) -> Result<()> {
    let mut json = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    }
    .context("Failed to serialize report")?;
    json.push('\n');

    match &args.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            log::info!("Report written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(json.as_bytes())
                .context("Failed to write report to stdout")?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = logger::init(args.log_target())? {
        eprintln!("Logging to {}", path.display());
    }

    log::info!("Starting gh-pr-narrator");

    let config = load_config(&args)?;
    let explicit_steps = match &args.steps {
        Some(path) => input::load_steps(path)?,
        None => BTreeMap::new(),
    };
    let options = args.narrative_options(&config, explicit_steps);
    let settings = args.run_settings(&config);

    let files = input::load_files(args.input_path().map(|p| p.as_path()))?;
    let report = runner::run(files, options, &settings).await?;

    if report.failed > 0 {
        log::warn!(
            "{} of {} files could not be parsed and were replaced by a placeholder",
            report.failed,
            report.files
        );
    }

    write_report(&report, &args, settings.pretty)?;

    log::info!("Exiting gh-pr-narrator");
    Ok(())
}
