mod args;
mod config;
mod input;

use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use args::Args;
use vulnlog_output::{OutputConfig, OutputFormat, OutputManager, OutputSpec};

fn main() -> Result<()> {
    // Parse args using get_matches() so we can access ArgMatches for config merging
    let matches = Args::command().get_matches();
    let mut args = Args::from_arg_matches(&matches).map_err(|e| anyhow::anyhow!(e))?;

    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    if let Some(report_config) = config::resolve_config(args.config.as_deref())? {
        config::apply_config_with_matches(&report_config, &mut args, &matches)?;
        info!("applied report config");
    }

    let mut results = Vec::new();
    for path in &args.results {
        results.extend(input::load_results(path)?);
    }
    if results.is_empty() {
        warn!("no scan results found in input");
    }

    let output_config = build_output_config(&args);
    OutputManager::new(output_config)
        .run(&results)
        .context("failed to write report")?;

    info!(hosts = results.len(), "report complete");
    Ok(())
}

/// Translate CLI arguments into output destinations.
fn build_output_config(args: &Args) -> OutputConfig {
    let mut outputs: Vec<OutputSpec> = args
        .output
        .iter()
        .map(|p| OutputSpec::new(OutputFormat::Syslog, p))
        .collect();
    outputs.extend(
        args.output_json
            .iter()
            .map(|p| OutputSpec::new(OutputFormat::Json, p)),
    );

    // Quiet only suppresses stdout when something else receives the report.
    let stdout = !(args.quiet && !outputs.is_empty());

    OutputConfig {
        outputs,
        stdout,
        stdout_format: args.format,
        cvss_over: args.cvss_over,
    }
}
