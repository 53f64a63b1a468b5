use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use clap::parser::ValueSource;
use serde::{Deserialize, Serialize};

use crate::args::Args;

/// Report settings loaded from TOML.
///
/// All fields are optional. A value only applies when the matching flag
/// was not given on the command line.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportConfig {
    /// `syslog` or `json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvss_over: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub output: Vec<PathBuf>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub output_json: Vec<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiet: Option<bool>,
}

/// Default config location.
pub fn default_config_path() -> PathBuf {
    if cfg!(windows) {
        let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(appdata).join("vulnlog").join("config.toml")
    } else {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".vulnlog").join("config.toml")
    }
}

/// Parse a config file.
pub fn load_config(path: &Path) -> Result<ReportConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config '{}'", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("failed to parse config '{}'", path.display()))
}

/// Load the config named on the command line, or the default one if present.
///
/// An explicit path must exist; a missing default file yields `None`.
pub fn resolve_config(explicit: Option<&Path>) -> Result<Option<ReportConfig>> {
    match explicit {
        Some(path) => load_config(path).map(Some),
        None => {
            let path = default_config_path();
            if path.exists() {
                load_config(&path).map(Some)
            } else {
                Ok(None)
            }
        }
    }
}

/// Apply config values for flags the user did not explicitly pass.
pub fn apply_config_with_matches(
    config: &ReportConfig,
    args: &mut Args,
    matches: &ArgMatches,
) -> Result<()> {
    let explicit =
        |id: &str| matches.value_source(id) == Some(ValueSource::CommandLine);

    if !explicit("format")
        && let Some(ref format) = config.format
    {
        args.format = format
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))
            .context("invalid 'format' in report config")?;
    }
    if !explicit("cvss_over") && config.cvss_over.is_some() {
        args.cvss_over = config.cvss_over;
    }
    if !explicit("output") && !config.output.is_empty() {
        args.output = config.output.clone();
    }
    if !explicit("output_json") && !config.output_json.is_empty() {
        args.output_json = config.output_json.clone();
    }
    if !explicit("quiet")
        && let Some(quiet) = config.quiet
    {
        args.quiet = quiet;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, FromArgMatches};
    use vulnlog_output::OutputFormat;

    fn parse(argv: &[&str]) -> (Args, ArgMatches) {
        let matches = Args::command()
            .try_get_matches_from(std::iter::once("vulnlog").chain(argv.iter().copied()))
            .unwrap();
        let args = Args::from_arg_matches(&matches).unwrap();
        (args, matches)
    }

    #[test]
    fn config_toml_roundtrip() {
        let config = ReportConfig {
            format: Some("json".into()),
            cvss_over: Some(4.0),
            output: vec![PathBuf::from("/var/log/vulnlog/records.log")],
            ..Default::default()
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let loaded: ReportConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(loaded.format.as_deref(), Some("json"));
        assert_eq!(loaded.cvss_over, Some(4.0));
        assert_eq!(loaded.output.len(), 1);
        assert!(loaded.output_json.is_empty());
        assert!(loaded.quiet.is_none());
    }

    #[test]
    fn apply_sets_unset_values() {
        let (mut args, matches) = parse(&["r.json"]);
        let config = ReportConfig {
            format: Some("json".into()),
            cvss_over: Some(7.0),
            quiet: Some(true),
            ..Default::default()
        };
        apply_config_with_matches(&config, &mut args, &matches).unwrap();
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.cvss_over, Some(7.0));
        assert!(args.quiet);
    }

    #[test]
    fn apply_does_not_override_explicit() {
        let (mut args, matches) = parse(&["-f", "syslog", "--cvss-over", "2.5", "r.json"]);
        let config = ReportConfig {
            format: Some("json".into()),
            cvss_over: Some(9.0),
            ..Default::default()
        };
        apply_config_with_matches(&config, &mut args, &matches).unwrap();
        assert_eq!(args.format, OutputFormat::Syslog);
        assert_eq!(args.cvss_over, Some(2.5));
    }

    #[test]
    fn invalid_format_in_config_is_error() {
        let (mut args, matches) = parse(&["r.json"]);
        let config = ReportConfig {
            format: Some("xml".into()),
            ..Default::default()
        };
        assert!(apply_config_with_matches(&config, &mut args, &matches).is_err());
    }

    #[test]
    fn explicit_missing_config_is_error() {
        let path = std::env::temp_dir().join("vulnlog_test_no_such_config.toml");
        let _ = std::fs::remove_file(&path);
        assert!(resolve_config(Some(&path)).is_err());
    }

    #[test]
    fn load_config_from_file() {
        let dir = std::env::temp_dir().join("vulnlog_test_config");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "cvss_over = 5.5\noutput_json = [\"hosts.jsonl\"]\n").unwrap();

        let config = resolve_config(Some(&path)).unwrap().unwrap();
        assert_eq!(config.cvss_over, Some(5.5));
        assert_eq!(config.output_json, [PathBuf::from("hosts.jsonl")]);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
