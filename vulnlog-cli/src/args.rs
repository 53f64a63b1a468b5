use std::path::PathBuf;

use clap::Parser;
use vulnlog_output::OutputFormat;

/// vulnlog: turn saved vulnerability scan results into key="value" syslog records
#[derive(Parser, Debug)]
#[command(
    name = "vulnlog",
    version,
    about = "Encode vulnerability scan results as syslog records"
)]
pub struct Args {
    /// Scan result file(s): a JSON object, a JSON array of objects, or JSON Lines
    #[arg(value_name = "RESULT", required = true, num_args = 1..)]
    pub results: Vec<PathBuf>,

    /// Format written to stdout: syslog or json
    #[arg(short = 'f', long = "format", value_name = "FORMAT", default_value = "syslog")]
    pub format: OutputFormat,

    /// Write syslog records to a file (repeatable)
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Vec<PathBuf>,

    /// Write JSON Lines to a file (repeatable)
    #[arg(long = "output-json", value_name = "PATH")]
    pub output_json: Vec<PathBuf>,

    /// Only report CVEs with a CVSS score at or above this value
    #[arg(long = "cvss-over", value_name = "SCORE")]
    pub cvss_over: Option<f64>,

    /// Do not print to stdout when file outputs are configured
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Report config file (default: ~/.vulnlog/config.toml)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (use -v or -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("vulnlog").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let args = parse(&["result.json"]);
        assert_eq!(args.results, [PathBuf::from("result.json")]);
        assert_eq!(args.format, OutputFormat::Syslog);
        assert!(args.output.is_empty());
        assert!(args.cvss_over.is_none());
        assert!(!args.quiet);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn all_flags() {
        let args = parse(&[
            "-f",
            "json",
            "-o",
            "a.log",
            "-o",
            "b.log",
            "--output-json",
            "c.jsonl",
            "--cvss-over",
            "7.5",
            "-q",
            "-c",
            "report.toml",
            "-vv",
            "one.json",
            "two.json",
        ]);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.output.len(), 2);
        assert_eq!(args.output_json, [PathBuf::from("c.jsonl")]);
        assert_eq!(args.cvss_over, Some(7.5));
        assert!(args.quiet);
        assert_eq!(args.config, Some(PathBuf::from("report.toml")));
        assert_eq!(args.verbose, 2);
        assert_eq!(args.results.len(), 2);
    }

    #[test]
    fn results_required() {
        assert!(Args::try_parse_from(["vulnlog"]).is_err());
    }

    #[test]
    fn bad_format_rejected() {
        assert!(Args::try_parse_from(["vulnlog", "-f", "xml", "r.json"]).is_err());
    }
}
