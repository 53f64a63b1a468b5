use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `key="value"` record per CVE.
    #[default]
    Syslog,
    /// One JSON object per host (JSON Lines).
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syslog => write!(f, "syslog"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "syslog" => Ok(Self::Syslog),
            "json" | "jsonl" => Ok(Self::Json),
            other => Err(format!(
                "unknown output format: {other} (expected syslog or json)"
            )),
        }
    }
}

/// A single output destination: format + file path.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSpec {
    pub format: OutputFormat,
    pub path: PathBuf,
}

impl OutputSpec {
    pub fn new(format: OutputFormat, path: impl Into<PathBuf>) -> Self {
        Self {
            format,
            path: path.into(),
        }
    }
}

/// Configuration for output destinations and report filtering.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// File outputs (-o, --output-json).
    pub outputs: Vec<OutputSpec>,
    /// Print to stdout.
    pub stdout: bool,
    /// Format used for stdout.
    pub stdout_format: OutputFormat,
    /// Drop CVEs scored below this (--cvss-over).
    pub cvss_over: Option<f64>,
}
