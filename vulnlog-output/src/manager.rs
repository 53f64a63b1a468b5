use std::fs;
use std::io::Write;
use std::path::{Component, Path};

use tracing::{debug, info};
use vulnlog_types::ScanResult;

use crate::config::{OutputConfig, OutputFormat};
use crate::filter::filter_cvss_over;
use crate::json::JsonFormatter;
use crate::syslog::SyslogFormatter;
use crate::traits::{OutputError, OutputFormatter};

fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(OutputError::FormatError(format!(
            "output path '{}' must not contain '..' components",
            path.display()
        )));
    }
    Ok(())
}

/// Coordinates output to stdout and/or multiple file destinations.
pub struct OutputManager {
    config: OutputConfig,
}

impl OutputManager {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Format every host result and write to all configured destinations.
    pub fn run(&self, results: &[ScanResult]) -> Result<(), OutputError> {
        for spec in &self.config.outputs {
            validate_output_path(&spec.path)?;
        }

        let filtered: Vec<ScanResult> = match self.config.cvss_over {
            Some(min) => results.iter().map(|r| filter_cvss_over(r, min)).collect(),
            None => results.to_vec(),
        };
        for result in &filtered {
            info!(
                host = %result.server_name,
                cves = result.cve_count(),
                "encoding scan result"
            );
        }

        if self.config.stdout {
            let output = self.render(self.config.stdout_format, &filtered)?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }

        for spec in &self.config.outputs {
            let output = self.render(spec.format, &filtered)?;
            fs::write(&spec.path, &output).map_err(|e| {
                OutputError::Io(std::io::Error::new(
                    e.kind(),
                    format!("failed to write {}: {}", spec.path.display(), e),
                ))
            })?;
            debug!(
                path = %spec.path.display(),
                format = %spec.format,
                bytes = output.len(),
                "wrote output"
            );
        }

        Ok(())
    }

    /// Format all results with one formatter and concatenate.
    pub fn render(
        &self,
        format: OutputFormat,
        results: &[ScanResult],
    ) -> Result<String, OutputError> {
        let formatter = formatter_for(format);
        let mut output = String::new();
        for result in results {
            output.push_str(&formatter.format(result)?);
        }
        Ok(output)
    }
}

/// Get the appropriate formatter for a given output format.
fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Syslog => Box::new(SyslogFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
