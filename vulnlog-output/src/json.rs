use crate::traits::{OutputError, OutputFormatter};
use vulnlog_types::ScanResult;

/// Formats a scan result as a single line of compact JSON.
///
/// Output for several hosts concatenates into valid JSON Lines.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &ScanResult) -> Result<String, OutputError> {
        let mut line = serde_json::to_string(result)?;
        line.push('\n');
        Ok(line)
    }
}
