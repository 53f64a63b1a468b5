use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;
use vulnlog_types::ScanResult;

/// Read scan results from a file.
///
/// Accepts a single JSON object, a JSON array of objects, or JSON Lines
/// (one object per line, blank lines ignored).
pub fn load_results(path: &Path) -> Result<Vec<ScanResult>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scan result '{}'", path.display()))?;
    let results = parse_results(&content)
        .with_context(|| format!("failed to parse scan result '{}'", path.display()))?;
    debug!(path = %path.display(), hosts = results.len(), "loaded scan results");
    Ok(results)
}

/// Parse scan results from JSON text. See [`load_results`].
pub fn parse_results(content: &str) -> Result<Vec<ScanResult>> {
    let trimmed = content.trim_start();
    if trimmed.is_empty() {
        bail!("input is empty");
    }

    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).context("invalid JSON array of scan results");
    }

    // JSON Lines only when the first line is a complete document by itself;
    // anything else is a single (possibly pretty-printed) object and keeps
    // serde's own error position.
    let whole_err = match serde_json::from_str::<ScanResult>(trimmed) {
        Ok(result) => return Ok(vec![result]),
        Err(e) => e,
    };
    let first_line_complete = trimmed
        .lines()
        .next()
        .is_some_and(|line| serde_json::from_str::<serde_json::Value>(line).is_ok());
    if !first_line_complete {
        return Err(whole_err).context("invalid JSON scan result");
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).with_context(|| format!("invalid JSON on line {}", i + 1))
        })
        .collect()
}
