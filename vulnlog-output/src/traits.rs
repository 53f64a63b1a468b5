use vulnlog_types::ScanResult;

/// Renders one host's scan result as report text.
///
/// Implementations are stateless; the same input always yields the same text.
pub trait OutputFormatter: Send + Sync {
    fn format(&self, result: &ScanResult) -> Result<String, OutputError>;
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("formatting error: {0}")]
    FormatError(String),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
