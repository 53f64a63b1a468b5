pub mod config;
pub mod filter;
pub mod json;
pub mod manager;
pub mod syslog;
pub mod traits;

pub use config::{OutputConfig, OutputFormat, OutputSpec};
pub use filter::filter_cvss_over;
pub use json::JsonFormatter;
pub use manager::OutputManager;
pub use syslog::{SyslogFormatter, encode_syslog};
pub use traits::{OutputError, OutputFormatter};
