use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::vuln::VulnInfo;

/// Vulnerability scan outcome for a single host.
///
/// The JSON schema is this tool's own snake_case layout (`server_name`,
/// `scanned_cves`, `cve_contents`, `cvss2_score`, ...). Result files saved by
/// other scanners must be converted to it before they load.
///
/// `scanned_cves` is keyed by CVE ID. Its iteration order carries no meaning;
/// consumers that need a stable order must sort.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    pub server_name: String,
    #[serde(default)]
    pub family: String,
    #[serde(default)]
    pub release: String,
    #[serde(default)]
    pub ipv4_addrs: Vec<String>,
    #[serde(default)]
    pub ipv6_addrs: Vec<String>,
    #[serde(default)]
    pub scanned_cves: HashMap<String, VulnInfo>,
}

impl ScanResult {
    pub fn new(server_name: impl Into<String>) -> Self {
        Self {
            server_name: server_name.into(),
            ..Default::default()
        }
    }

    /// Number of CVEs detected on this host.
    pub fn cve_count(&self) -> usize {
        self.scanned_cves.len()
    }
}
