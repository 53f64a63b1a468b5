use std::fmt::Write;

use vulnlog_types::{ScanResult, VulnInfo};

use crate::traits::{OutputError, OutputFormatter};

/// Flat `key="value"` syslog message formatter.
///
/// Emits one record per CVE detected on the host. Base fields are always
/// present, in a fixed order:
/// `server_name os_family os_release ipv4_addr ipv6_addr packages cve_id`.
/// When the CVE has an NVD entry with a usable score, the record continues
/// with `severity`, `cvss_score_v2`/`cvss_vector_v2` (or the `v3` pair when
/// only v3 is scored) and `cwe_id`. No other advisory source is consulted.
///
/// Values are double-quoted verbatim; embedded quotes are not escaped, which
/// keeps the output byte-compatible with existing consumers.
pub struct SyslogFormatter;

impl SyslogFormatter {
    /// Encode every CVE on the host. Record order follows map iteration and
    /// is not stable; sort if order matters.
    pub fn encode(&self, result: &ScanResult) -> Vec<String> {
        encode_syslog(result)
    }
}

impl OutputFormatter for SyslogFormatter {
    fn format(&self, result: &ScanResult) -> Result<String, OutputError> {
        let mut records = encode_syslog(result);
        records.sort();

        let mut output = String::new();
        for record in records {
            output.push_str(&record);
            output.push('\n');
        }
        Ok(output)
    }
}

/// Build the syslog records for one host, one per entry in `scanned_cves`.
pub fn encode_syslog(result: &ScanResult) -> Vec<String> {
    let ipv4 = result.ipv4_addrs.join(",");
    let ipv6 = result.ipv6_addrs.join(",");

    result
        .scanned_cves
        .iter()
        .map(|(cve_id, info)| encode_record(result, &ipv4, &ipv6, cve_id, info))
        .collect()
}

fn encode_record(
    result: &ScanResult,
    ipv4: &str,
    ipv6: &str,
    cve_id: &str,
    info: &VulnInfo,
) -> String {
    let mut line = String::new();

    write!(line, r#"server_name="{}""#, result.server_name).unwrap();
    write!(line, r#" os_family="{}""#, result.family).unwrap();
    write!(line, r#" os_release="{}""#, result.release).unwrap();
    write!(line, r#" ipv4_addr="{ipv4}""#).unwrap();
    write!(line, r#" ipv6_addr="{ipv6}""#).unwrap();
    write!(line, r#" packages="{}""#, info.package_names()).unwrap();
    write!(line, r#" cve_id="{cve_id}""#).unwrap();

    if let Some(nvd) = info.nvd()
        && let Some(cvss) = nvd.selected_cvss()
    {
        let suffix = cvss.version.suffix();
        write!(line, r#" severity="{}""#, cvss.severity()).unwrap();
        write!(line, r#" cvss_score_{suffix}="{:.2}""#, cvss.score).unwrap();
        write!(line, r#" cvss_vector_{suffix}="{}""#, cvss.vector).unwrap();
        write!(line, r#" cwe_id="{}""#, nvd.cwe_id).unwrap();
    }

    line
}
