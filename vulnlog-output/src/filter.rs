use vulnlog_types::ScanResult;

/// Keep only CVEs whose highest score, across any advisory source, is at
/// least `min`.
///
/// Returns a new `ScanResult`. A threshold of zero or below keeps every CVE,
/// including unscored ones.
pub fn filter_cvss_over(result: &ScanResult, min: f64) -> ScanResult {
    let mut filtered = result.clone();
    if min > 0.0 {
        filtered
            .scanned_cves
            .retain(|_, info| info.max_cvss_score().is_some_and(|s| s >= min));
    }
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use vulnlog_types::{CveContent, CveContentType, VulnInfo};

    fn scored(source: CveContentType, score: f64) -> VulnInfo {
        let mut info = VulnInfo::default();
        info.cve_contents.insert(
            source,
            CveContent {
                cvss3_score: Some(score),
                ..Default::default()
            },
        );
        info
    }

    fn make_result() -> ScanResult {
        let mut result = ScanResult::new("app01");
        result
            .scanned_cves
            .insert("CVE-A".into(), scored(CveContentType::Nvd, 9.1));
        result
            .scanned_cves
            .insert("CVE-B".into(), scored(CveContentType::Nvd, 4.0));
        result
            .scanned_cves
            .insert("CVE-C".into(), scored(CveContentType::Debian, 7.0));
        result.scanned_cves.insert("CVE-D".into(), VulnInfo::default());
        result
    }

    #[test]
    fn filter_keeps_scores_at_or_above() {
        let filtered = filter_cvss_over(&make_result(), 7.0);
        let mut ids: Vec<&str> = filtered.scanned_cves.keys().map(String::as_str).collect();
        ids.sort();
        assert_eq!(ids, ["CVE-A", "CVE-C"]);
    }

    #[test]
    fn zero_threshold_keeps_everything() {
        let result = make_result();
        let filtered = filter_cvss_over(&result, 0.0);
        assert_eq!(filtered, result);
    }

    #[test]
    fn filter_does_not_modify_original() {
        let result = make_result();
        let _ = filter_cvss_over(&result, 9.5);
        assert_eq!(result.cve_count(), 4);
    }

    #[test]
    fn score_from_unlisted_source_counts() {
        let mut info = scored(CveContentType::Other("amazon".into()), 9.0);
        info.cve_contents.insert(
            CveContentType::Other("suse".into()),
            CveContent {
                cvss3_score: Some(2.0),
                ..Default::default()
            },
        );
        let mut result = ScanResult::new("app02");
        result.scanned_cves.insert("CVE-E".into(), info);

        let filtered = filter_cvss_over(&result, 7.0);
        assert_eq!(filtered.cve_count(), 1);
        assert_eq!(filtered.scanned_cves["CVE-E"].cve_contents.len(), 2);
    }
}
