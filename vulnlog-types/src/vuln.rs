use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::severity::{CvssSelection, CvssVersion};

/// Origin of the advisory data attached to a CVE.
///
/// Serialized as its lowercase source name. Names outside the known set are
/// kept verbatim in `Other`, so distinct unknown sources never collide as
/// map keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CveContentType {
    /// National Vulnerability Database. The only source used for scoring.
    Nvd,
    Jvn,
    RedHat,
    Ubuntu,
    Debian,
    Oracle,
    Other(String),
}

impl From<String> for CveContentType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "nvd" => Self::Nvd,
            "jvn" => Self::Jvn,
            "redhat" => Self::RedHat,
            "ubuntu" => Self::Ubuntu,
            "debian" => Self::Debian,
            "oracle" => Self::Oracle,
            _ => Self::Other(name),
        }
    }
}

impl From<CveContentType> for String {
    fn from(source: CveContentType) -> Self {
        match source {
            CveContentType::Other(name) => name,
            known => known.to_string(),
        }
    }
}

impl fmt::Display for CveContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nvd => write!(f, "nvd"),
            Self::Jvn => write!(f, "jvn"),
            Self::RedHat => write!(f, "redhat"),
            Self::Ubuntu => write!(f, "ubuntu"),
            Self::Debian => write!(f, "debian"),
            Self::Oracle => write!(f, "oracle"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

/// Scoring data for one CVE from one advisory source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CveContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvss2_score: Option<f64>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cvss2_vector: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvss3_score: Option<f64>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cvss3_vector: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cwe_id: String,
}

impl CveContent {
    /// Pick the score to report: a usable v2 score wins, then v3.
    ///
    /// Returns `None` when neither score is usable (missing, zero, negative
    /// or NaN).
    pub fn selected_cvss(&self) -> Option<CvssSelection<'_>> {
        if let Some(score) = usable(self.cvss2_score) {
            return Some(CvssSelection {
                version: CvssVersion::V2,
                score,
                vector: &self.cvss2_vector,
            });
        }
        usable(self.cvss3_score).map(|score| CvssSelection {
            version: CvssVersion::V3,
            score,
            vector: &self.cvss3_vector,
        })
    }

    /// Highest usable score across both CVSS versions.
    pub fn max_score(&self) -> Option<f64> {
        match (usable(self.cvss2_score), usable(self.cvss3_score)) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        }
    }
}

fn usable(score: Option<f64>) -> Option<f64> {
    score.filter(|s| *s > 0.0)
}

/// A package on the host affected by a CVE.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageStatus {
    pub name: String,
}

impl PackageStatus {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Detail of one CVE detected on a host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VulnInfo {
    #[serde(default)]
    pub affected_packages: Vec<PackageStatus>,
    #[serde(default)]
    pub cve_contents: HashMap<CveContentType, CveContent>,
}

impl VulnInfo {
    /// The NVD entry, if any. Other sources are never consulted for scoring.
    pub fn nvd(&self) -> Option<&CveContent> {
        self.cve_contents.get(&CveContentType::Nvd)
    }

    /// Highest usable CVSS score across every advisory source.
    pub fn max_cvss_score(&self) -> Option<f64> {
        self.cve_contents
            .values()
            .filter_map(CveContent::max_score)
            .reduce(f64::max)
    }

    /// Comma-joined affected package names in their original order.
    pub fn package_names(&self) -> String {
        self.affected_packages
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}
