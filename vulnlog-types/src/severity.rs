use std::fmt;

/// Qualitative severity band derived from a CVSS base score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Classify a score: >= 9.0 critical, >= 7.0 high, >= 4.0 medium, > 0 low.
    pub fn from_score(score: f64) -> Self {
        if score >= 9.0 {
            Self::Critical
        } else if score >= 7.0 {
            Self::High
        } else if score >= 4.0 {
            Self::Medium
        } else if score > 0.0 {
            Self::Low
        } else {
            Self::None
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "NONE"),
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// CVSS scheme a score belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CvssVersion {
    V2,
    V3,
}

impl CvssVersion {
    /// Suffix used in record keys (`cvss_score_v2`, `cvss_vector_v3`, ...).
    pub fn suffix(self) -> &'static str {
        match self {
            Self::V2 => "v2",
            Self::V3 => "v3",
        }
    }
}

/// The score chosen for reporting, borrowed from its `CveContent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CvssSelection<'a> {
    pub version: CvssVersion,
    pub score: f64,
    pub vector: &'a str,
}

impl CvssSelection<'_> {
    pub fn severity(&self) -> Severity {
        Severity::from_score(self.score)
    }
}
