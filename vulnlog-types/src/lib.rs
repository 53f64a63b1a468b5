pub mod scan;
pub mod severity;
pub mod vuln;

pub use scan::ScanResult;
pub use severity::{CvssSelection, CvssVersion, Severity};
pub use vuln::{CveContent, CveContentType, PackageStatus, VulnInfo};
