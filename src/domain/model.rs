use std::path::PathBuf;

/// Sentinel left in templated files until someone fills the field in.
pub const DEFAULT_MARKER: &str = "<REPLACE_ME";

/// Line printed when a scanned file still holds the marker.
pub const DEFAULT_NOTICE: &str = "Placeholders found";

/// 1-based position of a single marker occurrence. `column` counts chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerHit {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub path: PathBuf,
    pub marker: String,
    pub hits: Vec<MarkerHit>,
}

impl ScanReport {
    pub fn has_placeholders(&self) -> bool {
        !self.hits.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    Clean,
    PlaceholdersFound { count: usize },
}

impl ScanOutcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            ScanOutcome::Clean => 0,
            ScanOutcome::PlaceholdersFound { .. } => 1,
        }
    }
}

impl From<&ScanReport> for ScanOutcome {
    fn from(report: &ScanReport) -> Self {
        if report.has_placeholders() {
            ScanOutcome::PlaceholdersFound {
                count: report.hits.len(),
            }
        } else {
            ScanOutcome::Clean
        }
    }
}
