use crate::utils::error::Result;
use std::path::Path;

/// Where file text comes from.
pub trait ContentSource: Send + Sync {
    /// Reads the whole file. Access failures are returned, never swallowed.
    fn read_text(&self, path: &Path) -> Result<String>;
}

pub trait ScanSettings: Send + Sync {
    fn marker(&self) -> &str;
    fn notice(&self) -> &str;
}
