use crate::core::scanner::PlaceholderScanner;
use crate::core::{ContentSource, Result, ScanOutcome};
use std::path::Path;

/// Runs one scan and classifies the result.
pub struct CheckEngine<S: ContentSource> {
    scanner: PlaceholderScanner<S>,
}

impl<S: ContentSource> CheckEngine<S> {
    pub fn new(scanner: PlaceholderScanner<S>) -> Self {
        Self { scanner }
    }

    pub fn run(&self, path: &Path) -> Result<ScanOutcome> {
        let report = self.scanner.scan(path)?;
        let outcome = ScanOutcome::from(&report);

        match outcome {
            ScanOutcome::Clean => {
                tracing::info!("No placeholders in {}", path.display());
            }
            ScanOutcome::PlaceholdersFound { count } => {
                tracing::info!(
                    "{} occurrence(s) of {:?} in {}",
                    count,
                    self.scanner.marker(),
                    path.display()
                );
            }
        }

        Ok(outcome)
    }
}
