use crate::core::{ContentSource, MarkerHit, Result, ScanReport, ScanSettings};
use crate::utils::validation::validate_non_empty_string;
use std::path::Path;

pub fn contains_marker(content: &str, marker: &str) -> bool {
    content.contains(marker)
}

/// Every occurrence of `marker` in `content`, in order, with 1-based line/column.
pub fn find_markers(content: &str, marker: &str) -> Vec<MarkerHit> {
    let mut hits = Vec::new();
    if marker.is_empty() {
        return hits;
    }

    let mut line = 1;
    let mut line_start = 0;
    let mut cursor = 0;

    for (offset, _) in content.match_indices(marker) {
        for (i, c) in content[cursor..offset].char_indices() {
            if c == '\n' {
                line += 1;
                line_start = cursor + i + 1;
            }
        }
        cursor = offset;

        let column = content[line_start..offset].chars().count() + 1;
        hits.push(MarkerHit { line, column });
    }

    hits
}

pub struct PlaceholderScanner<S: ContentSource> {
    source: S,
    marker: String,
}

impl<S: ContentSource> PlaceholderScanner<S> {
    pub fn new<C: ScanSettings>(source: S, settings: &C) -> Result<Self> {
        validate_non_empty_string("scanner.marker", settings.marker())?;
        Ok(Self {
            source,
            marker: settings.marker().to_string(),
        })
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn scan(&self, path: &Path) -> Result<ScanReport> {
        tracing::debug!("Scanning {} for {:?}", path.display(), self.marker);
        let content = self.source.read_text(path)?;

        let hits = if contains_marker(&content, &self.marker) {
            find_markers(&content, &self.marker)
        } else {
            Vec::new()
        };

        for hit in &hits {
            tracing::debug!(
                "{}:{}:{}: found {:?}",
                path.display(),
                hit.line,
                hit.column,
                self.marker
            );
        }

        Ok(ScanReport {
            path: path.to_path_buf(),
            marker: self.marker.clone(),
            hits,
        })
    }
}
