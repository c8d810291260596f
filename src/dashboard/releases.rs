use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use walkdir::WalkDir;

/// Ordered list of release identifiers (ISO dates, oldest first)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReleaseCatalog {
    releases: Vec<String>,
}

impl ReleaseCatalog {
    /// Releases are sorted and deduplicated
    pub fn new(releases: impl IntoIterator<Item = String>) -> Self {
        let mut releases: Vec<String> = releases.into_iter().collect();
        releases.sort();
        releases.dedup();
        Self { releases }
    }

    /// Find `releases/<YYYY-MM-DD>/questions.jsonl` under `data_dir`
    pub fn discover(data_dir: &Path) -> Result<Self> {
        let releases_dir = data_dir.join("releases");
        let mut releases = Vec::new();

        for entry in WalkDir::new(&releases_dir).min_depth(1).max_depth(1) {
            let entry = entry.with_context(|| {
                format!("Failed to read releases directory: {}", releases_dir.display())
            })?;
            if !entry.file_type().is_dir() {
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if NaiveDate::parse_from_str(name, "%Y-%m-%d").is_err() {
                continue;
            }
            if entry.path().join("questions.jsonl").is_file() {
                releases.push(name.to_string());
            }
        }

        Ok(Self::new(releases))
    }

    pub fn releases(&self) -> &[String] {
        &self.releases
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    /// Position of the newest release
    pub fn latest_index(&self) -> usize {
        self.releases.len().saturating_sub(1)
    }

    /// Release at a slider position, clamped to the list
    pub fn release_at(&self, index: usize) -> Option<&str> {
        let last = self.releases.len().checked_sub(1)?;
        self.releases.get(index.min(last)).map(String::as_str)
    }

    pub fn position(&self, release: &str) -> Option<usize> {
        self.releases.iter().position(|r| r == release)
    }

    /// Slider position as a percentage of the track; a lone release sits in the middle
    pub fn slider_percent(&self, index: usize) -> f64 {
        if self.releases.len() <= 1 {
            return 50.0;
        }
        let last = self.releases.len() - 1;
        index.min(last) as f64 / last as f64 * 100.0
    }
}
