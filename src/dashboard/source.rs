use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::parsers::questions::read_text;

/// Opaque supplier of raw release data
pub trait DataSource {
    /// Body of the score report (one JSON document)
    fn fetch_report(&self) -> Result<String>;

    /// Body of a release's question set (JSON lines)
    fn fetch_questions(&self, release: &str) -> Result<String>;
}

/// Reads `report.json` and `releases/<release>/questions.jsonl` under a data directory
#[derive(Debug, Clone)]
pub struct FsDataSource {
    data_dir: PathBuf,
}

impl FsDataSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn report_path(&self) -> PathBuf {
        self.data_dir.join("report.json")
    }

    pub fn questions_path(&self, release: &str) -> PathBuf {
        self.data_dir.join("releases").join(release).join("questions.jsonl")
    }
}

impl DataSource for FsDataSource {
    fn fetch_report(&self) -> Result<String> {
        read_text(&self.report_path())
    }

    fn fetch_questions(&self, release: &str) -> Result<String> {
        read_text(&self.questions_path(release))
    }
}
