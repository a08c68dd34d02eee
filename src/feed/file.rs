use crate::model::VulnerabilityRecord;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Offline feed: a local JSON array of records, as written by
/// `estimate --output` or assembled by hand. Lets the pipeline run
/// without network access.
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl super::VulnerabilityFeed for FileFeed {
    fn name(&self) -> &'static str {
        "local file"
    }

    async fn fetch(&self, researcher: &str) -> Result<Vec<VulnerabilityRecord>> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read feed file {}", self.path.display()))?;
        let records: Vec<VulnerabilityRecord> = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse feed file {}", self.path.display()))?;

        Ok(records
            .into_iter()
            .filter(|r| r.researchers.iter().any(|name| name == researcher))
            .collect())
    }
}
