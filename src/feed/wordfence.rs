use crate::model::{CweInfo, VulnerabilityRecord};
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeMap;

const FEED_URL: &str = "https://www.wordfence.com/api/intelligence/v2/vulnerabilities/production";

/// Client for the Wordfence vulnerability intelligence feed.
pub struct WordfenceFeed {
    client: reqwest::Client,
    url: String,
}

impl WordfenceFeed {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            url: FEED_URL.to_string(),
        }
    }

    /// Points the client at a different feed endpoint (mirror or staging).
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

impl Default for WordfenceFeed {
    fn default() -> Self {
        Self::new()
    }
}

// The feed is one large JSON object keyed by record id. BTreeMap rather
// than HashMap so record order, and with it item order in the report, is
// stable across runs.
type WfFeed = BTreeMap<String, WfRecord>;

#[derive(Deserialize)]
struct WfRecord {
    title: Option<String>,
    cwe: Option<WfCwe>,
    references: Option<Vec<String>>,
    researchers: Option<Vec<String>>,
    software: Option<Vec<WfSoftware>>,
    published: Option<String>,
    cve: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct WfCwe {
    id: Option<u32>,
    name: Option<String>,
}

#[derive(Deserialize)]
struct WfSoftware {
    slug: Option<String>,
}

impl WfRecord {
    fn into_record(self) -> VulnerabilityRecord {
        VulnerabilityRecord {
            title: self.title,
            cwe: self.cwe.map(|c| CweInfo { id: c.id, name: c.name }),
            installs: None,
            url: self.references.and_then(|refs| refs.into_iter().next()),
            researchers: self.researchers.unwrap_or_default(),
            published: self.published,
            cve: self.cve,
            slug: self
                .software
                .and_then(|sw| sw.into_iter().next())
                .and_then(|s| s.slug),
        }
    }
}

#[async_trait]
impl super::VulnerabilityFeed for WordfenceFeed {
    fn name(&self) -> &'static str {
        "Wordfence"
    }

    async fn fetch(&self, researcher: &str) -> Result<Vec<VulnerabilityRecord>> {
        let response = self
            .client
            .get(&self.url)
            .header("User-Agent", super::USER_AGENT)
            .send()
            .await?
            .error_for_status()?;

        let feed: WfFeed = response.json().await?;

        let records = feed
            .into_values()
            .map(WfRecord::into_record)
            .filter(|r| r.researchers.iter().any(|name| name == researcher))
            .collect();

        Ok(records)
    }
}
