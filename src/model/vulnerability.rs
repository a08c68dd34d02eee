use serde::{Deserialize, Serialize};

/// CWE classification attached to a feed record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CweInfo {
    pub id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One vulnerability disclosure as supplied by the feed, with the install
/// count already merged in by the lookup collaborator. Read-only input to
/// the bounty pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VulnerabilityRecord {
    pub title: Option<String>,
    pub cwe: Option<CweInfo>,
    /// Active install count of the affected plugin; absent counts as 0.
    #[serde(alias = "install")]
    pub installs: Option<u64>,
    pub url: Option<String>,
    pub researchers: Vec<String>,
    pub published: Option<String>,
    /// Raw CVE payload from the feed, passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cve: Option<serde_json::Value>,
    /// Plugin directory slug, used only by the install-count lookup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl VulnerabilityRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_cwe(mut self, id: u32) -> Self {
        self.cwe = Some(CweInfo { id: Some(id), name: None });
        self
    }

    pub fn with_installs(mut self, installs: u64) -> Self {
        self.installs = Some(installs);
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_researchers(mut self, researchers: &[&str]) -> Self {
        self.researchers = researchers.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn with_published(mut self, published: impl Into<String>) -> Self {
        self.published = Some(published.into());
        self
    }
}
