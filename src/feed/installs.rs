use crate::cache::Cache;
use crate::model::VulnerabilityRecord;
use anyhow::Result;
use futures::future::join_all;
use serde::Deserialize;
use thiserror::Error;

const PLUGIN_INFO_URL: &str = "https://api.wordpress.org/plugins/info/1.2/";

#[derive(Debug, Error)]
pub enum InstallError {
    /// The plugin has been pulled from the directory. Records for it are
    /// dropped from the estimate, matching the upstream feed behavior.
    #[error("plugin '{0}' not found in the plugin directory")]
    NotFound(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Resolves active install counts from the wordpress.org plugin info API,
/// caching per slug.
pub struct InstallLookup {
    client: reqwest::Client,
    cache: Cache,
}

#[derive(Deserialize)]
struct PluginInfo {
    active_installs: Option<u64>,
}

impl InstallLookup {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            cache: Cache::new(),
        }
    }

    pub fn with_cache(cache: Cache) -> Self {
        Self {
            client: reqwest::Client::new(),
            cache,
        }
    }

    /// Merges install counts into `records`, concurrently.
    ///
    /// Records without a slug pass through unchanged (their install count
    /// stays absent, which downstream treats as 0). Records whose plugin
    /// is gone from the directory (HTTP 404) are dropped entirely; any
    /// other lookup failure aborts the run.
    pub async fn resolve(
        &self,
        records: Vec<VulnerabilityRecord>,
    ) -> Result<Vec<VulnerabilityRecord>, InstallError> {
        let lookups = records.into_iter().map(|mut record| async move {
            let Some(slug) = record.slug.clone() else {
                return Ok(Some(record));
            };
            match self.active_installs(&slug).await {
                Ok(installs) => {
                    record.installs = installs;
                    Ok(Some(record))
                }
                Err(InstallError::NotFound(_)) => Ok(None),
                Err(e) => Err(e),
            }
        });

        let resolved: Vec<Option<VulnerabilityRecord>> =
            join_all(lookups).await.into_iter().collect::<Result<_, _>>()?;

        Ok(resolved.into_iter().flatten().collect())
    }

    /// Fetches the active install count for one plugin slug.
    async fn active_installs(&self, slug: &str) -> Result<Option<u64>, InstallError> {
        let cache_key = format!("installs_{}", slug);

        if let Some(installs) = self.cache.get::<u64>(&cache_key) {
            return Ok(Some(installs));
        }

        let response = self
            .client
            .get(PLUGIN_INFO_URL)
            .query(&[
                ("action", "plugin_information"),
                ("request[slug]", slug),
                ("request[fields][active_installs]", "true"),
            ])
            .header("User-Agent", super::USER_AGENT)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(InstallError::NotFound(slug.to_string()));
        }
        let response = response.error_for_status()?;

        let info: PluginInfo = response.json().await?;

        if let Some(installs) = info.active_installs {
            let _ = self.cache.set(&cache_key, &installs);
        }

        Ok(info.active_installs)
    }
}

impl Default for InstallLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_info_parse() {
        let info: PluginInfo =
            serde_json::from_str(r#"{"name": "Example", "active_installs": 30000}"#).unwrap();
        assert_eq!(info.active_installs, Some(30000));
    }

    #[test]
    fn test_plugin_info_parse_without_count() {
        let info: PluginInfo = serde_json::from_str(r#"{"name": "Example"}"#).unwrap();
        assert_eq!(info.active_installs, None);
    }

    #[tokio::test]
    async fn test_resolve_passes_slugless_records_through() {
        let lookup = InstallLookup::with_cache(Cache::with_dir(
            tempfile::tempdir().unwrap().path().to_path_buf(),
            24,
        ));
        let records = vec![VulnerabilityRecord::new("no slug").with_researchers(&["alice"])];

        let resolved = lookup.resolve(records).await.unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].installs, None);
    }
}
