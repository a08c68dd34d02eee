//! Thin clients for the external data sources.
//!
//! Nothing in here makes bounty decisions: these collaborators only
//! produce [`VulnerabilityRecord`]s and merge install counts into them.
//! The live feed sits behind the [`VulnerabilityFeed`] trait so the
//! pipeline can run against a local JSON file instead.

mod file;
mod installs;
mod wordfence;

pub use file::FileFeed;
pub use installs::{InstallError, InstallLookup};
pub use wordfence::WordfenceFeed;

use crate::model::VulnerabilityRecord;
use anyhow::Result;
use async_trait::async_trait;

/// The Wordfence feed rejects requests without a browser-ish user agent.
pub(crate) const USER_AGENT: &str = "curl/7.79.1";

#[async_trait]
pub trait VulnerabilityFeed: Send + Sync {
    fn name(&self) -> &'static str;

    /// Fetches all disclosure records crediting `researcher`.
    async fn fetch(&self, researcher: &str) -> Result<Vec<VulnerabilityRecord>>;
}
