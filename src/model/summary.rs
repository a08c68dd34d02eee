use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One qualifying disclosure in a researcher's summary: only records with
/// a reference URL and a strictly positive bounty are itemized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BountyItem {
    pub url: String,
    pub bounty: u64,
    pub published: Option<String>,
    pub title: Option<String>,
}

/// Per-researcher rollup. A researcher mentioned on any input record gets
/// an entry, even when nothing qualified and the total stayed 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearcherSummary {
    pub total: u64,
    pub items: Vec<BountyItem>,
}

/// The pipeline output: researcher name → summary.
///
/// An empty map means the researcher was never mentioned ("not found"),
/// which callers must distinguish from an entry with total 0. BTreeMap
/// keeps iteration and serialization deterministic.
pub type BountyReport = BTreeMap<String, ResearcherSummary>;
