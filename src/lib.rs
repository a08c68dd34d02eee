pub mod aggregator;
pub mod cache;
pub mod classifier;
pub mod config;
pub mod feed;
pub mod matcher;
pub mod model;
pub mod output;
pub mod schedule;

pub use aggregator::aggregate;
pub use cache::Cache;
pub use classifier::{category_for_cwe, classify, detect_auth, AuthTier};
pub use config::Config;
pub use matcher::match_bounty;
pub use model::{BountyItem, BountyReport, CweInfo, ResearcherSummary, VulnerabilityRecord};
pub use schedule::{InstallRange, RewardRule, RewardSchedule};
