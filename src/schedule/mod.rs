//! Reward schedule parsing.
//!
//! The vendor publishes its payout table as plain text, one rule per line:
//!
//! ```text
//! <category words> <range-token> <auth text>? <reward>
//! ```
//!
//! e.g. `SQL Injection 1000-5000 No Authentication 2500`. Category names
//! contain spaces and sometimes digits, so the split is driven by locating
//! the first range-shaped token rather than by fixed field positions.

mod range;

pub use range::{is_range_token, InstallRange};

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// A single payout rule from the reward table. Immutable once parsed.
///
/// `auth` is the verbatim trailing text from the line (may be empty);
/// matching compares it exactly against a tier's canonical string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardRule {
    pub category: String,
    pub range: InstallRange,
    pub auth: String,
    pub bounty: u64,
}

/// The parsed reward table, in file order. Built once at startup and
/// read-only afterwards; order is the tie-break when duplicate rules exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardSchedule {
    rules: Vec<RewardRule>,
}

impl RewardSchedule {
    /// Parses a schedule from text, one rule per line.
    ///
    /// Malformed lines are skipped, never fatal: a line must end in a
    /// non-negative integer reward and must contain a range token that is
    /// preceded by at least one category word.
    pub fn parse(source: &str) -> Self {
        let mut rules = Vec::new();

        for line in source.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            let Some(bounty) = parts.last().and_then(|t| t.parse::<u64>().ok()) else {
                debug!("skipping schedule line without integer reward: {}", line);
                continue;
            };

            let tokens = &parts[..parts.len() - 1];
            let Some(range_idx) = tokens.iter().position(|t| is_range_token(t)) else {
                debug!("skipping schedule line without range token: {}", line);
                continue;
            };
            if range_idx == 0 {
                // no category word before the range
                debug!("skipping schedule line without category: {}", line);
                continue;
            }

            // is_range_token just verified this parses
            let Ok(range) = tokens[range_idx].parse::<InstallRange>() else {
                continue;
            };

            rules.push(RewardRule {
                category: tokens[..range_idx].join(" "),
                range,
                auth: tokens[range_idx + 1..].join(" "),
                bounty,
            });
        }

        Self { rules }
    }

    /// Loads a schedule from a file.
    ///
    /// A missing or unreadable file degrades to an empty schedule with a
    /// warning: every subsequent match then yields 0, which the rest of the
    /// pipeline treats as "no bounty found" rather than an error.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(e) => {
                warn!("reward schedule not readable at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn rules(&self) -> &[RewardRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}
