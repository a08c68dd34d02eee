//! Per-researcher bounty aggregation.

use crate::classifier::classify;
use crate::matcher::match_bounty;
use crate::model::{BountyItem, BountyReport, VulnerabilityRecord};
use crate::schedule::RewardSchedule;

/// Folds matched bounties across the input records into per-researcher
/// totals and itemized lists.
///
/// Pure over its inputs: same records and schedule always produce the same
/// report. For every record the bounty is computed once (0 when the
/// classifier came back inconclusive on either axis), then credited to
/// each researcher on the record. With `target` set, other researchers are
/// skipped entirely rather than zero-filled — an empty report is how "not
/// found" is signalled.
///
/// Totals always take the bounty, even when it is 0; the itemized list
/// only takes records with a reference URL and a strictly positive bounty.
pub fn aggregate(
    records: &[VulnerabilityRecord],
    schedule: &RewardSchedule,
    target: Option<&str>,
) -> BountyReport {
    let mut report = BountyReport::new();

    for record in records {
        let (category, auth) = classify(record);
        let bounty = match (category, auth) {
            (Some(category), Some(auth)) => {
                match_bounty(schedule, category, auth, record.installs)
            }
            _ => 0,
        };

        for researcher in &record.researchers {
            if target.is_some_and(|name| name != researcher.as_str()) {
                continue;
            }

            let summary = report.entry(researcher.clone()).or_default();
            summary.total += bounty;

            if bounty > 0 {
                if let Some(url) = record.url.as_deref().filter(|u| !u.is_empty()) {
                    summary.items.push(BountyItem {
                        url: url.to_string(),
                        bounty,
                        published: record.published.clone(),
                        title: record.title.clone(),
                    });
                }
            }
        }
    }

    report
}
