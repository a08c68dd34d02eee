//! Reward matching against the parsed schedule.

use crate::classifier::AuthTier;
use crate::schedule::RewardSchedule;

/// Selects the applicable bounty for (category, auth tier, install count).
///
/// Three-stage funnel over the schedule, in this order: category equality
/// (case-insensitive), range containment, auth-text equality (exact, the
/// tiers are a closed set of fixed strings). The first surviving rule in
/// file order supplies the bounty; no survivors means 0. The staging only
/// matters as a tie-break when the table carries duplicate rules, which
/// the loader does not prevent.
pub fn match_bounty(
    schedule: &RewardSchedule,
    category: &str,
    auth: AuthTier,
    installs: Option<u64>,
) -> u64 {
    let installs = installs.unwrap_or(0);

    schedule
        .rules()
        .iter()
        .filter(|r| r.category.eq_ignore_ascii_case(category))
        .filter(|r| r.range.contains(installs))
        .find(|r| r.auth == auth.as_str())
        .map(|r| r.bounty)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> RewardSchedule {
        RewardSchedule::parse(
            "SQL Injection <1000 No Authentication 500\n\
             SQL Injection 1000-5000 No Authentication 2500\n\
             SQL Injection 1000-5000 High-Level Authentication 300\n\
             SQL Injection 5001+ No Authentication 4000\n\
             Stored Cross-Site Scripting 1000-5000 Low-Level Authentication 750\n",
        )
    }

    #[test]
    fn test_match_selects_by_all_three_axes() {
        let bounty = match_bounty(&schedule(), "SQL Injection", AuthTier::NoAuth, Some(3000));
        assert_eq!(bounty, 2500);
    }

    #[test]
    fn test_match_category_is_case_insensitive() {
        let bounty = match_bounty(&schedule(), "sql injection", AuthTier::NoAuth, Some(3000));
        assert_eq!(bounty, 2500);
    }

    #[test]
    fn test_match_range_narrows() {
        assert_eq!(match_bounty(&schedule(), "SQL Injection", AuthTier::NoAuth, Some(999)), 500);
        assert_eq!(match_bounty(&schedule(), "SQL Injection", AuthTier::NoAuth, Some(6000)), 4000);
    }

    #[test]
    fn test_match_auth_tier_decides() {
        let bounty = match_bounty(&schedule(), "SQL Injection", AuthTier::HighLevel, Some(3000));
        assert_eq!(bounty, 300);
    }

    #[test]
    fn test_match_missing_installs_counts_as_zero() {
        assert_eq!(match_bounty(&schedule(), "SQL Injection", AuthTier::NoAuth, None), 500);
    }

    #[test]
    fn test_match_no_rule_yields_zero() {
        assert_eq!(match_bounty(&schedule(), "LDAP Injection", AuthTier::NoAuth, Some(100)), 0);
        assert_eq!(match_bounty(&schedule(), "SQL Injection", AuthTier::MidLevel, Some(3000)), 0);
    }

    #[test]
    fn test_match_empty_schedule_yields_zero() {
        let empty = RewardSchedule::default();
        assert_eq!(match_bounty(&empty, "SQL Injection", AuthTier::NoAuth, Some(3000)), 0);
    }

    #[test]
    fn test_match_duplicate_rules_first_in_file_order_wins() {
        let dup = RewardSchedule::parse(
            "SQL Injection 1000-5000 No Authentication 2500\n\
             SQL Injection 1000-5000 No Authentication 9999\n",
        );
        assert_eq!(match_bounty(&dup, "SQL Injection", AuthTier::NoAuth, Some(2000)), 2500);
    }
}
