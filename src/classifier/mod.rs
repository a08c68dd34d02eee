//! Vulnerability classification.
//!
//! Derives the two axes the reward table is keyed on: the reward category
//! (from the record's CWE id, via a static table) and the authentication
//! tier (from keywords in the record's title).

mod cwe;

pub use cwe::category_for_cwe;

use crate::model::VulnerabilityRecord;
use serde::{Deserialize, Serialize};

/// The minimum privilege an attacker needs, ordered least to most.
///
/// The canonical strings below are exactly what a schedule rule's auth
/// text must equal to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AuthTier {
    NoAuth,
    LowLevel,
    MidLevel,
    HighLevel,
}

impl AuthTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthTier::NoAuth => "No Authentication",
            AuthTier::LowLevel => "Low-Level Authentication",
            AuthTier::MidLevel => "Mid-Level Authentication",
            AuthTier::HighLevel => "High-Level Authentication",
        }
    }
}

impl std::fmt::Display for AuthTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Detects the authentication tier from free text (the record title).
///
/// The checks are independent substring tests in a fixed priority order,
/// least-privileged attacker first. Titles like "authenticated
/// (subscriber+)" contain keywords from several tiers; the order decides.
pub fn detect_auth(text: &str) -> Option<AuthTier> {
    let t = text.to_lowercase();
    if t.contains("unauthenticated") || t.contains("no authentication") {
        return Some(AuthTier::NoAuth);
    }
    if t.contains("subscriber+") {
        return Some(AuthTier::LowLevel);
    }
    if t.contains("contributor+") || t.contains("author+") {
        return Some(AuthTier::MidLevel);
    }
    if t.contains("admin")
        || t.contains("administrator")
        || t.contains("authenticated")
        || t.contains("editor+")
    {
        return Some(AuthTier::HighLevel);
    }
    None
}

/// Classifies a record into (reward category, auth tier).
///
/// Either side may come back `None` — unknown or missing CWE, or a title
/// with no auth keyword — in which case matching yields bounty 0 rather
/// than an error.
pub fn classify(record: &VulnerabilityRecord) -> (Option<&'static str>, Option<AuthTier>) {
    let category = record.cwe.as_ref().and_then(|c| c.id).and_then(category_for_cwe);
    let auth = detect_auth(record.title.as_deref().unwrap_or(""));
    (category, auth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CweInfo, VulnerabilityRecord};

    #[test]
    fn test_detect_auth_unauthenticated() {
        assert_eq!(detect_auth("Unauthenticated SQL Injection"), Some(AuthTier::NoAuth));
        assert_eq!(detect_auth("requires no authentication"), Some(AuthTier::NoAuth));
    }

    #[test]
    fn test_detect_auth_subscriber() {
        assert_eq!(
            detect_auth("Authenticated (Subscriber+) Stored XSS"),
            Some(AuthTier::LowLevel)
        );
    }

    #[test]
    fn test_detect_auth_contributor_and_author() {
        assert_eq!(detect_auth("Contributor+ Stored XSS"), Some(AuthTier::MidLevel));
        assert_eq!(detect_auth("Author+ Arbitrary File Upload"), Some(AuthTier::MidLevel));
    }

    #[test]
    fn test_detect_auth_high_level() {
        assert_eq!(detect_auth("Admin+ Option Update"), Some(AuthTier::HighLevel));
        assert_eq!(detect_auth("Editor+ CSRF"), Some(AuthTier::HighLevel));
        assert_eq!(detect_auth("Authenticated PHP Object Injection"), Some(AuthTier::HighLevel));
    }

    #[test]
    fn test_detect_auth_priority_first_rule_wins() {
        // contains both "unauthenticated" and "admin"; least privilege wins
        assert_eq!(
            detect_auth("Unauthenticated Privilege Escalation to Admin"),
            Some(AuthTier::NoAuth)
        );
        // "authenticated (subscriber+)" must not land on HighLevel
        assert_eq!(
            detect_auth("Authenticated (Subscriber+) SQL Injection"),
            Some(AuthTier::LowLevel)
        );
    }

    #[test]
    fn test_detect_auth_no_keyword() {
        assert_eq!(detect_auth("Open Redirect via ?next parameter"), None);
        assert_eq!(detect_auth(""), None);
    }

    #[test]
    fn test_tier_ordering() {
        assert!(AuthTier::NoAuth < AuthTier::LowLevel);
        assert!(AuthTier::LowLevel < AuthTier::MidLevel);
        assert!(AuthTier::MidLevel < AuthTier::HighLevel);
    }

    #[test]
    fn test_classify_full_record() {
        let record = VulnerabilityRecord {
            title: Some("Unauthenticated SQL Injection".to_string()),
            cwe: Some(CweInfo { id: Some(89), name: None }),
            ..Default::default()
        };
        let (category, auth) = classify(&record);
        assert_eq!(category, Some("SQL Injection"));
        assert_eq!(auth, Some(AuthTier::NoAuth));
    }

    #[test]
    fn test_classify_missing_cwe_is_inconclusive() {
        let record = VulnerabilityRecord {
            title: Some("Unauthenticated SQL Injection".to_string()),
            ..Default::default()
        };
        let (category, auth) = classify(&record);
        assert_eq!(category, None);
        assert_eq!(auth, Some(AuthTier::NoAuth));
    }

    #[test]
    fn test_classify_missing_title_is_inconclusive() {
        let record = VulnerabilityRecord {
            cwe: Some(CweInfo { id: Some(89), name: None }),
            ..Default::default()
        };
        let (category, auth) = classify(&record);
        assert_eq!(category, Some("SQL Injection"));
        assert_eq!(auth, None);
    }
}
