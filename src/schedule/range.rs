use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An install-count bound from the reward table.
///
/// Parsed only from tokens of exactly one of three shapes:
/// `<N` (strictly less than), `N-N` (inclusive both ends), `N+` (at least).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstallRange {
    LessThan(u64),
    Between(u64, u64),
    AtLeast(u64),
}

impl InstallRange {
    /// Returns true if `installs` falls within this range.
    pub fn contains(&self, installs: u64) -> bool {
        match *self {
            InstallRange::LessThan(n) => installs < n,
            InstallRange::Between(low, high) => low <= installs && installs <= high,
            InstallRange::AtLeast(n) => installs >= n,
        }
    }
}

impl FromStr for InstallRange {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix('<') {
            return Ok(InstallRange::LessThan(parse_digits(rest)?));
        }
        if let Some(rest) = s.strip_suffix('+') {
            return Ok(InstallRange::AtLeast(parse_digits(rest)?));
        }
        if let Some((low, high)) = s.split_once('-') {
            return Ok(InstallRange::Between(parse_digits(low)?, parse_digits(high)?));
        }
        Err(())
    }
}

/// Strict digit-only parse. `u64::from_str` accepts a leading `+`,
/// which the range grammar does not.
fn parse_digits(s: &str) -> Result<u64, ()> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(());
    }
    s.parse().map_err(|_| ())
}

/// Returns true if `token` matches the range grammar.
///
/// This is what drives the loader's category/auth split: the first token
/// of this shape in a schedule line is the range, everything before it is
/// the category, everything after (minus the reward) is the auth text.
pub fn is_range_token(token: &str) -> bool {
    token.parse::<InstallRange>().is_ok()
}

impl fmt::Display for InstallRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            InstallRange::LessThan(n) => write!(f, "<{}", n),
            InstallRange::Between(low, high) => write!(f, "{}-{}", low, high),
            InstallRange::AtLeast(n) => write!(f, "{}+", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_less_than() {
        assert_eq!("<100".parse(), Ok(InstallRange::LessThan(100)));
    }

    #[test]
    fn test_parse_between() {
        assert_eq!("100-500".parse(), Ok(InstallRange::Between(100, 500)));
    }

    #[test]
    fn test_parse_at_least() {
        assert_eq!("1000+".parse(), Ok(InstallRange::AtLeast(1000)));
    }

    #[test]
    fn test_parse_rejects_non_ranges() {
        assert!("100".parse::<InstallRange>().is_err());
        assert!("abc".parse::<InstallRange>().is_err());
        assert!("<".parse::<InstallRange>().is_err());
        assert!("+100".parse::<InstallRange>().is_err());
        assert!("100-".parse::<InstallRange>().is_err());
        assert!("-500".parse::<InstallRange>().is_err());
        assert!("1e3+".parse::<InstallRange>().is_err());
        // u64::from_str would take these; the grammar must not
        assert!("<+5".parse::<InstallRange>().is_err());
        assert!("+5+".parse::<InstallRange>().is_err());
    }

    #[test]
    fn test_less_than_is_exclusive() {
        let r = InstallRange::LessThan(100);
        assert!(r.contains(50));
        assert!(r.contains(0));
        assert!(!r.contains(100));
        assert!(!r.contains(101));
    }

    #[test]
    fn test_between_is_inclusive() {
        let r = InstallRange::Between(100, 500);
        assert!(r.contains(100));
        assert!(r.contains(300));
        assert!(r.contains(500));
        assert!(!r.contains(99));
        assert!(!r.contains(501));
    }

    #[test]
    fn test_at_least_is_inclusive() {
        let r = InstallRange::AtLeast(1000);
        assert!(r.contains(1000));
        assert!(r.contains(1_000_000));
        assert!(!r.contains(999));
    }

    #[test]
    fn test_is_range_token() {
        assert!(is_range_token("<1000"));
        assert!(is_range_token("50-200"));
        assert!(is_range_token("100000+"));
        assert!(!is_range_token("Injection"));
        assert!(!is_range_token("2500"));
    }

    #[test]
    fn test_display_round_trip() {
        for token in ["<100", "100-500", "1000+"] {
            let range: InstallRange = token.parse().unwrap();
            assert_eq!(range.to_string(), token);
        }
    }
}
