//! Core data types for vulnerability records and bounty reports.
//!
//! - [`VulnerabilityRecord`] - A disclosure from the feed, install count merged in
//! - [`CweInfo`] - The record's weakness classification
//! - [`BountyItem`] / [`ResearcherSummary`] - Itemized payouts per researcher
//! - [`BountyReport`] - The full researcher → summary mapping

mod summary;
mod vulnerability;

pub use summary::*;
pub use vulnerability::*;
