use crate::model::BountyReport;
use anyhow::Result;
use chrono::Utc;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct TotalRow {
    #[tabled(rename = "Researcher")]
    researcher: String,
    #[tabled(rename = "Qualifying")]
    qualifying: usize,
    #[tabled(rename = "Total")]
    total: String,
}

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "Researcher")]
    researcher: String,
    #[tabled(rename = "Bounty")]
    bounty: String,
    #[tabled(rename = "Published")]
    published: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "URL")]
    url: String,
}

pub fn print_table(report: &BountyReport) -> Result<()> {
    println!();
    println!(
        "Estimate generated at: {}",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();

    if report.is_empty() {
        println!("No researchers found.");
        return Ok(());
    }

    let totals: Vec<TotalRow> = report
        .iter()
        .map(|(name, summary)| TotalRow {
            researcher: name.clone(),
            qualifying: summary.items.len(),
            total: format_amount(summary.total),
        })
        .collect();

    let table = Table::new(totals).with(Style::rounded()).to_string();
    println!("{}", table);

    let items: Vec<ItemRow> = report
        .iter()
        .flat_map(|(name, summary)| {
            summary.items.iter().map(|item| ItemRow {
                researcher: name.clone(),
                bounty: format_amount(item.bounty),
                published: item
                    .published
                    .clone()
                    .unwrap_or_else(|| "-".to_string()),
                title: truncate(item.title.as_deref().unwrap_or("-"), 60),
                url: truncate(&item.url, 50),
            })
        })
        .collect();

    if !items.is_empty() {
        println!();
        println!("Qualifying disclosures:");
        println!();

        let table = Table::new(items).with(Style::rounded()).to_string();
        println!("{}", table);
    }

    Ok(())
}

fn format_amount(amount: u64) -> String {
    format!("${}", amount)
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_truncate_long_string() {
        let long = "a".repeat(80);
        let out = truncate(&long, 60);
        assert_eq!(out.chars().count(), 60);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(2500), "$2500");
        assert_eq!(format_amount(0), "$0");
    }
}
