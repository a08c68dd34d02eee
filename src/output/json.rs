use crate::model::BountyReport;
use anyhow::Result;

pub fn print_json(report: &BountyReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{}", json);
    Ok(())
}
