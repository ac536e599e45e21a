//! Reporting: CSV export and a console summary of the best leads.

use anyhow::{Context, Result};
use std::path::Path;

use crate::pipeline::LeadRow;

/// How many rows the console summary shows.
const SUMMARY_ROWS: usize = 25;

/// Write all rows as CSV (header included).
pub fn write_csv(path: &Path, rows: &[LeadRow]) -> Result<()> {
    let mut wtr =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    for row in rows {
        wtr.serialize(row)
            .with_context(|| format!("writing row for {}", row.name))?;
    }
    wtr.flush().context("flushing csv")?;
    Ok(())
}

/// Derive `scout_<category>_<location>.csv` from the run parameters,
/// commas stripped and spaces underscored.
pub fn default_output_name(category: &str, location: &str) -> String {
    let slug = |s: &str| s.replace(',', "").replace(' ', "_");
    format!("scout_{}_{}.csv", slug(category), slug(location))
}

/// Print the top rows as a fixed-width table.
pub fn print_summary(rows: &[LeadRow]) {
    println!(
        "{:<32} {:>5} {:>7} {:>9} {:>6}  {}",
        "name", "score", "rating", "reviews", "sent", "reasons"
    );
    for row in rows.iter().take(SUMMARY_ROWS) {
        let rating = row
            .rating
            .map(|r| format!("{r:.1}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<32} {:>5.1} {:>7} {:>9} {:>6.2}  {}",
            truncate(&row.name, 32),
            row.lead_score,
            rating,
            row.review_count,
            row.avg_sentiment,
            row.reasons
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max.saturating_sub(1)).chain(['…']).collect()
    }
}
