use anyhow::{Context, Result};
use log::{info, warn};
use std::path::PathBuf;

use exhaust_spread::views::SummaryRow;

/// Print the summary row of `row` as JSON
pub fn run(file: PathBuf, row: usize, config: Option<PathBuf>) -> Result<()> {
    let mut session = super::load_session(&file, config.as_deref())?;
    let selected = session.select_row(row);

    let summary: Vec<SummaryRow> = session.views().summary;
    if summary.is_empty() {
        warn!("No sensor with a positive mean, summary is empty");
    }

    let json = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
    println!("{}", json);
    info!("Row {} of {}", selected, file.display());

    Ok(())
}
