use anyhow::{Context, Result};
use std::path::PathBuf;

/// Print table statistics for a trend export
pub fn run(file: PathBuf, config: Option<PathBuf>) -> Result<()> {
    let session = super::load_session(&file, config.as_deref())?;
    let table = session.table().context("No table loaded")?;

    println!("{}", session.upload_title());
    println!();
    println!("{}", table.stats().format_colored());

    Ok(())
}
