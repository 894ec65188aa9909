use serde::{Deserialize, Serialize};

use crate::table::Table;

/// Column headers of the summary table, in display order
pub const SUMMARY_COLUMNS: [&str; 4] = ["TNH", "DWATT", "TTXM", "TTSXP"];

/// Four-field summary of one row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Engine speed, 3 decimals
    #[serde(rename = "TNH")]
    pub engine_speed: f64,
    /// Power output, 3 decimals
    #[serde(rename = "DWATT")]
    pub power: f64,
    /// Mean exhaust temperature over included sensors, 1 decimal
    #[serde(rename = "TTXM")]
    pub mean_temperature: f64,
    /// Exhaust spread (max - min over included sensors), 3 decimals
    #[serde(rename = "TTSXP")]
    pub spread: f64,
}

/// Round to `decimals` places, ties to the even digit (`600.25` -> `600.2`)
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Summary of `row` over the sensors whose file-wide mean is positive.
///
/// `None` when the row is out of range or no sensor qualifies.
pub fn summary_row(table: &Table, row: usize) -> Option<SummaryRow> {
    let reading = table.reading(row)?;
    let values: Vec<f64> = table
        .included_sensors()
        .into_iter()
        .map(|i| reading.sensors[i])
        .collect();
    if values.is_empty() {
        return None;
    }

    let max = values.iter().copied().fold(f64::MIN, f64::max);
    let min = values.iter().copied().fold(f64::MAX, f64::min);
    let mean = values.iter().sum::<f64>() / values.len() as f64;

    Some(SummaryRow {
        engine_speed: round_to(reading.engine_speed, 3),
        power: round_to(reading.power, 3),
        mean_temperature: round_to(mean, 1),
        spread: round_to(max - min, 3),
    })
}
