//! # Derived Views
//!
//! Pure functions from a [`Table`] and a [`Selection`] to what the dashboard
//! draws. Each takes the table by reference and never mutates it, so the
//! same inputs always give the same views.
//!
//! | View | Function | Placeholder |
//! |------|----------|-------------|
//! | Time chart series | [`time_series`] | no series |
//! | Polar snapshot | [`polar_snapshot`] | `None` |
//! | Summary row | [`summary_row`] | `None` |
//! | Row highlight | [`highlight`] | `None` |
//!
//! [`DashboardViews::compute`] bundles all four and falls back to the
//! placeholder bundle when no table is loaded or the row is out of range.

mod config;
mod highlight;
mod polar;
mod series;
mod summary;


pub use config::ViewConfig;
pub use highlight::{highlight, HighlightShape};
pub use polar::{default_radial_range, polar_snapshot, PolarSnapshot, RadialRange};
pub use series::{time_series, Axis, Series, ENGINE_SPEED_SERIES};
pub use summary::{round_to, summary_row, SummaryRow, SUMMARY_COLUMNS};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::table::Table;

/// Row label shown when nothing is selected
pub const PLACEHOLDER_ROW_LABEL: &str = "0";

/// Transient UI choices that drive the views
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Selected row index
    pub row: usize,
    /// User-chosen polar radial window
    pub polar_window: Option<RadialRange>,
    /// Only chart the first N sensors
    pub sensor_count: Option<usize>,
}

impl Selection {
    /// Select `row` with no further restrictions
    pub fn row(row: usize) -> Self {
        Self {
            row,
            ..Self::default()
        }
    }
}

/// Everything the dashboard renders for one interaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardViews {
    /// Time chart series
    pub series: Vec<Series>,
    /// Polar snapshot of the selected row
    pub polar: Option<PolarSnapshot>,
    /// Summary table rows (zero or one)
    pub summary: Vec<SummaryRow>,
    /// Selected row's timestamp text
    pub row_label: String,
    /// Time chart marker at the selected row
    pub highlight: Option<HighlightShape>,
}

impl DashboardViews {
    /// Views shown before a file is loaded
    pub fn placeholder() -> Self {
        Self {
            series: Vec::new(),
            polar: None,
            summary: Vec::new(),
            row_label: PLACEHOLDER_ROW_LABEL.to_string(),
            highlight: None,
        }
    }

    /// Compute every view for `selection`
    pub fn compute(table: Option<&Table>, selection: &Selection, config: &ViewConfig) -> Self {
        let Some(table) = table else {
            return Self::placeholder();
        };
        let Some(reading) = table.reading(selection.row) else {
            debug!(
                "Row {} outside table of {} rows, showing placeholder views",
                selection.row,
                table.len()
            );
            return Self::placeholder();
        };

        Self {
            series: time_series(table, selection.sensor_count),
            polar: polar_snapshot(table, selection.row, selection.polar_window, config),
            summary: summary_row(table, selection.row).into_iter().collect(),
            row_label: reading.label(),
            highlight: highlight(table, selection.row, config),
        }
    }

    /// Whether these are the no-data placeholder views
    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder()
    }
}
