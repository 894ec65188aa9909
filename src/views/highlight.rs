use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::ViewConfig;
use crate::table::Table;

/// Vertical marker on the time chart at the selected row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightShape {
    /// X position of the marker
    pub anchor: NaiveDateTime,
    /// Half width in pixels (the marker spans `-w..w` around the anchor)
    pub half_width_px: f64,
    /// Fill opacity
    pub opacity: f64,
    /// Fill color
    pub fill_color: String,
}

/// Highlight for `row`, `None` when out of range
pub fn highlight(table: &Table, row: usize, config: &ViewConfig) -> Option<HighlightShape> {
    table.reading(row).map(|reading| HighlightShape {
        anchor: reading.timestamp,
        half_width_px: config.highlight_half_width_px,
        opacity: config.highlight_opacity,
        fill_color: config.highlight_fill.clone(),
    })
}
