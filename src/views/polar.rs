use serde::{Deserialize, Serialize};

use super::ViewConfig;
use crate::table::Table;

/// Closed numeric window for the polar radial axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialRange {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl RadialRange {
    /// Create a range, swapping the bounds if given in reverse
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Overlap of two ranges, `None` when disjoint
    pub fn intersect(&self, other: &RadialRange) -> Option<RadialRange> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        (min <= max).then_some(RadialRange { min, max })
    }

    /// Whether `value` lies inside the range
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Exhaust temperatures of every sensor at one row, as a closed polygon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolarSnapshot {
    /// Trace name (the row's timestamp)
    pub name: String,
    /// Radial values in catalog order, first value repeated at the end
    pub r: Vec<f64>,
    /// Angular labels matching `r`
    pub theta: Vec<String>,
    /// Radial axis display range
    pub range: Option<RadialRange>,
}

/// Default radial range: file-wide sensor extent widened by the configured offsets
pub fn default_radial_range(table: &Table, config: &ViewConfig) -> Option<RadialRange> {
    table.sensor_extent().map(|(lo, hi)| {
        RadialRange::new(lo - config.polar_floor_offset, hi + config.polar_ceiling_offset)
    })
}

/// Polar snapshot of `row`, clipped to `window` when given.
///
/// An empty overlap between the data range and `window` shows the window
/// as requested. Returns `None` for an out-of-range row or an empty catalog.
pub fn polar_snapshot(
    table: &Table,
    row: usize,
    window: Option<RadialRange>,
    config: &ViewConfig,
) -> Option<PolarSnapshot> {
    let reading = table.reading(row)?;
    let first_value = *reading.sensors.first()?;
    let first_name = table.catalog().get(0)?;

    let mut r = reading.sensors.clone();
    r.push(first_value);

    let mut theta: Vec<String> = table.catalog().names().to_vec();
    theta.push(first_name.to_string());

    let data_range = default_radial_range(table, config);
    let range = match (data_range, window) {
        (Some(data), Some(window)) => Some(data.intersect(&window).unwrap_or(window)),
        (data, window) => window.or(data),
    };

    Some(PolarSnapshot {
        name: reading.label(),
        r,
        theta,
        range,
    })
}
