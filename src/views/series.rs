use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::table::Table;

/// Name of the engine speed series
pub const ENGINE_SPEED_SERIES: &str = "TNH";

/// Y axis a series is plotted against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Exhaust temperatures (`y`)
    #[serde(rename = "y")]
    Primary,
    /// Engine speed (`y2`)
    #[serde(rename = "y2")]
    Secondary,
}

impl Axis {
    /// Plotly axis reference
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Primary => "y",
            Axis::Secondary => "y2",
        }
    }
}

/// One named line of the time chart, stored column-wise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Legend name
    pub name: String,
    /// Axis the series belongs to
    pub axis: Axis,
    /// X values
    pub timestamps: Vec<NaiveDateTime>,
    /// Y values, same length as `timestamps`
    pub values: Vec<f64>,
}

impl Series {
    /// Number of points
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no points
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(timestamp, value)` pairs
    pub fn points(&self) -> impl Iterator<Item = (NaiveDateTime, f64)> + '_ {
        self.timestamps.iter().copied().zip(self.values.iter().copied())
    }
}

/// Build the time chart series: one per catalog sensor (optionally only the
/// first `sensor_count`), then engine speed on the secondary axis.
pub fn time_series(table: &Table, sensor_count: Option<usize>) -> Vec<Series> {
    let timestamps: Vec<NaiveDateTime> = table.timestamps().collect();
    let shown = sensor_count
        .unwrap_or(usize::MAX)
        .min(table.catalog().len());

    let mut series: Vec<Series> = table
        .catalog()
        .iter()
        .take(shown)
        .enumerate()
        .map(|(i, name)| Series {
            name: name.to_string(),
            axis: Axis::Primary,
            timestamps: timestamps.clone(),
            values: table.sensor_values(i).collect(),
        })
        .collect();

    series.push(Series {
        name: ENGINE_SPEED_SERIES.to_string(),
        axis: Axis::Secondary,
        values: table.readings().iter().map(|r| r.engine_speed).collect(),
        timestamps,
    });

    series
}
