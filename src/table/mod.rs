//! # Normalized Exhaust Table
//!
//! A [`Table`] is the output of ingestion: an ordered sequence of
//! [`Reading`]s that all share one [`SensorCatalog`]. It is replaced
//! wholesale on every upload and never mutated afterwards, so every derived
//! view can borrow it freely.
//!
//! Tables round-trip through JSON so a host can park them in a hidden form
//! field or session store between interactions:
//!
//! ```rust
//! use chrono::NaiveDate;
//! use exhaust_spread::table::{Reading, SensorCatalog, Table};
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
//! let table = Table::new(
//!     SensorCatalog::sequential("ttxd_", 2),
//!     vec![Reading::new(ts, vec![510.0, 530.0], 99.8, 42.0)],
//! )?;
//!
//! let restored = Table::from_json(&table.to_json()?)?;
//! assert_eq!(restored, table);
//! # Ok::<(), exhaust_spread::table::TableError>(())
//! ```

mod catalog;
mod error;
mod stats;

#[cfg(test)]
mod tests;

pub use catalog::SensorCatalog;
pub use error::TableError;
pub use stats::{SensorStats, TableStats};

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// One timestamped row of a trend export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Sample time (wall clock of the export, no timezone)
    pub timestamp: NaiveDateTime,
    /// Exhaust thermocouple temperatures in catalog order
    pub sensors: Vec<f64>,
    /// Engine speed in percent (TNH)
    pub engine_speed: f64,
    /// Power output (DWATT)
    pub power: f64,
}

impl Reading {
    /// Create a reading
    pub fn new(timestamp: NaiveDateTime, sensors: Vec<f64>, engine_speed: f64, power: f64) -> Self {
        Self {
            timestamp,
            sensors,
            engine_speed,
            power,
        }
    }

    /// Timestamp text as shown next to the slider and used as the polar trace name.
    ///
    /// Whole seconds print as `2024-03-01 08:00:00`; sub-second timestamps
    /// carry six fractional digits, or nine when nanoseconds are present.
    pub fn label(&self) -> String {
        let format = match self.timestamp.nanosecond() {
            0 => "%Y-%m-%d %H:%M:%S",
            n if n % 1_000 == 0 => "%Y-%m-%d %H:%M:%S%.6f",
            _ => "%Y-%m-%d %H:%M:%S%.9f",
        };
        self.timestamp.format(format).to_string()
    }
}

/// Minimum and maximum valid row index for the selection slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowBounds {
    /// First selectable row
    pub min: usize,
    /// Last selectable row
    pub max: usize,
}

impl RowBounds {
    /// Bounds shown before any file has been loaded
    pub const fn placeholder() -> Self {
        Self { min: 0, max: 10 }
    }

    /// Bounds for a table with `len` rows, `None` when empty
    pub fn for_len(len: usize) -> Option<Self> {
        len.checked_sub(1).map(|max| Self { min: 0, max })
    }

    /// Clamp a row index into these bounds
    pub fn clamp(&self, row: usize) -> usize {
        row.clamp(self.min, self.max)
    }

    /// Whether `row` lies within these bounds
    pub fn contains(&self, row: usize) -> bool {
        (self.min..=self.max).contains(&row)
    }
}

impl Default for RowBounds {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// Normalized exhaust temperature table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct Table {
    catalog: SensorCatalog,
    readings: Vec<Reading>,
}

/// Unvalidated serde image of [`Table`]
#[derive(Deserialize)]
struct RawTable {
    catalog: SensorCatalog,
    readings: Vec<Reading>,
}

impl TryFrom<RawTable> for Table {
    type Error = TableError;

    fn try_from(raw: RawTable) -> Result<Self, Self::Error> {
        Table::new(raw.catalog, raw.readings)
    }
}

impl Table {
    /// Create a table, checking that every reading carries one value per catalog sensor
    pub fn new(catalog: SensorCatalog, readings: Vec<Reading>) -> Result<Self, TableError> {
        if let Some((row, reading)) = readings
            .iter()
            .enumerate()
            .find(|(_, r)| r.sensors.len() != catalog.len())
        {
            return Err(TableError::SensorCountMismatch {
                row,
                expected: catalog.len(),
                found: reading.sensors.len(),
            });
        }

        Ok(Self { catalog, readings })
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// The ordered sensor catalog
    pub fn catalog(&self) -> &SensorCatalog {
        &self.catalog
    }

    /// All readings in file order
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    /// Reading at `row`, `None` when out of range
    pub fn reading(&self, row: usize) -> Option<&Reading> {
        self.readings.get(row)
    }

    /// Valid selection bounds, `None` for an empty table
    pub fn bounds(&self) -> Option<RowBounds> {
        RowBounds::for_len(self.len())
    }

    /// Timestamps of every row
    pub fn timestamps(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        self.readings.iter().map(|r| r.timestamp)
    }

    /// Values of one sensor down the whole file
    pub fn sensor_values(&self, sensor: usize) -> impl Iterator<Item = f64> + '_ {
        self.readings.iter().filter_map(move |r| r.sensors.get(sensor).copied())
    }

    /// File-wide mean of every sensor, in catalog order
    pub fn sensor_means(&self) -> Vec<f64> {
        if self.readings.is_empty() {
            return vec![0.0; self.catalog.len()];
        }
        let n = self.readings.len() as f64;
        (0..self.catalog.len())
            .map(|i| self.sensor_values(i).sum::<f64>() / n)
            .collect()
    }

    /// Indices of sensors whose file-wide mean is strictly positive.
    ///
    /// A channel that never produced a reading exports as zeros; this filter
    /// keeps those out of the mean and spread. A real sensor averaging zero
    /// or below is excluded as well.
    pub fn included_sensors(&self) -> Vec<usize> {
        self.sensor_means()
            .iter()
            .enumerate()
            .filter(|(_, mean)| **mean > 0.0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Lowest and highest sensor value anywhere in the file
    pub fn sensor_extent(&self) -> Option<(f64, f64)> {
        self.readings
            .iter()
            .flat_map(|r| r.sensors.iter().copied())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Per-sensor statistics for reporting
    pub fn stats(&self) -> TableStats {
        TableStats::from_table(self)
    }

    /// Serialize to JSON for a session blob
    pub fn to_json(&self) -> Result<String, TableError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a table serialized with [`Table::to_json`]
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(json)?)
    }
}
