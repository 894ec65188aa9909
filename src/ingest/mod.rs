//! # Ingestion & Normalization
//!
//! Turns an uploaded trend export into a normalized [`Table`]:
//!
//! 1. **Decode** the bytes according to the file extension: comma- or
//!    semicolon-delimited text, or the first worksheet of an XLSX workbook.
//! 2. **Normalize column names**: lower-case, and keep only the text after the
//!    last vendor separator (`"GT1.TTXD_3"` becomes `"ttxd_3"`).
//! 3. **Drop the units header**: when the first timestamp cell carries the
//!    units marker, the first two data rows are export artifacts.
//! 4. **Derive timestamps** from `ts` (day/month/year), `date` + `time`, or a
//!    lone free-form `time` column, in that order.
//! 5. **Coerce numbers**: engine speed and power default to zero when absent;
//!    every exhaust sensor column must be numeric.
//! 6. **Build the catalog** as the sequential renumbering of the detected
//!    sensor columns.
//!
//! ## Example
//!
//! ```rust
//! use exhaust_spread::ingest::{ingest, IngestConfig};
//!
//! let csv = "Time;GT1.TTXD_1;GT1.TTXD_4\n\
//!            2024-05-01 06:00:00;498,5;502\n\
//!            2024-05-01 06:00:01;499;503,5\n";
//!
//! let ingested = ingest(csv.as_bytes(), "gt1.csv", &IngestConfig::default())?;
//! assert_eq!(ingested.table.catalog().names(), &["ttxd_1", "ttxd_2"]);
//! assert_eq!(ingested.bounds.max, 1);
//! # Ok::<(), exhaust_spread::ingest::IngestError>(())
//! ```

mod columns;
mod config;
mod delimited;
mod error;
mod format;
mod numeric;
mod sheet;
mod timestamp;
mod xlsx;


pub use columns::normalize_column_name;
pub use config::IngestConfig;
pub use error::IngestError;
pub use format::FileFormat;
pub use timestamp::{from_excel_serial, parse_day_first, parse_free_form};

use std::path::Path;

use chrono::NaiveDateTime;
use log::{debug, info, warn};

use crate::table::{Reading, RowBounds, SensorCatalog, Table};
use columns::{ColumnMap, TimestampSource};
use sheet::{Cell, RawSheet};

/// Rows dropped when the units marker is present
const UNITS_HEADER_ROWS: usize = 2;

/// Result of a successful upload
#[derive(Debug, Clone, PartialEq)]
pub struct Ingested {
    /// Name of the uploaded file
    pub file_name: String,
    /// Normalized table
    pub table: Table,
    /// Valid selection bounds for the table
    pub bounds: RowBounds,
}

/// Ingest an uploaded file given its raw bytes and original file name
pub fn ingest(bytes: &[u8], file_name: &str, config: &IngestConfig) -> Result<Ingested, IngestError> {
    let format = FileFormat::from_file_name(file_name)?;
    debug!("Ingesting {} ({} bytes) as {}", file_name, bytes.len(), format);

    let sheet = match format {
        FileFormat::Delimited => delimited::read(bytes)?,
        FileFormat::Workbook => xlsx::read(bytes)?,
    };
    let table = normalize(sheet, config)?;
    let bounds = table.bounds().ok_or(IngestError::EmptyTable)?;

    info!(
        "Ingested {}: {} rows, {} exhaust sensors",
        file_name,
        table.len(),
        table.catalog().len()
    );

    Ok(Ingested {
        file_name: file_name.to_string(),
        table,
        bounds,
    })
}

/// Read a file from disk and ingest it
pub fn ingest_file<P: AsRef<Path>>(path: P, config: &IngestConfig) -> Result<Ingested, IngestError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    ingest(&bytes, &file_name, config)
}

fn normalize(mut sheet: RawSheet, config: &IngestConfig) -> Result<Table, IngestError> {
    let columns = ColumnMap::resolve(&sheet.headers, config);
    debug!("Normalized columns: {:?}", columns.names);

    let source = columns.timestamp.ok_or(IngestError::MissingTimestamp)?;

    let mut skipped = 0;
    if has_units_header(&sheet, source, &config.units_marker) {
        skipped = UNITS_HEADER_ROWS.min(sheet.rows.len());
        debug!("Units marker found, dropping {} leading rows", skipped);
        sheet.rows.drain(..skipped);
    }

    if sheet.rows.is_empty() {
        return Err(IngestError::EmptyTable);
    }

    if columns.engine_speed.is_none() {
        warn!("No '{}' column, engine speed defaults to 0", config.engine_speed_column);
    }
    if columns.power.is_none() {
        debug!("No '{}' column, power defaults to 0", config.power_column);
    }
    if columns.sensors.is_empty() {
        warn!("No '{}*' columns found, sensor catalog is empty", config.sensor_prefix);
    }

    let mut readings = Vec::with_capacity(sheet.rows.len());
    for row in 0..sheet.rows.len() {
        // One-based position among the data rows of the file
        let file_row = row + skipped + 1;

        let timestamp = row_timestamp(&sheet, row, source).ok_or_else(|| {
            IngestError::InvalidTimestamp {
                row: file_row,
                value: timestamp_text(&sheet, row, source),
            }
        })?;

        let number = |column: usize| -> Result<f64, IngestError> {
            let cell = sheet.cell(row, column);
            numeric::coerce(cell).ok_or_else(|| IngestError::NonNumeric {
                column: columns.names[column].clone(),
                row: file_row,
                value: cell.to_text(),
            })
        };

        let engine_speed = columns.engine_speed.map(number).transpose()?.unwrap_or(0.0);
        let power = columns.power.map(number).transpose()?.unwrap_or(0.0);
        let sensors = columns
            .sensors
            .iter()
            .map(|&column| number(column))
            .collect::<Result<Vec<_>, _>>()?;

        readings.push(Reading::new(timestamp, sensors, engine_speed, power));
    }

    let catalog = SensorCatalog::sequential(&config.sensor_prefix.to_lowercase(), columns.sensors.len());
    Ok(Table::new(catalog, readings)?)
}

fn has_units_header(sheet: &RawSheet, source: TimestampSource, marker: &str) -> bool {
    if marker.is_empty() {
        return false;
    }
    match sheet.cell(0, source.leading_column()) {
        Cell::Text(text) => text.to_lowercase().contains(&marker.to_lowercase()),
        _ => false,
    }
}

fn row_timestamp(sheet: &RawSheet, row: usize, source: TimestampSource) -> Option<NaiveDateTime> {
    match source {
        TimestampSource::DayFirst(c) => timestamp::day_first_cell(sheet.cell(row, c)),
        TimestampSource::DateAndTime { date, time } => {
            timestamp::date_and_time_cells(sheet.cell(row, date), sheet.cell(row, time))
        }
        TimestampSource::FreeForm(c) => timestamp::free_form_cell(sheet.cell(row, c)),
    }
}

fn timestamp_text(sheet: &RawSheet, row: usize, source: TimestampSource) -> String {
    match source {
        TimestampSource::DateAndTime { date, time } => format!(
            "{} {}",
            sheet.cell(row, date).to_text(),
            sheet.cell(row, time).to_text()
        )
        .trim()
        .to_string(),
        other => sheet.cell(row, other.leading_column()).to_text(),
    }
}
