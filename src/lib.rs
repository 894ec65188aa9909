//! # exhaust-spread - Gas-Turbine Exhaust Spread Views
//!
//! `exhaust-spread` turns a trend export of gas-turbine exhaust thermocouple
//! readings (CSV, semicolon CSV or XLSX) into the data behind an exhaust
//! spread dashboard: a multi-series time chart, a polar snapshot of every
//! thermocouple at one instant, and a four-field summary row.
//!
//! ## Pipeline
//!
//! Everything is a pure function pipeline with no global state:
//!
//! ```text
//! (bytes, file name) --ingest--> Table --(Table, Selection)--> DashboardViews --> Figure / HTML
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use exhaust_spread::ingest::{ingest, IngestConfig};
//! use exhaust_spread::views::{summary_row, DashboardViews, Selection, ViewConfig};
//!
//! let csv = "ts,tnh,dwatt,ttxd_1,ttxd_2\n\
//!            01/02/2024 10:00:00,95.123,10.4567,500,700\n";
//!
//! let ingested = ingest(csv.as_bytes(), "trend.csv", &IngestConfig::default())?;
//! let table = &ingested.table;
//!
//! let summary = summary_row(table, 0).expect("row 0 exists");
//! assert_eq!(summary.mean_temperature, 600.0);
//! assert_eq!(summary.spread, 200.0);
//!
//! let views = DashboardViews::compute(Some(table), &Selection::default(), &ViewConfig::default());
//! assert_eq!(views.row_label, "2024-02-01 10:00:00");
//! # Ok::<(), exhaust_spread::ingest::IngestError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`ingest`]: file decoding, column normalization, timestamp derivation
//! - [`table`]: the normalized [`table::Table`] and its sensor catalog
//! - [`views`]: time series, polar snapshot, summary row and highlight
//! - [`figure`]: plotly.js figure definitions and standalone HTML export
//! - [`session`]: per-user state holding the current table and selection
//! - [`config`]: TOML configuration overrides

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod figure;
pub mod ingest;
pub mod session;
pub mod table;
pub mod views;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::config::{Config, ConfigError};
    pub use crate::figure::{DashboardFigures, Figure, FigureError, PlotlyScript, StandaloneHtml};
    pub use crate::ingest::{ingest, ingest_file, FileFormat, IngestConfig, IngestError, Ingested};
    pub use crate::session::{Session, SessionError};
    pub use crate::table::{Reading, RowBounds, SensorCatalog, Table, TableError, TableStats};
    pub use crate::views::{
        highlight, polar_snapshot, summary_row, time_series, Axis, DashboardViews,
        HighlightShape, PolarSnapshot, RadialRange, Selection, Series, SummaryRow, ViewConfig,
    };
}
