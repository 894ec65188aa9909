//! # Dashboard Session
//!
//! Per-user state: the current upload and the transient selection. A host
//! keeps one [`Session`] per connected user; nothing is shared between
//! sessions.
//!
//! A failed upload leaves the session exactly as it was, so the previous
//! file stays on screen while the error is reported.
//!
//! ```rust
//! use exhaust_spread::session::Session;
//!
//! let mut session = Session::default();
//! assert!(session.views().is_placeholder());
//!
//! let csv = "ts,tnh,ttxd_1,ttxd_2\n\
//!            01/03/2024 08:00:00,90,510,530\n\
//!            01/03/2024 08:00:01,91,512,534\n";
//! let bounds = session.upload(csv.as_bytes(), "unit1.csv")?;
//! assert_eq!(bounds.max, 1);
//!
//! assert_eq!(session.select_row(7), 1);
//! assert_eq!(session.views().row_label, "2024-03-01 08:00:01");
//! assert_eq!(session.upload_title(), "**Imported file:** unit1.csv");
//! # Ok::<(), exhaust_spread::session::SessionError>(())
//! ```

mod error;

#[cfg(test)]
mod tests;

pub use error::SessionError;

use log::{debug, info, warn};

use crate::figure::DashboardFigures;
use crate::ingest::{ingest, IngestConfig, IngestError, Ingested};
use crate::table::{RowBounds, Table};
use crate::views::{DashboardViews, RadialRange, Selection, ViewConfig};

const UPLOAD_TITLE_PREFIX: &str = "**Imported file:**";

/// State of one dashboard user
#[derive(Debug, Clone, Default)]
pub struct Session {
    ingest_config: IngestConfig,
    view_config: ViewConfig,
    current: Option<Ingested>,
    selection: Selection,
}

impl Session {
    /// Empty session with the given settings
    pub fn new(ingest_config: IngestConfig, view_config: ViewConfig) -> Self {
        Self {
            ingest_config,
            view_config,
            current: None,
            selection: Selection::default(),
        }
    }

    /// Ingest an uploaded file and make it current.
    ///
    /// On success the selection resets to row 0 and the new bounds are
    /// returned. On failure the session is unchanged.
    pub fn upload(&mut self, bytes: &[u8], file_name: &str) -> Result<RowBounds, SessionError> {
        match ingest(bytes, file_name, &self.ingest_config) {
            Ok(ingested) => Ok(self.replace(ingested)),
            Err(e) => {
                warn!("Rejected upload {}: {}", file_name, e);
                Err(e.into())
            }
        }
    }

    /// Make a table restored from [`Session::export_table`] current
    pub fn restore_table(&mut self, json: &str, file_name: &str) -> Result<RowBounds, SessionError> {
        let table = Table::from_json(json)?;
        let bounds = table.bounds().ok_or(IngestError::EmptyTable)?;
        Ok(self.replace(Ingested {
            file_name: file_name.to_string(),
            table,
            bounds,
        }))
    }

    /// Serialize the current table, `None` when nothing is loaded
    pub fn export_table(&self) -> Result<Option<String>, SessionError> {
        self.table().map(|t| t.to_json()).transpose().map_err(Into::into)
    }

    fn replace(&mut self, ingested: Ingested) -> RowBounds {
        let bounds = ingested.bounds;
        info!(
            "Session now shows {} (rows {}..={})",
            ingested.file_name, bounds.min, bounds.max
        );
        self.current = Some(ingested);
        self.selection = Selection::default();
        bounds
    }

    /// Drop the current file and return to the no-data state
    pub fn clear(&mut self) {
        if let Some(current) = self.current.take() {
            debug!("Cleared {}", current.file_name);
        }
        self.selection = Selection::default();
    }

    /// Current table, if a file is loaded
    pub fn table(&self) -> Option<&Table> {
        self.current.as_ref().map(|c| &c.table)
    }

    /// Name of the current file
    pub fn file_name(&self) -> Option<&str> {
        self.current.as_ref().map(|c| c.file_name.as_str())
    }

    /// Selection bounds; the placeholder bounds when nothing is loaded
    pub fn bounds(&self) -> RowBounds {
        self.current
            .as_ref()
            .map(|c| c.bounds)
            .unwrap_or_else(RowBounds::placeholder)
    }

    /// Current selection
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Select a row, clamped into [`Session::bounds`]; returns the row kept
    pub fn select_row(&mut self, row: usize) -> usize {
        let clamped = self.bounds().clamp(row);
        if clamped != row {
            debug!("Row {} clamped to {}", row, clamped);
        }
        self.selection.row = clamped;
        clamped
    }

    /// Set or clear the polar radial window
    pub fn set_polar_window(&mut self, window: Option<RadialRange>) {
        self.selection.polar_window = window;
    }

    /// Limit the time chart to the first `count` sensors, or show all
    pub fn set_sensor_count(&mut self, count: Option<usize>) {
        self.selection.sensor_count = count;
    }

    /// Ingestion settings
    pub fn ingest_config(&self) -> &IngestConfig {
        &self.ingest_config
    }

    /// View settings
    pub fn view_config(&self) -> &ViewConfig {
        &self.view_config
    }

    /// Views for the current selection
    pub fn views(&self) -> DashboardViews {
        DashboardViews::compute(self.table(), &self.selection, &self.view_config)
    }

    /// Both charts for the current selection
    pub fn figures(&self) -> DashboardFigures {
        DashboardFigures::from_views(&self.views())
    }

    /// Markdown title above the charts
    pub fn upload_title(&self) -> String {
        match self.file_name() {
            Some(name) => format!("{} {}", UPLOAD_TITLE_PREFIX, name),
            None => UPLOAD_TITLE_PREFIX.to_string(),
        }
    }
}
