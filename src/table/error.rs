/// Errors that can occur when building or restoring a table
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A reading does not carry one value per catalog sensor
    #[error("Row {row} has {found} sensor values, catalog lists {expected}")]
    SensorCountMismatch {
        /// Zero-based row index
        row: usize,
        /// Catalog length
        expected: usize,
        /// Values present in the row
        found: usize,
    },

    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}
