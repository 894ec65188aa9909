/// Errors that can occur when serializing or exporting figures
#[derive(Debug, thiserror::Error)]
pub enum FigureError {
    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// I/O error writing an export
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
