use crate::ingest::IngestError;
use crate::table::TableError;

/// Errors that can occur when updating a session
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The uploaded file could not be ingested
    #[error("Upload failed: {0}")]
    IngestError(#[from] IngestError),

    /// A serialized table could not be restored
    #[error("Invalid table blob: {0}")]
    TableError(#[from] TableError),
}
