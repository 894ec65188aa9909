use crate::table::TableError;

/// Errors that can occur while ingesting an uploaded file
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// I/O error reading the upload
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    /// ZIP container error (XLSX)
    #[error("ZIP error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    /// Error parsing workbook XML
    #[error("XML parsing error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// Text is not valid UTF-8
    #[error("UTF-8 encoding error: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),

    /// File extension not recognized
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Workbook structure is missing a required part
    #[error("Invalid workbook: {0}")]
    InvalidWorkbook(String),

    /// None of `ts`, `date` + `time` or `time` is present
    #[error("No timestamp column found (expected 'ts', 'date' and 'time', or 'time')")]
    MissingTimestamp,

    /// A timestamp cell could not be parsed
    #[error("Invalid timestamp '{value}' in data row {row}")]
    InvalidTimestamp {
        /// One-based data row, counting any dropped units rows
        row: usize,
        /// Offending cell text
        value: String,
    },

    /// A numeric column holds a non-numeric cell
    #[error("Non-numeric value '{value}' in column '{column}', data row {row}")]
    NonNumeric {
        /// Normalized column name
        column: String,
        /// One-based data row, counting any dropped units rows
        row: usize,
        /// Offending cell text
        value: String,
    },

    /// Header present but no data rows
    #[error("File contains no data rows")]
    EmptyTable,

    /// Assembled rows do not form a consistent table
    #[error("Table error: {0}")]
    TableError(#[from] TableError),
}
