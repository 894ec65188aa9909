use std::fmt;
use std::path::Path;

use super::IngestError;

/// Upload container detected from the file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Comma- or semicolon-delimited text
    Delimited,
    /// Office Open XML workbook (`.xlsx`, `.xlsm`)
    Workbook,
}

impl FileFormat {
    /// Detect the format from a file name extension (case-insensitive)
    pub fn from_file_name(file_name: &str) -> Result<Self, IngestError> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") | Some("txt") => Ok(FileFormat::Delimited),
            Some("xlsx") | Some("xlsm") => Ok(FileFormat::Workbook),
            Some("xls") => Err(IngestError::UnsupportedFormat(format!(
                "{}: legacy binary .xls workbooks are not supported, save as .xlsx",
                file_name
            ))),
            _ => Err(IngestError::UnsupportedFormat(file_name.to_string())),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::Delimited => write!(f, "delimited text"),
            FileFormat::Workbook => write!(f, "xlsx workbook"),
        }
    }
}
