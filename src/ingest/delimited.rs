use csv::ReaderBuilder;
use log::debug;

use super::sheet::{Cell, RawSheet};
use super::IngestError;

const UTF8_BOM: &str = "\u{feff}";

/// Read comma-delimited text, falling back to semicolons when the first
/// header cell shows the file was split on the wrong delimiter.
pub(crate) fn read(bytes: &[u8]) -> Result<RawSheet, IngestError> {
    let text = std::str::from_utf8(bytes)?;
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);

    let sheet = read_with_delimiter(text, b',')?;
    if sheet.headers.first().is_some_and(|h| h.contains(';')) {
        debug!("First header contains ';', re-reading as semicolon-delimited");
        return read_with_delimiter(text, b';');
    }
    Ok(sheet)
}

fn read_with_delimiter(text: &str, delimiter: u8) -> Result<RawSheet, IngestError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        rows.push(record.iter().map(Cell::from_text).collect());
    }

    Ok(RawSheet { headers, rows })
}
