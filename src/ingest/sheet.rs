//! Format-independent grid produced by the CSV and XLSX readers.

/// A single cell as read from the source
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

impl Cell {
    /// Build a cell from delimited text, treating blank as empty
    pub(crate) fn from_text(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(text.to_string())
        }
    }

    /// Display text of the cell (used for headers and error messages)
    pub(crate) fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
        }
    }
}

/// Header row plus data rows, cells unnormalized
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RawSheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl RawSheet {
    /// Cell at (`row`, `column`), empty when the row is ragged
    pub(crate) fn cell(&self, row: usize, column: usize) -> &Cell {
        const EMPTY: &Cell = &Cell::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or(EMPTY)
    }
}
