//! Minimal XLSX reader: an XLSX workbook is a ZIP container of XML parts,
//! of which only the first worksheet and the shared string table are needed.

use std::io::{Cursor, Read, Seek};

use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::result::ZipError;
use zip::ZipArchive;

use super::sheet::{Cell, RawSheet};
use super::IngestError;

const WORKBOOK_PART: &str = "xl/workbook.xml";
const WORKBOOK_RELS_PART: &str = "xl/_rels/workbook.xml.rels";
const SHARED_STRINGS_PART: &str = "xl/sharedStrings.xml";
const DEFAULT_SHEET_PART: &str = "xl/worksheets/sheet1.xml";

/// Columns in a worksheet (A..=XFD)
const MAX_COLUMNS: usize = 16_384;

/// Upper bound on the buffer reserved from a part's declared size
const MAX_PREALLOC: u64 = 16 * 1024 * 1024;

/// Read the first worksheet of an XLSX workbook
pub(crate) fn read(bytes: &[u8]) -> Result<RawSheet, IngestError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let shared_strings = match read_part(&mut archive, SHARED_STRINGS_PART)? {
        Some(xml) => parse_shared_strings(&xml)?,
        None => Vec::new(),
    };

    let sheet_part = first_sheet_part(&mut archive)?;
    debug!("Reading worksheet part {}", sheet_part);
    let xml = read_part(&mut archive, &sheet_part)?.ok_or_else(|| {
        IngestError::InvalidWorkbook(format!("missing worksheet part {}", sheet_part))
    })?;

    let mut grid = parse_worksheet(&xml, &shared_strings)?.into_iter();
    let headers = grid
        .next()
        .ok_or_else(|| IngestError::InvalidWorkbook("first worksheet is empty".to_string()))?
        .iter()
        .map(Cell::to_text)
        .collect();
    let rows = grid
        .filter(|row| row.iter().any(|c| *c != Cell::Empty))
        .collect();

    Ok(RawSheet { headers, rows })
}

fn read_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Option<Vec<u8>>, IngestError> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    // The declared size comes from the archive and is not trusted
    let mut buf = Vec::with_capacity(file.size().min(MAX_PREALLOC) as usize);
    file.read_to_end(&mut buf)?;
    Ok(Some(buf))
}

/// Value of the attribute whose local name (namespace prefix ignored) is `name`
fn get_attribute(e: &BytesStart, name: &str) -> Result<Option<String>, IngestError> {
    for attr in e.attributes() {
        let attr = attr.map_err(|e| IngestError::XmlError(quick_xml::Error::from(e)))?;
        if attr.key.local_name().as_ref() == name.as_bytes() {
            let value = std::str::from_utf8(&attr.value)?.to_string();
            return Ok(Some(value));
        }
    }
    Ok(None)
}

/// Resolve the part name of the first sheet listed in the workbook
fn first_sheet_part<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<String, IngestError> {
    let Some(workbook) = read_part(archive, WORKBOOK_PART)? else {
        return Ok(DEFAULT_SHEET_PART.to_string());
    };

    let mut relationship_id = None;
    let mut reader = Reader::from_reader(workbook.as_slice());
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) | Event::Empty(ref e) if e.local_name().as_ref() == b"sheet" => {
                relationship_id = get_attribute(e, "id")?;
                break;
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    let (Some(relationship_id), Some(rels)) =
        (relationship_id, read_part(archive, WORKBOOK_RELS_PART)?)
    else {
        return Ok(DEFAULT_SHEET_PART.to_string());
    };

    let mut reader = Reader::from_reader(rels.as_slice());
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) | Event::Empty(ref e)
                if e.local_name().as_ref() == b"Relationship" =>
            {
                if get_attribute(e, "Id")?.as_deref() == Some(relationship_id.as_str()) {
                    if let Some(target) = get_attribute(e, "Target")? {
                        return Ok(resolve_target(&target));
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(DEFAULT_SHEET_PART.to_string())
}

/// Relationship targets are relative to `xl/` unless absolute
fn resolve_target(target: &str) -> String {
    match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => format!("xl/{}", target),
    }
}

fn parse_shared_strings(xml: &[u8]) -> Result<Vec<String>, IngestError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut strings = Vec::new();
    let mut current = String::new();
    let mut in_text = false;
    let mut in_phonetic = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"si" => current.clear(),
                b"t" => in_text = true,
                b"rPh" => in_phonetic = true,
                _ => {}
            },
            Event::Empty(ref e) if e.local_name().as_ref() == b"si" => strings.push(String::new()),
            Event::Text(ref t) if in_text && !in_phonetic => current.push_str(&t.unescape()?),
            Event::End(ref e) => match e.local_name().as_ref() {
                b"si" => strings.push(std::mem::take(&mut current)),
                b"t" => in_text = false,
                b"rPh" => in_phonetic = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(strings)
}

/// Cell type from the `t` attribute
#[derive(Debug, Clone, Copy, PartialEq)]
enum CellKind {
    Number,
    SharedString,
    InlineString,
    Boolean,
}

impl CellKind {
    fn from_attribute(t: Option<&str>) -> Self {
        match t {
            Some("s") => CellKind::SharedString,
            Some("inlineStr") | Some("str") | Some("e") => CellKind::InlineString,
            Some("b") => CellKind::Boolean,
            _ => CellKind::Number,
        }
    }

    fn resolve(self, raw: &str, shared: &[String]) -> Result<Cell, IngestError> {
        let raw = raw.trim();
        match self {
            CellKind::SharedString => {
                let index: usize = raw.parse().map_err(|_| {
                    IngestError::InvalidWorkbook(format!("bad shared string index '{}'", raw))
                })?;
                let text = shared.get(index).ok_or_else(|| {
                    IngestError::InvalidWorkbook(format!("shared string {} out of range", index))
                })?;
                Ok(Cell::from_text(text))
            }
            CellKind::InlineString => Ok(Cell::from_text(raw)),
            CellKind::Boolean => Ok(Cell::Number(if raw == "1" { 1.0 } else { 0.0 })),
            CellKind::Number if raw.is_empty() => Ok(Cell::Empty),
            CellKind::Number => Ok(raw
                .parse::<f64>()
                .map(Cell::Number)
                .unwrap_or_else(|_| Cell::Text(raw.to_string()))),
        }
    }
}

/// Zero-based column index from an A1-style reference ("C7" -> 2).
///
/// `Ok(None)` when the reference has no column letters; an error when the
/// column lies past XFD.
fn column_index(reference: &str) -> Result<Option<usize>, IngestError> {
    let letters = reference
        .bytes()
        .take_while(|b| b.is_ascii_alphabetic());

    let mut index: Option<usize> = None;
    for b in letters {
        let digit = (b.to_ascii_uppercase() - b'A') as usize + 1;
        let next = index
            .unwrap_or(0)
            .checked_mul(26)
            .and_then(|acc| acc.checked_add(digit))
            .filter(|&n| n <= MAX_COLUMNS)
            .ok_or_else(|| column_out_of_range(reference))?;
        index = Some(next);
    }
    Ok(index.map(|n| n - 1))
}

fn column_out_of_range(reference: &str) -> IngestError {
    IngestError::InvalidWorkbook(format!(
        "cell reference {} lies past the last worksheet column XFD",
        reference
    ))
}

fn place(row: &mut Vec<Cell>, column: usize, cell: Cell) {
    if row.len() <= column {
        row.resize(column + 1, Cell::Empty);
    }
    row[column] = cell;
}

fn parse_worksheet(xml: &[u8], shared: &[String]) -> Result<Vec<Vec<Cell>>, IngestError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut rows: Vec<Vec<Cell>> = Vec::new();
    let mut current_row: Option<Vec<Cell>> = None;
    let mut pending: Option<(usize, CellKind)> = None;
    let mut value = String::new();
    let mut capture = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"row" => current_row = Some(Vec::new()),
                b"c" => {
                    let next = current_row.as_ref().map_or(0, Vec::len);
                    let column = match get_attribute(e, "r")? {
                        Some(r) => column_index(&r)?.unwrap_or(next),
                        None => next,
                    };
                    if column >= MAX_COLUMNS {
                        return Err(IngestError::InvalidWorkbook(format!(
                            "row has more than {} cells",
                            MAX_COLUMNS
                        )));
                    }
                    let kind = CellKind::from_attribute(get_attribute(e, "t")?.as_deref());
                    pending = Some((column, kind));
                    value.clear();
                }
                b"v" | b"t" if pending.is_some() => capture = true,
                _ => {}
            },
            Event::Empty(ref e) if e.local_name().as_ref() == b"row" => rows.push(Vec::new()),
            Event::Text(ref t) if capture => value.push_str(&t.unescape()?),
            Event::End(ref e) => match e.local_name().as_ref() {
                b"v" | b"t" => capture = false,
                b"c" => {
                    if let (Some((column, kind)), Some(row)) = (pending.take(), current_row.as_mut()) {
                        place(row, column, kind.resolve(&value, shared)?);
                    }
                }
                b"row" => {
                    if let Some(row) = current_row.take() {
                        rows.push(row);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_index() {
        assert_eq!(column_index("A1").unwrap(), Some(0));
        assert_eq!(column_index("C7").unwrap(), Some(2));
        assert_eq!(column_index("Z10").unwrap(), Some(25));
        assert_eq!(column_index("AA2").unwrap(), Some(26));
        assert_eq!(column_index("xfd1").unwrap(), Some(16_383));
        assert_eq!(column_index("42").unwrap(), None);
    }

    #[test]
    fn test_column_index_out_of_range() {
        assert!(matches!(
            column_index("XFE1"),
            Err(IngestError::InvalidWorkbook(_))
        ));
        assert!(matches!(
            column_index("ZZZZ1"),
            Err(IngestError::InvalidWorkbook(_))
        ));
        assert!(matches!(
            column_index("AAAAAAAAAAAAAAAAAAAA1"),
            Err(IngestError::InvalidWorkbook(_))
        ));
    }

    #[test]
    fn test_parse_worksheet_rejects_overlong_reference() {
        for reference in ["AAAAAAAAAAAAAAAAAAAA1", "ZZZZ1"] {
            let xml = format!(
                r#"<worksheet><sheetData><row r="1"><c r="{}"><v>1</v></c></row></sheetData></worksheet>"#,
                reference
            );
            assert!(matches!(
                parse_worksheet(xml.as_bytes(), &[]),
                Err(IngestError::InvalidWorkbook(_))
            ));
        }
    }

    #[test]
    fn test_resolve_target() {
        assert_eq!(resolve_target("worksheets/sheet2.xml"), "xl/worksheets/sheet2.xml");
        assert_eq!(resolve_target("/xl/worksheets/data.xml"), "xl/worksheets/data.xml");
    }

    #[test]
    fn test_parse_shared_strings_with_rich_text() {
        let xml = br#"<?xml version="1.0"?>
<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="3">
  <si><t>TS</t></si>
  <si><r><t>TTXD</t></r><r><t>_1</t></r></si>
  <si/>
</sst>"#;
        let strings = parse_shared_strings(xml).unwrap();
        assert_eq!(strings, vec!["TS", "TTXD_1", ""]);
    }

    #[test]
    fn test_parse_worksheet_cell_types() {
        let xml = br#"<?xml version="1.0"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <sheetData>
    <row r="1"><c r="A1" t="s"><v>0</v></c><c r="C1" t="inlineStr"><is><t>ttxd_1</t></is></c></row>
    <row r="2"><c r="A2"><v>45000.5</v></c><c r="B2" t="b"><v>1</v></c><c r="C2"><v>512.25</v></c></row>
  </sheetData>
</worksheet>"#;
        let shared = vec!["time".to_string()];
        let rows = parse_worksheet(xml, &shared).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            vec![Cell::Text("time".into()), Cell::Empty, Cell::Text("ttxd_1".into())]
        );
        assert_eq!(
            rows[1],
            vec![Cell::Number(45000.5), Cell::Number(1.0), Cell::Number(512.25)]
        );
    }
}
