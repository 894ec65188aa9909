//! Timestamp parsing for the three supported timestamp layouts.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use super::sheet::Cell;

/// Explicit formats for the `ts` column
const DAY_FIRST_FORMATS: &[&str] = &[
    "%d/%m/%Y %H:%M:%S%.f",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S%.f",
    "%d.%m.%Y %H:%M:%S%.f",
];

const DAY_FIRST_DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y"];

/// Free-form fallbacks, tried in order; month-first wins over day-first for
/// ambiguous slashed dates
const FREE_FORM_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%d/%m/%Y %H:%M:%S%.f",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d.%m.%Y %H:%M:%S%.f",
    "%d.%m.%Y %H:%M:%S",
    "%d-%b-%Y %H:%M:%S%.f",
    "%d-%b-%Y %H:%M:%S",
];

const FREE_FORM_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d/%m/%Y", "%d.%m.%Y"];

const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"];

/// Largest serial Excel accepts (9999-12-31)
const EXCEL_MAX_SERIAL: f64 = 2_958_465.999_999;

fn try_formats(text: &str, formats: &[&str], date_formats: &[&str]) -> Option<NaiveDateTime> {
    formats
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(text, f).ok())
        .or_else(|| {
            date_formats
                .iter()
                .find_map(|f| NaiveDate::parse_from_str(text, f).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Parse with the explicit day/month/year formats
pub fn parse_day_first(text: &str) -> Option<NaiveDateTime> {
    try_formats(text.trim(), DAY_FIRST_FORMATS, DAY_FIRST_DATE_FORMATS)
}

/// Parse free-form: RFC 3339 with offset (wall clock kept), then the common
/// year-first, month-first and day-first layouts
pub fn parse_free_form(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.naive_local())
        .ok()
        .or_else(|| try_formats(text, FREE_FORM_FORMATS, FREE_FORM_DATE_FORMATS))
}

/// Convert an Excel serial day number (1900 date system) to a timestamp
pub fn from_excel_serial(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || !(0.0..=EXCEL_MAX_SERIAL).contains(&serial) {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let millis = (serial * 86_400_000.0).round() as i64;
    epoch.checked_add_signed(Duration::milliseconds(millis))
}

fn parse_time_of_day(text: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|f| NaiveTime::parse_from_str(text.trim(), f).ok())
}

/// `ts` cell: day-first text or a workbook date serial
pub(crate) fn day_first_cell(cell: &Cell) -> Option<NaiveDateTime> {
    match cell {
        Cell::Number(serial) => from_excel_serial(*serial),
        Cell::Text(text) => parse_day_first(text),
        Cell::Empty => None,
    }
}

/// Lone `time` cell: free-form text or a workbook date serial
pub(crate) fn free_form_cell(cell: &Cell) -> Option<NaiveDateTime> {
    match cell {
        Cell::Number(serial) => from_excel_serial(*serial),
        Cell::Text(text) => parse_free_form(text),
        Cell::Empty => None,
    }
}

/// `date` + `time` cells. Text pairs are joined and parsed day-first, then
/// free-form; workbook serials contribute their date or time-of-day part.
pub(crate) fn date_and_time_cells(date: &Cell, time: &Cell) -> Option<NaiveDateTime> {
    match (date, time) {
        (Cell::Text(d), Cell::Text(t)) => {
            let joined = format!("{} {}", d.trim(), t.trim());
            parse_day_first(&joined).or_else(|| parse_free_form(&joined))
        }
        (Cell::Text(d), Cell::Empty) => parse_day_first(d).or_else(|| parse_free_form(d)),
        _ => {
            let day = match date {
                Cell::Number(serial) => from_excel_serial(serial.floor())?.date(),
                Cell::Text(d) => parse_day_first(d).or_else(|| parse_free_form(d))?.date(),
                Cell::Empty => return None,
            };
            let time_of_day = match time {
                Cell::Number(fraction) => from_excel_serial(fraction.fract())?.time(),
                Cell::Text(t) => parse_time_of_day(t)?,
                Cell::Empty => NaiveTime::MIN,
            };
            Some(day.and_time(time_of_day))
        }
    }
}
