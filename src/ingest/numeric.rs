use super::sheet::Cell;

/// Coerce a cell to a finite number.
///
/// Text is parsed as-is first; a value with a decimal comma and no dot
/// (`"512,5"`, common in semicolon exports) is retried with a dot.
pub(crate) fn coerce(cell: &Cell) -> Option<f64> {
    let value = match cell {
        Cell::Number(n) => Some(*n),
        Cell::Text(text) => {
            let text = text.trim();
            text.parse::<f64>().ok().or_else(|| {
                if text.contains(',') && !text.contains('.') {
                    text.replacen(',', ".", 1).parse::<f64>().ok()
                } else {
                    None
                }
            })
        }
        Cell::Empty => None,
    };
    value.filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce() {
        assert_eq!(coerce(&Cell::Number(3.5)), Some(3.5));
        assert_eq!(coerce(&Cell::Text("95.123".into())), Some(95.123));
        assert_eq!(coerce(&Cell::Text("512,5".into())), Some(512.5));
        assert_eq!(coerce(&Cell::Text("1,234.5".into())), None);
        assert_eq!(coerce(&Cell::Text("n/a".into())), None);
        assert_eq!(coerce(&Cell::Text("NaN".into())), None);
        assert_eq!(coerce(&Cell::Empty), None);
    }
}
