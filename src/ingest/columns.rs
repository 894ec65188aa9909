use super::IngestConfig;

/// Lower-case a header and drop any vendor tag before the last separator
/// (`"GT1.TTXD_1"` -> `"ttxd_1"`).
pub fn normalize_column_name(name: &str, separator: &str) -> String {
    let lowered = name.trim().to_lowercase();
    if separator.is_empty() {
        return lowered;
    }
    match lowered.rsplit_once(&separator.to_lowercase()) {
        Some((_, tail)) => tail.trim().to_string(),
        None => lowered,
    }
}

/// Where the timestamp comes from, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimestampSource {
    /// `ts` column, day/month/year
    DayFirst(usize),
    /// `date` and `time` columns joined
    DateAndTime { date: usize, time: usize },
    /// Lone `time` column, free-form
    FreeForm(usize),
}

impl TimestampSource {
    /// Column whose first data cell may hold the units marker
    pub(crate) fn leading_column(&self) -> usize {
        match *self {
            TimestampSource::DayFirst(c) => c,
            TimestampSource::DateAndTime { date, .. } => date,
            TimestampSource::FreeForm(c) => c,
        }
    }
}

/// Column indices resolved from a normalized header row
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ColumnMap {
    pub names: Vec<String>,
    pub timestamp: Option<TimestampSource>,
    pub engine_speed: Option<usize>,
    pub power: Option<usize>,
    pub sensors: Vec<usize>,
}

impl ColumnMap {
    pub(crate) fn resolve(headers: &[String], config: &IngestConfig) -> Self {
        let names: Vec<String> = headers
            .iter()
            .map(|h| normalize_column_name(h, &config.column_separator))
            .collect();
        let find = |wanted: &str| names.iter().position(|n| n == wanted);

        let timestamp = match (find("ts"), find("date"), find("time")) {
            (Some(ts), _, _) => Some(TimestampSource::DayFirst(ts)),
            (None, Some(date), Some(time)) => Some(TimestampSource::DateAndTime { date, time }),
            (None, None, Some(time)) => Some(TimestampSource::FreeForm(time)),
            _ => None,
        };

        let prefix = config.sensor_prefix.to_lowercase();
        let sensors = names
            .iter()
            .enumerate()
            .filter(|(_, n)| n.starts_with(&prefix))
            .map(|(i, _)| i)
            .collect();

        Self {
            timestamp,
            engine_speed: find(&config.engine_speed_column.to_lowercase()),
            power: find(&config.power_column.to_lowercase()),
            sensors,
            names,
        }
    }
}
