use std::fmt;

use chrono::NaiveDateTime;
#[cfg(feature = "colorized_output")]
use console::style;
use serde::Serialize;

use super::Table;

/// File-wide statistics of one exhaust sensor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorStats {
    /// Catalog name
    pub name: String,
    /// Mean over every row
    pub mean: f64,
    /// Lowest value
    pub min: f64,
    /// Highest value
    pub max: f64,
    /// Whether the sensor counts toward mean temperature and spread
    pub included: bool,
}

/// Summary statistics about an ingested table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableStats {
    /// Number of rows
    pub rows: usize,
    /// First and last timestamp
    pub time_range: Option<(NaiveDateTime, NaiveDateTime)>,
    /// Per-sensor statistics in catalog order
    pub sensors: Vec<SensorStats>,
}

impl TableStats {
    pub(crate) fn from_table(table: &Table) -> Self {
        let time_range = match (table.readings().first(), table.readings().last()) {
            (Some(first), Some(last)) => Some((first.timestamp, last.timestamp)),
            _ => None,
        };

        let means = table.sensor_means();
        let sensors = table
            .catalog()
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let (min, max) = table
                    .sensor_values(i)
                    .fold((f64::MAX, f64::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
                SensorStats {
                    name: name.to_string(),
                    mean: means[i],
                    min: if table.is_empty() { 0.0 } else { min },
                    max: if table.is_empty() { 0.0 } else { max },
                    included: means[i] > 0.0,
                }
            })
            .collect();

        Self {
            rows: table.len(),
            time_range,
            sensors,
        }
    }

    /// Number of sensors counted toward mean temperature and spread
    pub fn included_count(&self) -> usize {
        self.sensors.iter().filter(|s| s.included).count()
    }

    /// Format the report with colors (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            let mut output = String::new();

            output.push_str(&format!("{}\n", style("Exhaust Table Summary").bold().cyan()));
            output.push_str(&format!("{}\n", style("=====================").cyan()));
            output.push_str(&format!("{}: {}\n", style("Rows").bold(), self.rows));
            if let Some((first, last)) = self.time_range {
                output.push_str(&format!("{}: {} - {}\n", style("Time range").bold(), first, last));
            }
            output.push_str(&format!(
                "{}: {} ({} included)\n\n",
                style("Exhaust sensors").bold(),
                self.sensors.len(),
                style(self.included_count()).green()
            ));

            for sensor in &self.sensors {
                let line = format!(
                    "  {:<10} mean {:>9.2}  min {:>9.2}  max {:>9.2}",
                    sensor.name, sensor.mean, sensor.min, sensor.max
                );
                if sensor.included {
                    output.push_str(&format!("{}\n", line));
                } else {
                    output.push_str(&format!("{} {}\n", style(line).dim(), style("(excluded)").yellow()));
                }
            }

            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

impl fmt::Display for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Exhaust Table Summary")?;
        writeln!(f, "=====================")?;
        writeln!(f, "Rows: {}", self.rows)?;
        if let Some((first, last)) = self.time_range {
            writeln!(f, "Time range: {} - {}", first, last)?;
        }
        writeln!(
            f,
            "Exhaust sensors: {} ({} included)",
            self.sensors.len(),
            self.included_count()
        )?;
        writeln!(f)?;
        for sensor in &self.sensors {
            write!(
                f,
                "  {:<10} mean {:>9.2}  min {:>9.2}  max {:>9.2}",
                sensor.name, sensor.mean, sensor.min, sensor.max
            )?;
            if sensor.included {
                writeln!(f)?;
            } else {
                writeln!(f, " (excluded)")?;
            }
        }
        Ok(())
    }
}
