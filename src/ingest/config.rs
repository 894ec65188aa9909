/// Column naming conventions used while normalizing an upload
#[derive(Debug, Clone, PartialEq)]
pub struct IngestConfig {
    /// Prefix identifying exhaust thermocouple columns, also used to name the catalog
    pub sensor_prefix: String,
    /// Vendor tag separator; a column name is cut to the text after its last occurrence
    pub column_separator: String,
    /// Text in the first timestamp cell that marks a two-row units header
    pub units_marker: String,
    /// Engine speed column (percent)
    pub engine_speed_column: String,
    /// Power output column
    pub power_column: String,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            sensor_prefix: "ttxd_".to_string(),
            column_separator: ".".to_string(),
            units_marker: "units".to_string(),
            engine_speed_column: "tnh".to_string(),
            power_column: "dwatt".to_string(),
        }
    }
}
