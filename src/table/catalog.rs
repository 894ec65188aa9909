use serde::{Deserialize, Serialize};

/// Ordered list of exhaust sensor names detected in a table.
///
/// Names are always the sequential renumbering `<prefix>1 .. <prefix>N`,
/// regardless of the suffixes the source columns carried.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SensorCatalog {
    names: Vec<String>,
}

impl SensorCatalog {
    /// Build `<prefix>1 .. <prefix>count`
    pub fn sequential(prefix: &str, count: usize) -> Self {
        Self {
            names: (1..=count).map(|i| format!("{prefix}{i}")).collect(),
        }
    }

    /// Sensor names in order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Name of the sensor at `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Number of sensors
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no sensor was detected
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over sensor names
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
