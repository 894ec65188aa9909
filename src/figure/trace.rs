use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A plotly.js trace, tagged by its `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    /// SVG scatter (used for the empty placeholder trace)
    Scatter(ScatterTrace),
    /// WebGL scatter, used for the time chart lines
    Scattergl(ScatterTrace),
    /// Polar scatter
    Scatterpolar(PolarTrace),
}

/// Cartesian scatter trace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterTrace {
    /// Legend name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// X values
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub x: Vec<NaiveDateTime>,
    /// Y values
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub y: Vec<f64>,
    /// Y axis reference (`y`, `y2`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<String>,
    /// Hover label content (`none`, `x+y`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoverinfo: Option<String>,
}

/// Polar scatter trace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolarTrace {
    /// Trace name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Radial values
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub r: Vec<f64>,
    /// Angular category labels
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub theta: Vec<String>,
    /// Drawing mode (`lines`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}
