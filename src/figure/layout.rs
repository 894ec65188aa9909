use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::views::{HighlightShape, RadialRange, ENGINE_SPEED_SERIES};

/// plotly.js layout, restricted to the attributes the dashboard sets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Chart title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Show the legend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    /// Legend position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    /// Hover search distance in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoverdistance: Option<u32>,
    /// Let plotly size the chart to its container
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autosize: Option<bool>,
    /// Primary y axis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<AxisLayout>,
    /// Secondary y axis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis2: Option<AxisLayout>,
    /// Polar subplot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polar: Option<PolarLayout>,
    /// Plot margins
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    /// Overlay shapes
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<Shape>,
}

impl Layout {
    /// Time chart layout: temperatures on the left, engine speed on the right
    pub fn time_series() -> Self {
        Self {
            showlegend: Some(true),
            legend: Some(Legend { x: 1.08, y: 0.0 }),
            hoverdistance: Some(2),
            yaxis: Some(AxisLayout {
                title: Some("TTXM".to_string()),
                ..AxisLayout::default()
            }),
            yaxis2: Some(AxisLayout {
                title: Some(ENGINE_SPEED_SERIES.to_string()),
                overlaying: Some("y".to_string()),
                side: Some("right".to_string()),
                showgrid: Some(false),
            }),
            ..Self::default()
        }
    }

    /// Polar chart layout; sensor 1 at the top
    pub fn polar(range: Option<RadialRange>) -> Self {
        Self {
            showlegend: Some(false),
            autosize: Some(false),
            polar: Some(PolarLayout {
                angularaxis: Some(AngularAxis { rotation: 90.0 }),
                radialaxis: range.map(|r| RadialAxis { range: [r.min, r.max] }),
            }),
            margin: Some(Margin { b: Some(30) }),
            ..Self::default()
        }
    }
}

/// Legend anchor in paper coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
}

/// Cartesian axis settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisLayout {
    /// Axis title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Axis this one is drawn over
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlaying: Option<String>,
    /// `left` or `right`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    /// Draw grid lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showgrid: Option<bool>,
}

/// Polar subplot settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolarLayout {
    /// Angular axis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angularaxis: Option<AngularAxis>,
    /// Radial axis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radialaxis: Option<RadialAxis>,
}

/// Angular axis settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngularAxis {
    /// Start angle in degrees
    pub rotation: f64,
}

/// Radial axis settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialAxis {
    /// Displayed `[min, max]`
    pub range: [f64; 2],
}

/// Plot margins in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    /// Bottom margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b: Option<u32>,
}

/// Layout shape (only pixel-sized rectangles are produced)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Shape type (`rect`)
    #[serde(rename = "type")]
    pub kind: String,
    /// X data coordinate the pixel offsets are measured from
    pub xanchor: NaiveDateTime,
    /// `pixel` sizing along x
    pub xsizemode: String,
    /// Left edge, pixels from the anchor
    pub x0: f64,
    /// Right edge, pixels from the anchor
    pub x1: f64,
    /// `paper` so the marker spans the full plot height
    pub yref: String,
    /// Bottom edge
    pub y0: f64,
    /// Top edge
    pub y1: f64,
    /// Fill opacity
    pub opacity: f64,
    /// Fill color
    pub fillcolor: String,
}

impl From<&HighlightShape> for Shape {
    fn from(highlight: &HighlightShape) -> Self {
        Self {
            kind: "rect".to_string(),
            xanchor: highlight.anchor,
            xsizemode: "pixel".to_string(),
            x0: -highlight.half_width_px,
            x1: highlight.half_width_px,
            yref: "paper".to_string(),
            y0: 0.0,
            y1: 1.0,
            opacity: highlight.opacity,
            fillcolor: highlight.fill_color.clone(),
        }
    }
}
