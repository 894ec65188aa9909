//! # Figure Definitions
//!
//! plotly.js-compatible figure definitions for the two dashboard charts and
//! a standalone HTML export. Figures are plain serde structs: any host that
//! speaks plotly JSON (a web front end, a notebook, the exported page) can
//! render them.
//!
//! ```rust
//! use exhaust_spread::figure::{Figure, StandaloneHtml};
//!
//! let figure = Figure::polar(None);
//! let html = StandaloneHtml::new("Exhaust spread").render(&figure)?;
//! assert!(html.contains("scatterpolar"));
//! # Ok::<(), exhaust_spread::figure::FigureError>(())
//! ```

mod error;
mod html;
mod layout;
mod trace;

#[cfg(test)]
mod tests;

pub use error::FigureError;
pub use html::{PlotlyScript, StandaloneHtml, PLOTLY_CDN_URL};
pub use layout::{AngularAxis, AxisLayout, Layout, Legend, Margin, PolarLayout, RadialAxis, Shape};
pub use trace::{PolarTrace, ScatterTrace, Trace};

use serde::{Deserialize, Serialize};

use crate::views::{Axis, DashboardViews, HighlightShape, PolarSnapshot, Series};

/// A complete plotly.js figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Traces
    pub data: Vec<Trace>,
    /// Layout
    pub layout: Layout,
}

impl Figure {
    /// Time chart with an optional row highlight.
    ///
    /// No series gives a single empty trace so the axes still draw.
    pub fn time_series(series: &[Series], highlight: Option<&HighlightShape>) -> Self {
        let data = if series.is_empty() {
            vec![Trace::Scatter(ScatterTrace::default())]
        } else {
            series
                .iter()
                .map(|s| {
                    Trace::Scattergl(ScatterTrace {
                        name: Some(s.name.clone()),
                        x: s.timestamps.clone(),
                        y: s.values.clone(),
                        yaxis: Some(s.axis.as_str().to_string()),
                        hoverinfo: Some(
                            match s.axis {
                                Axis::Primary => "none",
                                Axis::Secondary => "x+y",
                            }
                            .to_string(),
                        ),
                    })
                })
                .collect()
        };

        let mut layout = Layout::time_series();
        layout.shapes = highlight.map(Shape::from).into_iter().collect();

        Self { data, layout }
    }

    /// Polar chart of one snapshot; `None` gives an empty polar trace
    pub fn polar(snapshot: Option<&PolarSnapshot>) -> Self {
        let trace = match snapshot {
            Some(snapshot) => PolarTrace {
                name: Some(snapshot.name.clone()),
                r: snapshot.r.clone(),
                theta: snapshot.theta.clone(),
                mode: Some("lines".to_string()),
            },
            None => PolarTrace::default(),
        };

        Self {
            data: vec![Trace::Scatterpolar(trace)],
            layout: Layout::polar(snapshot.and_then(|s| s.range)),
        }
    }

    /// Serialize to plotly JSON
    pub fn to_json(&self) -> Result<String, FigureError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented plotly JSON
    pub fn to_json_pretty(&self) -> Result<String, FigureError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse plotly JSON produced by [`Figure::to_json`]
    pub fn from_json(json: &str) -> Result<Self, FigureError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Both dashboard charts for one set of views
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardFigures {
    /// Time chart with the row highlight
    pub time_series: Figure,
    /// Polar snapshot
    pub polar: Figure,
}

impl DashboardFigures {
    /// Build both figures from computed views
    pub fn from_views(views: &DashboardViews) -> Self {
        Self {
            time_series: Figure::time_series(&views.series, views.highlight.as_ref()),
            polar: Figure::polar(views.polar.as_ref()),
        }
    }
}
