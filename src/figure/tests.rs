use super::*;
use crate::table::{Reading, SensorCatalog, Table};
use crate::views::{RadialRange, Selection, ViewConfig};
use chrono::NaiveDate;
use serde_json::{json, Value};

fn sample_table() -> Table {
    let ts = NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    Table::new(
        SensorCatalog::sequential("ttxd_", 2),
        vec![Reading::new(ts, vec![500.0, 700.0], 95.0, 10.0)],
    )
    .unwrap()
}

fn sample_views() -> DashboardViews {
    DashboardViews::compute(
        Some(&sample_table()),
        &Selection::default(),
        &ViewConfig::default(),
    )
}

#[test]
fn test_time_series_figure_json() {
    let views = sample_views();
    let figure = Figure::time_series(&views.series, views.highlight.as_ref());
    let value: Value = serde_json::from_str(&figure.to_json().unwrap()).unwrap();

    assert_eq!(value["data"].as_array().unwrap().len(), 3);
    assert_eq!(value["data"][0]["type"], "scattergl");
    assert_eq!(value["data"][0]["name"], "ttxd_1");
    assert_eq!(value["data"][0]["yaxis"], "y");
    assert_eq!(value["data"][0]["hoverinfo"], "none");
    assert_eq!(value["data"][0]["x"][0], "2024-06-01T12:00:00");
    assert_eq!(value["data"][2]["name"], "TNH");
    assert_eq!(value["data"][2]["yaxis"], "y2");
    assert_eq!(value["data"][2]["hoverinfo"], "x+y");

    let layout = &value["layout"];
    assert_eq!(layout["legend"], json!({"x": 1.08, "y": 0.0}));
    assert_eq!(layout["hoverdistance"], 2);
    assert_eq!(layout["yaxis"]["title"], "TTXM");
    assert_eq!(
        layout["yaxis2"],
        json!({"title": "TNH", "overlaying": "y", "side": "right", "showgrid": false})
    );
    assert_eq!(
        layout["shapes"][0],
        json!({
            "type": "rect",
            "xanchor": "2024-06-01T12:00:00",
            "xsizemode": "pixel",
            "x0": -5.0,
            "x1": 5.0,
            "yref": "paper",
            "y0": 0.0,
            "y1": 1.0,
            "opacity": 0.4,
            "fillcolor": "green"
        })
    );
}

#[test]
fn test_placeholder_figures() {
    let figures = DashboardFigures::from_views(&DashboardViews::placeholder());

    let ts: Value = serde_json::from_str(&figures.time_series.to_json().unwrap()).unwrap();
    assert_eq!(ts["data"], json!([{"type": "scatter"}]));
    assert!(ts["layout"].get("shapes").is_none());

    let polar: Value = serde_json::from_str(&figures.polar.to_json().unwrap()).unwrap();
    assert_eq!(polar["data"], json!([{"type": "scatterpolar"}]));
    assert!(polar["layout"]["polar"].get("radialaxis").is_none());
}

#[test]
fn test_polar_figure_json() {
    let table = sample_table();
    let selection = Selection {
        polar_window: Some(RadialRange::new(450.0, 800.0)),
        ..Selection::default()
    };
    let views = DashboardViews::compute(Some(&table), &selection, &ViewConfig::default());
    let figure = DashboardFigures::from_views(&views).polar;
    let value: Value = serde_json::from_str(&figure.to_json().unwrap()).unwrap();

    assert_eq!(
        value["data"][0],
        json!({
            "type": "scatterpolar",
            "name": "2024-06-01 12:00:00",
            "r": [500.0, 700.0, 500.0],
            "theta": ["ttxd_1", "ttxd_2", "ttxd_1"],
            "mode": "lines"
        })
    );
    assert_eq!(value["layout"]["showlegend"], false);
    assert_eq!(value["layout"]["polar"]["angularaxis"]["rotation"], 90.0);
    assert_eq!(value["layout"]["polar"]["radialaxis"]["range"], json!([450.0, 710.0]));
    assert_eq!(value["layout"]["margin"], json!({"b": 30}));
}

#[test]
fn test_figure_json_roundtrip() {
    let views = sample_views();
    let figure = Figure::time_series(&views.series, views.highlight.as_ref());
    let restored = Figure::from_json(&figure.to_json_pretty().unwrap()).unwrap();
    assert_eq!(restored, figure);
}

#[test]
fn test_standalone_html_embeds_figure() {
    let figure = Figure::polar(sample_views().polar.as_ref());
    let html = StandaloneHtml::new("Unit <7> spread")
        .with_div_id("radar")
        .render(&figure)
        .unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Unit &lt;7&gt; spread</title>"));
    assert!(html.contains(PLOTLY_CDN_URL));
    assert!(html.contains(r#"<div id="radar""#));
    assert!(html.contains(r#"id="radar-figure""#));
    assert!(html.contains("\"theta\":[\"ttxd_1\",\"ttxd_2\",\"ttxd_1\"]"));
}

#[test]
fn test_standalone_html_inline_script_and_escaping() {
    let mut figure = Figure::polar(None);
    figure.layout.title = Some("</script><script>alert(1)</script>".to_string());

    let html = StandaloneHtml::new("inline")
        .with_script(PlotlyScript::Inline("window.Plotly = {};".to_string()))
        .render(&figure)
        .unwrap();

    assert!(html.contains("<script>window.Plotly = {};</script>"));
    assert!(!html.contains("cdn.plot.ly"));
    assert!(!html.contains("</script><script>alert"));
    assert!(html.contains("\\u003c/script>"));
}

#[test]
fn test_write_html_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("polar.html");

    StandaloneHtml::new("polar")
        .write(&Figure::polar(None), &path)
        .unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("Plotly.newPlot"));
}

#[test]
fn test_plotly_script_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plotly.min.js");
    std::fs::write(&path, "var Plotly = {};").unwrap();

    let script = PlotlyScript::from_file(&path).unwrap();
    assert_eq!(script, PlotlyScript::Inline("var Plotly = {};".to_string()));
    assert!(PlotlyScript::from_file(dir.path().join("missing.js")).is_err());
}
