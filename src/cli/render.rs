use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use exhaust_spread::figure::{PlotlyScript, StandaloneHtml};
use exhaust_spread::views::RadialRange;

pub struct RenderArgs {
    pub file: PathBuf,
    pub row: usize,
    pub sensors: Option<usize>,
    pub polar_window: Option<(f64, f64)>,
    pub output: PathBuf,
    pub plotly_js: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

/// Write timeseries.html, polar.html and summary.json for one row
pub fn run(args: RenderArgs) -> Result<()> {
    let mut session = super::load_session(&args.file, args.config.as_deref())?;
    let row = session.select_row(args.row);
    session.set_sensor_count(args.sensors);
    session.set_polar_window(args.polar_window.map(|(min, max)| RadialRange::new(min, max)));

    let script = match &args.plotly_js {
        Some(path) => PlotlyScript::from_file(path)
            .with_context(|| format!("Failed to read plotly.js bundle: {}", path.display()))?,
        None => PlotlyScript::default(),
    };

    std::fs::create_dir_all(&args.output).with_context(|| {
        format!("Failed to create output directory: {}", args.output.display())
    })?;

    let views = session.views();
    let figures = session.figures();
    let title = session.upload_title();

    let time_series_path = args.output.join("timeseries.html");
    StandaloneHtml::new(&format!("{} - time series", title))
        .with_script(script.clone())
        .write(&figures.time_series, &time_series_path)
        .context("Failed to write time chart")?;

    let polar_path = args.output.join("polar.html");
    StandaloneHtml::new(&format!("{} - {}", title, views.row_label))
        .with_script(script)
        .write(&figures.polar, &polar_path)
        .context("Failed to write polar chart")?;

    let summary_path = args.output.join("summary.json");
    let summary = serde_json::to_string_pretty(&views.summary)
        .context("Failed to serialize summary")?;
    std::fs::write(&summary_path, summary)
        .with_context(|| format!("Failed to write {}", summary_path.display()))?;

    info!("Rendered row {} ({})", row, views.row_label);
    println!("Wrote {}", time_series_path.display());
    println!("Wrote {}", polar_path.display());
    println!("Wrote {}", summary_path.display());

    Ok(())
}
