use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};

use exhaust_spread::config::Config;
use exhaust_spread::session::Session;

mod inspect;
mod render;
mod summary;

/// spread-dash - Gas-turbine exhaust spread views from trend exports
#[derive(Parser)]
#[command(name = "spread-dash")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print per-sensor statistics of a trend export
    Inspect {
        /// Input CSV or XLSX file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Print the summary row (TNH, DWATT, TTXM, TTSXP) of one row as JSON
    Summary {
        /// Input CSV or XLSX file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Row index (clamped to the table)
        #[arg(short, long, default_value_t = 0)]
        row: usize,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Write the time chart, polar chart and summary of one row.
    ///
    /// Pass --plotly-js to embed a local plotly.js bundle for offline viewing.
    Render {
        /// Input CSV or XLSX file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Row index (clamped to the table)
        #[arg(short, long, default_value_t = 0)]
        row: usize,

        /// Only chart the first N sensors over time
        #[arg(short, long, value_name = "N")]
        sensors: Option<usize>,

        /// Lower bound of the polar radial axis
        #[arg(long, requires = "polar_max", allow_negative_numbers = true)]
        polar_min: Option<f64>,

        /// Upper bound of the polar radial axis
        #[arg(long, requires = "polar_min", allow_negative_numbers = true)]
        polar_max: Option<f64>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,

        /// Embed this plotly.js bundle so the pages render offline
        /// (without it, the pages load plotly.js from the CDN and need network access)
        #[arg(long, value_name = "FILE")]
        plotly_js: Option<PathBuf>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Inspect { file, config } => inspect::run(file, config),
        Commands::Summary { file, row, config } => summary::run(file, row, config),
        Commands::Render {
            file,
            row,
            sensors,
            polar_min,
            polar_max,
            output,
            plotly_js,
            config,
        } => render::run(render::RenderArgs {
            file,
            row,
            sensors,
            polar_window: polar_min.zip(polar_max),
            output,
            plotly_js,
            config,
        }),
    }
}

/// Build a session from the optional config file and upload `file` into it
fn load_session(file: &Path, config: Option<&Path>) -> Result<Session> {
    let config = match config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => Config::default(),
    };

    let bytes =
        std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());

    let mut session = Session::new(config.ingest_config(), config.view_config());
    session
        .upload(&bytes, &file_name)
        .with_context(|| format!("Failed to ingest {}", file.display()))?;
    info!("Loaded {}", file_name);

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_help_explains_offline_export() {
        let mut command = Cli::command();
        let render = command.find_subcommand_mut("render").unwrap();

        let long_about = render.get_long_about().unwrap().to_string();
        assert!(long_about.contains("--plotly-js"));
        assert!(long_about.contains("offline"));

        let plotly_js = render
            .get_arguments()
            .find(|arg| arg.get_id() == "plotly_js")
            .unwrap();
        let help = plotly_js.get_help().unwrap().to_string();
        assert!(help.contains("offline"));
        assert!(help.contains("CDN"));
    }

    #[test]
    fn test_polar_bounds_come_in_pairs() {
        assert!(Cli::try_parse_from(["spread-dash", "render", "t.csv", "--polar-min", "400"]).is_err());

        let cli = Cli::try_parse_from([
            "spread-dash", "render", "t.csv", "--polar-min", "-20", "--polar-max", "650",
        ])
        .unwrap();
        match cli.command {
            Commands::Render { polar_min, polar_max, .. } => {
                assert_eq!(polar_min.zip(polar_max), Some((-20.0, 650.0)));
            }
            _ => panic!("expected render"),
        }
    }
}
