//! # spread-dash
//!
//! Command-line front end for gas-turbine exhaust spread views.
//!
//! ## Usage
//!
//! ```bash
//! # Per-sensor statistics of a trend export
//! spread-dash inspect trend.csv
//!
//! # Summary row of row 120
//! spread-dash summary trend.xlsx --row 120
//!
//! # Time and polar charts as standalone HTML
//! spread-dash render trend.csv --row 120 --polar-min 400 --polar-max 650 -o charts/
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
