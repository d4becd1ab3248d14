//! Print the metrics table of a font description as JSON.
//!
//! Glyphs whose bounds could not be computed are reported as warnings (set `RUST_LOG=warn`)
//! and listed without bounds.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use sfnt_metrics::error::MetricsError;
use sfnt_metrics::metrics::Metrics;
use sfnt_metrics::tables::FontDescription;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON font description to read
    font: PathBuf,

    /// Print the table on a single line
    #[arg(long)]
    compact: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}: {err}", args.font.display());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, MetricsError> {
    let data = std::fs::read(&args.font)?;
    let font = FontDescription::from_json(&data)?;
    let (metrics, _errors) = Metrics::from_font(&font)?;
    let json = if args.compact {
        serde_json::to_string(&metrics)?
    } else {
        serde_json::to_string_pretty(&metrics)?
    };
    Ok(json)
}
