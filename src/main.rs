//! # Stirling rig analyzer
//!
//! Reads a run logged on the Stirling engine rig, prints the ideal cycle and its
//! performance, and opens the P-V and T-s diagrams with the measured loop laid over
//! the ideal cycle.
//!
//! ```bash
//! # reference rig, comma separated log
//! stirling-analyzer data.csv
//!
//! # other rig description, report only
//! stirling-analyzer data.csv --rig rig.json --no-plot -v
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;
use stirling_cycle_analyzer::AnalysisBuilder;

/// Compare Stirling engine rig data with the ideal Stirling cycle
#[derive(Parser)]
#[command(name = "stirling-analyzer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Measurement file with `t`, `Pmeas` and `Vmeas` columns
    #[arg(value_name = "DATA")]
    data: PathBuf,

    /// Rig description (.json); fields left out keep the reference rig values
    #[arg(short, long, value_name = "RIG")]
    rig: Option<PathBuf>,

    /// Points per branch of the ideal cycle (overrides the rig file)
    #[arg(short = 'n', long)]
    points: Option<usize>,

    /// Field delimiter of the measurement file
    #[arg(short, long, default_value = ",")]
    delimiter: char,

    /// Print the report without opening plot windows
    #[arg(long)]
    no_plot: bool,

    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character: {:?}", delimiter);
    }
    Ok(delimiter as u8)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let delimiter = delimiter_byte(cli.delimiter)?;

    let mut builder = AnalysisBuilder::new();
    if let Some(rig) = &cli.rig {
        builder
            .rig_file(rig)
            .with_context(|| format!("Failed to load rig description {}", rig.display()))?;
    }
    if let Some(points) = cli.points {
        builder.resolution(points);
    }
    builder
        .data_file(&cli.data, delimiter)
        .with_context(|| format!("Failed to load measurements {}", cli.data.display()))?;

    let analysis = builder.build().context("Failed to derive the Stirling cycle")?;
    println!("{}", analysis);

    if cli.no_plot {
        info!("plotting disabled");
    } else {
        analysis.plot();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_for_a_bare_data_file() {
        let cli = Cli::try_parse_from(["stirling-analyzer", "data.csv"]).unwrap();
        assert_eq!(cli.data, PathBuf::from("data.csv"));
        assert!(cli.rig.is_none());
        assert!(cli.points.is_none());
        assert_eq!(cli.delimiter, ',');
        assert!(!cli.no_plot);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn every_option_is_parsed() {
        let cli = Cli::try_parse_from([
            "stirling-analyzer",
            "data.txt",
            "--rig",
            "rig.json",
            "-n",
            "250",
            "--delimiter",
            ";",
            "--no-plot",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.rig, Some(PathBuf::from("rig.json")));
        assert_eq!(cli.points, Some(250));
        assert_eq!(delimiter_byte(cli.delimiter).unwrap(), b';');
        assert!(cli.no_plot);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["stirling-analyzer"]).is_err());
        assert!(Cli::try_parse_from(["stirling-analyzer", "data.csv", "--points", "many"]).is_err());
        assert!(Cli::try_parse_from(["stirling-analyzer", "data.csv", "--delimiter", ";;"]).is_err());
        assert!(delimiter_byte('°').is_err());
    }
}
