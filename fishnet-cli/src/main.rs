//! Entry point for the fishnet command-line interface.
//!
//! The CLI is the rendering collaborator of the core engine: it owns the
//! catalog, runs one ranking query, and prints the derived display fields.
#![forbid(unsafe_code)]

use std::path::PathBuf;

use clap::Parser;
use eyre::WrapErr;
use fishnet_core::{
    Catalog, DEFAULT_RESULT_COUNT, MIN_HIGH_SCORE, ResultSummary, rank,
};
use geo::Coord;
use log::warn;
use tracing_subscriber::EnvFilter;

/// Rank the nearest high-scoring grid cells around a location.
#[derive(Debug, Parser)]
#[command(name = "fishnet", version, about)]
struct Args {
    /// Path to the GeoJSON feature collection of scored grid centres.
    #[arg(long)]
    data: PathBuf,
    /// Query latitude in decimal degrees.
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    /// Query longitude in decimal degrees.
    #[arg(long, allow_negative_numbers = true)]
    lng: f64,
    /// Minimum score a grid cell needs to qualify.
    #[arg(long, default_value_t = MIN_HIGH_SCORE)]
    min_score: f64,
    /// Maximum number of results to print.
    #[arg(long, default_value_t = DEFAULT_RESULT_COUNT)]
    count: usize,
}

fn main() {
    init_logging();
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("fishnet: {err:#}");
        std::process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn run(args: &Args) -> eyre::Result<()> {
    let catalog = Catalog::load(&args.data)
        .wrap_err_with(|| format!("failed to load catalog from {}", args.data.display()))?;
    let query = Coord {
        x: args.lng,
        y: args.lat,
    };

    let results = rank(&catalog, query, args.min_score, args.count);
    if results.is_empty() {
        warn!(
            "no grid cells with score >= {} near ({}, {})",
            args.min_score, args.lat, args.lng
        );
        println!("No qualifying grid cells.");
        return Ok(());
    }

    for summary in results.iter().map(ResultSummary::from_result) {
        println!("{}", format_summary(&summary));
    }
    Ok(())
}

/// One panel line per ranked cell: rank, id, miles, score, drive estimate,
/// nearby amenity count.
fn format_summary(summary: &ResultSummary) -> String {
    format!(
        "#{rank} grid {id}: {miles:.1} mi, score {score}, ~{minutes} min drive, {amenities} nearby POIs",
        rank = summary.rank,
        id = summary.id,
        miles = summary.distance_miles,
        score = summary.score,
        minutes = summary.drive_minutes,
        amenities = summary.amenity_count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use fishnet_core::{GridId, RankedResult, ScoredPoint};
    use rstest::rstest;

    #[rstest]
    fn formats_a_panel_line() {
        let result = RankedResult {
            point: ScoredPoint::without_amenities(
                GridId::Cell(101),
                Coord { x: -74.6, y: 40.2 },
                4.75,
            ),
            distance_km: 10.0,
            rank: 1,
        };
        let line = format_summary(&ResultSummary::from_result(&result));
        assert_eq!(line, "#1 grid 101: 6.2 mi, score 4.75, ~7 min drive, 0 nearby POIs");
    }

    #[rstest]
    fn defaults_match_engine_constants() {
        let args = Args::parse_from(["fishnet", "--data", "grid.geojson", "--lat", "40.2", "--lng", "-74.6"]);
        assert_eq!(args.min_score, MIN_HIGH_SCORE);
        assert_eq!(args.count, DEFAULT_RESULT_COUNT);
    }

    #[rstest]
    fn accepts_negative_coordinates() {
        let args =
            Args::parse_from(["fishnet", "--data", "g.json", "--lat", "-33.9", "--lng", "151.2"]);
        assert_eq!(args.lat, -33.9);
        assert_eq!(args.lng, 151.2);
    }
}
