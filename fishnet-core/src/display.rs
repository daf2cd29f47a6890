//! Human-oriented display fields derived from ranked results.
//!
//! The adapter is stateless and performs no I/O: every field of a
//! [`ResultSummary`] is a pure function of one [`RankedResult`]. Renderers
//! consume these summaries without touching the engine.

use serde::{Deserialize, Serialize};

use crate::point::GridId;
use crate::rank::RankedResult;

/// Miles per kilometre.
pub const MILES_PER_KM: f64 = 0.621_371;

/// Assumed average driving speed, in miles per hour.
///
/// A documented simplification for the drive-time estimate, not a routing
/// result.
pub const ASSUMED_DRIVE_SPEED_MPH: f64 = 50.0;

/// Renderer-facing summary of one ranked grid cell.
///
/// # Examples
/// ```
/// use fishnet_core::{GridId, RankedResult, ResultSummary, ScoredPoint};
/// use geo::Coord;
///
/// let result = RankedResult {
///     point: ScoredPoint::without_amenities(GridId::Cell(1), Coord { x: -74.0, y: 40.0 }, 4.5),
///     distance_km: 10.0,
///     rank: 1,
/// };
/// let summary = ResultSummary::from_result(&result);
/// assert_eq!(summary.distance_miles, 6.2);
/// assert_eq!(summary.drive_minutes, 7);
/// assert_eq!(summary.score, "4.50");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSummary {
    /// 1-based position in the ranking.
    pub rank: usize,
    /// Grid-cell identifier.
    pub id: GridId,
    /// Distance in miles, rounded to one decimal for display.
    pub distance_miles: f64,
    /// Estimated drive time in whole minutes at the assumed average speed.
    pub drive_minutes: u32,
    /// Score formatted to two decimal places.
    pub score: String,
    /// Number of amenity categories observed near the cell.
    pub amenity_count: u8,
}

impl ResultSummary {
    /// Derive the display fields for one ranked result.
    ///
    /// The drive estimate is computed from the unrounded mileage; only the
    /// stored `distance_miles` is rounded.
    #[must_use]
    pub fn from_result(result: &RankedResult) -> Self {
        let miles = result.distance_km * MILES_PER_KM;
        Self {
            rank: result.rank,
            id: result.point.id.clone(),
            distance_miles: (miles * 10.0).round() / 10.0,
            drive_minutes: drive_minutes(miles),
            score: format!("{:.2}", result.point.score),
            amenity_count: result.point.amenity_count,
        }
    }
}

/// Whole-minute drive estimate for a distance in miles at
/// [`ASSUMED_DRIVE_SPEED_MPH`].
#[must_use]
pub fn drive_minutes(miles: f64) -> u32 {
    let minutes = (miles / ASSUMED_DRIVE_SPEED_MPH * 60.0).round();
    minutes.max(0.0) as u32
}
