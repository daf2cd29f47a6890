//! Top-k nearest ranking of qualifying grid cells.
//!
//! [`rank`] is a pure function of its inputs and the immutable catalog:
//! identical calls yield identical output, and nothing is retained between
//! calls. Candidate sets are small enough that a linear scan beats any
//! spatial index.

use geo::Coord;

use crate::catalog::Catalog;
use crate::distance::haversine_km;
use crate::point::ScoredPoint;

/// Default per-query score threshold for a cell to count as high-scoring.
///
/// Stricter than the catalog's
/// [`SCORE_INCLUSION_FLOOR`](crate::catalog::SCORE_INCLUSION_FLOOR): the
/// catalog keeps everything worth displaying, a query surfaces only the best
/// of it.
pub const MIN_HIGH_SCORE: f64 = 4.0;

/// Default number of ranked results returned per query.
pub const DEFAULT_RESULT_COUNT: usize = 3;

/// One entry of a ranking: a catalog point with its query distance and
/// 1-based position.
///
/// Owned by the caller; the engine keeps no reference to it and the distance
/// is computed fresh on every query.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult {
    /// The qualifying catalog point.
    pub point: ScoredPoint,
    /// Great-circle distance from the query location, in kilometres.
    pub distance_km: f64,
    /// 1-based position in the ranking.
    pub rank: usize,
}

/// Rank the `k` nearest catalog points scoring at least `min_score`.
///
/// Results are sorted ascending by distance; equal distances preserve
/// catalog insertion order, so output is deterministic for identical inputs.
/// An empty result is a legitimate outcome — an empty or not-yet-loaded
/// catalog, a threshold above every score, or `k == 0` all yield an empty
/// vector rather than an error.
///
/// # Examples
/// ```
/// use fishnet_core::{Catalog, rank};
/// use geo::Coord;
/// use serde_json::json;
///
/// # fn main() -> Result<(), fishnet_core::CatalogError> {
/// let payload = json!({
///     "type": "FeatureCollection",
///     "features": [
///         {
///             "geometry": { "type": "Point", "coordinates": [-74.0, 40.0] },
///             "properties": { "grid_id": 1, "score": 5 }
///         },
///         {
///             "geometry": { "type": "Point", "coordinates": [-74.0, 40.1] },
///             "properties": { "grid_id": 2, "score": 4 }
///         }
///     ]
/// });
/// let catalog = Catalog::from_geojson(&payload)?;
/// let results = rank(&catalog, Coord { x: -74.0, y: 40.0 }, 4.0, 3);
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].rank, 1);
/// assert!(results[0].distance_km < results[1].distance_km);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn rank(catalog: &Catalog, query: Coord<f64>, min_score: f64, k: usize) -> Vec<RankedResult> {
    if k == 0 {
        return Vec::new();
    }
    let mut candidates: Vec<(&ScoredPoint, f64)> = catalog
        .iter()
        .filter(|point| point.score >= min_score)
        .map(|point| (point, haversine_km(query, point.location)))
        .collect();
    // Stable sort: equal distances keep catalog insertion order.
    candidates.sort_by(|a, b| a.1.total_cmp(&b.1));
    candidates
        .into_iter()
        .take(k)
        .enumerate()
        .map(|(position, (point, distance_km))| RankedResult {
            point: point.clone(),
            distance_km,
            rank: position + 1,
        })
        .collect()
}
