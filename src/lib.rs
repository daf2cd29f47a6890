//! Facade crate for the Fishnet grid-ranking engine.
//!
//! This crate re-exports the core catalog, distance, ranking, and display
//! types so downstream callers depend on a single package.
//!
//! # Examples
//!
//! ```
//! use fishnet_engine::{Catalog, MIN_HIGH_SCORE, rank};
//! use geo::Coord;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), fishnet_engine::CatalogError> {
//! let payload = json!({
//!     "type": "FeatureCollection",
//!     "features": [{
//!         "geometry": { "type": "Point", "coordinates": [-74.0, 40.0] },
//!         "properties": { "grid_id": 7, "score": 4.5, "has_park": 1 }
//!     }]
//! });
//! let catalog = Catalog::from_geojson(&payload)?;
//! let query = Coord { x: -74.0, y: 40.0 };
//! let results = rank(&catalog, query, MIN_HIGH_SCORE, 3);
//! assert_eq!(results.len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use fishnet_core::{
    AmenityFlags, Catalog, CatalogError, DEFAULT_RESULT_COUNT, EARTH_RADIUS_KM, GridId,
    MILES_PER_KM, MIN_HIGH_SCORE, RankedResult, ResultSummary, SCORE_INCLUSION_FLOOR, ScoredPoint,
    haversine_km, rank,
};
