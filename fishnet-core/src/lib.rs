//! Geospatial ranking engine for scored survey grid cells.
//!
//! The crate ingests a GeoJSON feature collection of scored grid-cell centre
//! points into an immutable [`Catalog`], computes great-circle distances from
//! an arbitrary query location, and produces the top-k nearest qualifying
//! cells as plain data. Formatting for human consumption lives in a separate
//! display adapter so the engine can be tested without any rendering surface.
//!
//! Coordinates are WGS84 throughout, expressed as [`geo::Coord`] with
//! `x = longitude` and `y = latitude` in decimal degrees.

#![forbid(unsafe_code)]

pub mod catalog;
pub mod display;
pub mod distance;
pub mod point;
pub mod rank;

pub use catalog::{Catalog, CatalogError, SCORE_INCLUSION_FLOOR};
pub use display::{ASSUMED_DRIVE_SPEED_MPH, MILES_PER_KM, ResultSummary};
pub use distance::{EARTH_RADIUS_KM, haversine_km};
pub use point::{AmenityFlags, GridId, ScoredPoint};
pub use rank::{DEFAULT_RESULT_COUNT, MIN_HIGH_SCORE, RankedResult, rank};
