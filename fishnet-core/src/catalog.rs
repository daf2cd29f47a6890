//! GeoJSON catalog ingestion.
//!
//! A [`Catalog`] is built once from a GeoJSON feature collection and is
//! immutable afterwards; reloading means building a fresh catalog. Only
//! structurally malformed payloads fail the load. Individual features that
//! are not point geometries, carry invalid coordinates, or score below the
//! inclusion floor are skipped, never stored.

use std::{
    fs,
    path::{Path, PathBuf},
};

use geo::Coord;
use log::{info, warn};
use serde_json::Value;
use thiserror::Error;

use crate::point::{AmenityFlags, GridId, ScoredPoint};

/// Catalog-construction score floor.
///
/// Features scoring below this are not worth displaying at all and never
/// enter the catalog. Deliberately distinct from the stricter per-query
/// threshold [`MIN_HIGH_SCORE`](crate::rank::MIN_HIGH_SCORE).
pub const SCORE_INCLUSION_FLOOR: f64 = 3.0;

/// Errors returned when loading a catalog.
///
/// Only top-level structural failures are fatal; malformed individual
/// features are skipped with a warning.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read from disk.
    #[error("failed to read catalog from {path}: {source}")]
    Read {
        /// Location of the GeoJSON file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The catalog file was not valid JSON.
    #[error("failed to parse catalog JSON from {path}: {source}")]
    Parse {
        /// Location of the GeoJSON file.
        path: PathBuf,
        /// Parser error returned by `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The payload is not a GeoJSON `FeatureCollection`.
    #[error("payload is not a GeoJSON FeatureCollection")]
    NotAFeatureCollection,
    /// The feature collection lacks a `features` array.
    #[error("feature collection has no features array")]
    MissingFeatures,
}

/// Immutable, ordered collection of valid scored grid-cell points.
///
/// Insertion order equals source feature order among valid points, which the
/// ranking engine relies on for deterministic tie-breaking. Duplicate
/// identifiers are permitted and never deduplicated.
///
/// # Examples
/// ```
/// use fishnet_core::Catalog;
/// use serde_json::json;
///
/// # fn main() -> Result<(), fishnet_core::CatalogError> {
/// let payload = json!({
///     "type": "FeatureCollection",
///     "features": [{
///         "geometry": { "type": "Point", "coordinates": [-74.0, 40.0] },
///         "properties": { "score": 4.5, "has_usa": 1 }
///     }]
/// });
/// let catalog = Catalog::from_geojson(&payload)?;
/// assert_eq!(catalog.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    points: Vec<ScoredPoint>,
}

impl Catalog {
    /// Read and parse a GeoJSON file into a catalog.
    ///
    /// # Errors
    /// Returns [`CatalogError`] when the file cannot be read, is not valid
    /// JSON, or is not a feature collection.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let payload: Value =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_geojson(&payload)
    }

    /// Build a catalog from a parsed GeoJSON feature collection using the
    /// default [`SCORE_INCLUSION_FLOOR`].
    ///
    /// # Errors
    /// Returns [`CatalogError`] when the payload is not a feature collection.
    pub fn from_geojson(payload: &Value) -> Result<Self, CatalogError> {
        Self::with_inclusion_floor(payload, SCORE_INCLUSION_FLOOR)
    }

    /// Build a catalog with an explicit inclusion floor.
    ///
    /// An empty catalog is a valid outcome, not an error. The input is never
    /// mutated.
    ///
    /// # Errors
    /// Returns [`CatalogError`] when the payload is not a feature collection.
    pub fn with_inclusion_floor(payload: &Value, floor: f64) -> Result<Self, CatalogError> {
        if payload.get("type").and_then(Value::as_str) != Some("FeatureCollection") {
            return Err(CatalogError::NotAFeatureCollection);
        }
        let features = payload
            .get("features")
            .and_then(Value::as_array)
            .ok_or(CatalogError::MissingFeatures)?;

        let points: Vec<ScoredPoint> = features
            .iter()
            .enumerate()
            .filter_map(|(idx, feature)| parse_feature(idx, feature, floor))
            .collect();
        info!(
            "catalog loaded: kept {} of {} features",
            points.len(),
            features.len()
        );
        Ok(Self { points })
    }

    /// Number of valid points in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the catalog holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in insertion order.
    #[must_use]
    pub fn points(&self) -> &[ScoredPoint] {
        &self.points
    }

    /// Iterate over points in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ScoredPoint> {
        self.points.iter()
    }
}

/// Parse one feature, returning `None` when it must be skipped.
///
/// `idx` is the feature's 0-based position among *all* features, including
/// skipped ones, so positional identifiers keep their correspondence with
/// source order.
fn parse_feature(idx: usize, feature: &Value, floor: f64) -> Option<ScoredPoint> {
    let geometry = feature.get("geometry")?;
    if geometry.get("type").and_then(Value::as_str) != Some("Point") {
        return None;
    }
    let Some(location) = point_coordinate(geometry) else {
        warn!("feature {idx}: skipping point with missing or invalid coordinates");
        return None;
    };
    let properties = feature.get("properties");
    let score = numeric_score(properties.and_then(|p| p.get("score")))?;
    if score < floor {
        return None;
    }
    let id = grid_id(properties.and_then(|p| p.get("grid_id")), idx);
    let amenities = amenity_flags(properties);
    Some(ScoredPoint::new(id, location, score, amenities))
}

/// Extract a finite, in-range WGS84 coordinate from a point geometry.
fn point_coordinate(geometry: &Value) -> Option<Coord<f64>> {
    let coordinates = geometry.get("coordinates").and_then(Value::as_array)?;
    let lng = coordinates.first().and_then(Value::as_f64)?;
    let lat = coordinates.get(1).and_then(Value::as_f64)?;
    (lng.is_finite()
        && lat.is_finite()
        && (-180.0..=180.0).contains(&lng)
        && (-90.0..=90.0).contains(&lat))
    .then_some(Coord { x: lng, y: lat })
}

/// Parse a score value, accepting a JSON number or a numeric string.
///
/// The source data encodes scores inconsistently; string encodings mirror
/// what the survey exports produce. Non-finite values are rejected.
fn numeric_score(value: Option<&Value>) -> Option<f64> {
    let score = match value? {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse().ok()?,
        _ => return None,
    };
    score.is_finite().then_some(score)
}

/// Derive the cell identifier: `grid_id` when present and non-null, else the
/// 1-based position of the feature in the source collection.
fn grid_id(value: Option<&Value>, idx: usize) -> GridId {
    match value {
        Some(Value::Number(number)) => number
            .as_i64()
            .map_or_else(|| positional_id(idx), GridId::Cell),
        Some(Value::String(text)) => GridId::Label(text.clone()),
        _ => positional_id(idx),
    }
}

fn positional_id(idx: usize) -> GridId {
    GridId::Cell(i64::try_from(idx).unwrap_or(i64::MAX).saturating_add(1))
}

/// Recognised "present" encodings for amenity indicator fields: `1`, `"1"`,
/// and `true`. Every other value, including absence, reads as "absent".
fn flag_present(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Number(number)) => number.as_f64() == Some(1.0),
        Some(Value::String(text)) => text == "1",
        Some(Value::Bool(flag)) => *flag,
        _ => false,
    }
}

fn amenity_flags(properties: Option<&Value>) -> AmenityFlags {
    let flag = |field: &str| flag_present(properties.and_then(|p| p.get(field)));
    AmenityFlags {
        usa: flag("has_usa"),
        asian: flag("has_asian"),
        mvc: flag("has_mvc"),
        park: flag("has_park"),
        museum: flag("has_museum"),
    }
}
