//! Great-circle distance on a spherical Earth.
//!
//! The haversine radius is fixed at 6371 km to match the survey pipeline
//! that produced the grid scores; `geo`'s built-in haversine uses the GRS80
//! mean radius and would shift distances by a fraction of a percent.

use geo::Coord;

/// Mean Earth radius in kilometres used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two WGS84 coordinates.
///
/// Arguments use `x = longitude` and `y = latitude` in decimal degrees.
/// The function is symmetric and returns `0` (within `1e-9` km) for
/// identical coordinates. Inputs are not validated here; the catalog
/// guarantees stored coordinates and callers are responsible for query
/// locations.
///
/// # Examples
/// ```
/// use fishnet_core::haversine_km;
/// use geo::Coord;
///
/// let a = Coord { x: -74.0, y: 40.0 };
/// let b = Coord { x: -74.0, y: 40.1 };
/// assert!((haversine_km(a, b) - 11.12).abs() < 0.05);
/// ```
#[must_use]
pub fn haversine_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let d_lat = (b.y - a.y).to_radians();
    let d_lng = (b.x - a.x).to_radians();
    let half_chord = (d_lat / 2.0).sin().powi(2)
        + a.y.to_radians().cos() * b.y.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let central_angle = 2.0 * half_chord.sqrt().atan2((1.0 - half_chord).sqrt());
    EARTH_RADIUS_KM * central_angle
}
