//! Scored grid-cell centre points.
//!
//! Coordinates are WGS84 with `x = longitude` and `y = latitude`.

use std::fmt;

use geo::Coord;
use serde::{Deserialize, Serialize};

/// Stable identifier for a surveyed grid cell.
///
/// Source data may carry `grid_id` as a number or a string; both are kept
/// verbatim. Cells without an identifier receive a positional [`GridId::Cell`]
/// at ingestion. Identifiers are not required to be unique within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GridId {
    /// Numeric identifier, either from the source or assigned positionally.
    Cell(i64),
    /// Free-form string identifier carried through from the source.
    Label(String),
}

impl fmt::Display for GridId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cell(id) => write!(f, "{id}"),
            Self::Label(id) => f.write_str(id),
        }
    }
}

impl From<i64> for GridId {
    fn from(id: i64) -> Self {
        Self::Cell(id)
    }
}

impl From<&str> for GridId {
    fn from(id: &str) -> Self {
        Self::Label(id.to_owned())
    }
}

/// Named amenity indicators surveyed for a grid cell.
///
/// Each flag records whether a point-of-interest category was observed near
/// the cell. The catalog derives these from boolean-ish source fields; the
/// recognised "present" encodings are exactly `1`, `"1"`, and `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmenityFlags {
    /// A USA-cuisine restaurant is present.
    pub usa: bool,
    /// An Asian-cuisine restaurant is present.
    pub asian: bool,
    /// A motor-vehicle commission office is present.
    pub mvc: bool,
    /// A park is present.
    pub park: bool,
    /// A museum is present.
    pub museum: bool,
}

impl AmenityFlags {
    /// Number of set flags.
    ///
    /// # Examples
    /// ```
    /// use fishnet_core::AmenityFlags;
    ///
    /// let flags = AmenityFlags { park: true, museum: true, ..AmenityFlags::default() };
    /// assert_eq!(flags.count(), 2);
    /// ```
    #[must_use]
    pub fn count(self) -> u8 {
        [self.usa, self.asian, self.mvc, self.park, self.museum]
            .into_iter()
            .map(u8::from)
            .sum()
    }
}

/// One scored grid-cell centre point.
///
/// # Examples
/// ```
/// use fishnet_core::{AmenityFlags, GridId, ScoredPoint};
/// use geo::Coord;
///
/// let point = ScoredPoint::new(
///     GridId::Cell(1),
///     Coord { x: -74.0, y: 40.0 },
///     4.5,
///     AmenityFlags { usa: true, ..AmenityFlags::default() },
/// );
/// assert_eq!(point.amenity_count, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPoint {
    /// Grid-cell identifier.
    pub id: GridId,
    /// Geospatial position, `x = longitude`, `y = latitude`.
    pub location: Coord<f64>,
    /// Survey quality score; finite, observed domain `[0, 5]`.
    pub score: f64,
    /// Amenity indicators observed near the cell.
    pub amenities: AmenityFlags,
    /// Cardinality of set amenity flags, cached at construction.
    pub amenity_count: u8,
}

impl ScoredPoint {
    /// Construct a `ScoredPoint`, caching the amenity count.
    #[must_use]
    pub fn new(id: GridId, location: Coord<f64>, score: f64, amenities: AmenityFlags) -> Self {
        Self {
            id,
            location,
            score,
            amenities,
            amenity_count: amenities.count(),
        }
    }

    /// Construct a `ScoredPoint` with no amenities observed.
    #[must_use]
    pub fn without_amenities(id: GridId, location: Coord<f64>, score: f64) -> Self {
        Self::new(id, location, score, AmenityFlags::default())
    }
}
