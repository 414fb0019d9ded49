//! Coordinate positions and the usability check applied before every fold
//!
//! Positions keep their components leniently so that a single malformed
//! coordinate never fails a whole document. Consumers decide what to do with
//! each position through [`Position::check`].

use geo::Point;
use serde::{Deserialize, Serialize};

/// A single `[lon, lat, ...]` coordinate as found in the source document
///
/// Non-numeric components are stored as `None`. A missing or non-array
/// position is stored with no components at all.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "Vec<Option<f64>>")]
pub struct Position(Vec<Option<f64>>);

/// Outcome of checking a position before it is used in a computation
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PositionCheck {
    /// Both longitude and latitude are finite numbers (x = lon, y = lat)
    Usable(Point<f64>),
    /// Fewer than two components (includes missing positions)
    Truncated,
    /// Longitude or latitude is not a finite number
    NonNumeric,
}

impl Position {
    /// Create a position from a longitude and latitude in degrees
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self(vec![Some(lon), Some(lat)])
    }

    /// Create a position from raw components, in `[lon, lat, ...]` order
    #[inline]
    pub fn from_components(components: Vec<Option<f64>>) -> Self {
        Self(components)
    }

    /// Raw components in source order
    #[inline]
    pub fn components(&self) -> &[Option<f64>] {
        &self.0
    }

    /// Classify this position as usable, truncated or non-numeric
    pub fn check(&self) -> PositionCheck {
        match self.0.as_slice() {
            [lon, lat, ..] => match (lon, lat) {
                (Some(lon), Some(lat)) if lon.is_finite() && lat.is_finite() => {
                    PositionCheck::Usable(Point::new(*lon, *lat))
                }
                _ => PositionCheck::NonNumeric,
            },
            _ => PositionCheck::Truncated,
        }
    }

    /// Longitude/latitude point if the position is usable
    #[inline]
    pub fn usable(&self) -> Option<Point<f64>> {
        match self.check() {
            PositionCheck::Usable(point) => Some(point),
            PositionCheck::Truncated | PositionCheck::NonNumeric => None,
        }
    }
}

impl From<serde_json::Value> for Position {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Array(items) => {
                Self(items.iter().map(serde_json::Value::as_f64).collect())
            }
            _ => Self::default(),
        }
    }
}

impl From<Position> for Vec<Option<f64>> {
    fn from(position: Position) -> Self {
        position.0
    }
}

impl From<Point<f64>> for Position {
    fn from(point: Point<f64>) -> Self {
        Self::new(point.x(), point.y())
    }
}
