//! Bounding envelope over every usable coordinate of a collection

use crate::{FeatureCollection, Position};
use geo::{Coord, Rect};
use serde::{Deserialize, Serialize};

/// South-west / north-east corners in degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// Center as `(lat, lon)`
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }
}

impl From<Rect<f64>> for Bounds {
    fn from(rect: Rect<f64>) -> Self {
        Self {
            south: rect.min().y,
            west: rect.min().x,
            north: rect.max().y,
            east: rect.max().x,
        }
    }
}

/// Accumulator for the minimal lat/lon rectangle covering folded points
///
/// Empty until the first point is folded in.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Envelope {
    /// x = longitude, y = latitude
    extent: Option<Rect<f64>>,
}

impl Envelope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grow the envelope to include a point; returns whether it did
    ///
    /// Non-finite coordinates are ignored and leave the envelope unchanged.
    pub fn extend(&mut self, lat: f64, lon: f64) -> bool {
        if !lat.is_finite() || !lon.is_finite() {
            return false;
        }
        let point = Coord { x: lon, y: lat };
        self.extent = Some(match self.extent {
            Some(rect) => Rect::new(
                Coord {
                    x: rect.min().x.min(lon),
                    y: rect.min().y.min(lat),
                },
                Coord {
                    x: rect.max().x.max(lon),
                    y: rect.max().y.max(lat),
                },
            ),
            None => Rect::new(point, point),
        });
        true
    }

    /// Fold a position in if it is usable; returns whether it was
    pub fn fold(&mut self, position: &Position) -> bool {
        match position.usable() {
            Some(point) => self.extend(point.y(), point.x()),
            None => false,
        }
    }

    /// Whether at least one point has been folded in
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.extent.is_some()
    }

    /// Covering rectangle, `None` while empty
    #[inline]
    pub fn bounds(&self) -> Option<Bounds> {
        self.extent.map(Bounds::from)
    }

    /// Covering rectangle as a `geo` rect (x = lon, y = lat)
    #[inline]
    pub fn rect(&self) -> Option<Rect<f64>> {
        self.extent
    }
}

/// Minimal envelope over every usable position of every geometry
///
/// Returns `None` when no usable position exists.
pub fn envelope(collection: &FeatureCollection) -> Option<Bounds> {
    #[cfg(feature = "profiling")]
    profiling::scope!("envelope::envelope");

    let mut envelope = Envelope::new();
    let mut skipped = 0usize;
    for geometry in collection.iter().filter_map(|feature| feature.geometry.as_ref()) {
        for position in geometry.positions() {
            if !envelope.fold(position) {
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        tracing::debug!("Envelope skipped {skipped} unusable position(s)");
    }
    if !envelope.is_valid() {
        tracing::debug!("No usable positions, envelope is invalid");
    }
    envelope.bounds()
}
