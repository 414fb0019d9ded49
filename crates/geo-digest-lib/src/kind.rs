//! Geometry classification

use crate::Geometry;
use serde::{Deserialize, Serialize};

/// Bucket a feature's geometry falls into
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GeometryKind {
    Point,
    LineString,
    MultiLineString,
    Polygon,
    /// Missing or unsupported geometry, excluded from every aggregate
    Unknown,
}

impl GeometryKind {
    /// The kinds counted by the summary, in display order
    pub const COUNTED: [GeometryKind; 4] = [
        GeometryKind::Point,
        GeometryKind::LineString,
        GeometryKind::Polygon,
        GeometryKind::MultiLineString,
    ];

    /// Classify an optional geometry
    pub fn classify(geometry: Option<&Geometry>) -> Self {
        match geometry {
            Some(Geometry::Point { .. }) => GeometryKind::Point,
            Some(Geometry::LineString { .. }) => GeometryKind::LineString,
            Some(Geometry::MultiLineString { .. }) => GeometryKind::MultiLineString,
            Some(Geometry::Polygon { .. }) => GeometryKind::Polygon,
            Some(Geometry::Unsupported) | None => GeometryKind::Unknown,
        }
    }

    /// GeoJSON type name
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::LineString => "LineString",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::Unknown => "Unknown",
        }
    }

    /// Whether this kind has a path length
    #[inline]
    pub fn is_linear(&self) -> bool {
        matches!(self, GeometryKind::LineString | GeometryKind::MultiLineString)
    }
}

impl std::fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
