//! Generic feature-collection model
//!
//! This is the representation every markup reader produces and every builder
//! consumes. It follows the GeoJSON object layout so that GeoJSON text can be
//! read directly with `serde_json`.

use crate::{GeometryKind, Position};
use serde::{Deserialize, Deserializer, Serialize};

/// Key/value properties attached to a feature
pub type Properties = serde_json::Map<String, serde_json::Value>;

/// Property holding the display name of a feature
pub const NAME_PROPERTY: &str = "name";

/// Spatial payload of a feature, tagged by its GeoJSON `type`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        #[serde(default)]
        coordinates: Position,
    },
    LineString {
        #[serde(default)]
        coordinates: Vec<Position>,
    },
    MultiLineString {
        #[serde(default)]
        coordinates: Vec<Vec<Position>>,
    },
    Polygon {
        #[serde(default)]
        coordinates: Vec<Vec<Position>>,
    },
    /// Any other geometry type (MultiPoint, GeometryCollection, ...)
    #[serde(other)]
    Unsupported,
}

impl Geometry {
    /// Every position reachable from this geometry, in document order
    ///
    /// Unsupported geometries yield nothing.
    pub fn positions(&self) -> Box<dyn Iterator<Item = &Position> + '_> {
        match self {
            Geometry::Point { coordinates } => Box::new(std::iter::once(coordinates)),
            Geometry::LineString { coordinates } => Box::new(coordinates.iter()),
            Geometry::MultiLineString { coordinates } | Geometry::Polygon { coordinates } => {
                Box::new(coordinates.iter().flatten())
            }
            Geometry::Unsupported => Box::new(std::iter::empty()),
        }
    }
}

/// One spatial entity: an optional geometry plus its properties
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// `None` for features without spatial data
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub properties: Properties,
}

impl Feature {
    /// Create a feature with no properties
    pub fn new(geometry: Option<Geometry>) -> Self {
        Self {
            geometry,
            properties: Properties::new(),
        }
    }

    /// Builder-style helper to attach a property
    pub fn with_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Geometry kind of this feature
    #[inline]
    pub fn kind(&self) -> GeometryKind {
        GeometryKind::classify(self.geometry.as_ref())
    }

    /// Display name from the `name` property
    ///
    /// Strings are used as-is, numbers and booleans are rendered. Missing,
    /// null, empty or structured values count as no name.
    pub fn name(&self) -> Option<String> {
        match self.properties.get(NAME_PROPERTY)? {
            serde_json::Value::String(name) if !name.is_empty() => Some(name.clone()),
            serde_json::Value::Number(number) => Some(number.to_string()),
            serde_json::Value::Bool(flag) => Some(flag.to_string()),
            _ => None,
        }
    }
}

/// Ordered sequence of features
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    /// Total number of positions across all geometries
    pub fn position_count(&self) -> usize {
        self.features
            .iter()
            .filter_map(|feature| feature.geometry.as_ref())
            .map(|geometry| geometry.positions().count())
            .sum()
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Properties, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Properties>::deserialize(deserializer)?.unwrap_or_default())
}
