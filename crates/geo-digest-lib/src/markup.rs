//! Markup readers producing a [`FeatureCollection`]
//!
//! GPX documents are read with the `gpx` crate and KML documents with the
//! `kml` crate, then converted feature by feature. GeoJSON text is
//! deserialized directly into the collection model.

use crate::{DataError, Feature, FeatureCollection, Geometry, NAME_PROPERTY, Position, Result};
use kml::types::Geometry as KmlGeometry;
use rayon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Property recording which markup element a feature came from
pub const SOURCE_PROPERTY: &str = "source";

/// Supported document formats
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkupFormat {
    Gpx,
    Kml,
    GeoJson,
}

impl MarkupFormat {
    /// Guess the format from the first meaningful character of the text
    ///
    /// XML is KML when a `<kml` tag shows up before any `<gpx` tag.
    pub fn sniff(text: &str) -> Option<Self> {
        let text = text.trim_start_matches('\u{feff}').trim_start();
        match text.chars().next()? {
            '<' => match (text.find("<kml"), text.find("<gpx")) {
                (Some(kml), Some(gpx)) if kml < gpx => Some(MarkupFormat::Kml),
                (Some(_), None) => Some(MarkupFormat::Kml),
                _ => Some(MarkupFormat::Gpx),
            },
            '{' => Some(MarkupFormat::GeoJson),
            _ => None,
        }
    }

    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "gpx" => Some(MarkupFormat::Gpx),
            "kml" => Some(MarkupFormat::Kml),
            "json" | "geojson" => Some(MarkupFormat::GeoJson),
            _ => None,
        }
    }
}

impl std::fmt::Display for MarkupFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkupFormat::Gpx => f.write_str("GPX"),
            MarkupFormat::Kml => f.write_str("KML"),
            MarkupFormat::GeoJson => f.write_str("GeoJSON"),
        }
    }
}

/// Parse already-loaded text, sniffing the format when none is given
pub fn parse_document(text: &str, format: Option<MarkupFormat>) -> Result<FeatureCollection> {
    #[cfg(feature = "profiling")]
    profiling::scope!("markup::parse_document");

    let format = format
        .or_else(|| MarkupFormat::sniff(text))
        .ok_or_else(|| DataError::UnknownFormat("unrecognized document content".to_string()))?;

    let collection = match format {
        MarkupFormat::Gpx => read_gpx(text.as_bytes())?,
        MarkupFormat::Kml => read_kml(text)?,
        MarkupFormat::GeoJson => read_geojson(text)?,
    };
    tracing::debug!("Parsed {format} document with {} feature(s)", collection.len());
    Ok(collection)
}

/// Read a GPX document
pub fn read_gpx<R: Read>(reader: R) -> Result<FeatureCollection> {
    let gpx = gpx::read(reader)?;
    Ok(from_gpx(&gpx))
}

/// Convert parsed GPX into features: waypoints, then routes, then tracks
///
/// A track becomes a `LineString` when it has a single segment and a
/// `MultiLineString` otherwise. A track without segments has no geometry.
pub fn from_gpx(gpx: &gpx::Gpx) -> FeatureCollection {
    let waypoints = gpx.waypoints.iter().map(|waypoint| {
        let feature = Feature::new(Some(Geometry::Point {
            coordinates: Position::from(waypoint.point()),
        }));
        let feature = describe(
            feature,
            "waypoint",
            waypoint.name.as_deref(),
            waypoint.description.as_deref(),
        );
        match waypoint.elevation {
            Some(elevation) => feature.with_property("elevation", elevation),
            None => feature,
        }
    });

    let routes = gpx.routes.iter().map(|route| {
        let feature = Feature::new(Some(Geometry::LineString {
            coordinates: positions(&route.points),
        }));
        describe(
            feature,
            "route",
            route.name.as_deref(),
            route.description.as_deref(),
        )
    });

    let tracks = gpx.tracks.iter().map(|track| {
        let geometry = match track.segments.as_slice() {
            [] => None,
            [segment] => Some(Geometry::LineString {
                coordinates: positions(&segment.points),
            }),
            segments => Some(Geometry::MultiLineString {
                coordinates: segments
                    .iter()
                    .map(|segment| positions(&segment.points))
                    .collect(),
            }),
        };
        describe(
            Feature::new(geometry),
            "track",
            track.name.as_deref(),
            track.description.as_deref(),
        )
    });

    waypoints.chain(routes).chain(tracks).collect()
}

fn positions(points: &[gpx::Waypoint]) -> Vec<Position> {
    points
        .iter()
        .map(|waypoint| Position::from(waypoint.point()))
        .collect()
}

fn describe(
    feature: Feature,
    source: &str,
    name: Option<&str>,
    description: Option<&str>,
) -> Feature {
    let mut feature = feature.with_property(SOURCE_PROPERTY, source);
    if let Some(name) = name {
        feature = feature.with_property(NAME_PROPERTY, name);
    }
    if let Some(description) = description {
        feature = feature.with_property("description", description);
    }
    feature
}

/// Read a KML document: one feature per `Placemark`, in document order
///
/// `Document` and `Folder` containers are walked recursively.
pub fn read_kml(text: &str) -> Result<FeatureCollection> {
    let document: kml::Kml = text.parse()?;
    let mut features = Vec::new();
    collect_placemarks(&document, &mut features);
    Ok(FeatureCollection::new(features))
}

fn collect_placemarks(element: &kml::Kml, features: &mut Vec<Feature>) {
    match element {
        kml::Kml::KmlDocument(document) => {
            for child in &document.elements {
                collect_placemarks(child, features);
            }
        }
        kml::Kml::Document { elements, .. } => {
            for child in elements {
                collect_placemarks(child, features);
            }
        }
        kml::Kml::Folder(folder) => {
            for child in &folder.elements {
                collect_placemarks(child, features);
            }
        }
        kml::Kml::Placemark(placemark) => {
            let geometry = placemark.geometry.as_ref().map(from_kml_geometry);
            features.push(describe(
                Feature::new(geometry),
                "placemark",
                placemark.name.as_deref(),
                placemark.description.as_deref(),
            ));
        }
        _ => {}
    }
}

/// Map a placemark geometry; a `MultiGeometry` maps only when it holds lines
fn from_kml_geometry(geometry: &KmlGeometry) -> Geometry {
    match geometry {
        KmlGeometry::Point(point) => Geometry::Point {
            coordinates: kml_position(&point.coord),
        },
        KmlGeometry::LineString(line) => Geometry::LineString {
            coordinates: kml_positions(&line.coords),
        },
        KmlGeometry::Polygon(polygon) => Geometry::Polygon {
            coordinates: std::iter::once(&polygon.outer)
                .chain(&polygon.inner)
                .map(|ring| kml_positions(&ring.coords))
                .collect(),
        },
        KmlGeometry::MultiGeometry(multi) => {
            let lines: Option<Vec<Vec<Position>>> = multi
                .geometries
                .iter()
                .map(|member| match member {
                    KmlGeometry::LineString(line) => Some(kml_positions(&line.coords)),
                    _ => None,
                })
                .collect();
            match lines {
                Some(coordinates) if !coordinates.is_empty() => {
                    Geometry::MultiLineString { coordinates }
                }
                _ => Geometry::Unsupported,
            }
        }
        _ => Geometry::Unsupported,
    }
}

fn kml_positions(coords: &[kml::types::Coord]) -> Vec<Position> {
    coords.iter().map(kml_position).collect()
}

/// KML coordinates are `lon,lat[,alt]`
fn kml_position(coord: &kml::types::Coord) -> Position {
    let mut components = vec![Some(coord.x), Some(coord.y)];
    if let Some(altitude) = coord.z {
        components.push(Some(altitude));
    }
    Position::from_components(components)
}

/// Read GeoJSON text: a `FeatureCollection`, a single `Feature`, or a bare geometry
pub fn read_geojson(text: &str) -> Result<FeatureCollection> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let kind = value
        .get("type")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| DataError::InvalidDocument("GeoJSON object without a type".to_string()))?;

    match kind {
        "FeatureCollection" => Ok(serde_json::from_value(value)?),
        "Feature" => Ok(FeatureCollection::new(vec![serde_json::from_value(value)?])),
        _ => {
            let geometry: Geometry = serde_json::from_value(value)?;
            Ok(FeatureCollection::new(vec![Feature::new(Some(geometry))]))
        }
    }
}

/// Read and parse one file, picking the format from its extension or content
pub fn load_file(path: &Path) -> Result<FeatureCollection> {
    let load = || -> Result<FeatureCollection> {
        let text = std::fs::read_to_string(path)?;
        parse_document(&text, MarkupFormat::from_path(path))
    };
    load().map_err(|source| DataError::File {
        path: path.to_path_buf(),
        source: Box::new(source),
    })
}

/// Load several files in parallel, keeping input order
///
/// The first failing file fails the whole batch.
pub fn load_from_files<P: AsRef<Path> + Send + Sync>(
    paths: Vec<P>,
) -> Result<Vec<(PathBuf, FeatureCollection)>> {
    #[cfg(feature = "profiling")]
    profiling::scope!("markup::load_from_files");

    paths
        .into_par_iter()
        .map(|path| {
            let path = path.as_ref();
            load_file(path).map(|collection| (path.to_path_buf(), collection))
        })
        .collect()
}
