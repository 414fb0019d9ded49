//! Geo Digest Library - Feature Collection Analysis
//!
//! This library turns GPS markup into a generic feature collection and derives
//! three independent views over it: how many features of each geometry kind
//! exist, how long every line-shaped feature is on a spherical Earth, and the
//! bounding envelope a map viewer needs to fit everything on screen.
//!
//! # Architecture
//!
//! - **[`FeatureCollection`]**: Immutable features with optional [`Geometry`]
//! - **[`GeometryKind`]**: Exhaustive classification of geometries
//! - **[`distance_km`]**: Haversine distance against a 6371 km sphere
//! - **[`summarize`]** / **[`detail`]** / **[`envelope`]**: The three builders
//! - **[`Analysis`]**: All three views with a shared [`Config`]
//! - **[`markup`]**: GPX, KML and GeoJSON readers
//!
//! Builders never fail. Missing geometries, malformed coordinates and
//! degenerate lines are skipped; only document parsing returns errors.

mod analysis;
mod detail;
pub mod distance;
mod envelope;
mod feature;
mod kind;
pub mod markup;
mod position;
mod summary;

// Public API exports
pub use analysis::{Analysis, Config, DEFAULT_UNNAMED_LABEL, MultiLinePolicy};
pub use detail::{DetailEntry, detail, detail_entry, format_km, path_length_km};
pub use distance::{EARTH_RADIUS_KM, distance_km};
pub use envelope::{Bounds, Envelope, envelope};
pub use feature::{Feature, FeatureCollection, Geometry, NAME_PROPERTY, Properties};
pub use kind::GeometryKind;
pub use markup::{MarkupFormat, load_from_files, parse_document};
pub use position::{Position, PositionCheck};
pub use summary::{Summary, summarize};

use std::path::PathBuf;

/// Error types for reading documents
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("GPX parsing error: {0}")]
    Gpx(#[from] gpx::errors::GpxError),

    #[error("KML parsing error: {0}")]
    Kml(#[from] kml::Error),

    #[error("GeoJSON parsing error: {0}")]
    GeoJson(#[from] serde_json::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Unknown document format: {0}")]
    UnknownFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: Box<DataError>,
    },
}

pub type Result<T> = std::result::Result<T, DataError>;
