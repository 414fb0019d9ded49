//! Per-line-feature path lengths
//!
//! Only `LineString` and `MultiLineString` features produce entries. A feature
//! is dropped when its flattened path has fewer than two usable positions;
//! otherwise segments touching an unusable position contribute nothing but
//! never drop the feature.

use crate::distance::point_distance_km;
use crate::{Config, Feature, FeatureCollection, Geometry, GeometryKind, MultiLinePolicy};
use crate::{Position, PositionCheck};
use serde::Serialize;

/// Length of one line-shaped feature
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailEntry {
    /// Display name, or the configured fallback label
    pub name: String,
    /// Either [`GeometryKind::LineString`] or [`GeometryKind::MultiLineString`]
    pub kind: GeometryKind,
    /// Length in kilometers, fixed to two decimals
    pub length_km: String,
    /// Unrounded length in kilometers
    #[serde(skip)]
    pub length: f64,
}

/// Build the detail entries for every line-shaped feature, in input order
pub fn detail(collection: &FeatureCollection, config: &Config) -> Vec<DetailEntry> {
    #[cfg(feature = "profiling")]
    profiling::scope!("detail::detail");

    collection
        .iter()
        .filter_map(|feature| detail_entry(feature, config))
        .collect()
}

/// Build the detail entry for a single feature, if it has one
pub fn detail_entry(feature: &Feature, config: &Config) -> Option<DetailEntry> {
    let (kind, lines): (GeometryKind, Vec<&[Position]>) = match feature.geometry.as_ref()? {
        Geometry::LineString { coordinates } => {
            (GeometryKind::LineString, vec![coordinates.as_slice()])
        }
        Geometry::MultiLineString { coordinates } => (
            GeometryKind::MultiLineString,
            coordinates.iter().map(Vec::as_slice).collect(),
        ),
        Geometry::Point { .. } | Geometry::Polygon { .. } | Geometry::Unsupported => {
            return None;
        }
    };

    let usable_count = lines
        .iter()
        .flat_map(|line| line.iter())
        .filter(|position| position.usable().is_some())
        .take(2)
        .count();
    if usable_count < 2 {
        tracing::trace!(
            "Skipping degenerate {kind} with {usable_count} usable position(s): {:?}",
            feature.name()
        );
        return None;
    }

    let length = match config.multi_line {
        MultiLinePolicy::Concatenate => path_length_km(lines.iter().flat_map(|line| line.iter())),
        MultiLinePolicy::PerSubLine => lines.iter().map(|line| path_length_km(*line)).sum(),
    };

    Some(DetailEntry {
        name: feature
            .name()
            .unwrap_or_else(|| config.unnamed_label.clone()),
        kind,
        length_km: format_km(length),
        length,
    })
}

/// Sum of great-circle distances between consecutive positions
///
/// A segment is skipped when either end is truncated or non-numeric.
pub fn path_length_km<'a>(path: impl IntoIterator<Item = &'a Position>) -> f64 {
    let checks: Vec<PositionCheck> = path.into_iter().map(Position::check).collect();

    let mut total = 0.0;
    let mut skipped = 0usize;
    for pair in checks.windows(2) {
        match pair {
            [PositionCheck::Usable(from), PositionCheck::Usable(to)] => {
                total += point_distance_km(*from, *to);
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!("Skipped {skipped} segment(s) with unusable coordinates");
    }
    total
}

/// Format a length in kilometers with exactly two decimals
#[inline]
pub fn format_km(length: f64) -> String {
    format!("{length:.2}")
}
