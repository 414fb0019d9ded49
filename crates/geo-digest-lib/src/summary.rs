//! Per-geometry-kind feature counts

use crate::{FeatureCollection, GeometryKind};
use serde::{Deserialize, Serialize};

/// Number of features of each counted geometry kind
///
/// All four kinds are always present, zero when absent from the data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(rename = "Point")]
    pub point: usize,
    #[serde(rename = "LineString")]
    pub line_string: usize,
    #[serde(rename = "Polygon")]
    pub polygon: usize,
    #[serde(rename = "MultiLineString")]
    pub multi_line_string: usize,
}

impl Summary {
    /// Count for a kind (always 0 for [`GeometryKind::Unknown`])
    pub fn get(&self, kind: GeometryKind) -> usize {
        match kind {
            GeometryKind::Point => self.point,
            GeometryKind::LineString => self.line_string,
            GeometryKind::Polygon => self.polygon,
            GeometryKind::MultiLineString => self.multi_line_string,
            GeometryKind::Unknown => 0,
        }
    }

    /// Increment the bucket for `kind`; returns false if the kind is not counted
    pub fn record(&mut self, kind: GeometryKind) -> bool {
        let bucket = match kind {
            GeometryKind::Point => &mut self.point,
            GeometryKind::LineString => &mut self.line_string,
            GeometryKind::Polygon => &mut self.polygon,
            GeometryKind::MultiLineString => &mut self.multi_line_string,
            GeometryKind::Unknown => return false,
        };
        *bucket += 1;
        true
    }

    /// Sum of all counts
    #[inline]
    pub fn total(&self) -> usize {
        self.point + self.line_string + self.polygon + self.multi_line_string
    }

    /// `(kind, count)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (GeometryKind, usize)> + '_ {
        GeometryKind::COUNTED
            .into_iter()
            .map(move |kind| (kind, self.get(kind)))
    }
}

/// Count the features of each geometry kind
///
/// Features with a missing or unsupported geometry are skipped.
pub fn summarize(collection: &FeatureCollection) -> Summary {
    #[cfg(feature = "profiling")]
    profiling::scope!("summary::summarize");

    let mut summary = Summary::default();
    let mut skipped = 0usize;
    for feature in collection {
        if !summary.record(feature.kind()) {
            skipped += 1;
        }
    }

    if skipped > 0 {
        tracing::debug!("Summary skipped {skipped} feature(s) without a counted geometry");
    }
    summary
}
