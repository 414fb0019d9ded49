//! Analysis - configuration and the combined summary/detail/envelope result
//!
//! The three builders are independent; this module only runs them together
//! over one collection with a shared [`Config`].

use crate::{Bounds, DetailEntry, FeatureCollection, Summary, detail, envelope, summarize};
use serde::{Deserialize, Serialize};

/// Label used for line features without a name
pub const DEFAULT_UNNAMED_LABEL: &str = "Unnamed";

/// How a `MultiLineString` is measured
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MultiLinePolicy {
    /// Join sub-lines end-to-end into one path, including the hop between
    /// the end of one sub-line and the start of the next
    #[default]
    Concatenate,
    /// Measure each sub-line on its own and add the results
    PerSubLine,
}

/// Configuration for the analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name given to detail entries whose feature has no name
    pub unnamed_label: String,
    /// Measurement of multi-line features
    pub multi_line: MultiLinePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unnamed_label: DEFAULT_UNNAMED_LABEL.to_string(),
            multi_line: MultiLinePolicy::default(),
        }
    }
}

/// All three views over one collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub summary: Summary,
    pub details: Vec<DetailEntry>,
    /// `None` when the collection has no usable coordinate
    pub envelope: Option<Bounds>,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Analysis {
    /// Run every builder over `collection`
    pub fn run(collection: &FeatureCollection, config: &Config) -> Self {
        let analysis = Self {
            summary: summarize(collection),
            details: detail(collection, config),
            envelope: envelope(collection),
        };

        tracing::debug!(
            "Analysed {} feature(s): {} counted, {} line(s), {:.2} km",
            collection.len(),
            analysis.summary.total(),
            analysis.details.len(),
            analysis.total_length_km()
        );
        analysis
    }

    /// Sum of the unrounded lengths of every detail entry
    #[inline]
    pub fn total_length_km(&self) -> f64 {
        self.details.iter().map(|entry| entry.length).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Feature, Geometry, Position};

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.unnamed_label, "Unnamed");
        assert_eq!(config.multi_line, MultiLinePolicy::Concatenate);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: Config = serde_json::from_str(r#"{"multi_line": "per-sub-line"}"#).unwrap();
        assert_eq!(config.multi_line, MultiLinePolicy::PerSubLine);
        assert_eq!(config.unnamed_label, DEFAULT_UNNAMED_LABEL);
    }

    #[test]
    fn test_empty_collection() {
        let analysis = Analysis::run(&FeatureCollection::default(), &Config::default());
        assert_eq!(analysis.summary, Summary::default());
        assert!(analysis.details.is_empty());
        assert!(analysis.envelope.is_none());
        assert_eq!(analysis.total_length_km(), 0.0);
    }

    #[test]
    fn test_run_combines_views() {
        let collection = FeatureCollection::new(vec![
            Feature::new(Some(Geometry::Point {
                coordinates: Position::new(20.0, 10.0),
            })),
            Feature::new(Some(Geometry::LineString {
                coordinates: vec![Position::new(0.0, 0.0), Position::new(0.0, 1.0)],
            })),
            Feature::new(None),
        ]);

        let analysis = Analysis::run(&collection, &Config::default());
        assert_eq!(analysis.summary.point, 1);
        assert_eq!(analysis.summary.line_string, 1);
        assert_eq!(analysis.details.len(), 1);
        assert!((analysis.total_length_km() - 111.195).abs() < 0.001);

        let bounds = analysis.envelope.unwrap();
        assert_eq!((bounds.south, bounds.north), (0.0, 10.0));
        assert_eq!((bounds.west, bounds.east), (0.0, 20.0));
    }
}
