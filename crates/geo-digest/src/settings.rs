use clap::{Parser, ValueEnum};
use geo_digest_lib::{Config, DEFAULT_UNNAMED_LABEL, MultiLinePolicy};
use std::path::PathBuf;

/// Output rendering
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Text,
    /// One JSON document per run
    Json,
}

/// Which analysis views to print
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// Feature count per geometry kind
    Summary,
    /// Length of every line feature
    Detail,
    /// Bounding envelope of all coordinates
    Envelope,
}

/// Measurement of multi-line features
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MultiLineArg {
    /// Join sub-lines end-to-end (includes the hop between sub-lines)
    Concatenate,
    /// Measure every sub-line on its own
    PerSubLine,
}

impl From<MultiLineArg> for MultiLinePolicy {
    fn from(arg: MultiLineArg) -> Self {
        match arg {
            MultiLineArg::Concatenate => MultiLinePolicy::Concatenate,
            MultiLineArg::PerSubLine => MultiLinePolicy::PerSubLine,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Geo Digest - Count geometries, measure line lengths and compute the bounding envelope of GPX, KML and GeoJSON files
pub struct Settings {
    /// GPX, KML or GeoJSON files to analyse
    #[clap(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Output format
    #[clap(short, long, value_enum, default_value = "text", env = "GEO_DIGEST_FORMAT")]
    pub format: OutputFormat,

    /// Views to print (repeat or comma-separate; default: all)
    #[clap(short, long, value_enum, value_delimiter = ',', env = "GEO_DIGEST_VIEW")]
    pub view: Vec<View>,

    /// Name shown for line features without one
    #[clap(long, default_value = DEFAULT_UNNAMED_LABEL, env = "GEO_DIGEST_UNNAMED_LABEL")]
    pub unnamed_label: String,

    /// How multi-line features are measured
    #[clap(long, value_enum, default_value = "concatenate", env = "GEO_DIGEST_MULTI_LINE")]
    pub multi_line: MultiLineArg,

    /// Write a Chrome trace of the run to this file (requires the `profiling` feature)
    #[clap(long, value_name = "FILE", env = "GEO_DIGEST_TRACE_FILE")]
    pub trace_file: Option<PathBuf>,
}

impl Settings {
    /// Parse settings from the command line, exiting on invalid arguments
    pub fn from_cli() -> Self {
        match Settings::try_parse() {
            Ok(args) => args,
            Err(e) => e.exit(),
        }
    }

    /// Analysis configuration derived from these settings
    pub fn config(&self) -> Config {
        Config {
            unnamed_label: self.unnamed_label.clone(),
            multi_line: self.multi_line.into(),
        }
    }

    /// Whether a view was requested (all views when none were named)
    pub fn shows(&self, view: View) -> bool {
        self.view.is_empty() || self.view.contains(&view)
    }
}
