//! Geo Digest - command-line front end
//!
//! Loads GPX/KML/GeoJSON files, runs the analysis on each one and prints the
//! requested views to stdout. Logs go to stderr.

mod error;
mod logging;
mod report;
mod settings;

use crate::error::CliError;
use crate::report::DocumentReport;
use crate::settings::Settings;
use geo_digest_lib::Analysis;
use std::process::ExitCode;

fn main() -> ExitCode {
    let settings = Settings::from_cli();
    // Dropped at the end of main, which flushes any trace file
    let _profiling = logging::setup_logging_and_profiling(settings.trace_file.as_deref());

    tracing::debug!(
        "{} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(settings: &Settings) -> Result<(), CliError> {
    profiling::scope!("geo_digest::run");

    let documents = geo_digest_lib::load_from_files(settings.files.clone())?;
    tracing::info!("Loaded {} file(s)", documents.len());

    let config = settings.config();
    let reports: Vec<DocumentReport> = documents
        .into_iter()
        .map(|(path, collection)| {
            let analysis = Analysis::run(&collection, &config);
            tracing::info!(
                "{}: {} feature(s), {} line(s), envelope {}",
                path.display(),
                collection.len(),
                analysis.details.len(),
                if analysis.envelope.is_some() {
                    "valid"
                } else {
                    "invalid"
                }
            );
            DocumentReport {
                path,
                feature_count: collection.len(),
                analysis,
            }
        })
        .collect();

    let mut stdout = std::io::stdout().lock();
    report::render(&mut stdout, settings, &reports)
}
