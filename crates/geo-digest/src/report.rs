//! Rendering of analysis results as text or JSON

use crate::settings::{OutputFormat, Settings, View};
use geo_digest_lib::{Analysis, Bounds, DetailEntry, Summary};
use std::io::Write;
use std::path::PathBuf;

/// Analysis of one input file
#[derive(Debug, Clone)]
pub struct DocumentReport {
    pub path: PathBuf,
    pub feature_count: usize,
    pub analysis: Analysis,
}

/// Write every report in the requested format and views
pub fn render<W: Write>(
    out: &mut W,
    settings: &Settings,
    reports: &[DocumentReport],
) -> Result<(), crate::error::CliError> {
    match settings.format {
        OutputFormat::Text => {
            for (index, report) in reports.iter().enumerate() {
                if index > 0 {
                    writeln!(out)?;
                }
                render_text(out, settings, report)?;
            }
        }
        OutputFormat::Json => {
            let documents: Vec<serde_json::Value> = reports
                .iter()
                .map(|report| to_json(settings, report))
                .collect::<Result<_, _>>()?;
            serde_json::to_writer_pretty(&mut *out, &documents)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn to_json(
    settings: &Settings,
    report: &DocumentReport,
) -> Result<serde_json::Value, serde_json::Error> {
    let mut document = serde_json::Map::new();
    document.insert(
        "file".to_string(),
        report.path.display().to_string().into(),
    );
    document.insert("features".to_string(), report.feature_count.into());
    if settings.shows(View::Summary) {
        document.insert(
            "summary".to_string(),
            serde_json::to_value(report.analysis.summary)?,
        );
    }
    if settings.shows(View::Detail) {
        document.insert(
            "details".to_string(),
            serde_json::to_value(&report.analysis.details)?,
        );
    }
    if settings.shows(View::Envelope) {
        document.insert(
            "envelope".to_string(),
            serde_json::to_value(report.analysis.envelope)?,
        );
    }
    Ok(serde_json::Value::Object(document))
}

fn render_text<W: Write>(
    out: &mut W,
    settings: &Settings,
    report: &DocumentReport,
) -> std::io::Result<()> {
    writeln!(
        out,
        "== {} ({} features)",
        report.path.display(),
        report.feature_count
    )?;
    if settings.shows(View::Summary) {
        write_summary(out, &report.analysis.summary)?;
    }
    if settings.shows(View::Detail) {
        write_details(out, &report.analysis.details)?;
    }
    if settings.shows(View::Envelope) {
        write_envelope(out, report.analysis.envelope)?;
    }
    Ok(())
}

fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> std::io::Result<()> {
    writeln!(out, "Summary")?;
    for (kind, count) in summary.iter() {
        writeln!(out, "  {:<16} {count:>8}", kind.as_str())?;
    }
    Ok(())
}

fn write_details<W: Write>(out: &mut W, details: &[DetailEntry]) -> std::io::Result<()> {
    writeln!(out, "Detail")?;
    if details.is_empty() {
        writeln!(out, "  (no line features)")?;
    }
    for entry in details {
        writeln!(
            out,
            "  {:<32} {:<16} {:>12} km",
            entry.name,
            entry.kind.as_str(),
            entry.length_km
        )?;
    }
    Ok(())
}

fn write_envelope<W: Write>(out: &mut W, envelope: Option<Bounds>) -> std::io::Result<()> {
    writeln!(out, "Envelope")?;
    match envelope {
        Some(bounds) => writeln!(
            out,
            "  south {:.6}  west {:.6}  north {:.6}  east {:.6}",
            bounds.south, bounds.west, bounds.north, bounds.east
        ),
        None => writeln!(out, "  (invalid: no usable coordinates)"),
    }
}
