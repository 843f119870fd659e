// src/export/json_csv.rs

use crate::core::report::Report;
use crate::errors::{AppError, AppResult};
use crate::export::{FindingExport, notify_export_success};
use crate::models::finding::Finding;
use crate::ui::messages::info;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// JSON document: summary counts plus every finding in display order.
#[derive(Serialize)]
struct JsonReport<'a> {
    total: usize,
    counts: BTreeMap<&'static str, usize>,
    findings: Vec<JsonFinding<'a>>,
}

/// One finding: label and free-text detail next to the typed payload.
#[derive(Serialize)]
struct JsonFinding<'a> {
    label: &'static str,
    detail: String,
    #[serde(flatten)]
    finding: &'a Finding,
}

impl<'a> From<&'a Finding> for JsonFinding<'a> {
    fn from(f: &'a Finding) -> Self {
        Self {
            label: f.finding_type().label(),
            detail: f.describe(),
            finding: f,
        }
    }
}

impl<'a> JsonReport<'a> {
    fn new(report: &'a Report) -> Self {
        Self {
            total: report.len(),
            counts: report
                .counts()
                .into_iter()
                .map(|(k, v)| (k.as_str(), v))
                .collect(),
            findings: report
                .sorted_by_date()
                .into_iter()
                .map(JsonFinding::from)
                .collect(),
        }
    }
}

pub(crate) fn write_json<W: Write>(report: &Report, out: W) -> AppResult<()> {
    serde_json::to_writer_pretty(out, &JsonReport::new(report))?;
    Ok(())
}

/// CSV with a header row; one line per finding, sorted by date.
pub(crate) fn write_csv<W: Write>(report: &Report, out: W) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(out);
    if report.is_empty() {
        // serde writes the header only together with the first record
        wtr.write_record(["date", "type", "label", "employee_code", "employee_name", "detail"])?;
    }
    for f in report.sorted_by_date() {
        wtr.serialize(FindingExport::from(f))?;
    }
    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    Ok(())
}

/// Export JSON pretty-printed.
pub(crate) fn export_json(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Writing JSON report: {}", path.display()));
    let mut file = BufWriter::new(File::create(path)?);
    write_json(report, &mut file)?;
    file.flush()?;
    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV.
pub(crate) fn export_csv(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Writing CSV report: {}", path.display()));
    let file = File::create(path)?;
    write_csv(report, file)?;
    notify_export_success("CSV", path);
    Ok(())
}
