mod fs_utils;
mod json_csv;
mod model;
mod text;

pub use model::FindingExport;
pub use text::render_text;

use crate::core::report::Report;
use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Shared completion message for written reports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} report written: {}", path.display()));
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Text,
    Csv,
    Json,
}

/// Write the report in `format`, to `out` when given, otherwise to stdout.
pub fn write_report(
    report: &Report,
    format: ExportFormat,
    out: Option<&Path>,
    force: bool,
) -> AppResult<()> {
    match out {
        Some(path) => {
            fs_utils::ensure_writable(path, force)?;
            match format {
                ExportFormat::Text => text::export_text(report, path)?,
                ExportFormat::Csv => json_csv::export_csv(report, path)?,
                ExportFormat::Json => json_csv::export_json(report, path)?,
            }
        }
        None => {
            let stdout = io::stdout();
            let color = stdout.is_terminal();
            let mut handle = stdout.lock();
            match format {
                ExportFormat::Text => handle.write_all(render_text(report, color).as_bytes())?,
                ExportFormat::Csv => json_csv::write_csv(report, &mut handle)?,
                ExportFormat::Json => json_csv::write_json(report, &mut handle)?,
            }
            handle.flush()?;
        }
    }
    Ok(())
}
