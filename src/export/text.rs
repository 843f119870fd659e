// src/export/text.rs

use crate::core::report::Report;
use crate::errors::AppResult;
use crate::export::model::finding_to_row;
use crate::export::{FindingExport, notify_export_success};
use crate::utils::colors::{GREEN, RED, RESET, YELLOW};
use crate::utils::date::with_weekday;
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};
use std::fs;
use std::path::Path;

fn columns() -> Vec<Column> {
    vec![
        Column::new("種別", 22),
        Column::new("社員コード", 10),
        Column::new("氏名", 14),
        Column::new("詳細", 0),
    ]
}

/// Human-readable report grouped by date. `color` adds ANSI escapes.
pub fn render_text(report: &Report, color: bool) -> String {
    let mut out = String::new();

    if report.is_empty() {
        let msg = "チェック結果: 問題は見つかりませんでした。";
        if color {
            out.push_str(&format!("{GREEN}{msg}{RESET}\n"));
        } else {
            out.push_str(msg);
            out.push('\n');
        }
        return out;
    }

    let heading = format!("チェック結果: {} 件の問題が見つかりました", report.len());
    if color {
        out.push_str(&format!("{RED}{}{RESET}\n", bold(&heading)));
    } else {
        out.push_str(&heading);
        out.push('\n');
    }

    for (date, findings) in report.by_date() {
        let title = format!("=== {} ===", with_weekday(date));
        out.push('\n');
        if color {
            out.push_str(&format!("{YELLOW}{title}{RESET}\n"));
        } else {
            out.push_str(&title);
            out.push('\n');
        }

        let mut table = Table::new(columns());
        for f in findings {
            table.add_row(finding_to_row(&FindingExport::from(f)));
        }
        out.push_str(&table.render());
    }

    out.push_str("\n集計:\n");
    for (kind, count) in report.counts() {
        out.push_str(&format!("  {}: {}\n", kind.label(), count));
    }

    out
}

pub(crate) fn export_text(report: &Report, path: &Path) -> AppResult<()> {
    fs::write(path, render_text(report, false))?;
    notify_export_success("Text", path);
    Ok(())
}
