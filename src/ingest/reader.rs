//! CSV → `Table`. Rows are kept as raw strings; no header interpretation
//! happens here beyond stripping a UTF-8 BOM.

use crate::errors::{AppError, AppResult};
use crate::models::table::Table;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

const BOM: char = '\u{feff}';

/// Read the CSV file at `path`. `name` labels the table in errors and logs.
pub fn load_table(path: &Path, name: &str) -> AppResult<Table> {
    info!(table = name, path = %path.display(), "reading table");
    let file = File::open(path)?;
    parse_table(file, name)
}

pub fn parse_table<R: Read>(input: R, name: &str) -> AppResult<Table> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let row: Vec<String> = record.iter().map(str::to_string).collect();
        if row.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        rows.push(row);
    }

    if let Some(first) = rows.first_mut().and_then(|r| r.first_mut())
        && first.starts_with(BOM)
    {
        *first = first.trim_start_matches(BOM).to_string();
    }

    let table = Table::from_rows(rows).ok_or_else(|| AppError::EmptyTable(name.to_string()))?;
    debug!(table = name, rows = table.len(), columns = table.header.len(), "table parsed");
    Ok(table)
}
