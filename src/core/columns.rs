//! Header lookup: columns are always addressed by name, never by ordinal.

use crate::errors::{AppError, AppResult};
use tracing::debug;

/// Zero-based index of the first header cell whose trimmed value equals `name`.
pub fn find_column(header: &[String], name: &str) -> Option<usize> {
    header.iter().position(|h| h.trim() == name)
}

/// Like `find_column`, but a missing column is fatal.
pub fn resolve_column(table: &str, header: &[String], name: &str) -> AppResult<usize> {
    find_column(header, name).ok_or_else(|| AppError::column_not_found(table, name))
}

/// Header of one table, tagged with the table name for error messages.
pub struct ColumnIndex<'a> {
    table: &'a str,
    header: &'a [String],
}

impl<'a> ColumnIndex<'a> {
    pub fn new(table: &'a str, header: &'a [String]) -> Self {
        Self { table, header }
    }

    pub fn require(&self, name: &str) -> AppResult<usize> {
        let idx = resolve_column(self.table, self.header, name)?;
        debug!(table = self.table, column = name, index = idx, "column resolved");
        Ok(idx)
    }

    pub fn find(&self, name: &str) -> Option<usize> {
        let idx = find_column(self.header, name);
        if idx.is_none() {
            debug!(table = self.table, column = name, "optional column absent");
        }
        idx
    }
}
