use crate::core::columns::ColumnIndex;
use crate::errors::AppResult;
use crate::models::record_key::RecordKey;
use crate::models::table::{Table, cell};
use serde::Serialize;

pub const COL_EMPLOYEE_CODE: &str = "社員コード";
pub const COL_DATE: &str = "対象年月日";
pub const COL_KIND: &str = "届出区分";
pub const COL_LATE_NIGHT_OVERTIME: &str = "深夜残業時間";
pub const COL_LATE_NIGHT_WORK: &str = "深夜勤務時間";

const TABLE_NAME: &str = "application";

/// 届出区分 values the checker understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ApplicationType {
    Overtime,          // 80
    RemoteOvertime,    // 81
    RemoteDeclaration, // 85
}

impl ApplicationType {
    pub fn code(&self) -> &'static str {
        match self {
            ApplicationType::Overtime => "80",
            ApplicationType::RemoteOvertime => "81",
            ApplicationType::RemoteDeclaration => "85",
        }
    }
}

/// Column positions of the application table, resolved once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationColumns {
    pub employee_code: usize,
    pub date: usize,
    pub kind: usize,
    pub late_night_overtime: usize,
    pub late_night_work: usize,
}

impl ApplicationColumns {
    pub fn resolve(header: &[String]) -> AppResult<Self> {
        let idx = ColumnIndex::new(TABLE_NAME, header);
        Ok(Self {
            employee_code: idx.require(COL_EMPLOYEE_CODE)?,
            date: idx.require(COL_DATE)?,
            kind: idx.require(COL_KIND)?,
            late_night_overtime: idx.require(COL_LATE_NIGHT_OVERTIME)?,
            late_night_work: idx.require(COL_LATE_NIGHT_WORK)?,
        })
    }
}

/// One 届出 row. `kind` keeps the raw code so unknown types are carried
/// along and simply never match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationRecord {
    pub employee_code: String,
    pub date: String,
    pub kind: String,
    pub late_night_overtime: String,
    pub late_night_work: String,
}

impl ApplicationRecord {
    pub fn from_row(row: &[String], cols: &ApplicationColumns) -> Self {
        Self {
            employee_code: cell(row, cols.employee_code).to_string(),
            date: cell(row, cols.date).to_string(),
            kind: cell(row, cols.kind).to_string(),
            late_night_overtime: cell(row, cols.late_night_overtime).to_string(),
            late_night_work: cell(row, cols.late_night_work).to_string(),
        }
    }

    pub fn key(&self) -> RecordKey {
        RecordKey::new(&self.employee_code, &self.date)
    }

    pub fn is(&self, kind: ApplicationType) -> bool {
        self.kind == kind.code()
    }
}

/// Resolve the application columns and materialize every data row.
pub fn load_applications(table: &Table) -> AppResult<Vec<ApplicationRecord>> {
    let cols = ApplicationColumns::resolve(&table.header)?;
    Ok(table
        .rows
        .iter()
        .map(|row| ApplicationRecord::from_row(row, &cols))
        .collect())
}

/// First application for (employee, date) with the given type.
/// Later duplicates are ignored.
pub fn find_application<'a>(
    applications: &'a [ApplicationRecord],
    employee_code: &str,
    date: &str,
    kind: ApplicationType,
) -> Option<&'a ApplicationRecord> {
    applications
        .iter()
        .find(|app| app.employee_code == employee_code && app.date == date && app.is(kind))
}

