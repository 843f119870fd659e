use crate::core::columns::ColumnIndex;
use crate::errors::AppResult;
use crate::models::record_key::RecordKey;
use crate::models::table::{Table, cell};
use serde::Serialize;

pub const COL_EMPLOYEE_CODE: &str = "社員コード";
pub const COL_EMPLOYEE_NAME: &str = "氏名";
pub const COL_DATE: &str = "年月日";
pub const COL_WORK_TYPE: &str = "勤務区分";
pub const COL_START_TIME: &str = "出勤時刻";
pub const COL_END_TIME: &str = "退勤時刻";
pub const COL_VACATION: &str = "休暇区分";
pub const COL_WORK_HOURS: &str = "実働時間";
pub const COL_COMMENT: &str = "コメント";
/// Optional: older exports do not carry it.
pub const COL_APPROVAL_STATUS: &str = "承認状況";

/// Start/end cell value meaning "no punch recorded" (distinct from blank).
pub const NO_PUNCH: &str = "0";

const TABLE_NAME: &str = "daily";

/// Column positions of the daily table, resolved once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyColumns {
    pub employee_code: usize,
    pub employee_name: usize,
    pub date: usize,
    pub work_type: usize,
    pub start_time: usize,
    pub end_time: usize,
    pub vacation: usize,
    pub work_hours: usize,
    pub comment: usize,
    pub approval_status: Option<usize>,
}

impl DailyColumns {
    pub fn resolve(header: &[String]) -> AppResult<Self> {
        let idx = ColumnIndex::new(TABLE_NAME, header);
        Ok(Self {
            employee_code: idx.require(COL_EMPLOYEE_CODE)?,
            employee_name: idx.require(COL_EMPLOYEE_NAME)?,
            date: idx.require(COL_DATE)?,
            work_type: idx.require(COL_WORK_TYPE)?,
            start_time: idx.require(COL_START_TIME)?,
            end_time: idx.require(COL_END_TIME)?,
            vacation: idx.require(COL_VACATION)?,
            work_hours: idx.require(COL_WORK_HOURS)?,
            comment: idx.require(COL_COMMENT)?,
            approval_status: idx.find(COL_APPROVAL_STATUS),
        })
    }
}

/// One row of the daily attendance table, cells trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyRecord {
    pub employee_code: String,
    pub employee_name: String,
    pub date: String,
    pub work_type: String,
    pub start_time: String,
    pub end_time: String,
    pub vacation: String,
    pub work_hours: String,
    pub comment: String,
    /// `None` when the table has no approval column at all.
    pub approval_status: Option<String>,
}

impl DailyRecord {
    pub fn from_row(row: &[String], cols: &DailyColumns) -> Self {
        Self {
            employee_code: cell(row, cols.employee_code).to_string(),
            employee_name: cell(row, cols.employee_name).to_string(),
            date: cell(row, cols.date).to_string(),
            work_type: cell(row, cols.work_type).to_string(),
            start_time: cell(row, cols.start_time).to_string(),
            end_time: cell(row, cols.end_time).to_string(),
            vacation: cell(row, cols.vacation).to_string(),
            work_hours: cell(row, cols.work_hours).to_string(),
            comment: cell(row, cols.comment).to_string(),
            approval_status: cols
                .approval_status
                .map(|idx| cell(row, idx).to_string()),
        }
    }

    pub fn key(&self) -> RecordKey {
        RecordKey::new(&self.employee_code, &self.date)
    }

    pub fn has_missing_punch(&self) -> bool {
        self.start_time == NO_PUNCH || self.end_time == NO_PUNCH
    }
}

/// Resolve the daily columns and materialize every data row.
pub fn load_daily(table: &Table) -> AppResult<Vec<DailyRecord>> {
    let cols = DailyColumns::resolve(&table.header)?;
    Ok(table
        .rows
        .iter()
        .map(|row| DailyRecord::from_row(row, &cols))
        .collect())
}

/// First daily record for (employee, date).
pub fn find_daily<'a>(
    records: &'a [DailyRecord],
    employee_code: &str,
    date: &str,
) -> Option<&'a DailyRecord> {
    records
        .iter()
        .find(|r| r.employee_code == employee_code && r.date == date)
}
