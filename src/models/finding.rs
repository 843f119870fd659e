//! Findings produced by the checks.
//!
//! A finding is an immutable value: who, which day, and a `FindingDetail`
//! variant carrying only the payload that makes sense for that outcome.

use crate::core::duration::format_minutes_sexagesimal;
use crate::models::daily::DailyRecord;
use serde::Serialize;

/// Type tag of a finding, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingType {
    InvalidWorkType,
    RemoteWorkDeclarationMissing,
    OvertimeApplicationMissing,
    OvertimeMismatch,
    RemoteOvertimeApplicationMissing,
    RemoteOvertimeMismatch,
    OvertimeTotalMismatch,
    LateNightMismatch,
    MissingPunchComment,
}

impl FindingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingType::InvalidWorkType => "invalid_work_type",
            FindingType::RemoteWorkDeclarationMissing => "remote_work_declaration_missing",
            FindingType::OvertimeApplicationMissing => "overtime_application_missing",
            FindingType::OvertimeMismatch => "overtime_mismatch",
            FindingType::RemoteOvertimeApplicationMissing => "remote_overtime_application_missing",
            FindingType::RemoteOvertimeMismatch => "remote_overtime_mismatch",
            FindingType::OvertimeTotalMismatch => "overtime_total_mismatch",
            FindingType::LateNightMismatch => "late_night_mismatch",
            FindingType::MissingPunchComment => "missing_punch_comment",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FindingType::InvalidWorkType => "勤務区分不正",
            FindingType::RemoteWorkDeclarationMissing => "在宅勤務届未提出",
            FindingType::OvertimeApplicationMissing => "残業申請未提出",
            FindingType::OvertimeMismatch => "残業時間不一致",
            FindingType::RemoteOvertimeApplicationMissing => "在宅残業申請未提出",
            FindingType::RemoteOvertimeMismatch => "在宅残業時間不一致",
            FindingType::OvertimeTotalMismatch => "残業合計時間不一致",
            FindingType::LateNightMismatch => "深夜時間不一致",
            FindingType::MissingPunchComment => "打刻漏れコメント未入力",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FindingDetail {
    InvalidWorkType {
        work_type: String,
    },
    RemoteWorkDeclarationMissing {
        work_type: String,
    },
    OvertimeApplicationMissing {
        work_type: String,
        work_hours: String,
    },
    OvertimeMismatch {
        work_hours: String,
        expected_overtime: i64,
        actual_overtime: i64,
    },
    RemoteOvertimeApplicationMissing {
        work_type: String,
        work_hours: String,
    },
    RemoteOvertimeMismatch {
        work_hours: String,
        expected_overtime: i64,
        actual_overtime: i64,
    },
    OvertimeTotalMismatch {
        work_type: String,
        work_hours: String,
        application_type: String,
        expected_overtime: i64,
        actual_overtime: i64,
    },
    LateNightMismatch {
        end_time: String,
        expected_late_night: i64,
        actual_late_night: i64,
    },
    MissingPunchComment {
        start_time: String,
        end_time: String,
    },
}

impl FindingDetail {
    pub fn finding_type(&self) -> FindingType {
        match self {
            FindingDetail::InvalidWorkType { .. } => FindingType::InvalidWorkType,
            FindingDetail::RemoteWorkDeclarationMissing { .. } => {
                FindingType::RemoteWorkDeclarationMissing
            }
            FindingDetail::OvertimeApplicationMissing { .. } => {
                FindingType::OvertimeApplicationMissing
            }
            FindingDetail::OvertimeMismatch { .. } => FindingType::OvertimeMismatch,
            FindingDetail::RemoteOvertimeApplicationMissing { .. } => {
                FindingType::RemoteOvertimeApplicationMissing
            }
            FindingDetail::RemoteOvertimeMismatch { .. } => FindingType::RemoteOvertimeMismatch,
            FindingDetail::OvertimeTotalMismatch { .. } => FindingType::OvertimeTotalMismatch,
            FindingDetail::LateNightMismatch { .. } => FindingType::LateNightMismatch,
            FindingDetail::MissingPunchComment { .. } => FindingType::MissingPunchComment,
        }
    }

    /// Free-text description shown to the reviewer.
    pub fn describe(&self) -> String {
        match self {
            FindingDetail::InvalidWorkType { work_type } => {
                format!("勤務区分: {work_type}")
            }
            FindingDetail::RemoteWorkDeclarationMissing { work_type } => {
                format!("勤務区分: {work_type}, 在宅勤務届(85)なし")
            }
            FindingDetail::OvertimeApplicationMissing {
                work_type,
                work_hours,
            }
            | FindingDetail::RemoteOvertimeApplicationMissing {
                work_type,
                work_hours,
            } => format!("勤務区分: {work_type}, 実働時間: {work_hours}"),
            FindingDetail::OvertimeMismatch {
                work_hours,
                expected_overtime,
                actual_overtime,
            }
            | FindingDetail::RemoteOvertimeMismatch {
                work_hours,
                expected_overtime,
                actual_overtime,
            } => format!(
                "実働時間: {work_hours}, 残業(実績): {}, 残業(申請): {}",
                format_minutes_sexagesimal(*expected_overtime),
                format_minutes_sexagesimal(*actual_overtime)
            ),
            FindingDetail::OvertimeTotalMismatch {
                work_type,
                work_hours,
                application_type,
                expected_overtime,
                actual_overtime,
            } => format!(
                "勤務区分: {work_type}, 実働時間: {work_hours}, 届出区分: {application_type}, 残業(実績): {}, 残業(申請): {}",
                format_minutes_sexagesimal(*expected_overtime),
                format_minutes_sexagesimal(*actual_overtime)
            ),
            FindingDetail::LateNightMismatch {
                end_time,
                expected_late_night,
                actual_late_night,
            } => format!(
                "退勤時刻: {end_time}, 深夜(実績): {}, 深夜(申請): {}",
                format_minutes_sexagesimal(*expected_late_night),
                format_minutes_sexagesimal(*actual_late_night)
            ),
            FindingDetail::MissingPunchComment {
                start_time,
                end_time,
            } => format!("出勤: {start_time}, 退勤: {end_time}, コメントなし"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub employee_code: String,
    pub employee_name: String,
    pub date: String,
    #[serde(flatten)]
    pub detail: FindingDetail,
}

impl Finding {
    pub fn new(employee_code: &str, employee_name: &str, date: &str, detail: FindingDetail) -> Self {
        Self {
            employee_code: employee_code.to_string(),
            employee_name: employee_name.to_string(),
            date: date.to_string(),
            detail,
        }
    }

    /// Finding about a daily record; identity and name come from the row.
    pub fn for_record(record: &DailyRecord, detail: FindingDetail) -> Self {
        Self::new(
            &record.employee_code,
            &record.employee_name,
            &record.date,
            detail,
        )
    }

    pub fn finding_type(&self) -> FindingType {
        self.detail.finding_type()
    }

    pub fn describe(&self) -> String {
        self.detail.describe()
    }
}
