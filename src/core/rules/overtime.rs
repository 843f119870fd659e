//! Overtime application checks, shared by the on-site (80) and remote (81)
//! flavours: presence of an application for long days, and agreement
//! between the worked overtime and the hours declared on the application.

use crate::core::duration::{
    STANDARD_DAY_MINUTES, exceeds_standard_day, to_minutes, within_tolerance,
};
use crate::models::application::{ApplicationRecord, ApplicationType, find_application};
use crate::models::daily::{DailyRecord, find_daily};
use crate::models::finding::{Finding, FindingDetail};
use crate::models::record_key::RecordKey;
use crate::models::work_type::{REMOTE_CODE, is_remote_family};
use std::collections::HashSet;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OvertimeKind {
    OnSite,
    Remote,
}

impl OvertimeKind {
    pub fn application_type(&self) -> ApplicationType {
        match self {
            OvertimeKind::OnSite => ApplicationType::Overtime,
            OvertimeKind::Remote => ApplicationType::RemoteOvertime,
        }
    }

    fn covers(&self, work_type: &str) -> bool {
        match self {
            OvertimeKind::OnSite => !is_remote_family(work_type),
            OvertimeKind::Remote => work_type == REMOTE_CODE,
        }
    }

    fn missing(&self, record: &DailyRecord) -> FindingDetail {
        let work_type = record.work_type.clone();
        let work_hours = record.work_hours.clone();
        match self {
            OvertimeKind::OnSite => FindingDetail::OvertimeApplicationMissing {
                work_type,
                work_hours,
            },
            OvertimeKind::Remote => FindingDetail::RemoteOvertimeApplicationMissing {
                work_type,
                work_hours,
            },
        }
    }

    fn mismatch(&self, work_hours: &str, expected: i64, actual: i64) -> FindingDetail {
        let work_hours = work_hours.to_string();
        match self {
            OvertimeKind::OnSite => FindingDetail::OvertimeMismatch {
                work_hours,
                expected_overtime: expected,
                actual_overtime: actual,
            },
            OvertimeKind::Remote => FindingDetail::RemoteOvertimeMismatch {
                work_hours,
                expected_overtime: expected,
                actual_overtime: actual,
            },
        }
    }
}

/// Overtime declared on an application: late-night overtime plus late-night work.
pub fn declared_minutes(app: &ApplicationRecord) -> i64 {
    to_minutes(&app.late_night_overtime) + to_minutes(&app.late_night_work)
}

/// Days over 8h among `eligible` records that have no matching application.
pub fn check_presence(
    daily: &[DailyRecord],
    applications: &[ApplicationRecord],
    eligible: &HashSet<RecordKey>,
    kind: OvertimeKind,
) -> Vec<Finding> {
    let app_type = kind.application_type();

    daily
        .iter()
        .filter(|r| kind.covers(&r.work_type))
        .filter(|r| exceeds_standard_day(&r.work_hours))
        .filter(|r| eligible.contains(&r.key()))
        .filter(|r| find_application(applications, &r.employee_code, &r.date, app_type).is_none())
        .map(|r| Finding::for_record(r, kind.missing(r)))
        .collect()
}

/// For every application of the flavour's type, compare the overtime worked
/// on the matching day with the overtime declared.
pub fn check_duration(
    daily: &[DailyRecord],
    applications: &[ApplicationRecord],
    kind: OvertimeKind,
) -> Vec<Finding> {
    let app_type = kind.application_type();
    let mut findings = Vec::new();

    for app in applications.iter().filter(|a| a.is(app_type)) {
        let Some(record) = find_daily(daily, &app.employee_code, &app.date) else {
            trace!(key = %app.key(), "application without daily record");
            continue;
        };

        if !exceeds_standard_day(&record.work_hours) {
            continue;
        }

        let expected = to_minutes(&record.work_hours) - STANDARD_DAY_MINUTES;
        let actual = declared_minutes(app);

        if !within_tolerance(expected, actual) {
            findings.push(Finding::new(
                &app.employee_code,
                &record.employee_name,
                &app.date,
                kind.mismatch(&record.work_hours, expected, actual),
            ));
        }
    }

    findings
}
