//! Late-night consistency, two stages over the same eligible days.
//!
//! Eligible: over 8h, not already reported as missing an overtime
//! application, work type on-site or remote, and an application of the
//! matching type (80 or 81) on file. Days without one are left to the
//! presence checks.
//!
//! Stage A compares the total overtime with the application.
//! Stage B compares the minutes worked after 22:00 with the declared
//! late-night work.

use super::overtime::declared_minutes;
use crate::core::duration::{STANDARD_DAY_MINUTES, exceeds_standard_day, to_minutes, within_tolerance};
use crate::models::application::{ApplicationRecord, ApplicationType, find_application};
use crate::models::daily::DailyRecord;
use crate::models::finding::{Finding, FindingDetail};
use crate::models::record_key::RecordKey;
use crate::models::work_type::WorkType;
use crate::utils::time::late_night_minutes;
use std::collections::HashSet;

fn expected_application(work_type: &str) -> Option<ApplicationType> {
    match WorkType::from_code(work_type)? {
        WorkType::OnSite => Some(ApplicationType::Overtime),
        WorkType::Remote => Some(ApplicationType::RemoteOvertime),
    }
}

fn eligible<'a>(
    daily: &'a [DailyRecord],
    applications: &'a [ApplicationRecord],
    excluded: &HashSet<RecordKey>,
) -> Vec<(&'a DailyRecord, &'a ApplicationRecord)> {
    daily
        .iter()
        .filter(|r| exceeds_standard_day(&r.work_hours))
        .filter(|r| !excluded.contains(&r.key()))
        .filter_map(|r| {
            let app_type = expected_application(&r.work_type)?;
            let app = find_application(applications, &r.employee_code, &r.date, app_type)?;
            Some((r, app))
        })
        .collect()
}

/// `excluded`: days the overtime presence check already reported.
pub fn check(
    daily: &[DailyRecord],
    applications: &[ApplicationRecord],
    excluded: &HashSet<RecordKey>,
) -> Vec<Finding> {
    let pairs = eligible(daily, applications, excluded);
    let mut findings = stage_totals(&pairs);
    findings.extend(stage_late_night(&pairs));
    findings
}

fn stage_totals(pairs: &[(&DailyRecord, &ApplicationRecord)]) -> Vec<Finding> {
    pairs
        .iter()
        .filter_map(|(record, app)| {
            let expected = to_minutes(&record.work_hours) - STANDARD_DAY_MINUTES;
            let actual = declared_minutes(app);
            if within_tolerance(expected, actual) {
                return None;
            }
            Some(Finding::for_record(
                record,
                FindingDetail::OvertimeTotalMismatch {
                    work_type: record.work_type.clone(),
                    work_hours: record.work_hours.clone(),
                    application_type: app.kind.clone(),
                    expected_overtime: expected,
                    actual_overtime: actual,
                },
            ))
        })
        .collect()
}

fn stage_late_night(pairs: &[(&DailyRecord, &ApplicationRecord)]) -> Vec<Finding> {
    pairs
        .iter()
        .filter_map(|(record, app)| {
            let expected = late_night_minutes(&record.end_time)?;
            let actual = to_minutes(&app.late_night_work);
            if within_tolerance(expected, actual) {
                return None;
            }
            Some(Finding::for_record(
                record,
                FindingDetail::LateNightMismatch {
                    end_time: record.end_time.clone(),
                    expected_late_night: expected,
                    actual_late_night: actual,
                },
            ))
        })
        .collect()
}
