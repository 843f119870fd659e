mod common;
use common::{app, datasets, day};
use kintai_checker::core::rules::overtime::{self, OvertimeKind};
use kintai_checker::core::rules::{all_keys, classification, late_night, punch_comment};
use kintai_checker::models::finding::{FindingDetail, FindingType};
use kintai_checker::models::record_key::RecordKey;
use std::collections::HashSet;

fn types(findings: &[kintai_checker::models::finding::Finding]) -> Vec<FindingType> {
    findings.iter().map(|f| f.finding_type()).collect()
}

#[test]
fn test_classification_splits_on_site_and_remote() {
    let data = datasets(
        vec![
            day("E001", "20250301", "EFS01", "09:00", "18:00", "8.00"),
            day("E002", "20250301", "ETW01", "09:00", "18:00", "8.00"),
            day("E003", "20250301", "ETW01", "09:00", "18:00", "8.00"),
            day("E004", "20250301", "XYZ", "09:00", "18:00", "8.00"),
            day("E005", "20250301", "", "", "", ""),
        ],
        vec![app("E002", "20250301", "85", "", "")],
    );

    let c = classification::check(&data.daily, &data.applications);

    assert!(c.on_site.contains(&RecordKey::new("E001", "20250301")));
    assert!(c.remote.contains(&RecordKey::new("E002", "20250301")));
    assert!(!c.remote.contains(&RecordKey::new("E003", "20250301")));
    assert_eq!(c.passed().len(), 2);

    assert_eq!(
        types(&c.findings),
        vec![
            FindingType::RemoteWorkDeclarationMissing,
            FindingType::InvalidWorkType
        ]
    );
    assert_eq!(c.findings[0].employee_code, "E003");
    assert_eq!(c.findings[1].employee_code, "E004");
}

#[test]
fn test_declaration_must_match_employee_and_date() {
    let data = datasets(
        vec![day("E002", "20250301", "ETW01", "09:00", "18:00", "8.00")],
        vec![
            app("E002", "20250302", "85", "", ""),
            app("E009", "20250301", "85", "", ""),
            app("E002", "20250301", "81", "", ""),
        ],
    );

    let c = classification::check(&data.daily, &data.applications);
    assert_eq!(types(&c.findings), vec![FindingType::RemoteWorkDeclarationMissing]);
}

#[test]
fn test_overtime_presence_reports_long_day_without_application() {
    let data = datasets(
        vec![day("E001", "20250301", "EFS01", "09:00", "19:00", "9.00")],
        vec![],
    );
    let eligible = all_keys(&data.daily);

    let found = overtime::check_presence(&data.daily, &data.applications, &eligible, OvertimeKind::OnSite);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].employee_code, "E001");
    assert_eq!(found[0].date, "20250301");
    assert_eq!(found[0].finding_type(), FindingType::OvertimeApplicationMissing);
}

#[test]
fn test_overtime_presence_ignores_short_days_and_remote_family() {
    let data = datasets(
        vec![
            day("E001", "20250301", "EFS01", "09:00", "17:00", "8.00"),
            day("E002", "20250301", "ETW01", "09:00", "19:00", "9.00"),
            day("E003", "20250301", "ETW02", "09:00", "19:00", "9.00"),
        ],
        vec![],
    );
    let eligible = all_keys(&data.daily);

    let found = overtime::check_presence(&data.daily, &data.applications, &eligible, OvertimeKind::OnSite);
    assert!(found.is_empty());
}

#[test]
fn test_overtime_presence_respects_eligibility() {
    let data = datasets(
        vec![day("E001", "20250301", "EFS01", "09:00", "19:00", "9.00")],
        vec![],
    );

    let found = overtime::check_presence(
        &data.daily,
        &data.applications,
        &HashSet::new(),
        OvertimeKind::OnSite,
    );
    assert!(found.is_empty());
}

#[test]
fn test_overtime_duration_matching_application() {
    let data = datasets(
        vec![day("E001", "20250301", "EFS01", "09:00", "19:00", "9.00")],
        vec![app("E001", "20250301", "80", "1.00", "0.00")],
    );

    assert!(overtime::check_duration(&data.daily, &data.applications, OvertimeKind::OnSite).is_empty());
}

#[test]
fn test_overtime_duration_mismatch_carries_both_values() {
    let data = datasets(
        vec![day("E001", "20250301", "EFS01", "09:00", "19:00", "9.00")],
        vec![app("E001", "20250301", "80", "0.45", "0.00")],
    );

    let found = overtime::check_duration(&data.daily, &data.applications, OvertimeKind::OnSite);

    assert_eq!(found.len(), 1);
    assert_eq!(
        found[0].detail,
        FindingDetail::OvertimeMismatch {
            work_hours: "9.00".to_string(),
            expected_overtime: 60,
            actual_overtime: 45,
        }
    );
    assert_eq!(found[0].employee_name, "山田太郎");
}

#[test]
fn test_overtime_duration_tolerates_one_minute() {
    let data = datasets(
        vec![day("E001", "20250301", "EFS01", "09:00", "19:00", "9.00")],
        vec![app("E001", "20250301", "80", "0.59", "0.00")],
    );

    assert!(overtime::check_duration(&data.daily, &data.applications, OvertimeKind::OnSite).is_empty());
}

#[test]
fn test_overtime_duration_sums_both_late_night_fields() {
    let data = datasets(
        vec![day("E001", "20250301", "EFS01", "09:00", "23:00", "12.30")],
        vec![app("E001", "20250301", "80", "3.30", "1.00")],
    );

    assert!(overtime::check_duration(&data.daily, &data.applications, OvertimeKind::OnSite).is_empty());
}

#[test]
fn test_overtime_duration_skips_applications_without_long_day() {
    let data = datasets(
        vec![day("E001", "20250301", "EFS01", "09:00", "17:00", "8.00")],
        vec![
            app("E001", "20250301", "80", "2.00", "0.00"),
            app("E001", "20250309", "80", "2.00", "0.00"),
        ],
    );

    assert!(overtime::check_duration(&data.daily, &data.applications, OvertimeKind::OnSite).is_empty());
}

#[test]
fn test_remote_overtime_presence_and_duration() {
    let data = datasets(
        vec![
            day("E002", "20250301", "ETW01", "09:00", "19:30", "9.30"),
            day("E002", "20250302", "ETW01", "09:00", "19:30", "9.30"),
        ],
        vec![
            app("E002", "20250301", "85", "", ""),
            app("E002", "20250302", "85", "", ""),
            app("E002", "20250302", "81", "0.15", "0.00"),
        ],
    );
    let eligible = all_keys(&data.daily);

    let missing = overtime::check_presence(&data.daily, &data.applications, &eligible, OvertimeKind::Remote);
    assert_eq!(types(&missing), vec![FindingType::RemoteOvertimeApplicationMissing]);
    assert_eq!(missing[0].date, "20250301");

    let mismatch = overtime::check_duration(&data.daily, &data.applications, OvertimeKind::Remote);
    assert_eq!(mismatch.len(), 1);
    assert_eq!(
        mismatch[0].detail,
        FindingDetail::RemoteOvertimeMismatch {
            work_hours: "9.30".to_string(),
            expected_overtime: 90,
            actual_overtime: 15,
        }
    );
}

#[test]
fn test_late_night_requires_an_application() {
    let data = datasets(
        vec![day("E001", "20250301", "EFS01", "09:00", "00:30", "14.30")],
        vec![],
    );

    assert!(late_night::check(&data.daily, &data.applications, &HashSet::new()).is_empty());
}

#[test]
fn test_late_night_window_after_midnight() {
    let data = datasets(
        vec![day("E001", "20250301", "EFS01", "09:00", "00:30", "14.30")],
        vec![app("E001", "20250301", "80", "4.30", "2.00")],
    );

    let found = late_night::check(&data.daily, &data.applications, &HashSet::new());

    assert_eq!(found.len(), 1);
    assert_eq!(
        found[0].detail,
        FindingDetail::LateNightMismatch {
            end_time: "00:30".to_string(),
            expected_late_night: 150,
            actual_late_night: 120,
        }
    );
}

#[test]
fn test_late_night_consistent_application() {
    let data = datasets(
        vec![day("E001", "20250301", "EFS01", "09:00", "00:30", "14.30")],
        vec![app("E001", "20250301", "80", "4.00", "2.30")],
    );

    assert!(late_night::check(&data.daily, &data.applications, &HashSet::new()).is_empty());
}

#[test]
fn test_late_night_total_mismatch_uses_work_type_application() {
    let data = datasets(
        vec![
            day("E001", "20250301", "EFS01", "09:00", "19:00", "9.00"),
            day("E002", "20250301", "ETW01", "09:00", "19:00", "9.00"),
        ],
        vec![
            // wrong type for the on-site day: ignored
            app("E001", "20250301", "81", "0.10", "0.00"),
            app("E002", "20250301", "81", "0.10", "0.00"),
        ],
    );

    let found = late_night::check(&data.daily, &data.applications, &HashSet::new());

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].employee_code, "E002");
    assert_eq!(
        found[0].detail,
        FindingDetail::OvertimeTotalMismatch {
            work_type: "ETW01".to_string(),
            work_hours: "9.00".to_string(),
            application_type: "81".to_string(),
            expected_overtime: 60,
            actual_overtime: 10,
        }
    );
}

#[test]
fn test_late_night_stage_order_and_exclusion() {
    let data = datasets(
        vec![day("E001", "20250301", "EFS01", "13:00", "23:00", "9.00")],
        vec![app("E001", "20250301", "80", "0.00", "0.00")],
    );

    let found = late_night::check(&data.daily, &data.applications, &HashSet::new());
    assert_eq!(
        types(&found),
        vec![FindingType::OvertimeTotalMismatch, FindingType::LateNightMismatch]
    );

    let excluded: HashSet<RecordKey> = [RecordKey::new("E001", "20250301")].into_iter().collect();
    assert!(late_night::check(&data.daily, &data.applications, &excluded).is_empty());
}

#[test]
fn test_late_night_first_application_wins() {
    let data = datasets(
        vec![day("E001", "20250301", "EFS01", "09:00", "19:00", "9.00")],
        vec![
            app("E001", "20250301", "80", "1.00", "0.00"),
            app("E001", "20250301", "80", "0.10", "0.00"),
        ],
    );

    assert!(late_night::check(&data.daily, &data.applications, &HashSet::new()).is_empty());
}

#[test]
fn test_missing_punch_comment() {
    let mut with_comment = day("E002", "20250301", "EFS01", "0", "18:00", "0.00");
    with_comment[8] = "打刻忘れ".to_string();
    let mut on_vacation = day("E003", "20250301", "EFS01", "0", "0", "0.00");
    on_vacation[6] = "01".to_string();
    let mut unapproved = day("E004", "20250301", "EFS01", "09:00", "0", "0.00");
    unapproved[9] = String::new();

    let data = datasets(
        vec![
            day("E001", "20250301", "EFS01", "0", "18:00", "0.00"),
            with_comment,
            on_vacation,
            unapproved,
            // blank is not the "no punch" sentinel
            day("E005", "20250301", "EFS01", "", "", "0.00"),
        ],
        vec![],
    );
    let passed = all_keys(&data.daily);

    let found = punch_comment::check(&data.daily, &passed);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].employee_code, "E001");
    assert_eq!(
        found[0].detail,
        FindingDetail::MissingPunchComment {
            start_time: "0".to_string(),
            end_time: "18:00".to_string(),
        }
    );
}

#[test]
fn test_missing_punch_comment_limited_to_passed_records() {
    let data = datasets(
        vec![day("E001", "20250301", "EFS01", "0", "18:00", "0.00")],
        vec![],
    );

    assert!(punch_comment::check(&data.daily, &HashSet::new()).is_empty());
}
