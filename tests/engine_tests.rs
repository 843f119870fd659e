mod common;
use common::{APP_HEADER, DAILY_HEADER, app, app_table, daily_table, datasets, day};
use kintai_checker::core::engine::{Datasets, Engine};
use kintai_checker::errors::AppError;
use kintai_checker::models::checks::{Check, EnabledChecks};
use kintai_checker::models::finding::FindingType;
use kintai_checker::models::table::Table;

fn sample() -> Datasets {
    datasets(
        vec![
            day("E001", "20250302", "EFS01", "09:00", "19:00", "9.00"),
            day("E001", "20250301", "EFS01", "09:00", "19:00", "9.00"),
            day("E002", "20250301", "ETW01", "09:00", "19:30", "9.30"),
            day("E003", "20250301", "XYZ", "0", "18:00", "9.00"),
            day("E004", "20250303", "EFS01", "09:00", "23:00", "13.00"),
        ],
        vec![
            app("E001", "20250301", "80", "0.45", "0.00"),
            app("E002", "20250301", "85", "", ""),
            app("E004", "20250303", "80", "5.00", "0.00"),
        ],
    )
}

fn types(data: &Datasets, enabled: EnabledChecks) -> Vec<FindingType> {
    Engine::new(enabled)
        .run(data)
        .iter()
        .map(|f| f.finding_type())
        .collect()
}

#[test]
fn test_all_checks_in_fixed_order() {
    let found = types(&sample(), EnabledChecks::all());

    assert_eq!(
        found,
        vec![
            // classification
            FindingType::InvalidWorkType,
            // overtime presence (E001 0302)
            FindingType::OvertimeApplicationMissing,
            // overtime duration (E001 0301: 60 vs 45)
            FindingType::OvertimeMismatch,
            // remote overtime presence (E002)
            FindingType::RemoteOvertimeApplicationMissing,
            // late night stage A (E001 0301), stage B (E004: 23:00 → 60 vs 0)
            FindingType::OvertimeTotalMismatch,
            FindingType::LateNightMismatch,
        ]
    );
}

#[test]
fn test_classification_disabled_treats_every_record_as_passed() {
    let mut enabled = EnabledChecks::all();
    enabled.set(Check::Classification, false);

    let found = types(&sample(), enabled);

    // E003 (unknown work type) now counts for overtime presence and the
    // missing punch comment check.
    assert_eq!(
        found.iter().filter(|t| **t == FindingType::OvertimeApplicationMissing).count(),
        2
    );
    assert!(found.contains(&FindingType::MissingPunchComment));
    assert!(!found.contains(&FindingType::InvalidWorkType));
}

#[test]
fn test_only_missing_comment_uses_default_passed_set() {
    let found = types(&sample(), EnabledChecks::only(&[Check::MissingComment]));
    assert_eq!(found, vec![FindingType::MissingPunchComment]);
}

#[test]
fn test_late_night_alone_runs_without_exclusions() {
    let found = types(&sample(), EnabledChecks::only(&[Check::LateNight]));
    assert_eq!(
        found,
        vec![FindingType::OvertimeTotalMismatch, FindingType::LateNightMismatch]
    );
}

#[test]
fn test_no_checks_no_findings() {
    assert!(types(&sample(), EnabledChecks::none()).is_empty());
}

#[test]
fn test_huge_durations_do_not_abort_the_run() {
    let data = datasets(
        vec![
            day("E001", "20250301", "EFS01", "09:00", "23:00", "-1e300"),
            day("E002", "20250301", "EFS01", "09:00", "23:00", "1e18"),
        ],
        vec![
            app("E001", "20250301", "80", "1e300", "1e18"),
            app("E002", "20250301", "80", "1e300", "-1e300"),
        ],
    );

    // out-of-range values count as 0 minutes: no day exceeds 8h
    assert!(types(&data, EnabledChecks::all()).is_empty());
}

#[test]
fn test_pipeline_is_idempotent() {
    let data = sample();
    let engine = Engine::new(EnabledChecks::all());
    assert_eq!(engine.run(&data), engine.run(&data));
}

#[test]
fn test_column_order_does_not_matter() {
    let daily = daily_table(vec![
        day("E001", "20250301", "EFS01", "09:00", "19:00", "9.00"),
        day("E002", "20250301", "EFS01", "0", "18:00", "8.00"),
    ]);
    let apps = app_table(vec![app("E009", "20250301", "80", "1.00", "0.00")]);

    let reversed = |t: &Table| Table {
        header: t.header.iter().rev().cloned().collect(),
        rows: t
            .rows
            .iter()
            .map(|r| r.iter().rev().cloned().collect())
            .collect(),
    };

    let engine = Engine::new(EnabledChecks::all());
    let straight = engine.check_tables(&daily, &apps).expect("straight");
    let permuted = engine
        .check_tables(&reversed(&daily), &reversed(&apps))
        .expect("permuted");

    assert_eq!(straight.len(), 2);
    assert_eq!(straight, permuted);
}

#[test]
fn test_missing_required_column_is_fatal() {
    let mut daily = daily_table(vec![day("E001", "20250301", "EFS01", "09:00", "19:00", "9.00")]);
    daily.header[7] = "労働時間".to_string();
    let apps = app_table(vec![]);

    let err = Engine::new(EnabledChecks::all())
        .check_tables(&daily, &apps)
        .unwrap_err();

    match err {
        AppError::ColumnNotFound { table, column } => {
            assert_eq!(table, "daily");
            assert_eq!(column, "実働時間");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_application_column_is_fatal() {
    let daily = daily_table(vec![]);
    let apps = Table {
        header: APP_HEADER[..4].iter().map(|s| s.to_string()).collect(),
        rows: vec![],
    };

    let err = Datasets::from_tables(&daily, &apps).unwrap_err();
    assert!(matches!(
        err,
        AppError::ColumnNotFound { ref column, .. } if column == "深夜勤務時間"
    ));
}

#[test]
fn test_approval_column_is_optional() {
    let header: Vec<String> = DAILY_HEADER[..9].iter().map(|s| s.to_string()).collect();
    let mut row = day("E001", "20250301", "EFS01", "0", "18:00", "8.00");
    row.truncate(9);
    let daily = Table {
        header,
        rows: vec![row],
    };

    let report = Engine::new(EnabledChecks::all())
        .check_tables(&daily, &app_table(vec![]))
        .expect("approval column is optional");

    assert_eq!(report.len(), 1);
    assert_eq!(report.findings()[0].finding_type(), FindingType::MissingPunchComment);
}

#[test]
fn test_header_names_are_trimmed() {
    let mut daily = daily_table(vec![day("E001", "20250301", "EFS01", "09:00", "19:00", "9.00")]);
    daily.header[0] = " 社員コード ".to_string();

    let report = Engine::new(EnabledChecks::all())
        .check_tables(&daily, &app_table(vec![]))
        .expect("trimmed header resolves");
    assert_eq!(report.len(), 1);
}

#[test]
fn test_report_groups_by_date() {
    let report = Engine::new(EnabledChecks::all())
        .check_tables(
            &daily_table(vec![
                day("E001", "20250302", "EFS01", "09:00", "19:00", "9.00"),
                day("E001", "20250301", "XYZ", "09:00", "17:00", "8.00"),
                day("E002", "20250302", "XYZ", "09:00", "17:00", "8.00"),
            ]),
            &app_table(vec![]),
        )
        .expect("report");

    let groups = report.by_date();
    let dates: Vec<&str> = groups.keys().copied().collect();
    assert_eq!(dates, vec!["20250301", "20250302"]);

    let second: Vec<FindingType> = groups["20250302"].iter().map(|f| f.finding_type()).collect();
    assert_eq!(
        second,
        vec![FindingType::InvalidWorkType, FindingType::OvertimeApplicationMissing]
    );

    let sorted: Vec<&str> = report.sorted_by_date().iter().map(|f| f.date.as_str()).collect();
    assert_eq!(sorted, vec!["20250301", "20250302", "20250302"]);

    assert_eq!(report.counts()[&FindingType::InvalidWorkType], 2);
}
