#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use kintai_checker::core::engine::Datasets;
use kintai_checker::models::table::Table;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DAILY_HEADER: [&str; 10] = [
    "社員コード",
    "氏名",
    "年月日",
    "勤務区分",
    "出勤時刻",
    "退勤時刻",
    "休暇区分",
    "実働時間",
    "コメント",
    "承認状況",
];

pub const APP_HEADER: [&str; 5] = [
    "社員コード",
    "対象年月日",
    "届出区分",
    "深夜残業時間",
    "深夜勤務時間",
];

pub fn kc() -> Command {
    cargo_bin_cmd!("kintai-checker")
}

fn strings(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

/// Approved, worked, non-vacation day with no comment.
pub fn day(emp: &str, date: &str, work_type: &str, start: &str, end: &str, hours: &str) -> Vec<String> {
    strings(&[emp, "山田太郎", date, work_type, start, end, "", hours, "", "承認済"])
}

pub fn app(emp: &str, date: &str, kind: &str, overtime: &str, late_night: &str) -> Vec<String> {
    strings(&[emp, date, kind, overtime, late_night])
}

pub fn daily_table(rows: Vec<Vec<String>>) -> Table {
    Table {
        header: strings(&DAILY_HEADER),
        rows,
    }
}

pub fn app_table(rows: Vec<Vec<String>>) -> Table {
    Table {
        header: strings(&APP_HEADER),
        rows,
    }
}

pub fn datasets(daily: Vec<Vec<String>>, apps: Vec<Vec<String>>) -> Datasets {
    Datasets::from_tables(&daily_table(daily), &app_table(apps)).expect("columns resolve")
}

/// Create a temporary file path inside the system temp dir and remove any existing file
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_kintai.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

fn to_csv(table: &Table) -> String {
    let mut out = table.header.join(",");
    out.push('\n');
    for row in &table.rows {
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Write both tables as CSV files; returns (daily path, application path).
pub fn write_inputs(name: &str, daily: &Table, apps: &Table) -> (String, String) {
    let d = temp_path(&format!("{name}_daily"), "csv");
    let a = temp_path(&format!("{name}_apps"), "csv");
    fs::write(&d, to_csv(daily)).expect("write daily csv");
    fs::write(&a, to_csv(apps)).expect("write application csv");
    (d, a)
}

/// Config path that does not exist, so every check runs with defaults.
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{name}_config"), "yaml")
}
