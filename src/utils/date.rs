use chrono::{Datelike, NaiveDate, Weekday};

/// Date layouts seen in attendance exports. Dates stay strings everywhere
/// else; this is only used to decorate report headings.
const DATE_FORMATS: [&str; 3] = ["%Y%m%d", "%Y-%m-%d", "%Y/%m/%d"];

pub fn parse_loose(s: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s.trim(), fmt).ok())
}

pub fn weekday_ja(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Mon => "月",
        Weekday::Tue => "火",
        Weekday::Wed => "水",
        Weekday::Thu => "木",
        Weekday::Fri => "金",
        Weekday::Sat => "土",
        Weekday::Sun => "日",
    }
}

/// `"20250301"` → `"20250301 (土)"`; unknown layouts are returned untouched.
pub fn with_weekday(s: &str) -> String {
    match parse_loose(s) {
        Some(d) => format!("{} ({})", s, weekday_ja(d.weekday())),
        None => s.to_string(),
    }
}
