//! Sexagesimal durations: `8.30` is 8h30m, never 8.3 hours.
//!
//! Every duration comparison in the checks goes through `to_minutes`.

use tracing::debug;

pub const STANDARD_DAY_MINUTES: i64 = 8 * 60;

/// Differences up to this many minutes are treated as equal.
pub const TOLERANCE_MINUTES: i64 = 1;

/// Durations beyond this many hours (either sign) are treated as unparsable.
/// Keeps every minute value, and any difference of two, far inside `i64`.
pub const MAX_DURATION_HOURS: f64 = 1_000_000.0;

/// `"8.30"` → 510. Blank or unparsable input is 0 minutes.
pub fn to_minutes(value: &str) -> i64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return 0;
    }

    let parsed = match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v.abs() <= MAX_DURATION_HOURS => v,
        _ => {
            debug!(value = trimmed, "unparsable duration, counting as 0 minutes");
            return 0;
        }
    };

    let hours = parsed.floor();
    let minutes = ((parsed - hours) * 100.0).round();
    hours as i64 * 60 + minutes as i64
}

/// 510 → 8.30
pub fn to_sexagesimal(minutes: i64) -> f64 {
    let hours = minutes.div_euclid(60);
    let rest = minutes.rem_euclid(60);
    hours as f64 + rest as f64 / 100.0
}

/// 510 → "8.30", -15 → "-0.15"
pub fn format_minutes_sexagesimal(minutes: i64) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let m = minutes.abs();
    format!("{}{}.{:02}", sign, m / 60, m % 60)
}

/// Minutes worked beyond the standard 8h day; 0 when not over.
pub fn overtime_minutes(work_hours: &str) -> i64 {
    (to_minutes(work_hours) - STANDARD_DAY_MINUTES).max(0)
}

pub fn exceeds_standard_day(work_hours: &str) -> bool {
    to_minutes(work_hours) > STANDARD_DAY_MINUTES
}

pub fn within_tolerance(expected: i64, actual: i64) -> bool {
    (expected - actual).abs() <= TOLERANCE_MINUTES
}
