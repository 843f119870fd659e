//! Clock utilities: parsing HH:MM (24+ hour clock allowed), overnight
//! normalization and the late-night window.

use chrono::{NaiveTime, Timelike};

/// Late-night window start, 22:00.
pub const LATE_NIGHT_START: i64 = 22 * 60;
/// Late-night window end (exclusive), 29:00 = 05:00 the next morning.
pub const LATE_NIGHT_END: i64 = 29 * 60;
/// End times before 05:00 belong to the following early morning.
const NEXT_DAY_CUTOFF: i64 = 5 * 60;

/// `"18:45"` → 1125. Hours above 23 (`"25:30"`) are accepted as written.
pub fn parse_clock(t: &str) -> Option<i64> {
    let t = t.trim();
    if let Ok(time) = NaiveTime::parse_from_str(t, "%H:%M") {
        return Some(time.hour() as i64 * 60 + time.minute() as i64);
    }

    let (h, m) = t.split_once(':')?;
    let hours: i64 = h.parse().ok()?;
    let minutes: i64 = m.parse().ok()?;
    if hours < 0 || !(0..60).contains(&minutes) || m.len() != 2 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// `00:30` → `24:30`; anything from 05:00 on is left alone.
pub fn normalize_overnight(minutes: i64) -> i64 {
    if minutes < NEXT_DAY_CUTOFF {
        minutes + 24 * 60
    } else {
        minutes
    }
}

/// Late-night minutes implied by an end time, or `None` when the end time
/// is unparsable or falls outside [22:00, 29:00).
pub fn late_night_minutes(end_time: &str) -> Option<i64> {
    let end = normalize_overnight(parse_clock(end_time)?);
    if (LATE_NIGHT_START..LATE_NIGHT_END).contains(&end) {
        Some((end - LATE_NIGHT_START).max(0))
    } else {
        None
    }
}
