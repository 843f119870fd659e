//! The checks. Each one is a pure function over the two record sets
//! (plus any carry-state handed over by the engine) returning its findings.

pub mod classification;
pub mod late_night;
pub mod overtime;
pub mod punch_comment;

use crate::models::daily::DailyRecord;
use crate::models::record_key::RecordKey;
use std::collections::HashSet;

/// Every (employee, date) pair present in the daily table.
pub fn all_keys(daily: &[DailyRecord]) -> HashSet<RecordKey> {
    daily.iter().map(DailyRecord::key).collect()
}
