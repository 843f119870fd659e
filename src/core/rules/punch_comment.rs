//! Days with a missing punch (`"0"` start or end time) must carry a comment.
//! Only worked, approved, non-vacation days that passed classification count.

use crate::models::daily::DailyRecord;
use crate::models::finding::{Finding, FindingDetail};
use crate::models::record_key::RecordKey;
use std::collections::HashSet;

fn in_scope(record: &DailyRecord) -> bool {
    let approved = record
        .approval_status
        .as_deref()
        .is_none_or(|s| !s.is_empty());
    !record.work_type.is_empty() && approved && record.vacation.is_empty()
}

pub fn check(daily: &[DailyRecord], passed: &HashSet<RecordKey>) -> Vec<Finding> {
    daily
        .iter()
        .filter(|r| in_scope(r))
        .filter(|r| passed.contains(&r.key()))
        .filter(|r| r.has_missing_punch() && r.comment.is_empty())
        .map(|r| {
            Finding::for_record(
                r,
                FindingDetail::MissingPunchComment {
                    start_time: r.start_time.clone(),
                    end_time: r.end_time.clone(),
                },
            )
        })
        .collect()
}
