//! チェック0: work-location classification.
//!
//! On-site days pass straight through. Remote days pass only with a remote
//! work declaration (85) for the same employee and date. Any other non-blank
//! work type is reported.

use crate::models::application::{ApplicationRecord, ApplicationType, find_application};
use crate::models::daily::DailyRecord;
use crate::models::finding::{Finding, FindingDetail};
use crate::models::record_key::RecordKey;
use crate::models::work_type::WorkType;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub findings: Vec<Finding>,
    /// Records eligible for the on-site overtime checks.
    pub on_site: HashSet<RecordKey>,
    /// Records eligible for the remote overtime checks.
    pub remote: HashSet<RecordKey>,
}

impl Classification {
    /// Stand-in used when the classification check is disabled:
    /// every record is treated as classified.
    pub fn unchecked(daily: &[DailyRecord]) -> Self {
        let all = super::all_keys(daily);
        Self {
            findings: Vec::new(),
            on_site: all.clone(),
            remote: all,
        }
    }

    /// Union of on-site and remote passes.
    pub fn passed(&self) -> HashSet<RecordKey> {
        self.on_site.union(&self.remote).cloned().collect()
    }
}

pub fn check(daily: &[DailyRecord], applications: &[ApplicationRecord]) -> Classification {
    let mut out = Classification::default();

    for record in daily.iter().filter(|r| !r.work_type.is_empty()) {
        match WorkType::from_code(&record.work_type) {
            Some(WorkType::OnSite) => {
                out.on_site.insert(record.key());
            }
            Some(WorkType::Remote) => {
                let declared = find_application(
                    applications,
                    &record.employee_code,
                    &record.date,
                    ApplicationType::RemoteDeclaration,
                );
                if declared.is_some() {
                    out.remote.insert(record.key());
                } else {
                    out.findings.push(Finding::for_record(
                        record,
                        FindingDetail::RemoteWorkDeclarationMissing {
                            work_type: record.work_type.clone(),
                        },
                    ));
                }
            }
            None => out.findings.push(Finding::for_record(
                record,
                FindingDetail::InvalidWorkType {
                    work_type: record.work_type.clone(),
                },
            )),
        }
    }

    out
}
