//! Finding collection handed to the renderers.
//!
//! Findings keep check order; `by_date` is the display order (dates
//! ascending as plain strings, check order inside a date).

use crate::models::finding::{Finding, FindingType};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    findings: Vec<Finding>,
}

impl Report {
    pub fn new(findings: Vec<Finding>) -> Self {
        Self { findings }
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Findings sorted by date; stable, so check order is kept per date.
    pub fn sorted_by_date(&self) -> Vec<&Finding> {
        let mut out: Vec<&Finding> = self.findings.iter().collect();
        out.sort_by(|a, b| a.date.cmp(&b.date));
        out
    }

    pub fn by_date(&self) -> BTreeMap<&str, Vec<&Finding>> {
        let mut groups: BTreeMap<&str, Vec<&Finding>> = BTreeMap::new();
        for f in &self.findings {
            groups.entry(f.date.as_str()).or_default().push(f);
        }
        groups
    }

    pub fn counts(&self) -> BTreeMap<FindingType, usize> {
        let mut counts = BTreeMap::new();
        for f in &self.findings {
            *counts.entry(f.finding_type()).or_insert(0) += 1;
        }
        counts
    }
}
