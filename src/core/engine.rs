//! Runs the enabled checks in their fixed order and threads the two pieces
//! of carry-state between them:
//! - the classification result (which days passed チェック0)
//! - the days reported as missing an overtime application
//!
//! Both are produced even when their own check is disabled, so downstream
//! checks always see a value.

use crate::core::report::Report;
use crate::core::rules::{self, classification, late_night, overtime, punch_comment};
use crate::core::rules::classification::Classification;
use crate::core::rules::overtime::OvertimeKind;
use crate::errors::AppResult;
use crate::models::application::{ApplicationRecord, load_applications};
use crate::models::checks::{Check, EnabledChecks};
use crate::models::daily::{DailyRecord, load_daily};
use crate::models::finding::Finding;
use crate::models::record_key::RecordKey;
use crate::models::table::Table;
use std::collections::HashSet;
use tracing::{debug, info};

/// Both input tables with their columns resolved, ready for the checks.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub daily: Vec<DailyRecord>,
    pub applications: Vec<ApplicationRecord>,
}

impl Datasets {
    /// Resolve every required column of both tables. Fails before any check
    /// runs if one is missing.
    pub fn from_tables(daily: &Table, applications: &Table) -> AppResult<Self> {
        let daily = load_daily(daily)?;
        let applications = load_applications(applications)?;
        info!(
            daily = daily.len(),
            applications = applications.len(),
            "datasets loaded"
        );
        Ok(Self {
            daily,
            applications,
        })
    }
}

pub struct Engine {
    enabled: EnabledChecks,
}

impl Engine {
    pub fn new(enabled: EnabledChecks) -> Self {
        Self { enabled }
    }

    /// Resolve both tables and run every enabled check.
    pub fn check_tables(&self, daily: &Table, applications: &Table) -> AppResult<Report> {
        let data = Datasets::from_tables(daily, applications)?;
        Ok(Report::new(self.run(&data)))
    }

    pub fn run(&self, data: &Datasets) -> Vec<Finding> {
        let daily = data.daily.as_slice();
        let apps = data.applications.as_slice();
        let mut findings = Vec::new();

        let classified = if self.enabled.is_enabled(Check::Classification) {
            let c = classification::check(daily, apps);
            self.record(Check::Classification, &mut findings, c.findings.clone());
            c
        } else {
            self.skipped(Check::Classification);
            Classification::unchecked(daily)
        };

        let overtime_missing: HashSet<RecordKey> =
            if self.enabled.is_enabled(Check::OvertimePresence) {
                let found =
                    overtime::check_presence(daily, apps, &classified.on_site, OvertimeKind::OnSite);
                let keys = found
                    .iter()
                    .map(|f| RecordKey::new(&f.employee_code, &f.date))
                    .collect();
                self.record(Check::OvertimePresence, &mut findings, found);
                keys
            } else {
                self.skipped(Check::OvertimePresence);
                HashSet::new()
            };

        if self.enabled.is_enabled(Check::OvertimeDuration) {
            let found = overtime::check_duration(daily, apps, OvertimeKind::OnSite);
            self.record(Check::OvertimeDuration, &mut findings, found);
        } else {
            self.skipped(Check::OvertimeDuration);
        }

        if self.enabled.is_enabled(Check::RemoteOvertimePresence) {
            let found =
                overtime::check_presence(daily, apps, &classified.remote, OvertimeKind::Remote);
            self.record(Check::RemoteOvertimePresence, &mut findings, found);
        } else {
            self.skipped(Check::RemoteOvertimePresence);
        }

        if self.enabled.is_enabled(Check::RemoteOvertimeDuration) {
            let found = overtime::check_duration(daily, apps, OvertimeKind::Remote);
            self.record(Check::RemoteOvertimeDuration, &mut findings, found);
        } else {
            self.skipped(Check::RemoteOvertimeDuration);
        }

        if self.enabled.is_enabled(Check::LateNight) {
            let found = late_night::check(daily, apps, &overtime_missing);
            self.record(Check::LateNight, &mut findings, found);
        } else {
            self.skipped(Check::LateNight);
        }

        if self.enabled.is_enabled(Check::MissingComment) {
            let found = punch_comment::check(daily, &classified.passed());
            self.record(Check::MissingComment, &mut findings, found);
        } else {
            self.skipped(Check::MissingComment);
        }

        debug!(
            total = findings.len(),
            records = rules::all_keys(daily).len(),
            "all checks finished"
        );
        findings
    }

    fn record(&self, check: Check, all: &mut Vec<Finding>, found: Vec<Finding>) {
        info!(check = check.as_str(), findings = found.len(), "check finished");
        all.extend(found);
    }

    fn skipped(&self, check: Check) {
        debug!(check = check.as_str(), "check disabled");
    }
}
