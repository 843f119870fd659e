use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The seven checks, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Check {
    Classification,
    OvertimePresence,
    OvertimeDuration,
    RemoteOvertimePresence,
    RemoteOvertimeDuration,
    LateNight,
    MissingComment,
}

impl Check {
    pub const ALL: [Check; 7] = [
        Check::Classification,
        Check::OvertimePresence,
        Check::OvertimeDuration,
        Check::RemoteOvertimePresence,
        Check::RemoteOvertimeDuration,
        Check::LateNight,
        Check::MissingComment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Check::Classification => "classification",
            Check::OvertimePresence => "overtime-presence",
            Check::OvertimeDuration => "overtime-duration",
            Check::RemoteOvertimePresence => "remote-overtime-presence",
            Check::RemoteOvertimeDuration => "remote-overtime-duration",
            Check::LateNight => "late-night",
            Check::MissingComment => "missing-comment",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Check::Classification => "勤務区分チェック",
            Check::OvertimePresence => "残業申請チェック",
            Check::OvertimeDuration => "残業時間チェック",
            Check::RemoteOvertimePresence => "在宅残業申請チェック",
            Check::RemoteOvertimeDuration => "在宅残業時間チェック",
            Check::LateNight => "深夜時間チェック",
            Check::MissingComment => "打刻漏れコメントチェック",
        }
    }
}

fn enabled() -> bool {
    true
}

/// One toggle per check. Missing keys in the config file default to enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnabledChecks {
    #[serde(default = "enabled")]
    pub classification: bool,
    #[serde(default = "enabled")]
    pub overtime_presence: bool,
    #[serde(default = "enabled")]
    pub overtime_duration: bool,
    #[serde(default = "enabled")]
    pub remote_overtime_presence: bool,
    #[serde(default = "enabled")]
    pub remote_overtime_duration: bool,
    #[serde(default = "enabled")]
    pub late_night: bool,
    #[serde(default = "enabled")]
    pub missing_comment: bool,
}

impl Default for EnabledChecks {
    fn default() -> Self {
        Self::all()
    }
}

impl EnabledChecks {
    pub fn all() -> Self {
        Self {
            classification: true,
            overtime_presence: true,
            overtime_duration: true,
            remote_overtime_presence: true,
            remote_overtime_duration: true,
            late_night: true,
            missing_comment: true,
        }
    }

    pub fn none() -> Self {
        Self {
            classification: false,
            overtime_presence: false,
            overtime_duration: false,
            remote_overtime_presence: false,
            remote_overtime_duration: false,
            late_night: false,
            missing_comment: false,
        }
    }

    pub fn only(checks: &[Check]) -> Self {
        let mut out = Self::none();
        for check in checks {
            out.set(*check, true);
        }
        out
    }

    pub fn is_enabled(&self, check: Check) -> bool {
        *self.slot(check)
    }

    pub fn set(&mut self, check: Check, value: bool) {
        *self.slot_mut(check) = value;
    }

    pub fn enabled_list(&self) -> Vec<Check> {
        Check::ALL
            .into_iter()
            .filter(|c| self.is_enabled(*c))
            .collect()
    }

    fn slot(&self, check: Check) -> &bool {
        match check {
            Check::Classification => &self.classification,
            Check::OvertimePresence => &self.overtime_presence,
            Check::OvertimeDuration => &self.overtime_duration,
            Check::RemoteOvertimePresence => &self.remote_overtime_presence,
            Check::RemoteOvertimeDuration => &self.remote_overtime_duration,
            Check::LateNight => &self.late_night,
            Check::MissingComment => &self.missing_comment,
        }
    }

    fn slot_mut(&mut self, check: Check) -> &mut bool {
        match check {
            Check::Classification => &mut self.classification,
            Check::OvertimePresence => &mut self.overtime_presence,
            Check::OvertimeDuration => &mut self.overtime_duration,
            Check::RemoteOvertimePresence => &mut self.remote_overtime_presence,
            Check::RemoteOvertimeDuration => &mut self.remote_overtime_duration,
            Check::LateNight => &mut self.late_night,
            Check::MissingComment => &mut self.missing_comment,
        }
    }
}
