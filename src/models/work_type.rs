use serde::Serialize;

/// 勤務区分 code for a day worked at the office.
pub const ON_SITE_CODE: &str = "EFS01";
/// 勤務区分 code for a remote-work day.
pub const REMOTE_CODE: &str = "ETW01";
/// Every remote work-type code starts with this prefix.
pub const REMOTE_PREFIX: &str = "ETW";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WorkType {
    OnSite, // EFS01
    Remote, // ETW01
}

impl WorkType {
    /// Convert a raw 勤務区分 cell → enum. Unknown or blank codes yield None.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            ON_SITE_CODE => Some(WorkType::OnSite),
            REMOTE_CODE => Some(WorkType::Remote),
            _ => None,
        }
    }
}

pub fn is_remote_family(code: &str) -> bool {
    code.trim().starts_with(REMOTE_PREFIX)
}
