use serde::Serialize;
use std::fmt;

/// Identity used to cross-reference daily records and applications:
/// exact employee code plus exact date string, no normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RecordKey {
    pub employee_code: String,
    pub date: String,
}

impl RecordKey {
    pub fn new(employee_code: &str, date: &str) -> Self {
        Self {
            employee_code: employee_code.to_string(),
            date: date.to_string(),
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.employee_code, self.date)
    }
}
