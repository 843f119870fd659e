// src/export/model.rs

use crate::models::finding::Finding;
use serde::Serialize;

/// Flat row used by the CSV and text outputs.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FindingExport {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub employee_code: String,
    pub employee_name: String,
    pub detail: String,
}

impl From<&Finding> for FindingExport {
    fn from(f: &Finding) -> Self {
        let kind = f.finding_type();
        Self {
            date: f.date.clone(),
            kind: kind.as_str().to_string(),
            label: kind.label().to_string(),
            employee_code: f.employee_code.clone(),
            employee_name: f.employee_name.clone(),
            detail: f.describe(),
        }
    }
}

pub(crate) fn finding_to_row(e: &FindingExport) -> Vec<String> {
    vec![
        e.label.clone(),
        e.employee_code.clone(),
        e.employee_name.clone(),
        e.detail.clone(),
    ]
}
