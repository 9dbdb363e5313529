use super::submission::SubmissionKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConferenceKind {
    Engineering,
    Medical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConferenceRecurrence {
    Annual,
    Biennial,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conference {
    pub id: String,
    pub name: String,
    pub kind: ConferenceKind,
    pub recurrence: ConferenceRecurrence,
    /// Absent kinds imply "not accepted here".
    #[serde(default)]
    pub deadlines: HashMap<SubmissionKind, NaiveDate>,
}

impl Conference {
    pub fn deadline_for(&self, kind: SubmissionKind) -> Option<NaiveDate> {
        self.deadlines.get(&kind).copied()
    }
}
