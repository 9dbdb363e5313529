use super::conference::Conference;
use super::submission::Submission;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// `{enable_early_abstract_scheduling, abstract_advance_days, enable_blackout_periods}`,
/// an explicit, fully typed, fully defaulted record rather than a loosely
/// shaped optional sub-object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulingOptions {
    pub enable_early_abstract_scheduling: bool,
    pub abstract_advance_days: i64,
    pub enable_blackout_periods: bool,
}

impl Default for SchedulingOptions {
    fn default() -> Self {
        Self {
            enable_early_abstract_scheduling: false,
            abstract_advance_days: crate::constants::SCHEDULING.abstract_advance_days,
            enable_blackout_periods: true,
        }
    }
}

/// `{engineering_paper, medical_paper, abstract, mod}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityWeights {
    pub engineering_paper: f64,
    pub medical_paper: f64,
    #[serde(rename = "abstract")]
    pub abstract_: f64,
    #[serde(rename = "mod")]
    pub mod_: f64,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self { engineering_paper: 1.0, medical_paper: 1.0, abstract_: 1.0, mod_: 1.0 }
    }
}

impl PriorityWeights {
    /// Looks a weight up by `kind_key`
    /// (`engineering_paper` / `medical_paper` / `abstract` / `mod`),
    /// defaulting to `SCHEDULING.default_priority_weight` for anything else.
    pub fn get(&self, kind_key: &str) -> f64 {
        match kind_key {
            "engineering_paper" => self.engineering_paper,
            "medical_paper" => self.medical_paper,
            "abstract" => self.abstract_,
            "mod" => self.mod_,
            _ => crate::constants::SCHEDULING.default_priority_weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub submissions: Vec<Submission>,
    pub conferences: Vec<Conference>,
    pub min_paper_lead_time_days: i64,
    pub min_abstract_lead_time_days: i64,
    pub max_concurrent_submissions: usize,
    pub blackout_dates: BTreeSet<NaiveDate>,
    pub scheduling_options: SchedulingOptions,
    pub priority_weights: PriorityWeights,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            submissions: Vec::new(),
            conferences: Vec::new(),
            min_paper_lead_time_days: 30,
            min_abstract_lead_time_days: 14,
            max_concurrent_submissions: 1,
            blackout_dates: BTreeSet::new(),
            scheduling_options: SchedulingOptions::default(),
            priority_weights: PriorityWeights::default(),
        }
    }
}

impl Config {
    pub fn submissions_by_id(&self) -> HashMap<&str, &Submission> {
        self.submissions.iter().map(|s| (s.id.as_str(), s)).collect()
    }

    pub fn conferences_by_id(&self) -> HashMap<&str, &Conference> {
        self.conferences.iter().map(|c| (c.id.as_str(), c)).collect()
    }

    pub fn get_submission(&self, id: &str) -> Option<&Submission> {
        self.submissions.iter().find(|s| s.id == id)
    }

    pub fn get_conference(&self, id: &str) -> Option<&Conference> {
        self.conferences.iter().find(|c| c.id == id)
    }
}
