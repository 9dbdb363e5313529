//! Constraint validators.
//!
//! Each validator returns violations as tagged primitives (no object
//! graphs), aggregated by [`validate_schedule_constraints`] into a single
//! [`ValidationResult`]. `ValidationMetadata` is an explicit, fully typed
//! struct rather than a loose string-keyed map, so every field is named
//! and defaulted at compile time.

pub mod blackout;
pub mod constants;
pub mod deadline;
pub mod dependencies;
pub mod resources;

use crate::model::{Config, Schedule};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Violation {
    Deadline { submission_id: String, end: NaiveDate, deadline: NaiveDate, days_late: i64 },
    UnknownDependency { submission_id: String, dependency_id: String },
    MissingParent { submission_id: String, dependency_id: String },
    DependencyOrdering {
        submission_id: String,
        dependency_id: String,
        required_start: NaiveDate,
        actual_start: NaiveDate,
    },
    Resource { day: NaiveDate, count: usize, limit: usize },
    BlackoutStart { submission_id: String, start: NaiveDate },
}

impl Violation {
    pub fn is_deadline(&self) -> bool {
        matches!(self, Violation::Deadline { .. })
    }

    pub fn is_dependency(&self) -> bool {
        matches!(
            self,
            Violation::UnknownDependency { .. }
                | Violation::MissingParent { .. }
                | Violation::DependencyOrdering { .. }
        )
    }

    pub fn is_resource(&self) -> bool {
        matches!(self, Violation::Resource { .. })
    }

    pub fn is_blackout(&self) -> bool {
        matches!(self, Violation::BlackoutStart { .. })
    }

    /// The submission this violation is attributed to, when it names one
    /// (resource-day violations are not attributed to a single submission).
    pub fn submission_id(&self) -> Option<&str> {
        match self {
            Violation::Deadline { submission_id, .. }
            | Violation::UnknownDependency { submission_id, .. }
            | Violation::MissingParent { submission_id, .. }
            | Violation::DependencyOrdering { submission_id, .. }
            | Violation::BlackoutStart { submission_id, .. } => Some(submission_id),
            Violation::Resource { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationMetadata {
    pub total_submissions: usize,
    pub compliance_rate: f64,
    pub utilization_rate: f64,
    pub blackout_compliance_rate: f64,
    pub compatibility_rate: f64,
    pub max_observed_load: usize,
    /// Submissions whose interval spans a blackout day without starting on
    /// one; informational only, populated when
    /// `scheduling_options.enable_blackout_periods` is set.
    pub blackout_interior_spans: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violations: Vec<Violation>,
    pub metadata: ValidationMetadata,
}

/// Runs all four validators and aggregates their violations and metadata
/// into one composite result.
pub fn validate_schedule_constraints(schedule: &Schedule, config: &Config) -> ValidationResult {
    let mut violations = Vec::new();

    violations.extend(deadline::check(schedule, config));
    violations.extend(dependencies::check(schedule, config));
    let (resource_violations, max_observed_load) = resources::check(schedule, config);
    violations.extend(resource_violations);
    let (blackout_violations, blackout_interior_spans) = blackout::check(schedule, config);
    violations.extend(blackout_violations);

    let total_submissions = config.submissions.len();
    let metadata = build_metadata(
        schedule,
        config,
        &violations,
        max_observed_load,
        blackout_interior_spans,
        total_submissions,
    );

    ValidationResult { is_valid: violations.is_empty(), violations, metadata }
}

fn build_metadata(
    schedule: &Schedule,
    config: &Config,
    violations: &[Violation],
    max_observed_load: usize,
    blackout_interior_spans: usize,
    total_submissions: usize,
) -> ValidationMetadata {
    if total_submissions == 0 {
        return ValidationMetadata::default();
    }

    let mut non_compliant = std::collections::HashSet::new();
    let mut blackout_violation_count = 0usize;
    for v in violations {
        if let Some(id) = v.submission_id() {
            non_compliant.insert(id.to_string());
        }
        if v.is_blackout() {
            blackout_violation_count += 1;
        }
    }
    let compliance_rate = 1.0 - (non_compliant.len() as f64 / total_submissions as f64);
    let blackout_compliance_rate = 1.0 - (blackout_violation_count as f64 / total_submissions as f64);

    let utilization_rate = if config.max_concurrent_submissions > 0 && !schedule.is_empty() {
        let avg_load = average_daily_load(schedule);
        avg_load / config.max_concurrent_submissions as f64
    } else {
        0.0
    };

    let compatible = config
        .submissions
        .iter()
        .filter(|s| match &s.conference_id {
            None => true,
            Some(conf_id) => config
                .get_conference(conf_id)
                .map(|c| c.deadline_for(s.kind).is_some())
                .unwrap_or(false),
        })
        .count();
    let compatibility_rate = compatible as f64 / total_submissions as f64;

    ValidationMetadata {
        total_submissions,
        compliance_rate,
        utilization_rate,
        blackout_compliance_rate,
        compatibility_rate,
        max_observed_load,
        blackout_interior_spans,
    }
}

fn average_daily_load(schedule: &Schedule) -> f64 {
    use std::collections::HashMap;
    let mut daily_load: HashMap<NaiveDate, usize> = HashMap::new();
    for (_, interval) in schedule.iter() {
        let mut day = interval.start_date;
        while day < interval.end_date {
            *daily_load.entry(day).or_insert(0) += 1;
            day = day.succ_opt().expect("date overflow");
        }
    }
    if daily_load.is_empty() {
        return 0.0;
    }
    daily_load.values().sum::<usize>() as f64 / daily_load.len() as f64
}
