//! Quality score: `calculate_quality_score` blends deadline/dependency/
//! resource compliance with an optional metadata add-on, and
//! `calculate_quality_robustness` / `calculate_quality_balance` expose the
//! supporting sub-metrics separately.
//!
//! The add-on is a 30%-weighted blend on top of the base score, so this
//! uses dedicated `quality_base_weight` / `quality_additional_weight`
//! constants (0.7 / 0.3) rather than reusing `quality_deadline_weight` and
//! `quality_dependency_weight` as blend weights — those two already sum to
//! 0.8 for a different purpose (how much each sub-score counts toward the
//! base), and conflating the two would silently drop 20% of the add-on's
//! intended weight.

use submission_planner::validation::validate_schedule_constraints;
use submission_planner::{constants::{QUALITY, REPORT, SCORING}, Config, Schedule};

/// Deadline/dependency/resource compliance, folded with blackout,
/// compatibility, and utilization metadata when the schedule carries it.
/// Empty schedules score `REPORT.min_score`.
pub fn calculate_quality_score(schedule: &Schedule, config: &Config) -> f64 {
    let max_score = REPORT.max_score;
    let min_score = REPORT.min_score;

    if schedule.is_empty() {
        return min_score;
    }

    let result = validate_schedule_constraints(schedule, config);
    let total_submissions = result.metadata.total_submissions.max(1) as f64;

    let (mut deadline_score, mut dependency_score, mut resource_score) = (max_score, max_score, max_score);
    if !result.violations.is_empty() {
        let deadline_violations = result.violations.iter().filter(|v| v.is_deadline()).count() as f64;
        let dependency_violations = result.violations.iter().filter(|v| v.is_dependency()).count() as f64;
        let resource_violations = result.violations.iter().filter(|v| v.is_resource()).count() as f64;

        deadline_score = (max_score - deadline_violations / total_submissions * max_score).max(min_score);
        dependency_score = (max_score - dependency_violations / total_submissions * max_score).max(min_score);
        resource_score = (max_score - resource_violations / total_submissions * max_score).max(min_score);
    }

    let base_score = deadline_score * SCORING.quality_deadline_weight
        + dependency_score * SCORING.quality_dependency_weight
        + resource_score * SCORING.quality_resource_weight;

    // The original only folds blackout/compatibility/utilization metadata in
    // when the validator happened to populate it; this model always
    // computes all three in `build_metadata`, so the add-on always applies
    // once any submissions exist.
    let metadata = &result.metadata;
    let additional_factors = [
        metadata.blackout_compliance_rate * QUALITY.percentage_multiplier,
        metadata.compatibility_rate * QUALITY.percentage_multiplier,
        metadata.utilization_rate.min(1.0) * QUALITY.percentage_multiplier,
    ];
    let additional_score = additional_factors.iter().sum::<f64>() / additional_factors.len() as f64;
    let quality_score = base_score * SCORING.quality_base_weight + additional_score * SCORING.quality_additional_weight;

    quality_score.clamp(min_score, max_score)
}

/// Average inter-submission slack, scaled into a 0-100 robustness figure
///. A single submission has no neighbor to leave slack
/// against, so it gets the fixed `single_submission_robustness` score.
pub fn calculate_quality_robustness(schedule: &Schedule, config: &Config) -> f64 {
    let min_score = REPORT.min_score;
    let max_score = REPORT.max_score;

    if schedule.is_empty() {
        return min_score;
    }
    if schedule.len() < 2 {
        return QUALITY.single_submission_robustness;
    }

    let total_slack = total_slack_days(schedule, config) as f64;
    let avg_slack = total_slack / (schedule.len() - 1) as f64;
    let robustness_score = (avg_slack * QUALITY.robustness_scale_factor).min(max_score);

    robustness_score.max(min_score)
}

fn total_slack_days(schedule: &Schedule, config: &Config) -> i64 {
    let mut ordered: Vec<(&String, &submission_planner::Interval)> = schedule.iter().collect();
    ordered.sort_by_key(|(_, interval)| interval.start_date);

    let mut total_slack = 0i64;
    for pair in ordered.windows(2) {
        let (current_id, current_interval) = pair[0];
        let (_, next_interval) = pair[1];
        let Some(current_sub) = config.get_submission(current_id) else { continue };
        let current_end = current_interval.start_date + chrono::Duration::days(current_sub.duration_days(config));
        let slack_days = (next_interval.start_date - current_end).num_days();
        if slack_days > 0 {
            total_slack += slack_days;
        }
    }
    total_slack
}

/// Variance-based daily-load balance: lower variance around
/// the mean concurrent load scores higher.
pub fn calculate_quality_balance(schedule: &Schedule, config: &Config) -> f64 {
    let min_score = REPORT.min_score;
    let max_score = REPORT.max_score;

    if schedule.is_empty() {
        return min_score;
    }

    let mut daily_work: std::collections::BTreeMap<chrono::NaiveDate, usize> = std::collections::BTreeMap::new();
    for (id, interval) in schedule.iter() {
        let Some(submission) = config.get_submission(id) else { continue };
        let duration = submission.duration_days(config);
        for i in 0..duration {
            let day = interval.start_date + chrono::Duration::days(i);
            *daily_work.entry(day).or_insert(0) += 1;
        }
    }
    if daily_work.is_empty() {
        return min_score;
    }

    let work_values: Vec<f64> = daily_work.values().map(|&v| v as f64).collect();
    let avg_work = work_values.iter().sum::<f64>() / work_values.len() as f64;
    if avg_work == 0.0 {
        return QUALITY.single_submission_balance;
    }

    let variance = if work_values.len() > 1 {
        let mean = avg_work;
        work_values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (work_values.len() - 1) as f64
    } else {
        0.0
    };
    let balance_score = (max_score - (variance / avg_work) * QUALITY.balance_variance_factor).max(min_score);

    balance_score.min(max_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use submission_planner::model::{Conference, ConferenceKind, ConferenceRecurrence, Submission, SubmissionKind};
    use std::collections::HashMap;

    fn d(y: i32, m: u32, day: u32) -> chrono::NaiveDate {
        chrono::NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn empty_schedule_scores_minimum() {
        let config = Config::default();
        let schedule = Schedule::new();
        assert_eq!(calculate_quality_score(&schedule, &config), REPORT.min_score);
        assert_eq!(calculate_quality_robustness(&schedule, &config), REPORT.min_score);
        assert_eq!(calculate_quality_balance(&schedule, &config), REPORT.min_score);
    }

    #[test]
    fn fully_compliant_schedule_scores_the_maximum_base() {
        let mut deadlines = HashMap::new();
        deadlines.insert(SubmissionKind::Paper, d(2026, 6, 1));
        let config = Config {
            submissions: vec![Submission::new("p1", "t", SubmissionKind::Paper).with_conference("c1")],
            conferences: vec![Conference {
                id: "c1".into(),
                name: "conf".into(),
                kind: ConferenceKind::Engineering,
                recurrence: ConferenceRecurrence::Annual,
                deadlines,
            }],
            max_concurrent_submissions: 1,
            min_paper_lead_time_days: 30,
            ..Default::default()
        };
        let mut schedule = Schedule::new();
        schedule.add_interval("p1", d(2026, 1, 5), 30);

        let score = calculate_quality_score(&schedule, &config);
        assert!(score > 90.0, "expected a near-maximal score, got {score}");
    }

    #[test]
    fn single_submission_gets_the_fixed_robustness_score() {
        let config = Config {
            submissions: vec![Submission::new("p1", "t", SubmissionKind::Paper)],
            min_paper_lead_time_days: 30,
            ..Default::default()
        };
        let mut schedule = Schedule::new();
        schedule.add_interval("p1", d(2026, 1, 5), 30);
        assert_eq!(calculate_quality_robustness(&schedule, &config), QUALITY.single_submission_robustness);
    }

    #[test]
    fn widely_spaced_submissions_have_more_slack_than_back_to_back_ones() {
        let config = Config {
            submissions: vec![
                Submission::new("a", "t", SubmissionKind::Paper),
                Submission::new("b", "t", SubmissionKind::Paper),
            ],
            min_paper_lead_time_days: 10,
            ..Default::default()
        };
        let mut spaced = Schedule::new();
        spaced.add_interval("a", d(2026, 1, 1), 10);
        spaced.add_interval("b", d(2026, 3, 1), 10);

        let mut tight = Schedule::new();
        tight.add_interval("a", d(2026, 1, 1), 10);
        tight.add_interval("b", d(2026, 1, 11), 10);

        assert!(calculate_quality_robustness(&spaced, &config) > calculate_quality_robustness(&tight, &config));
    }
}
