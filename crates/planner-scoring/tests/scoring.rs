//! End-to-end scoring over planner-core output: a compliant schedule scores
//! well on both axes, and an empty schedule always scores zero regardless
//! of which scorer is asked.

use chrono::NaiveDate;
use std::collections::HashMap;
use submission_planner::model::{Conference, ConferenceKind, ConferenceRecurrence};
use submission_planner::{Config, Planner, Submission, SubmissionKind, StrategyOptions};
use submission_scoring::{efficiency, quality, PlannerScoringExt};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn conference(id: &str, kind: SubmissionKind, deadline: NaiveDate) -> Conference {
    let mut deadlines = HashMap::new();
    deadlines.insert(kind, deadline);
    Conference {
        id: id.to_string(),
        name: id.to_string(),
        kind: ConferenceKind::Engineering,
        recurrence: ConferenceRecurrence::Annual,
        deadlines,
    }
}

#[test]
fn empty_schedule_scores_zero_everywhere() {
    let config = Config::default();
    let planner = Planner::new(config, d(2026, 1, 5));
    let outcome = planner.plan("greedy", &StrategyOptions::default()).unwrap();

    assert_eq!(planner.quality_score(&outcome.schedule), 0.0);
    assert_eq!(planner.efficiency_score(&outcome.schedule), 0.0);
}

#[test]
fn a_well_spaced_compliant_schedule_scores_highly_on_both_axes() {
    let today = d(2026, 1, 5);
    let config = Config {
        submissions: vec![
            Submission::new("a", "t", SubmissionKind::Paper),
            Submission::new("b", "t", SubmissionKind::Paper),
        ],
        max_concurrent_submissions: 2,
        min_paper_lead_time_days: 14,
        ..Default::default()
    };
    let planner = Planner::new(config, today);
    let outcome = planner.plan("greedy", &StrategyOptions::default()).unwrap();

    let quality = planner.quality_score(&outcome.schedule);
    let efficiency = planner.efficiency_score(&outcome.schedule);
    assert!(quality > 80.0, "expected high quality, got {quality}");
    assert!(efficiency > 0.0, "expected a positive efficiency score, got {efficiency}");

    let robustness = quality::calculate_quality_robustness(&outcome.schedule, planner.config());
    let balance = quality::calculate_quality_balance(&outcome.schedule, planner.config());
    assert!(robustness >= 0.0 && robustness <= 100.0);
    assert!(balance >= 0.0 && balance <= 100.0);

    let resource = efficiency::calculate_efficiency_resource(&outcome.schedule, planner.config());
    assert!(resource.is_some());
}

#[test]
fn score_bundles_quality_efficiency_and_metrics_consistently() {
    let today = d(2026, 1, 5);
    let config = Config {
        submissions: vec![Submission::new("p1", "t", SubmissionKind::Paper)],
        max_concurrent_submissions: 1,
        min_paper_lead_time_days: 14,
        ..Default::default()
    };
    let planner = Planner::new(config, today);
    let outcome = planner.plan("greedy", &StrategyOptions::default()).unwrap();

    let score = planner.score(&outcome.schedule);
    assert_eq!(score.quality, planner.quality_score(&outcome.schedule));
    assert_eq!(score.efficiency, planner.efficiency_score(&outcome.schedule));
    assert_eq!(score.metrics.quality_score, score.quality);
    assert_eq!(score.metrics.makespan, outcome.schedule.duration_days());
}

/// S7 — three papers sharing one concurrency slot with interlocking
/// deadlines: a heavily upweighted engineering priority makes greedy run
/// the loose-deadline paper first, missing both other deadlines, while the
/// MILP strategy only ever offers a candidate start day that already
/// satisfies its submission's own deadline. Quality must reflect that gap.
#[test]
fn s7_optimal_outscores_greedy_on_quality() {
    let today = d(2026, 1, 5);
    let config = Config {
        submissions: vec![
            Submission::new("a", "t", SubmissionKind::Paper).with_conference("c1"),
            Submission::new("b", "t", SubmissionKind::Paper).with_conference("c2").with_engineering(true),
            Submission::new("c", "t", SubmissionKind::Paper).with_conference("c3"),
        ],
        conferences: vec![
            conference("c1", SubmissionKind::Paper, today + chrono::Duration::days(14)),
            conference("c2", SubmissionKind::Paper, today + chrono::Duration::days(40)),
            conference("c3", SubmissionKind::Paper, today + chrono::Duration::days(27)),
        ],
        max_concurrent_submissions: 1,
        min_paper_lead_time_days: 10,
        priority_weights: submission_planner::model::PriorityWeights { engineering_paper: 5.0, ..Default::default() },
        ..Default::default()
    };
    let planner = Planner::new(config, today);

    let greedy_outcome = planner.plan("greedy", &StrategyOptions::default()).unwrap();
    let optimal_outcome = planner.plan("optimal", &StrategyOptions::default()).unwrap();
    assert!(!optimal_outcome.solver_fallback);

    let greedy_quality = planner.quality_score(&greedy_outcome.schedule);
    let optimal_quality = planner.quality_score(&optimal_outcome.schedule);
    assert!(
        optimal_quality > greedy_quality,
        "optimal ({optimal_quality}) should outscore greedy ({greedy_quality}) when greedy misses deadlines"
    );
}
