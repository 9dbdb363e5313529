//! Testable properties 7 and 8: a `Schedule` survives a JSON round-trip
//! unchanged, and validating the same schedule twice gives identical
//! results.

use chrono::NaiveDate;
use submission_planner::{Config, Planner, Submission, SubmissionKind, StrategyOptions};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn schedule_round_trips_through_json() {
    let today = d(2026, 1, 5);
    let config = Config {
        submissions: vec![
            Submission::new("a", "t", SubmissionKind::Paper),
            Submission::new("b", "t", SubmissionKind::Paper).with_depends_on(vec!["a".into()]),
        ],
        max_concurrent_submissions: 1,
        min_paper_lead_time_days: 20,
        ..Default::default()
    };
    let planner = Planner::new(config, today);
    let outcome = planner.plan("greedy", &StrategyOptions::default()).unwrap();

    let json = serde_json::to_string(&outcome.schedule).expect("schedule should serialize");
    let restored: submission_planner::Schedule = serde_json::from_str(&json).expect("schedule should deserialize");

    assert_eq!(outcome.schedule, restored);
}

#[test]
fn validating_a_schedule_twice_is_idempotent() {
    let today = d(2026, 1, 5);
    let config = Config {
        submissions: vec![
            Submission::new("a", "t", SubmissionKind::Paper),
            Submission::new("b", "t", SubmissionKind::Paper).with_depends_on(vec!["a".into()]),
        ],
        max_concurrent_submissions: 1,
        min_paper_lead_time_days: 20,
        ..Default::default()
    };
    let planner = Planner::new(config, today);
    let outcome = planner.plan("greedy", &StrategyOptions::default()).unwrap();

    let first = planner.validate(&outcome.schedule);
    let second = planner.validate(&outcome.schedule);
    assert_eq!(first, second);
}
