//! Efficiency score: `calculate_efficiency_score` combines resource
//! utilization and timeline pacing into one `[0, 100]` figure, with
//! `calculate_efficiency_resource` and `calculate_efficiency_timeline`
//! exposed separately for callers that want the sub-metrics.

use crate::metrics::ScheduleMetrics;
use submission_planner::constants::{EFFICIENCY, REPORT, SCORING};
use submission_planner::{Config, Schedule};
use std::collections::BTreeMap;

/// Weighted mean of resource utilization and timeline efficiency
///. Empty schedules, or a schedule whose metrics can't be
/// computed at all, score `REPORT.min_score`.
pub fn calculate_efficiency_score(schedule: &Schedule, config: &Config) -> f64 {
    let min_score = REPORT.min_score;
    let max_score = REPORT.max_score;

    if schedule.is_empty() {
        return min_score;
    }

    let (Some(resource), Some(timeline)) = (calculate_efficiency_resource(schedule, config), calculate_efficiency_timeline(schedule, config)) else {
        return min_score;
    };

    let efficiency_score =
        resource.efficiency_score * SCORING.efficiency_resource_weight + timeline.timeline_efficiency * SCORING.efficiency_timeline_weight;

    efficiency_score.clamp(min_score, max_score)
}

/// Daily-load utilization against `config.max_concurrent_submissions`
///. `None` when the schedule carries no known submissions.
pub fn calculate_efficiency_resource(schedule: &Schedule, config: &Config) -> Option<ScheduleMetrics> {
    let min_score = REPORT.min_score;
    let max_score = REPORT.max_score;

    if schedule.is_empty() {
        return None;
    }

    let mut daily_load: BTreeMap<chrono::NaiveDate, usize> = BTreeMap::new();
    for (id, interval) in schedule.iter() {
        let Some(submission) = config.get_submission(id) else { continue };
        let duration = submission.duration_days(config);
        for i in 0..duration {
            let day = interval.start_date + chrono::Duration::days(i);
            *daily_load.entry(day).or_insert(0) += 1;
        }
    }
    if daily_load.is_empty() {
        return None;
    }

    let peak_utilization = *daily_load.values().max().unwrap();
    let avg_utilization = daily_load.values().sum::<usize>() as f64 / daily_load.len() as f64;
    let max_concurrent = config.max_concurrent_submissions;

    let utilization_rate = if max_concurrent > 0 {
        avg_utilization / max_concurrent as f64 * 100.0
    } else {
        min_score
    };

    let efficiency_score = if max_concurrent > 0 {
        let optimal_utilization = max_concurrent as f64 * EFFICIENCY.optimal_utilization_rate;
        let utilization_deviation = (avg_utilization - optimal_utilization).abs() / optimal_utilization;
        (max_score - utilization_deviation * EFFICIENCY.utilization_deviation_penalty).max(min_score)
    } else {
        min_score
    };

    Some(ScheduleMetrics { avg_utilization, peak_utilization, utilization_rate, efficiency_score, ..Default::default() })
}

/// Timeline span versus an ideal duration proportional to submission count
///. `None` when the schedule has no intervals.
pub fn calculate_efficiency_timeline(schedule: &Schedule, config: &Config) -> Option<ScheduleMetrics> {
    let min_score = REPORT.min_score;
    let max_score = REPORT.max_score;

    if schedule.is_empty() {
        return None;
    }

    let duration_days = schedule.duration_days() + 1;
    let total_submissions = schedule.len();
    let avg_daily_load = if duration_days > 0 { total_submissions as f64 / duration_days as f64 } else { min_score };

    let total_submissions_count = config.submissions.len();
    let timeline_efficiency = if total_submissions_count > 0 {
        let ideal_duration = total_submissions_count as f64 * EFFICIENCY.ideal_days_per_submission;
        let duration_ratio = if ideal_duration > 0.0 { duration_days as f64 / ideal_duration } else { 1.0 };

        let raw = if duration_ratio <= 1.0 {
            max_score * (1.0 - (1.0 - duration_ratio) * EFFICIENCY.timeline_efficiency_short_penalty)
        } else {
            max_score * (1.0 - (duration_ratio - 1.0) * EFFICIENCY.timeline_efficiency_long_penalty)
        };
        raw.clamp(min_score, max_score)
    } else {
        min_score
    };

    Some(ScheduleMetrics { duration_days, avg_daily_load, timeline_efficiency, ..Default::default() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use submission_planner::model::{Submission, SubmissionKind};

    fn d(y: i32, m: u32, day: u32) -> chrono::NaiveDate {
        chrono::NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn empty_schedule_scores_minimum() {
        let config = Config::default();
        let schedule = Schedule::new();
        assert_eq!(calculate_efficiency_score(&schedule, &config), REPORT.min_score);
        assert!(calculate_efficiency_resource(&schedule, &config).is_none());
        assert!(calculate_efficiency_timeline(&schedule, &config).is_none());
    }

    #[test]
    fn utilization_at_the_concurrency_cap_scores_near_maximum_resource_efficiency() {
        let config = Config {
            submissions: vec![
                Submission::new("a", "t", SubmissionKind::Paper),
                Submission::new("b", "t", SubmissionKind::Paper),
            ],
            max_concurrent_submissions: 2,
            min_paper_lead_time_days: 10,
            ..Default::default()
        };
        let mut schedule = Schedule::new();
        schedule.add_interval("a", d(2026, 1, 5), 10);
        schedule.add_interval("b", d(2026, 1, 5), 10);

        let metrics = calculate_efficiency_resource(&schedule, &config).unwrap();
        assert!(metrics.efficiency_score > 50.0, "expected reasonably high efficiency, got {}", metrics.efficiency_score);
    }

    #[test]
    fn a_duration_far_beyond_the_ideal_is_penalized() {
        let config = Config {
            submissions: vec![Submission::new("a", "t", SubmissionKind::Paper)],
            min_paper_lead_time_days: 10,
            ..Default::default()
        };
        let mut tight = Schedule::new();
        tight.add_interval("a", d(2026, 1, 1), 10);

        let mut sprawling = Schedule::new();
        sprawling.add_interval("a", d(2026, 1, 1), 10);
        sprawling.add_interval("ghost", d(2027, 1, 1), 1);

        let tight_metrics = calculate_efficiency_timeline(&tight, &config).unwrap();
        let sprawling_metrics = calculate_efficiency_timeline(&sprawling, &config).unwrap();
        assert!(sprawling_metrics.timeline_efficiency < tight_metrics.timeline_efficiency);
    }
}
