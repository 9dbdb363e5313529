use super::Violation;
use crate::model::{Config, Schedule};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Builds a day -> count histogram over `[min_start, max_end)` and flags any
/// day exceeding `max_concurrent_submissions`. Returns `(violations,
/// max_observed)`, where `max_observed` is reported even when the schedule
/// is valid.
pub fn check(schedule: &Schedule, config: &Config) -> (Vec<Violation>, usize) {
    if schedule.is_empty() {
        return (Vec::new(), 0);
    }

    let mut histogram: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for (_, interval) in schedule.iter() {
        let mut day = interval.start_date;
        while day < interval.end_date {
            *histogram.entry(day).or_insert(0) += 1;
            day = day.succ_opt().expect("date overflow");
        }
    }

    let max_observed = histogram.values().copied().max().unwrap_or(0);
    let limit = config.max_concurrent_submissions;

    let violations = histogram
        .into_iter()
        .filter(|(_, count)| *count > limit)
        .map(|(day, count)| Violation::Resource { day, count, limit })
        .collect();

    (violations, max_observed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Submission;
    use crate::model::SubmissionKind;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn flags_day_over_concurrency_cap() {
        let config = Config {
            submissions: vec![
                Submission::new("a", "t", SubmissionKind::Paper),
                Submission::new("b", "t", SubmissionKind::Paper),
                Submission::new("c", "t", SubmissionKind::Paper),
            ],
            max_concurrent_submissions: 2,
            ..Default::default()
        };
        let mut schedule = Schedule::new();
        schedule.add_interval("a", d(2026, 1, 5), 10);
        schedule.add_interval("b", d(2026, 1, 5), 10);
        schedule.add_interval("c", d(2026, 1, 5), 10);

        let (violations, max_observed) = check(&schedule, &config);
        assert_eq!(max_observed, 3);
        assert!(!violations.is_empty());
        assert!(violations.iter().all(|v| v.is_resource()));
    }

    #[test]
    fn reports_max_observed_even_when_valid() {
        let config = Config { max_concurrent_submissions: 5, ..Default::default() };
        let mut schedule = Schedule::new();
        schedule.add_interval("a", d(2026, 1, 5), 10);

        let (violations, max_observed) = check(&schedule, &config);
        assert!(violations.is_empty());
        assert_eq!(max_observed, 1);
    }
}
