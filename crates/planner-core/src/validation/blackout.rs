use super::Violation;
use crate::calendar;
use crate::model::{Config, Schedule};

/// Flags submissions whose interval *starts* on a blackout day. An interval
/// spanning blackout days without starting on one is allowed but counted
/// informationally when
/// `scheduling_options.enable_blackout_periods` is set.
pub fn check(schedule: &Schedule, config: &Config) -> (Vec<Violation>, usize) {
    let mut violations = Vec::new();
    let mut interior_spans = 0usize;

    for (id, interval) in schedule.iter() {
        if !calendar::is_working_day(interval.start_date, &config.blackout_dates) {
            violations.push(Violation::BlackoutStart { submission_id: id.clone(), start: interval.start_date });
        } else if config.scheduling_options.enable_blackout_periods {
            let mut day = interval.start_date.succ_opt().expect("date overflow");
            while day < interval.end_date {
                if config.blackout_dates.contains(&day) {
                    interior_spans += 1;
                    break;
                }
                day = day.succ_opt().expect("date overflow");
            }
        }
    }

    (violations, interior_spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn flags_interval_starting_on_blackout() {
        let mut config = Config::default();
        config.blackout_dates.insert(d(2026, 1, 5));
        let mut schedule = Schedule::new();
        schedule.add_interval("a", d(2026, 1, 5), 10);

        let (violations, _) = check(&schedule, &config);
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn allows_interior_blackout_coverage() {
        let mut config = Config::default();
        config.blackout_dates.insert(d(2026, 1, 10));
        let mut schedule = Schedule::new();
        schedule.add_interval("a", d(2026, 1, 5), 10);

        let (violations, interior) = check(&schedule, &config);
        assert!(violations.is_empty());
        assert_eq!(interior, 1);
    }

    #[test]
    fn flags_interval_starting_on_weekend() {
        let config = Config::default();
        let mut schedule = Schedule::new();
        schedule.add_interval("a", d(2026, 1, 3), 10); // Saturday

        let (violations, _) = check(&schedule, &config);
        assert_eq!(violations.len(), 1);
    }
}
