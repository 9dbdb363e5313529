use super::interval::Interval;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from submission id to interval.
///
/// Backed by a `BTreeMap` rather than a `HashMap`: every strategy must be
/// deterministic given identical input, and iterating a `BTreeMap` by id
/// is deterministic for free, with no explicit sort needed at call sites.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub intervals: BTreeMap<String, Interval>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.intervals.contains_key(id)
    }

    pub fn add_interval(&mut self, id: impl Into<String>, start_date: NaiveDate, duration_days: i64) {
        self.intervals.insert(id.into(), Interval::new(start_date, duration_days));
    }

    pub fn remove(&mut self, id: &str) -> Option<Interval> {
        self.intervals.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&Interval> {
        self.intervals.get(id)
    }

    pub fn start_date(&self, id: &str) -> Option<NaiveDate> {
        self.intervals.get(id).map(|i| i.start_date)
    }

    pub fn end_date(&self, id: &str) -> Option<NaiveDate> {
        self.intervals.get(id).map(|i| i.end_date)
    }

    /// `max(end) - min(start)` over all scheduled intervals: the
    /// engine-canonical makespan definition.
    pub fn duration_days(&self) -> i64 {
        if self.intervals.is_empty() {
            return 0;
        }
        let min_start = self.intervals.values().map(|i| i.start_date).min().unwrap();
        let max_end = self.intervals.values().map(|i| i.end_date).max().unwrap();
        (max_end - min_start).num_days()
    }

    /// id -> start-date view.
    pub fn to_dict(&self) -> BTreeMap<String, NaiveDate> {
        self.intervals.iter().map(|(id, iv)| (id.clone(), iv.start_date)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Interval)> {
        self.intervals.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn empty_schedule_has_zero_duration() {
        let schedule = Schedule::new();
        assert_eq!(schedule.duration_days(), 0);
    }

    #[test]
    fn duration_spans_earliest_start_to_latest_end() {
        let mut schedule = Schedule::new();
        schedule.add_interval("a", d(2026, 1, 1), 10);
        schedule.add_interval("b", d(2026, 1, 5), 30);
        assert_eq!(schedule.duration_days(), 34);
    }
}
