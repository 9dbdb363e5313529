use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Half-open date range `[start_date, end_date)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Interval {
    pub fn new(start_date: NaiveDate, duration_days: i64) -> Self {
        Self {
            start_date,
            end_date: start_date + chrono::Duration::days(duration_days),
        }
    }

    /// Two intervals overlap iff neither ends on or before the other's start.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start_date < other.end_date && other.start_date < self.end_date
    }

    /// True iff `day` falls within the half-open interval.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day < self.end_date
    }
}
