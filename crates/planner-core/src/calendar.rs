//! Calendar utilities: pure, total functions over dates.
//!
//! The weekday test is delegated to the `bdays` crate's `WeekendsOnly`
//! calendar rather than hand-rolled. Blackout dates are a caller-supplied
//! set rather than calendar state, so every function here is a free
//! function of `(date, blackouts)`.

use bdays::calendars::WeekendsOnly;
use bdays::HolidayCalendar;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// True iff `date` falls on a weekday and is not in `blackouts`.
pub fn is_working_day(date: NaiveDate, blackouts: &BTreeSet<NaiveDate>) -> bool {
    WeekendsOnly.is_bday(date) && !blackouts.contains(&date)
}

/// Smallest date strictly after `date` that is a working day.
pub fn next_working_day(date: NaiveDate, blackouts: &BTreeSet<NaiveDate>) -> NaiveDate {
    let mut candidate = date.succ_opt().expect("date overflow");
    while !is_working_day(candidate, blackouts) {
        candidate = candidate.succ_opt().expect("date overflow");
    }
    candidate
}

/// Advance `date` by `n` working days, skipping blackouts and weekends.
///
/// `n == 0` returns `date` itself unchanged, even if `date` is not a working
/// day — callers that need "the first working day on or after `date`"
/// should check `is_working_day` first, as `scheduling::scheduling_window`
/// does.
pub fn add_working_days(date: NaiveDate, n: u32, blackouts: &BTreeSet<NaiveDate>) -> NaiveDate {
    let mut current = date;
    for _ in 0..n {
        current = next_working_day(current, blackouts);
    }
    current
}

/// Signed day count `b - a`.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days()
}

/// Whole calendar months between `a` and `b`, ignoring day-of-month.
pub fn months_between(a: NaiveDate, b: NaiveDate) -> i32 {
    use chrono::Datelike;
    (b.year() - a.year()) * 12 + (b.month() as i32 - a.month() as i32)
}
