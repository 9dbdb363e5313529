//! Scheduling primitives shared by every non-optimal strategy.
//! `dag::topological_order` supplies ordering; everything else here
//! operates on a `(topo, schedule, today)` triple threaded through the
//! day-by-day placement loop.

pub mod dag;

use crate::calendar;
use crate::constants::SCHEDULING;
use crate::error::EngineResult;
use crate::model::{Config, Schedule, Submission};
use chrono::NaiveDate;

/// `(start, end)` of the window a strategy is allowed to place intervals in.
///
/// `start` is the first working day on or after `today`. `end` is the latest
/// conference deadline plus `conference_response_time_days`; with no
/// deadlines anywhere in `config`, `end = start + fallback_horizon_days`.
pub fn scheduling_window(config: &Config, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = if calendar::is_working_day(today, &config.blackout_dates) {
        today
    } else {
        calendar::next_working_day(today, &config.blackout_dates)
    };

    let latest_deadline = config
        .conferences
        .iter()
        .flat_map(|c| c.deadlines.values().copied())
        .max();

    let end = match latest_deadline {
        Some(deadline) => deadline + chrono::Duration::days(SCHEDULING.conference_response_time_days),
        None => start + chrono::Duration::days(SCHEDULING.fallback_horizon_days),
    };

    (start, end)
}

/// `max(today, sub.earliest_start_date, sub.engineering_ready_date, max over
/// known+scheduled parents(parent.end + sub.lead_time_from_parents))`.
///
/// Unscheduled parents contribute nothing here; callers that need "all
/// parents scheduled" as a gate use [`dependencies_satisfied`] alongside
/// this.
pub fn earliest_start_date(submission: &Submission, config: &Config, schedule: &Schedule, today: NaiveDate) -> NaiveDate {
    let mut earliest = today;

    if let Some(explicit) = submission.earliest_start_date {
        earliest = earliest.max(explicit);
    }
    if let Some(ready) = submission.engineering_ready_date {
        earliest = earliest.max(ready);
    }

    for dep_id in &submission.depends_on {
        if config.get_submission(dep_id).is_none() {
            continue;
        }
        if let Some(parent_end) = schedule.end_date(dep_id) {
            let required = parent_end + chrono::Duration::days(submission.lead_time_from_parents);
            earliest = earliest.max(required);
        }
    }

    earliest
}

/// True iff every known dependency of `submission` is already scheduled.
/// Unknown ids are a validation concern (`Violation::UnknownDependency`),
/// not a readiness gate, so they are ignored here.
pub fn dependencies_satisfied(submission: &Submission, schedule: &Schedule, config: &Config) -> bool {
    submission
        .depends_on
        .iter()
        .filter(|dep_id| config.get_submission(dep_id).is_some())
        .all(|dep_id| schedule.contains(dep_id))
}

/// Ids from `topo` not yet scheduled, whose known parents are all scheduled
/// and whose `earliest_start_date` has arrived by `current_date`.
pub fn ready_set(topo: &[String], schedule: &Schedule, config: &Config, current_date: NaiveDate) -> Vec<String> {
    let mut ready = Vec::new();

    for id in topo {
        if schedule.contains(id) {
            continue;
        }
        let Some(submission) = config.get_submission(id) else { continue };

        if !dependencies_satisfied(submission, schedule, config) {
            continue;
        }
        if current_date < earliest_start_date(submission, config, schedule, current_date) {
            continue;
        }

        ready.push(id.clone());
    }

    ready
}

/// Ids whose scheduled interval contains `current_date` (half-open).
pub fn active_set_at(schedule: &Schedule, current_date: NaiveDate) -> Vec<String> {
    schedule
        .iter()
        .filter(|(_, interval)| interval.contains(current_date))
        .map(|(id, _)| id.clone())
        .collect()
}

/// Places `candidates` in order at `current_date` while `active.len() <
/// max_concurrent_submissions`, appending placed ids to `active`. Returns
/// the number placed.
pub fn place_up_to_limit(
    candidates: &[String],
    schedule: &mut Schedule,
    active: &mut Vec<String>,
    config: &Config,
    current_date: NaiveDate,
) -> usize {
    let mut placed = 0usize;

    for id in candidates {
        if active.len() >= config.max_concurrent_submissions {
            break;
        }
        let Some(submission) = config.get_submission(id) else { continue };

        schedule.add_interval(id.clone(), current_date, submission.duration_days(config));
        active.push(id.clone());
        placed += 1;
    }

    placed
}

/// Checks every constraint a single hypothetical placement of `submission`
/// at `candidate_start` would have to satisfy: a working day, the
/// submission's own earliest-start gate, dependency ordering, the
/// concurrency cap over the whole span, and the conference deadline.
/// Used by [`early_abstract_pass`], which places outside the day-by-day
/// main loop and so cannot rely on its incremental `active` bookkeeping.
pub fn satisfies_constraints(submission: &Submission, candidate_start: NaiveDate, schedule: &Schedule, config: &Config) -> bool {
    if !calendar::is_working_day(candidate_start, &config.blackout_dates) {
        return false;
    }
    if !dependencies_satisfied(submission, schedule, config) {
        return false;
    }
    if candidate_start < earliest_start_date(submission, config, schedule, candidate_start) {
        return false;
    }

    let duration = submission.duration_days(config);
    let candidate_end = candidate_start + chrono::Duration::days(duration);

    if let Some(conf_id) = &submission.conference_id {
        if let Some(conference) = config.get_conference(conf_id) {
            if let Some(deadline) = conference.deadline_for(submission.kind) {
                if candidate_end > deadline {
                    return false;
                }
            }
        }
    }

    let mut day = candidate_start;
    while day < candidate_end {
        let occupied = active_set_at(schedule, day).len();
        if occupied >= config.max_concurrent_submissions {
            return false;
        }
        day = day.succ_opt().expect("date overflow");
    }

    true
}

/// If `scheduling_options.enable_early_abstract_scheduling`, tries to place
/// every `Abstract` submission using the `AbstractThenPaper` workflow at
/// `today + abstract_advance_days`, provided every constraint holds there.
pub fn early_abstract_pass(config: &Config, schedule: &mut Schedule, today: NaiveDate) {
    use crate::model::{SubmissionKind, SubmissionWorkflow};

    if !config.scheduling_options.enable_early_abstract_scheduling {
        return;
    }

    let early_date = today + chrono::Duration::days(config.scheduling_options.abstract_advance_days);

    for submission in &config.submissions {
        if submission.kind != SubmissionKind::Abstract {
            continue;
        }
        if submission.submission_workflow != SubmissionWorkflow::AbstractThenPaper {
            continue;
        }
        if schedule.contains(&submission.id) {
            continue;
        }
        if satisfies_constraints(submission, early_date, schedule, config) {
            schedule.add_interval(submission.id.clone(), early_date, submission.duration_days(config));
        }
    }
}

/// Everything an [`OrderingStrategy`] needs to rank a day's ready set:
/// the config, the schedule built so far, the wall-clock `today` the
/// `Planner` was constructed with, and the day currently being filled.
pub struct SchedulingContext<'a> {
    pub config: &'a Config,
    pub schedule: &'a Schedule,
    pub today: NaiveDate,
    pub current_date: NaiveDate,
}

/// A pluggable priority function over a day's ready set:
/// "all variants implement a single capability: `order(ready) -> ready`".
pub trait OrderingStrategy {
    fn order(&mut self, ready: &[String], ctx: &SchedulingContext) -> Vec<String>;
}

/// Strategy-agnostic day-by-day placement loop, shared by
/// every [`OrderingStrategy`] implementation.
pub fn run_main_loop(config: &Config, today: NaiveDate, strategy: &mut dyn OrderingStrategy) -> EngineResult<Schedule> {
    let topo = dag::topological_order(config)?;
    let mut schedule = Schedule::new();

    early_abstract_pass(config, &mut schedule, today);

    let (start, end) = scheduling_window(config, today);
    let mut current_date = start;

    while current_date <= end && schedule.len() < config.submissions.len() {
        if !calendar::is_working_day(current_date, &config.blackout_dates) {
            current_date = current_date.succ_opt().expect("date overflow");
            continue;
        }

        let mut active = active_set_at(&schedule, current_date);
        let ready = ready_set(&topo, &schedule, config, current_date);
        let ctx = SchedulingContext { config, schedule: &schedule, today, current_date };
        let ordered = strategy.order(&ready, &ctx);
        place_up_to_limit(&ordered, &mut schedule, &mut active, config, current_date);

        current_date = current_date.succ_opt().expect("date overflow");
    }

    Ok(schedule)
}

/// Stable sort of `ready` by descending `priority`, ties broken ascending
/// on id.
pub fn order_by_priority(ready: &[String], mut priority: impl FnMut(&str) -> f64) -> Vec<String> {
    let mut ordered: Vec<String> = ready.to_vec();
    ordered.sort_by(|a, b| {
        let pa = priority(a);
        let pb = priority(b);
        pb.partial_cmp(&pa).unwrap_or(std::cmp::Ordering::Equal).then_with(|| a.cmp(b))
    });
    ordered
}
