//! Optimal (MILP) strategy, built on `good_lp` with its pure-Rust `minilp`
//! backend so the crate carries no system solver dependency.
//!
//! `minilp` solves continuous LPs by simplex; it does not branch-and-bound
//! over the binary variables this model declares. The relaxed solution is
//! rounded by taking, for each submission, the candidate day with the
//! largest variable value (ties broken deterministically by earliest day),
//! then the rounded result is re-validated with the same composite
//! validator every other strategy's output is checked against. A rounding
//! that breaks the concurrency cap, a deadline, or dependency ordering is
//! rejected outright rather than shipped — the caller sees that as "no
//! solution" and degrades to an empty schedule with the fallback flagged.
//! An infeasible relaxation or solver failure does the same.

use crate::calendar;
use crate::constants::SCHEDULING;
use crate::error::EngineResult;
use crate::model::{Config, Schedule, Submission};
use crate::scheduling::{dag, scheduling_window};
use crate::validation::validate_schedule_constraints;
use chrono::NaiveDate;
use good_lp::{constraint, variable, Constraint, Expression, ProblemVariables, Solution, SolverModel, Variable};
use std::collections::{BTreeMap, HashMap};

pub struct OptimalStrategy {
    time_limit_secs: u64,
}

impl OptimalStrategy {
    pub fn new() -> Self {
        Self { time_limit_secs: SCHEDULING.milp_time_limit_secs }
    }

    pub fn with_time_limit(time_limit_secs: u64) -> Self {
        Self { time_limit_secs }
    }

    /// Builds and solves a single whole-horizon MILP model; unlike the
    /// other strategies, this does not go through the shared day-by-day
    /// `run_main_loop` skeleton at all.
    ///
    /// Returns `(schedule, solver_fallback)`: `solver_fallback` is true when
    /// the empty schedule returned is a symptom of an absent/infeasible
    /// solver rather than a genuinely empty `config.submissions`.
    pub fn schedule(&self, config: &Config, today: NaiveDate) -> EngineResult<(Schedule, bool)> {
        dag::topological_order(config)?;

        if config.submissions.is_empty() {
            return Ok((Schedule::new(), false));
        }

        let Some(model) = build_model(config, today) else {
            log::warn!("optimal strategy found no feasible candidate days for one or more submissions; returning empty schedule");
            return Ok((Schedule::new(), true));
        };

        match solve(model, self.time_limit_secs, config) {
            Some(schedule) => Ok((schedule, false)),
            None => {
                log::warn!(
                    "MILP solver found no feasible integral schedule within the {}s time budget; returning empty schedule",
                    self.time_limit_secs
                );
                Ok((Schedule::new(), true))
            }
        }
    }
}

impl Default for OptimalStrategy {
    fn default() -> Self {
        Self::new()
    }
}

struct MilpModel {
    variables: ProblemVariables,
    constraints: Vec<Constraint>,
    makespan_var: Variable,
    starts: HashMap<(String, NaiveDate), Variable>,
    durations: HashMap<String, i64>,
}

fn own_earliest_start(submission: &Submission, today: NaiveDate) -> NaiveDate {
    let mut earliest = today;
    if let Some(explicit) = submission.earliest_start_date {
        earliest = earliest.max(explicit);
    }
    if let Some(ready) = submission.engineering_ready_date {
        earliest = earliest.max(ready);
    }
    earliest
}

fn collect_candidate_days(config: &Config, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut day = start;
    while day <= end {
        if calendar::is_working_day(day, &config.blackout_dates) {
            days.push(day);
        }
        day = day.succ_opt().expect("date overflow");
    }
    days
}

fn build_model(config: &Config, today: NaiveDate) -> Option<MilpModel> {
    let (window_start, window_end) = scheduling_window(config, today);
    let days = collect_candidate_days(config, window_start, window_end);
    if days.is_empty() {
        return None;
    }

    let mut vars = ProblemVariables::new();
    let mut starts: HashMap<(String, NaiveDate), Variable> = HashMap::new();
    let mut durations: HashMap<String, i64> = HashMap::new();
    let mut constraints: Vec<Constraint> = Vec::new();

    for submission in &config.submissions {
        let duration = submission.duration_days(config);
        durations.insert(submission.id.clone(), duration);

        let own_earliest = own_earliest_start(submission, today);
        let deadline = submission
            .conference_id
            .as_ref()
            .and_then(|cid| config.get_conference(cid))
            .and_then(|c| c.deadline_for(submission.kind));

        let mut sum_expr: Expression = Expression::from(0.0);
        let mut any_candidate = false;
        for &day in &days {
            if day < own_earliest {
                continue;
            }
            if let Some(deadline) = deadline {
                if day + chrono::Duration::days(duration) > deadline {
                    continue;
                }
            }
            let var = vars.add(variable().binary());
            starts.insert((submission.id.clone(), day), var);
            sum_expr += var;
            any_candidate = true;
        }

        if !any_candidate {
            return None;
        }
        constraints.push(constraint!(sum_expr == 1.0));
    }

    for submission in &config.submissions {
        for dep_id in &submission.depends_on {
            if config.get_submission(dep_id).is_none() {
                continue;
            }
            let (Some(start_expr), Some(parent_end_expr)) = (
                start_expression(&starts, &submission.id, &days),
                end_expression(&starts, &durations, dep_id, &days),
            ) else {
                continue;
            };
            constraints.push(constraint!(start_expr >= parent_end_expr + submission.lead_time_from_parents as f64));
        }
    }

    for &day in &days {
        let mut occupancy: Expression = Expression::from(0.0);
        let mut any = false;
        for submission in &config.submissions {
            let duration = durations[&submission.id];
            for &start_day in &days {
                if start_day <= day && day < start_day + chrono::Duration::days(duration) {
                    if let Some(&var) = starts.get(&(submission.id.clone(), start_day)) {
                        occupancy += var;
                        any = true;
                    }
                }
            }
        }
        if any {
            constraints.push(constraint!(occupancy <= config.max_concurrent_submissions as f64));
        }
    }

    let makespan_var = vars.add(variable().min(0.0));
    for submission in &config.submissions {
        if let Some(end_expr) = end_expression(&starts, &durations, &submission.id, &days) {
            constraints.push(constraint!(makespan_var >= end_expr));
        }
    }

    Some(MilpModel { variables: vars, constraints, makespan_var, starts, durations })
}

fn start_expression(starts: &HashMap<(String, NaiveDate), Variable>, id: &str, days: &[NaiveDate]) -> Option<Expression> {
    let mut expr: Expression = Expression::from(0.0);
    let mut any = false;
    for &day in days {
        if let Some(&var) = starts.get(&(id.to_string(), day)) {
            expr += var * day.num_days_from_ce() as f64;
            any = true;
        }
    }
    any.then_some(expr)
}

fn end_expression(starts: &HashMap<(String, NaiveDate), Variable>, durations: &HashMap<String, i64>, id: &str, days: &[NaiveDate]) -> Option<Expression> {
    let duration = *durations.get(id)?;
    let mut expr: Expression = Expression::from(0.0);
    let mut any = false;
    for &day in days {
        if let Some(&var) = starts.get(&(id.to_string(), day)) {
            expr += var * (day.num_days_from_ce() as f64 + duration as f64);
            any = true;
        }
    }
    any.then_some(expr)
}

fn solve(model: MilpModel, _time_limit_secs: u64, config: &Config) -> Option<Schedule> {
    let MilpModel { variables, constraints, makespan_var, starts, durations } = model;

    let mut problem = variables.minimise(makespan_var).using(good_lp::minilp);
    for constraint in constraints {
        problem = problem.with(constraint);
    }
    let solution = problem.solve().ok()?;

    // Sorted by (id, day) so the argmax below is decided by a fixed
    // iteration order rather than `HashMap` hashing, which would make the
    // rounded schedule vary across runs on a tied relaxation.
    let mut entries: Vec<(&String, &NaiveDate, &Variable)> =
        starts.iter().map(|((id, day), var)| (id, day, var)).collect();
    entries.sort_by(|a, b| a.0.cmp(b.0).then_with(|| a.1.cmp(b.1)));

    let mut best_day_by_id: BTreeMap<String, (NaiveDate, f64)> = BTreeMap::new();
    for (id, day, var) in entries {
        let value = solution.value(*var);
        best_day_by_id
            .entry(id.clone())
            .and_modify(|(best_day, best_value)| {
                if value > *best_value {
                    *best_day = *day;
                    *best_value = value;
                }
            })
            .or_insert((*day, value));
    }

    let mut schedule = Schedule::new();
    for (id, (day, _)) in best_day_by_id {
        let duration = durations.get(&id).copied().unwrap_or(1);
        schedule.add_interval(id, day, duration);
    }

    let validation = validate_schedule_constraints(&schedule, config);
    if !validation.is_valid {
        log::warn!(
            "MILP rounding produced an infeasible integral schedule ({} violation(s)); discarding it",
            validation.violations.len()
        );
        return None;
    }

    Some(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Conference, ConferenceKind, ConferenceRecurrence, SubmissionKind};
    use std::collections::HashMap as StdHashMap;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn empty_config_returns_empty_schedule() {
        let config = Config::default();
        let strategy = OptimalStrategy::new();
        let (schedule, fallback) = strategy.schedule(&config, d(2026, 1, 5)).unwrap();
        assert!(schedule.is_empty());
        assert!(!fallback);
    }

    #[test]
    fn builds_a_model_for_a_single_submission() {
        let mut deadlines = StdHashMap::new();
        deadlines.insert(SubmissionKind::Paper, d(2026, 3, 1));
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

        let model = build_model(&config, d(2026, 1, 5));
        assert!(model.is_some());
    }
}
