use crate::constants::SCHEDULING;
use crate::model::{Config, Submission};
use crate::scheduling::{order_by_priority, OrderingStrategy, SchedulingContext};
use chrono::NaiveDate;

/// `w_kind · engineering_bonus · deadline_urgency`.
pub fn priority(submission: &Submission, config: &Config, current_date: NaiveDate) -> f64 {
    let w_kind = config.priority_weights.get(submission.kind.priority_key(submission.engineering));
    let engineering_bonus = if submission.engineering { SCHEDULING.engineering_bonus } else { 1.0 };
    w_kind * engineering_bonus * deadline_urgency(submission, config, current_date)
}

fn deadline_urgency(submission: &Submission, config: &Config, current_date: NaiveDate) -> f64 {
    let deadline = submission
        .conference_id
        .as_ref()
        .and_then(|id| config.get_conference(id))
        .and_then(|conference| conference.deadline_for(submission.kind));

    match deadline {
        Some(deadline) => {
            let days_until = (deadline - current_date).num_days();
            1.0 / days_until.max(1) as f64
        }
        None => 1.0 / SCHEDULING.fallback_horizon_days as f64,
    }
}

/// Priority-greedy strategy: highest `priority` goes first each day.
#[derive(Debug, Default)]
pub struct GreedyStrategy;

impl OrderingStrategy for GreedyStrategy {
    fn order(&mut self, ready: &[String], ctx: &SchedulingContext) -> Vec<String> {
        order_by_priority(ready, |id| {
            ctx.config.get_submission(id).map(|s| priority(s, ctx.config, ctx.current_date)).unwrap_or(0.0)
        })
    }
}
