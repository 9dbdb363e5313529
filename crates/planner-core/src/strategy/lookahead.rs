use crate::model::Config;
use crate::scheduling::{order_by_priority, OrderingStrategy, SchedulingContext};
use crate::strategy::greedy;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

/// Greedy priority plus `0.1 * |transitive descendants|`: a
/// submission that unblocks a long downstream chain is worth scheduling
/// sooner even if its own deadline isn't especially urgent.
#[derive(Debug, Default)]
pub struct LookaheadStrategy;

fn priority(submission_id: &str, config: &Config, current_date: NaiveDate) -> f64 {
    let Some(submission) = config.get_submission(submission_id) else { return 0.0 };
    let base = greedy::priority(submission, config, current_date);
    base + 0.1 * transitive_descendant_count(submission_id, config) as f64
}

fn transitive_descendant_count(id: &str, config: &Config) -> usize {
    let children: HashMap<&str, Vec<&str>> = build_children_index(config);
    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack: Vec<&str> = children.get(id).cloned().unwrap_or_default();

    while let Some(child) = stack.pop() {
        if visited.insert(child) {
            stack.extend(children.get(child).cloned().unwrap_or_default());
        }
    }

    visited.len()
}

fn build_children_index(config: &Config) -> HashMap<&str, Vec<&str>> {
    let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
    for submission in &config.submissions {
        for dep_id in &submission.depends_on {
            children.entry(dep_id.as_str()).or_default().push(submission.id.as_str());
        }
    }
    children
}

impl OrderingStrategy for LookaheadStrategy {
    fn order(&mut self, ready: &[String], ctx: &SchedulingContext) -> Vec<String> {
        // `can_schedule`'s extra refusal defers a ready id
        // whose unscheduled dependency would itself outrank it. Under this
        // engine's shared `ready_set`, every dependency of a ready id is
        // already scheduled by construction, so the condition is vacuously
        // satisfied here; it is retained for fidelity and as a guard should
        // `ready_set`'s contract ever loosen.
        let filtered: Vec<String> = ready
            .iter()
            .filter(|id| can_schedule(id, ctx))
            .cloned()
            .collect();

        order_by_priority(&filtered, |id| priority(id, ctx.config, ctx.current_date))
    }
}

fn can_schedule(submission_id: &str, ctx: &SchedulingContext) -> bool {
    let Some(submission) = ctx.config.get_submission(submission_id) else { return true };
    let own_priority = priority(submission_id, ctx.config, ctx.current_date);

    for dep_id in &submission.depends_on {
        if ctx.schedule.contains(dep_id) {
            continue;
        }
        if priority(dep_id, ctx.config, ctx.current_date) > own_priority {
            return false;
        }
    }

    true
}
