use crate::calendar;
use crate::constants::SCHEDULING;
use crate::error::EngineResult;
use crate::model::{Config, Schedule};
use crate::scheduling::{self, dag};
use crate::strategy::greedy;
use chrono::NaiveDate;

/// Same priority as [`greedy::GreedyStrategy`], but placement is reversible
///: if a submission becomes unable to ever meet its deadline
/// given what's already placed, the most recent placement is retracted to
/// try to free up an earlier slot, bounded by `max_retraction_depth` total
/// retractions to guarantee termination. This runs its own loop rather than
/// going through [`crate::scheduling::OrderingStrategy`] because retraction
/// needs to mutate already-committed placements, not just reorder today's
/// candidates.
pub fn schedule(config: &Config, today: NaiveDate) -> EngineResult<Schedule> {
    let topo = dag::topological_order(config)?;
    let mut schedule = Schedule::new();
    scheduling::early_abstract_pass(config, &mut schedule, today);

    let (start, end) = scheduling::scheduling_window(config, today);
    let mut current_date = start;
    let mut placement_log: Vec<String> = Vec::new();
    let mut retractions_left = SCHEDULING.max_retraction_depth;

    while current_date <= end && schedule.len() < config.submissions.len() {
        if !calendar::is_working_day(current_date, &config.blackout_dates) {
            current_date = current_date.succ_opt().expect("date overflow");
            continue;
        }

        loop {
            let ready = scheduling::ready_set(&topo, &schedule, config, current_date);

            if retractions_left > 0 && has_missed_deadline(&ready, config, current_date) {
                if let Some(retracted) = placement_log.pop() {
                    schedule.remove(&retracted);
                    retractions_left -= 1;
                    continue;
                }
            }

            let mut active = scheduling::active_set_at(&schedule, current_date);
            let ready = scheduling::ready_set(&topo, &schedule, config, current_date);
            let ordered = order_by_greedy(&ready, config, current_date);

            for id in &ordered {
                if active.len() >= config.max_concurrent_submissions {
                    break;
                }
                let Some(submission) = config.get_submission(id) else { continue };
                schedule.add_interval(id.clone(), current_date, submission.duration_days(config));
                active.push(id.clone());
                placement_log.push(id.clone());
            }

            break;
        }

        current_date = current_date.succ_opt().expect("date overflow");
    }

    Ok(schedule)
}

fn order_by_greedy(ready: &[String], config: &Config, current_date: NaiveDate) -> Vec<String> {
    scheduling::order_by_priority(ready, |id| {
        config.get_submission(id).map(|s| greedy::priority(s, config, current_date)).unwrap_or(0.0)
    })
}

/// True iff some ready submission could never meet its own deadline if
/// started today (its own feasible window has already elapsed).
fn has_missed_deadline(ready: &[String], config: &Config, current_date: NaiveDate) -> bool {
    ready.iter().any(|id| {
        let Some(submission) = config.get_submission(id) else { return false };
        let Some(conf_id) = &submission.conference_id else { return false };
        let Some(conference) = config.get_conference(conf_id) else { return false };
        let Some(deadline) = conference.deadline_for(submission.kind) else { return false };
        current_date + chrono::Duration::days(submission.duration_days(config)) > deadline
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Conference, ConferenceKind, ConferenceRecurrence, Submission, SubmissionKind};
    use std::collections::HashMap;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn schedules_independent_submissions_within_the_cap() {
        let mut deadlines = HashMap::new();
        deadlines.insert(SubmissionKind::Paper, d(2026, 6, 1));
        let config = Config {
            submissions: vec![
                Submission::new("a", "t", SubmissionKind::Paper).with_conference("c1"),
                Submission::new("b", "t", SubmissionKind::Paper).with_conference("c1"),
            ],
            conferences: vec![Conference {
                id: "c1".into(),
                name: "conf".into(),
                kind: ConferenceKind::Engineering,
                recurrence: ConferenceRecurrence::Annual,
                deadlines,
            }],
            max_concurrent_submissions: 2,
            min_paper_lead_time_days: 30,
            ..Default::default()
        };

        let schedule = schedule(&config, d(2026, 1, 5)).unwrap();
        assert_eq!(schedule.len(), 2);
    }
}
