use super::Violation;
use crate::model::{Config, Schedule};

/// For each scheduled submission with a declared kind and conference,
/// `end <= deadline`.
pub fn check(schedule: &Schedule, config: &Config) -> Vec<Violation> {
    let mut violations = Vec::new();

    for submission in &config.submissions {
        let Some(interval) = schedule.get(&submission.id) else { continue };
        let Some(conf_id) = &submission.conference_id else { continue };
        let Some(conference) = config.get_conference(conf_id) else { continue };
        let Some(deadline) = conference.deadline_for(submission.kind) else { continue };

        if interval.end_date > deadline {
            violations.push(Violation::Deadline {
                submission_id: submission.id.clone(),
                end: interval.end_date,
                deadline,
                days_late: (interval.end_date - deadline).num_days(),
            });
        }
    }

    violations
}
