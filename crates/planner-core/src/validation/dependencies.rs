use super::Violation;
use crate::model::{Config, Schedule};

/// For each dependency edge `p -> c`, requires both scheduled and
/// `c.start >= p.end + c.lead_time_from_parents`.
///
/// Unknown ids in `depends_on` are rejected as a distinct violation kind
/// from a parent that is simply not yet scheduled.
pub fn check(schedule: &Schedule, config: &Config) -> Vec<Violation> {
    let mut violations = Vec::new();
    let submissions = config.submissions_by_id();

    for submission in &config.submissions {
        let Some(child_interval) = schedule.get(&submission.id) else { continue };

        for dep_id in &submission.depends_on {
            if !submissions.contains_key(dep_id.as_str()) {
                violations.push(Violation::UnknownDependency {
                    submission_id: submission.id.clone(),
                    dependency_id: dep_id.clone(),
                });
                continue;
            }

            match schedule.get(dep_id) {
                None => {
                    violations.push(Violation::MissingParent {
                        submission_id: submission.id.clone(),
                        dependency_id: dep_id.clone(),
                    });
                }
                Some(parent_interval) => {
                    let required_start =
                        parent_interval.end_date + chrono::Duration::days(submission.lead_time_from_parents);
                    if child_interval.start_date < required_start {
                        violations.push(Violation::DependencyOrdering {
                            submission_id: submission.id.clone(),
                            dependency_id: dep_id.clone(),
                            required_start,
                            actual_start: child_interval.start_date,
                        });
                    }
                }
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Submission, SubmissionKind};
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn flags_unknown_dependency_id() {
        let config = Config {
            submissions: vec![
                Submission::new("c1", "t", SubmissionKind::Paper).with_depends_on(vec!["ghost".into()]),
            ],
            ..Default::default()
        };
        let mut schedule = Schedule::new();
        schedule.add_interval("c1", d(2026, 1, 1), 10);

        let violations = check(&schedule, &config);
        assert_eq!(violations.len(), 1);
        assert!(matches!(violations[0], Violation::UnknownDependency { .. }));
    }

    #[test]
    fn flags_unscheduled_parent_distinctly_from_ordering() {
        let config = Config {
            submissions: vec![
                Submission::new("p1", "t", SubmissionKind::Paper),
                Submission::new("c1", "t", SubmissionKind::Paper).with_depends_on(vec!["p1".into()]),
            ],
            ..Default::default()
        };
        let mut schedule = Schedule::new();
        schedule.add_interval("c1", d(2026, 1, 1), 10); // p1 never scheduled

        let violations = check(&schedule, &config);
        assert_eq!(violations.len(), 1);
        assert!(matches!(violations[0], Violation::MissingParent { .. }));
    }

    #[test]
    fn flags_start_before_parent_end_plus_lead_time() {
        let config = Config {
            submissions: vec![
                Submission::new("p1", "t", SubmissionKind::Paper),
                Submission::new("c1", "t", SubmissionKind::Paper)
                    .with_depends_on(vec!["p1".into()])
                    .with_lead_time_from_parents(5),
            ],
            ..Default::default()
        };
        let mut schedule = Schedule::new();
        schedule.add_interval("p1", d(2026, 1, 1), 10); // ends 2026-01-11
        schedule.add_interval("c1", d(2026, 1, 12), 10); // needs >= 01-16

        let violations = check(&schedule, &config);
        assert_eq!(violations.len(), 1);
        assert!(matches!(violations[0], Violation::DependencyOrdering { .. }));
    }
}
