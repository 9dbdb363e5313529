use crate::error::{EngineError, EngineResult};
use crate::model::{Config, Submission};
use crate::scheduling::{OrderingStrategy, SchedulingContext};
use chrono::NaiveDate;

/// The five deadline/start/duration orderings, selected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeuristicKind {
    EarliestDeadline,
    LatestStart,
    ShortestProcessingTime,
    LongestProcessingTime,
    CriticalPath,
}

impl HeuristicKind {
    pub fn parse(tag: &str) -> EngineResult<Self> {
        match tag {
            "earliest_deadline" => Ok(Self::EarliestDeadline),
            "latest_start" => Ok(Self::LatestStart),
            "shortest_processing_time" => Ok(Self::ShortestProcessingTime),
            "longest_processing_time" => Ok(Self::LongestProcessingTime),
            "critical_path" => Ok(Self::CriticalPath),
            other => Err(EngineError::UnknownHeuristic(other.to_string())),
        }
    }
}

pub struct HeuristicStrategy {
    kind: HeuristicKind,
}

impl HeuristicStrategy {
    pub fn new(kind: HeuristicKind) -> Self {
        Self { kind }
    }
}

fn deadline_or_max(submission: &Submission, config: &Config) -> NaiveDate {
    submission
        .conference_id
        .as_ref()
        .and_then(|id| config.get_conference(id))
        .and_then(|conference| conference.deadline_for(submission.kind))
        .unwrap_or(NaiveDate::MAX)
}

fn latest_start(submission: &Submission, config: &Config) -> NaiveDate {
    let deadline = deadline_or_max(submission, config);
    if deadline == NaiveDate::MAX {
        return NaiveDate::MIN;
    }
    deadline - chrono::Duration::days(submission.duration_days(config))
}

impl OrderingStrategy for HeuristicStrategy {
    fn order(&mut self, ready: &[String], ctx: &SchedulingContext) -> Vec<String> {
        let mut ordered = ready.to_vec();
        let config = ctx.config;

        match self.kind {
            HeuristicKind::EarliestDeadline => ordered.sort_by(|a, b| {
                let sa = config.get_submission(a);
                let sb = config.get_submission(b);
                let da = sa.map(|s| deadline_or_max(s, config)).unwrap_or(NaiveDate::MAX);
                let db = sb.map(|s| deadline_or_max(s, config)).unwrap_or(NaiveDate::MAX);
                da.cmp(&db).then_with(|| a.cmp(b))
            }),
            HeuristicKind::LatestStart => ordered.sort_by(|a, b| {
                let sa = config.get_submission(a);
                let sb = config.get_submission(b);
                let la = sa.map(|s| latest_start(s, config)).unwrap_or(NaiveDate::MIN);
                let lb = sb.map(|s| latest_start(s, config)).unwrap_or(NaiveDate::MIN);
                lb.cmp(&la).then_with(|| a.cmp(b))
            }),
            HeuristicKind::ShortestProcessingTime => ordered.sort_by(|a, b| {
                let pa = config.get_submission(a).map(|s| s.duration_days(config)).unwrap_or(0);
                let pb = config.get_submission(b).map(|s| s.duration_days(config)).unwrap_or(0);
                pa.cmp(&pb).then_with(|| a.cmp(b))
            }),
            HeuristicKind::LongestProcessingTime => ordered.sort_by(|a, b| {
                let pa = config.get_submission(a).map(|s| s.duration_days(config)).unwrap_or(0);
                let pb = config.get_submission(b).map(|s| s.duration_days(config)).unwrap_or(0);
                pb.cmp(&pa).then_with(|| a.cmp(b))
            }),
            HeuristicKind::CriticalPath => ordered.sort_by(|a, b| {
                let ca = blocking_count(a, config);
                let cb = blocking_count(b, config);
                cb.cmp(&ca).then_with(|| a.cmp(b))
            }),
        }

        ordered
    }
}

/// Number of other submissions that list `id` in their `depends_on`.
fn blocking_count(id: &str, config: &Config) -> usize {
    config.submissions.iter().filter(|s| s.depends_on.iter().any(|dep| dep == id)).count()
}
