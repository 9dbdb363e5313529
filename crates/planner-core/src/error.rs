use std::fmt;

/// Fatal, pre-planning configuration errors.
///
/// Anything reported here aborts planning outright; non-fatal conditions
/// (infeasibility, solver faults) are carried on `PlanOutcome` instead.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    CyclicDependency(String),
    MissingDependency { submission_id: String, dependency_id: String },
    UnknownStrategy(String),
    UnknownHeuristic(String),
    InvalidDate(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::CyclicDependency(id) => {
                write!(f, "circular dependency detected involving submission {id}")
            }
            EngineError::MissingDependency { submission_id, dependency_id } => write!(
                f,
                "submission {submission_id} depends on unknown submission {dependency_id}"
            ),
            EngineError::UnknownStrategy(tag) => write!(f, "unknown strategy: {tag}"),
            EngineError::UnknownHeuristic(tag) => write!(f, "unknown heuristic strategy: {tag}"),
            EngineError::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {}

pub type EngineResult<T> = Result<T, EngineError>;
