//! Submission-planning engine: a constraint-aware scheduler that places
//! academic-style work items onto a calendar subject to dependencies,
//! readiness, venue deadlines, working-day rules, and a concurrency cap.
//!
//! Single-threaded and synchronous throughout; the only
//! external wait is the optional MILP solver in [`strategy::optimal`],
//! bounded by an explicit wall-clock budget.

pub mod calendar;
pub mod constants;
pub mod engine;
pub mod error;
pub mod model;
pub mod scheduling;
pub mod strategy;
pub mod validation;

pub use engine::{PlanOutcome, Planner, StrategyOptions};
pub use error::{EngineError, EngineResult};
pub use model::{Config, Conference, ConferenceKind, ConferenceRecurrence, Interval, Schedule, Submission, SubmissionKind};
