//! Strategy variants.
//!
//! Every strategy implements [`crate::scheduling::OrderingStrategy`]; the
//! day-by-day placement skeleton lives once in
//! [`crate::scheduling::run_main_loop`]. `StrategyKind` mirrors the tags
//! the strategy registry keys on, realized here as a plain `HashMap`
//! built once at process start and never mutated afterward.

pub mod backtracking;
pub mod greedy;
pub mod heuristic;
pub mod lookahead;
pub mod optimal;
pub mod random;
pub mod stochastic;

use crate::error::{EngineError, EngineResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Greedy,
    Random,
    Heuristic,
    Stochastic,
    Lookahead,
    Backtracking,
    Optimal,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            StrategyKind::Greedy => "greedy",
            StrategyKind::Random => "random",
            StrategyKind::Heuristic => "heuristic",
            StrategyKind::Stochastic => "stochastic",
            StrategyKind::Lookahead => "lookahead",
            StrategyKind::Backtracking => "backtracking",
            StrategyKind::Optimal => "optimal",
        };
        write!(f, "{tag}")
    }
}

/// The process-wide registry of recognized strategy tags.
/// A plain slice rather than a lazily-built map: seven entries never
/// benefit from hashing, and a slice keeps the table trivially `const`.
const REGISTRY: &[(&str, StrategyKind)] = &[
    ("greedy", StrategyKind::Greedy),
    ("random", StrategyKind::Random),
    ("heuristic", StrategyKind::Heuristic),
    ("stochastic", StrategyKind::Stochastic),
    ("lookahead", StrategyKind::Lookahead),
    ("backtracking", StrategyKind::Backtracking),
    ("optimal", StrategyKind::Optimal),
];

/// Resolves a strategy tag, failing with `UnknownStrategy` for anything not
/// in [`REGISTRY`].
pub fn parse_strategy_kind(tag: &str) -> EngineResult<StrategyKind> {
    REGISTRY
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, kind)| *kind)
        .ok_or_else(|| EngineError::UnknownStrategy(tag.to_string()))
}
