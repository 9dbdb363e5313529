//! Engine façade: resolves a strategy tag, runs it, and reports planning
//! and validation results.

use crate::error::{EngineError, EngineResult};
use crate::model::{Config, Schedule};
use crate::scheduling::run_main_loop;
use crate::strategy::{self, backtracking, greedy, heuristic, lookahead, optimal, random, stochastic, StrategyKind};
use crate::validation::{self, ValidationResult};
use chrono::NaiveDate;

/// Non-fatal planning result: infeasibility and an
/// elapsed window are reported here, never as an `EngineError`.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub schedule: Schedule,
    pub unplaced: Vec<String>,
    pub complete: bool,
    /// True only for the `optimal` strategy when the solver was unavailable,
    /// infeasible, or exhausted its time budget and an empty schedule was
    /// substituted — a non-fatal condition flagged here rather than raised
    /// as an error. Always `false` for every other strategy.
    pub solver_fallback: bool,
}

/// Parameters a strategy needs beyond `(config, today)`: the heuristic
/// sub-kind, optional seeds for the randomized strategies, and the MILP
/// wall-clock budget. Left at `None`, each falls back to its own default.
#[derive(Debug, Clone, Default)]
pub struct StrategyOptions {
    pub heuristic: Option<heuristic::HeuristicKind>,
    pub seed: Option<u64>,
    pub randomness_factor: Option<f64>,
    pub milp_time_limit_secs: Option<u64>,
}

/// Owns a `Config` and the wall-clock `today` injected at construction
/// rather than read from `Local::now()` on every call, so a caller
/// controls exactly when "today" advances. Shares no mutable state across
/// `plan` calls — each builds a fresh `Schedule`.
pub struct Planner {
    config: Config,
    today: NaiveDate,
}

/// Fatal pre-planning check: every `depends_on` entry must name a
/// submission that actually exists in `config`. An unknown id is reported
/// as `EngineError::MissingDependency` rather than silently skipped, per
/// the "engine never silently succeeds on an invalid configuration" policy.
fn check_dependencies_known(config: &Config) -> EngineResult<()> {
    for submission in &config.submissions {
        for dep_id in &submission.depends_on {
            if config.get_submission(dep_id).is_none() {
                return Err(EngineError::MissingDependency {
                    submission_id: submission.id.clone(),
                    dependency_id: dep_id.clone(),
                });
            }
        }
    }
    Ok(())
}

impl Planner {
    pub fn new(config: Config, today: NaiveDate) -> Self {
        Self { config, today }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Resolves `tag` against the strategy registry and runs it,
    /// reporting any submissions left unplaced when the scheduling window
    /// elapses rather than failing outright.
    pub fn plan(&self, tag: &str, options: &StrategyOptions) -> EngineResult<PlanOutcome> {
        let kind = strategy::parse_strategy_kind(tag)?;
        check_dependencies_known(&self.config)?;
        let (schedule, solver_fallback) = self.run(kind, options)?;

        let unplaced: Vec<String> = self
            .config
            .submissions
            .iter()
            .map(|s| s.id.clone())
            .filter(|id| !schedule.contains(id))
            .collect();
        let complete = unplaced.is_empty();

        Ok(PlanOutcome { schedule, unplaced, complete, solver_fallback })
    }

    fn run(&self, kind: StrategyKind, options: &StrategyOptions) -> EngineResult<(Schedule, bool)> {
        match kind {
            StrategyKind::Greedy => run_main_loop(&self.config, self.today, &mut greedy::GreedyStrategy).map(|s| (s, false)),
            StrategyKind::Random => {
                run_main_loop(&self.config, self.today, &mut random::RandomStrategy::new(options.seed)).map(|s| (s, false))
            }
            StrategyKind::Heuristic => {
                let heuristic_kind = options.heuristic.unwrap_or(heuristic::HeuristicKind::EarliestDeadline);
                run_main_loop(&self.config, self.today, &mut heuristic::HeuristicStrategy::new(heuristic_kind)).map(|s| (s, false))
            }
            StrategyKind::Stochastic => {
                let randomness = options.randomness_factor.unwrap_or(crate::constants::EFFICIENCY.randomness_factor);
                run_main_loop(&self.config, self.today, &mut stochastic::StochasticStrategy::new(options.seed, randomness))
                    .map(|s| (s, false))
            }
            StrategyKind::Lookahead => run_main_loop(&self.config, self.today, &mut lookahead::LookaheadStrategy).map(|s| (s, false)),
            StrategyKind::Backtracking => backtracking::schedule(&self.config, self.today).map(|s| (s, false)),
            StrategyKind::Optimal => {
                let time_limit = options.milp_time_limit_secs.unwrap_or(crate::constants::SCHEDULING.milp_time_limit_secs);
                optimal::OptimalStrategy::with_time_limit(time_limit).schedule(&self.config, self.today)
            }
        }
    }

    pub fn validate(&self, schedule: &Schedule) -> ValidationResult {
        validation::validate_schedule_constraints(schedule, &self.config)
    }
}
