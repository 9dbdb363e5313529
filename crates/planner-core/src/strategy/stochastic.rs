use crate::constants::EFFICIENCY;
use crate::scheduling::{OrderingStrategy, SchedulingContext};
use crate::strategy::greedy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Greedy priority plus additive uniform noise on `[-r, r]`,
/// helping the placement escape local optima that pure greedy gets stuck in.
pub struct StochasticStrategy {
    rng: StdRng,
    randomness_factor: f64,
}

impl StochasticStrategy {
    pub fn new(seed: Option<u64>, randomness_factor: f64) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, randomness_factor }
    }
}

impl Default for StochasticStrategy {
    fn default() -> Self {
        Self::new(None, EFFICIENCY.randomness_factor)
    }
}

impl OrderingStrategy for StochasticStrategy {
    fn order(&mut self, ready: &[String], ctx: &SchedulingContext) -> Vec<String> {
        let r = self.randomness_factor;
        let mut scored: Vec<(String, f64)> = ready
            .iter()
            .map(|id| {
                let base = ctx.config.get_submission(id).map(|s| greedy::priority(s, ctx.config, ctx.current_date)).unwrap_or(0.0);
                let noise = self.rng.gen_range(-r..=r);
                (id.clone(), base + noise)
            })
            .collect();

        scored.sort_by(|(ida, pa), (idb, pb)| pb.partial_cmp(pa).unwrap_or(std::cmp::Ordering::Equal).then_with(|| ida.cmp(idb)));
        scored.into_iter().map(|(id, _)| id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Config, Schedule};
    use chrono::NaiveDate;

    #[test]
    fn same_seed_produces_identical_ordering() {
        let ready = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let config = Config::default();
        let schedule = Schedule::new();
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let ctx = SchedulingContext { config: &config, schedule: &schedule, today, current_date: today };

        let mut a = StochasticStrategy::new(Some(3), 0.1);
        let mut b = StochasticStrategy::new(Some(3), 0.1);
        assert_eq!(a.order(&ready, &ctx), b.order(&ready, &ctx));
    }
}
