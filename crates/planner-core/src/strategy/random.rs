use crate::scheduling::{OrderingStrategy, SchedulingContext};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Uniformly shuffles the ready set each day; used as a baseline for
/// comparison against the priority-driven strategies.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl OrderingStrategy for RandomStrategy {
    fn order(&mut self, ready: &[String], _ctx: &SchedulingContext) -> Vec<String> {
        let mut ordered = ready.to_vec();
        ordered.shuffle(&mut self.rng);
        ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Config, Schedule};
    use chrono::NaiveDate;

    #[test]
    fn same_seed_produces_identical_ordering() {
        let ready = vec!["a".to_string(), "b".to_string(), "c".to_string(), "d".to_string(), "e".to_string()];
        let config = Config::default();
        let schedule = Schedule::new();
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let ctx = SchedulingContext { config: &config, schedule: &schedule, today, current_date: today };

        let mut a = RandomStrategy::new(Some(7));
        let mut b = RandomStrategy::new(Some(7));
        assert_eq!(a.order(&ready, &ctx), b.order(&ready, &ctx));
    }
}
