//! Quality and efficiency scoring for a planned [`submission_planner::Schedule`]
//!, kept as a separate crate from `submission_planner` so the
//! core scheduling engine carries no scoring-specific dependencies and
//! scoring can be skipped entirely by callers that only need a schedule.

pub mod efficiency;
pub mod metrics;
pub mod quality;

pub use metrics::ScheduleMetrics;

use submission_planner::validation::validate_schedule_constraints;
use submission_planner::{Planner, Schedule};

/// `{quality, efficiency, metrics}`, bundled here rather than on `Planner`
/// itself so that `planner-core` never has to depend on this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlanScore {
    pub quality: f64,
    pub efficiency: f64,
    pub metrics: ScheduleMetrics,
}

/// Adds scoring to [`Planner`] without `planner-core` depending on this
/// crate: `planner-scoring` depends on `planner-core`, not the reverse, so
/// the scoring calls are plain functions of `(&Schedule, &Config)` and this
/// trait is just a thin, optional convenience over them.
pub trait PlannerScoringExt {
    fn quality_score(&self, schedule: &Schedule) -> f64;
    fn efficiency_score(&self, schedule: &Schedule) -> f64;
    fn score(&self, schedule: &Schedule) -> PlanScore;
}

impl PlannerScoringExt for Planner {
    fn quality_score(&self, schedule: &Schedule) -> f64 {
        quality::calculate_quality_score(schedule, self.config())
    }

    fn efficiency_score(&self, schedule: &Schedule) -> f64 {
        efficiency::calculate_efficiency_score(schedule, self.config())
    }

    fn score(&self, schedule: &Schedule) -> PlanScore {
        let config = self.config();
        let quality = quality::calculate_quality_score(schedule, config);
        let efficiency = efficiency::calculate_efficiency_score(schedule, config);

        let resource = efficiency::calculate_efficiency_resource(schedule, config).unwrap_or_default();
        let timeline = efficiency::calculate_efficiency_timeline(schedule, config).unwrap_or_default();
        let validation = validate_schedule_constraints(schedule, config);

        let metrics = ScheduleMetrics {
            avg_utilization: resource.avg_utilization,
            peak_utilization: resource.peak_utilization,
            utilization_rate: resource.utilization_rate,
            efficiency_score: efficiency,
            duration_days: timeline.duration_days,
            avg_daily_load: timeline.avg_daily_load,
            timeline_efficiency: timeline.timeline_efficiency,
            makespan: schedule.duration_days(),
            total_penalty: submission_planner::constants::REPORT.max_score - quality,
            compliance_rate: validation.metadata.compliance_rate,
            quality_score: quality,
        };

        PlanScore { quality, efficiency, metrics }
    }
}
