//! Process-wide scoring and scheduling constants.
//!
//! Mirrors the `SCORING_CONSTANTS` / `EFFICIENCY_CONSTANTS` /
//! `QUALITY_CONSTANTS` / `REPORT_CONSTANTS` / `SCHEDULING_CONSTANTS` module
//! objects used throughout scoring and scheduling, collapsed into a single
//! read-only table.

pub struct ScoringWeights {
    pub quality_deadline_weight: f64,
    pub quality_dependency_weight: f64,
    pub quality_resource_weight: f64,
    pub efficiency_resource_weight: f64,
    pub efficiency_timeline_weight: f64,
    /// Weight given to the deadline/dependency/resource base score once
    /// blackout/compatibility/utilization metadata is available to blend
    /// in as a 30%-weighted add-on on top of the base score.
    pub quality_base_weight: f64,
    pub quality_additional_weight: f64,
}

pub struct EfficiencyConstants {
    pub optimal_utilization_rate: f64,
    pub utilization_deviation_penalty: f64,
    pub ideal_days_per_submission: f64,
    pub timeline_efficiency_short_penalty: f64,
    pub timeline_efficiency_long_penalty: f64,
    pub randomness_factor: f64,
}

pub struct QualityConstants {
    pub percentage_multiplier: f64,
    pub single_submission_robustness: f64,
    pub single_submission_balance: f64,
    pub balance_variance_factor: f64,
    pub robustness_scale_factor: f64,
}

pub struct ReportConstants {
    pub max_score: f64,
    pub min_score: f64,
}

pub struct SchedulingConstants {
    pub conference_response_time_days: i64,
    pub abstract_advance_days: i64,
    pub lookahead_window_days: i64,
    pub fallback_horizon_days: i64,
    pub max_retraction_depth: u32,
    pub milp_time_limit_secs: u64,
    pub engineering_bonus: f64,
    pub default_priority_weight: f64,
}

pub const SCORING: ScoringWeights = ScoringWeights {
    quality_deadline_weight: 0.5,
    quality_dependency_weight: 0.3,
    quality_resource_weight: 0.2,
    efficiency_resource_weight: 0.5,
    efficiency_timeline_weight: 0.5,
    quality_base_weight: 0.7,
    quality_additional_weight: 0.3,
};

pub const EFFICIENCY: EfficiencyConstants = EfficiencyConstants {
    optimal_utilization_rate: 0.75,
    utilization_deviation_penalty: 50.0,
    ideal_days_per_submission: 14.0,
    timeline_efficiency_short_penalty: 0.3,
    timeline_efficiency_long_penalty: 0.6,
    randomness_factor: 0.1,
};

pub const QUALITY: QualityConstants = QualityConstants {
    percentage_multiplier: 100.0,
    single_submission_robustness: 100.0,
    single_submission_balance: 100.0,
    balance_variance_factor: 2.0,
    robustness_scale_factor: 10.0,
};

pub const REPORT: ReportConstants = ReportConstants {
    max_score: 100.0,
    min_score: 0.0,
};

pub const SCHEDULING: SchedulingConstants = SchedulingConstants {
    conference_response_time_days: 14,
    abstract_advance_days: 30,
    lookahead_window_days: 30,
    fallback_horizon_days: 90,
    max_retraction_depth: 64,
    milp_time_limit_secs: 30,
    engineering_bonus: 1.25,
    default_priority_weight: 1.0,
};
