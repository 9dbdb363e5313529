//! Typed schedule metrics bundling resource and timeline figures for a
//! report layer to read back out. Kept as one struct with every field
//! populated by whichever calculation owns it, rather than splitting
//! into several half-populated types.

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScheduleMetrics {
    pub avg_utilization: f64,
    pub peak_utilization: usize,
    pub utilization_rate: f64,
    pub efficiency_score: f64,
    pub duration_days: i64,
    pub avg_daily_load: f64,
    pub timeline_efficiency: f64,
    pub makespan: i64,
    pub total_penalty: f64,
    pub compliance_rate: f64,
    pub quality_score: f64,
}
