use crate::constants::{EFFICIENCY, QUALITY, REPORT, SCHEDULING, SCORING};

const WEIGHT_SUM_EPSILON: f64 = 1e-6;

/// Pure startup check that configured weights/penalties lie in expected
/// ranges; returns human strings, not violations.
pub fn validate_constants() -> Vec<String> {
    let mut issues = Vec::new();

    check_weight_sum(
        "quality_*_weight",
        SCORING.quality_deadline_weight + SCORING.quality_dependency_weight + SCORING.quality_resource_weight,
        &mut issues,
    );
    check_weight_sum(
        "efficiency_*_weight",
        SCORING.efficiency_resource_weight + SCORING.efficiency_timeline_weight,
        &mut issues,
    );
    check_weight_sum(
        "quality_base_weight/quality_additional_weight",
        SCORING.quality_base_weight + SCORING.quality_additional_weight,
        &mut issues,
    );

    for (name, value) in [
        ("quality_deadline_weight", SCORING.quality_deadline_weight),
        ("quality_dependency_weight", SCORING.quality_dependency_weight),
        ("quality_resource_weight", SCORING.quality_resource_weight),
        ("efficiency_resource_weight", SCORING.efficiency_resource_weight),
        ("efficiency_timeline_weight", SCORING.efficiency_timeline_weight),
    ] {
        if !(0.0..=1.0).contains(&value) {
            issues.push(format!("{name} must lie in [0, 1], got {value}"));
        }
    }

    if !(0.0..=1.0).contains(&EFFICIENCY.optimal_utilization_rate) {
        issues.push(format!(
            "optimal_utilization_rate must lie in [0, 1], got {}",
            EFFICIENCY.optimal_utilization_rate
        ));
    }
    if EFFICIENCY.utilization_deviation_penalty < 0.0 {
        issues.push("utilization_deviation_penalty must be non-negative".to_string());
    }
    if EFFICIENCY.ideal_days_per_submission <= 0.0 {
        issues.push("ideal_days_per_submission must be positive".to_string());
    }
    if EFFICIENCY.randomness_factor < 0.0 {
        issues.push("randomness_factor must be non-negative".to_string());
    }

    if QUALITY.balance_variance_factor < 0.0 {
        issues.push("balance_variance_factor must be non-negative".to_string());
    }
    if QUALITY.robustness_scale_factor < 0.0 {
        issues.push("robustness_scale_factor must be non-negative".to_string());
    }
    if (QUALITY.percentage_multiplier - 100.0).abs() > f64::EPSILON {
        issues.push("percentage_multiplier is expected to be 100".to_string());
    }

    if REPORT.max_score <= REPORT.min_score {
        issues.push("REPORT.max_score must exceed REPORT.min_score".to_string());
    }

    if SCHEDULING.conference_response_time_days < 0 {
        issues.push("conference_response_time_days must be non-negative".to_string());
    }
    if SCHEDULING.max_retraction_depth == 0 {
        issues.push("max_retraction_depth must be positive".to_string());
    }
    if SCHEDULING.milp_time_limit_secs == 0 {
        issues.push("milp_time_limit_secs must be positive".to_string());
    }

    issues
}

fn check_weight_sum(label: &str, sum: f64, issues: &mut Vec<String>) {
    if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
        issues.push(format!("{label} should sum to 1.0, got {sum}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constants_pass_validation() {
        assert!(validate_constants().is_empty());
    }
}
