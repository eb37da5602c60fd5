use chrono::Months;

use super::normalizer::finite_or_zero;
use super::types::{RecoveryInputs, RecoverySummary};

pub fn track_recovery(inputs: &RecoveryInputs) -> RecoverySummary {
    let investment = finite_or_zero(inputs.investment);
    let recovered =
        finite_or_zero(inputs.savings_to_date) + finite_or_zero(inputs.tax_savings_to_date);
    // Pending may go negative once the plant has fully paid for itself;
    // display clamping is the caller's problem.
    let pending = investment - recovered;
    let recovery_pct = if investment > 0.0 {
        recovered / investment * 100.0
    } else {
        0.0
    };

    let rate = finite_or_zero(inputs.avg_monthly_savings);
    let estimated_payback = if pending > 0.0 && rate > 0.0 {
        let months = (pending / rate).ceil();
        if months.is_finite() && months <= u32::MAX as f64 {
            inputs.as_of.checked_add_months(Months::new(months as u32))
        } else {
            None
        }
    } else {
        None
    };

    RecoverySummary {
        recovered,
        pending,
        recovery_pct,
        estimated_payback,
    }
}
