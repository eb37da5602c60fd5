use super::normalizer::finite_or_zero;
use super::types::{TaxBenefitConfig, TaxYearProjection};

// The whole schedule is re-derived from (investment, config) on every call.
// Nothing is carried over between recomputations, so shrinking or growing a
// window simply produces a different schedule.
pub fn tax_benefit_schedule(investment: f64, config: &TaxBenefitConfig) -> Vec<TaxYearProjection> {
    if !investment.is_finite() || investment <= 0.0 {
        return Vec::new();
    }

    let deduction_years = config.deduction_years;
    let depreciation_years = config.depreciation_years;
    let horizon = deduction_years.max(depreciation_years);
    if horizon == 0 {
        return Vec::new();
    }

    let tax_rate = (finite_or_zero(config.tax_rate_pct) / 100.0).max(0.0);
    let deduction_cap = (finite_or_zero(config.deduction_cap_pct) / 100.0).max(0.0);
    let annual_deduction = if deduction_years > 0 {
        investment * deduction_cap / deduction_years as f64
    } else {
        0.0
    };
    let annual_depreciation = if depreciation_years > 0 {
        investment / depreciation_years as f64
    } else {
        0.0
    };

    (0..horizon)
        .map(|year_index| {
            let deduction_taken = if year_index < deduction_years {
                annual_deduction
            } else {
                0.0
            };
            let depreciation_taken = if year_index < depreciation_years {
                annual_depreciation
            } else {
                0.0
            };
            TaxYearProjection {
                year_index,
                deduction_taken,
                depreciation_taken,
                tax_saving: (deduction_taken + depreciation_taken) * tax_rate,
            }
        })
        .collect()
}

pub fn total_tax_savings(schedule: &[TaxYearProjection]) -> f64 {
    schedule.iter().map(|y| y.tax_saving).sum()
}

// Benefits accrue pro-rata at 1/12 of the scheduled year per operating month,
// so a plant halfway through year one already carries half of that saving.
pub fn tax_savings_to_date(schedule: &[TaxYearProjection], elapsed_months: u32) -> f64 {
    let mut total = 0.0;
    for month in 0..elapsed_months {
        match schedule.get((month / 12) as usize) {
            Some(year) => total += year.tax_saving / 12.0,
            None => break,
        }
    }
    total
}
