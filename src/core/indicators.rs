use std::collections::BTreeMap;

use super::normalizer::finite_or_zero;
use super::tax::tax_savings_to_date;
use super::types::{EbitdaYear, PaybackIndicators, PeriodRecord, TaxYearProjection};

pub fn roi_pct(recovered: f64, investment: f64) -> f64 {
    let investment = finite_or_zero(investment);
    if investment > 0.0 {
        finite_or_zero(recovered) / investment * 100.0
    } else {
        0.0
    }
}

// The averaging window is the elapsed operating months, i.e. one normalized
// record per month; ramp-up and outage months drag the average down, which is
// exactly what "real" means here.
pub fn real_indicators(
    investment: f64,
    records: &[PeriodRecord],
    schedule: &[TaxYearProjection],
) -> PaybackIndicators {
    let elapsed_months = records.len() as u32;
    let income_total: f64 = records.iter().map(|r| r.savings + r.export_income).sum();
    let tax_to_date = tax_savings_to_date(schedule, elapsed_months);

    let (monthly_income, monthly_tax) = if elapsed_months > 0 {
        (
            income_total / elapsed_months as f64,
            tax_to_date / elapsed_months as f64,
        )
    } else {
        (0.0, 0.0)
    };

    // Benefits never create a payback estimate on their own: with no savings
    // income both variants stay undefined, so with <= without holds.
    let (with_benefits, without_benefits) = if monthly_income > 0.0 {
        (
            payback_years(investment, monthly_income + monthly_tax),
            payback_years(investment, monthly_income),
        )
    } else {
        (0.0, 0.0)
    };

    PaybackIndicators {
        payback_with_benefits_years: with_benefits,
        payback_without_benefits_years: without_benefits,
        roi_pct: roi_pct(income_total + tax_to_date, investment),
    }
}

// Projected indicators assume nameplate performance from day one, so they
// bound the real payback from below for any plant with ramp-up losses.
pub fn projected_indicators(
    investment: f64,
    year_one_generation_kwh: f64,
    average_tariff: f64,
    year_one_tax_saving: f64,
) -> PaybackIndicators {
    let annual_income = finite_or_zero(year_one_generation_kwh).max(0.0)
        * finite_or_zero(average_tariff).max(0.0);
    let annual_tax = finite_or_zero(year_one_tax_saving).max(0.0);

    let (with_benefits, without_benefits) = if annual_income > 0.0 {
        (
            payback_years(investment, (annual_income + annual_tax) / 12.0),
            payback_years(investment, annual_income / 12.0),
        )
    } else {
        (0.0, 0.0)
    };

    PaybackIndicators {
        payback_with_benefits_years: with_benefits,
        payback_without_benefits_years: without_benefits,
        roi_pct: roi_pct(annual_income + annual_tax, investment),
    }
}

fn payback_years(investment: f64, monthly_rate: f64) -> f64 {
    let investment = finite_or_zero(investment);
    let monthly_rate = finite_or_zero(monthly_rate);
    if investment > 0.0 && monthly_rate > 0.0 {
        investment / (monthly_rate * 12.0)
    } else {
        0.0
    }
}

pub fn ebitda_by_year(
    records: &[PeriodRecord],
    opex_by_year: &BTreeMap<i32, f64>,
    default_opex_ratio: f64,
) -> Vec<EbitdaYear> {
    let ratio = finite_or_zero(default_opex_ratio).max(0.0);

    let mut revenue_by_year: BTreeMap<i32, f64> = BTreeMap::new();
    for record in records {
        *revenue_by_year.entry(record.year).or_default() += record.savings + record.export_income;
    }

    revenue_by_year
        .into_iter()
        .map(|(year, revenue)| {
            let operating_expense = opex_by_year
                .get(&year)
                .map(|v| finite_or_zero(*v).max(0.0))
                .unwrap_or(revenue * ratio);
            EbitdaYear {
                year,
                revenue,
                operating_expense,
                ebitda: revenue - operating_expense,
            }
        })
        .collect()
}
