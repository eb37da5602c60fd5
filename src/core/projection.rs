use serde::Serialize;

use super::normalizer::finite_or_zero;

// Presentation cap: nobody charts a projection past the panel warranty era.
pub const MAX_LIFESPAN_YEARS: u32 = 30;

const DAYS_PER_YEAR: f64 = 365.0;
const DAYS_PER_MONTH: f64 = 30.0;

#[derive(Debug, Clone, Copy)]
pub struct ProjectionParams {
    pub capacity_kwp: f64,
    pub daily_yield_hours: f64,
    pub performance_ratio: f64,
    pub annual_degradation_pct: f64,
    pub lifespan_years: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProjectionYear {
    pub year: u32,
    pub degradation_factor: f64,
    pub generation_kwh: f64,
    pub daily_average_kwh: f64,
}

pub fn expected_daily_generation(
    capacity_kwp: f64,
    daily_yield_hours: f64,
    performance_ratio: f64,
) -> f64 {
    let daily = finite_or_zero(capacity_kwp).max(0.0)
        * finite_or_zero(daily_yield_hours).max(0.0)
        * finite_or_zero(performance_ratio).max(0.0);
    finite_or_zero(daily)
}

pub fn expected_monthly_generation(
    capacity_kwp: f64,
    daily_yield_hours: f64,
    performance_ratio: f64,
) -> f64 {
    expected_daily_generation(capacity_kwp, daily_yield_hours, performance_ratio)
        * DAYS_PER_MONTH
}

pub fn project_generation(params: &ProjectionParams) -> Vec<ProjectionYear> {
    let lifespan = params.lifespan_years.min(MAX_LIFESPAN_YEARS);
    let daily = expected_daily_generation(
        params.capacity_kwp,
        params.daily_yield_hours,
        params.performance_ratio,
    );
    let year_one = daily * DAYS_PER_YEAR;
    let decay = (1.0 - finite_or_zero(params.annual_degradation_pct) / 100.0).clamp(0.0, 1.0);

    (1..=lifespan)
        .map(|year| {
            let factor = decay.powi(year as i32 - 1);
            let generation = year_one * factor;
            ProjectionYear {
                year,
                degradation_factor: factor,
                generation_kwh: generation,
                daily_average_kwh: generation / DAYS_PER_YEAR,
            }
        })
        .collect()
}

pub fn lifetime_generation(years: &[ProjectionYear]) -> f64 {
    years.iter().map(|y| y.generation_kwh).sum()
}
