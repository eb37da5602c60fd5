mod indicators;
mod normalizer;
mod portfolio;
mod projection;
mod recovery;
mod tax;
mod types;

pub use indicators::{ebitda_by_year, projected_indicators, real_indicators, roi_pct};
pub use normalizer::{finite_or_zero, normalize_all, normalize_period};
pub use portfolio::{PortfolioCell, PortfolioSummary, PortfolioYear, consolidate};
pub use projection::{
    MAX_LIFESPAN_YEARS, ProjectionParams, ProjectionYear, expected_daily_generation,
    expected_monthly_generation, lifetime_generation, project_generation,
};
pub use recovery::track_recovery;
pub use tax::{tax_benefit_schedule, tax_savings_to_date, total_tax_savings};
pub use types::{
    EbitdaYear, FullPeriod, LegacyPeriod, PaybackIndicators, PeriodRecord, Plant, RawPeriod,
    RecoveryInputs, RecoverySummary, TariffConfig, TaxBenefitConfig, TaxYearProjection,
};
