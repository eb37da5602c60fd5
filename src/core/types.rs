use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Plant {
    pub id: u32,
    pub name: String,
    pub capacity_kwp: f64,
    pub investment: f64,
    pub commissioned: NaiveDate,
    pub daily_yield_hours: f64,
    pub performance_ratio: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPeriod {
    Full(FullPeriod),
    Legacy(LegacyPeriod),
}

// Newer billing exports carry the full breakdown; the savings/billed pair is
// what distinguishes them from legacy generation-only records.
#[derive(Debug, Clone, Deserialize)]
pub struct FullPeriod {
    pub plant_id: u32,
    pub year: i32,
    pub month: u32,
    #[serde(default)]
    pub generated_kwh: f64,
    #[serde(default)]
    pub self_consumed_kwh: f64,
    #[serde(default)]
    pub exported_kwh: f64,
    pub billed: f64,
    pub savings: f64,
    #[serde(default)]
    pub export_income: f64,
    #[serde(default)]
    pub balance: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyPeriod {
    pub plant_id: u32,
    pub year: i32,
    pub month: u32,
    #[serde(default)]
    pub generated_kwh: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PeriodRecord {
    pub plant_id: u32,
    pub year: i32,
    pub month: u32,
    pub generated_kwh: f64,
    pub self_consumed_kwh: f64,
    pub exported_kwh: f64,
    pub billed: f64,
    pub savings: f64,
    pub export_income: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct TariffConfig {
    pub average_tariff: f64,
    pub residual_bill_ratio: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct TaxBenefitConfig {
    pub deduction_years: u32,
    pub depreciation_years: u32,
    pub tax_rate_pct: f64,
    pub deduction_cap_pct: f64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct TaxYearProjection {
    pub year_index: u32,
    pub deduction_taken: f64,
    pub depreciation_taken: f64,
    pub tax_saving: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct RecoveryInputs {
    pub investment: f64,
    pub savings_to_date: f64,
    pub tax_savings_to_date: f64,
    pub avg_monthly_savings: f64,
    pub as_of: NaiveDate,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RecoverySummary {
    pub recovered: f64,
    pub pending: f64,
    pub recovery_pct: f64,
    pub estimated_payback: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PaybackIndicators {
    pub payback_with_benefits_years: f64,
    pub payback_without_benefits_years: f64,
    pub roi_pct: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EbitdaYear {
    pub year: i32,
    pub revenue: f64,
    pub operating_expense: f64,
    pub ebitda: f64,
}
