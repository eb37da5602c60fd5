use axum::{
    Router,
    extract::{Json, Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::core::{
    EbitdaYear, PaybackIndicators, PeriodRecord, Plant, PortfolioSummary, ProjectionParams,
    RawPeriod, RecoveryInputs, RecoverySummary, TariffConfig, TaxBenefitConfig,
    TaxYearProjection, consolidate, ebitda_by_year, expected_monthly_generation,
    normalize_all, project_generation, projected_indicators, real_indicators,
    tax_benefit_schedule, tax_savings_to_date, total_tax_savings, track_recovery,
};

const SAMPLE_DATASET: &str = include_str!("../../data/sample_plants.json");

#[derive(Parser, Debug, Clone)]
#[command(
    name = "pvledger",
    about = "Solar plant investment recovery and tax benefit tracker"
)]
struct Cli {
    #[arg(
        long,
        default_value_t = 850.0,
        help = "Average grid tariff per kWh, used to reconstruct savings for legacy records"
    )]
    average_tariff: f64,
    #[arg(
        long,
        default_value_t = 0.35,
        help = "Fraction of reconstructed savings still billed by the grid operator for legacy records"
    )]
    residual_bill_ratio: f64,
    #[arg(long, default_value_t = 3, help = "Income-deduction window in years")]
    deduction_years: u32,
    #[arg(
        long,
        default_value_t = 3,
        help = "Accelerated depreciation window in years"
    )]
    depreciation_years: u32,
    #[arg(
        long,
        default_value_t = 35.0,
        help = "Corporate income tax rate in percent"
    )]
    tax_rate: f64,
    #[arg(
        long,
        default_value_t = 50.0,
        help = "Income-deduction cap as percent of investment"
    )]
    deduction_cap: f64,
    #[arg(
        long,
        default_value_t = 0.6,
        help = "Expected annual generation degradation in percent"
    )]
    annual_degradation: f64,
    #[arg(
        long,
        default_value_t = 25,
        help = "Projection lifespan in years, capped at 30"
    )]
    lifespan_years: u32,
    #[arg(
        long,
        default_value_t = 10.0,
        help = "Operating expense fallback as percent of revenue when no real OPEX is supplied"
    )]
    opex_ratio: f64,
}

#[derive(Debug, Clone, Copy)]
struct EngineConfig {
    tariff: TariffConfig,
    tax: TaxBenefitConfig,
    annual_degradation_pct: f64,
    lifespan_years: u32,
    opex_ratio: f64,
    as_of: NaiveDate,
}

// Every computation reads one immutable config snapshot built here, so a
// request adjusting the depreciation window can never bleed into another
// plant's in-flight calculation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigOverrides {
    plant_id: Option<u32>,
    average_tariff: Option<f64>,
    residual_bill_ratio: Option<f64>,
    deduction_years: Option<u32>,
    depreciation_years: Option<u32>,
    tax_rate: Option<f64>,
    deduction_cap: Option<f64>,
    annual_degradation: Option<f64>,
    lifespan_years: Option<u32>,
    opex_ratio: Option<f64>,
    as_of: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct Dataset {
    pub plants: Vec<Plant>,
    pub periods: Vec<RawPeriod>,
    // Audited operating expenses, when the owner supplies them; years without
    // an entry fall back to the configured revenue ratio.
    #[serde(default)]
    pub opex: Vec<OpexRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpexRecord {
    pub plant_id: u32,
    pub year: i32,
    pub amount: f64,
}

struct AppState {
    dataset: Dataset,
    defaults: Cli,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct PlantSummary {
    id: u32,
    nombre: String,
    capacidad_kwp: f64,
    estado: &'static str,
    dias_operacion: i64,
    autoconsumo_pct: f64,
    exportacion_pct: f64,
}

#[derive(Debug, Serialize)]
struct PlantDetailResponse {
    id: u32,
    nombre: String,
    capacidad_kwp: f64,
    inversion: f64,
    fecha_instalacion: NaiveDate,
    hps: f64,
    pr: f64,
    estado: &'static str,
    dias_operacion: i64,
    history: Vec<PlantYearHistory>,
}

#[derive(Debug, Serialize)]
struct PlantYearHistory {
    year: i32,
    generation: f64,
    autoconsumo: f64,
    exportacion: f64,
    months: Vec<PlantMonthHistory>,
}

#[derive(Debug, Serialize)]
struct PlantMonthHistory {
    month: u32,
    generation: f64,
    autoconsumo: f64,
    exportacion: f64,
    ahorro: f64,
    facturado: f64,
}

#[derive(Debug, Serialize)]
struct GenerationHistoryResponse {
    data: Vec<GenerationPoint>,
    parametros: Vec<GenerationParams>,
}

#[derive(Debug, Serialize)]
struct GenerationPoint {
    plant_id: u32,
    year: i32,
    month: u32,
    generacion_kwh: f64,
    objetivo_kwh: f64,
}

#[derive(Debug, Serialize)]
struct GenerationParams {
    plant_id: u32,
    capacidad_kwp: f64,
    hps: f64,
    pr: f64,
    objetivo_mensual_kwh: f64,
}

#[derive(Debug, Serialize)]
struct EnergyDistributionResponse {
    data: Vec<DistributionPoint>,
    resumen: Vec<DistributionYearSummary>,
}

#[derive(Debug, Serialize)]
struct DistributionPoint {
    year: i32,
    month: u32,
    autoconsumo_kwh: f64,
    exportacion_kwh: f64,
}

#[derive(Debug, Serialize)]
struct DistributionYearSummary {
    year: i32,
    autoconsumo_pct: f64,
    exportacion_pct: f64,
}

#[derive(Debug, Serialize)]
struct InvestmentSummaryResponse {
    inversion: InversionSection,
    ingresos: IngresosSection,
    beneficios_tributarios: BeneficiosSection,
    recuperacion: RecoverySummary,
    indicadores_reales: PaybackIndicators,
    indicadores_proyectados: PaybackIndicators,
    ebitda: Vec<EbitdaYear>,
    saldos: Vec<SaldoPoint>,
}

#[derive(Debug, Serialize)]
struct InversionSection {
    total: f64,
    capacidad_kwp: f64,
    fecha_instalacion: NaiveDate,
}

#[derive(Debug, Serialize)]
struct IngresosSection {
    ahorro_total: f64,
    ingresos_exportacion: f64,
    promedio_mensual: f64,
    meses_operacion: u32,
}

#[derive(Debug, Serialize)]
struct BeneficiosSection {
    programa: Vec<TaxYearProjection>,
    total: f64,
    acumulado_a_la_fecha: f64,
}

#[derive(Debug, Serialize)]
struct SaldoPoint {
    year: i32,
    month: u32,
    saldo: f64,
}

fn default_cli() -> Cli {
    Cli {
        average_tariff: 850.0,
        residual_bill_ratio: 0.35,
        deduction_years: 3,
        depreciation_years: 3,
        tax_rate: 35.0,
        deduction_cap: 50.0,
        annual_degradation: 0.6,
        lifespan_years: 25,
        opex_ratio: 10.0,
    }
}

fn build_config(cli: &Cli, as_of: NaiveDate) -> Result<EngineConfig, String> {
    if !cli.average_tariff.is_finite() || cli.average_tariff < 0.0 {
        return Err("--average-tariff must be >= 0".to_string());
    }

    if !cli.residual_bill_ratio.is_finite() || cli.residual_bill_ratio < 0.0 {
        return Err("--residual-bill-ratio must be >= 0".to_string());
    }

    if !(0.0..=100.0).contains(&cli.tax_rate) {
        return Err("--tax-rate must be between 0 and 100".to_string());
    }

    if !(0.0..=100.0).contains(&cli.deduction_cap) {
        return Err("--deduction-cap must be between 0 and 100".to_string());
    }

    if !(0.0..=100.0).contains(&cli.annual_degradation) {
        return Err("--annual-degradation must be between 0 and 100".to_string());
    }

    if !(0.0..=100.0).contains(&cli.opex_ratio) {
        return Err("--opex-ratio must be between 0 and 100".to_string());
    }

    if cli.lifespan_years == 0 {
        return Err("--lifespan-years must be > 0".to_string());
    }

    Ok(EngineConfig {
        tariff: TariffConfig {
            average_tariff: cli.average_tariff,
            residual_bill_ratio: cli.residual_bill_ratio,
        },
        tax: TaxBenefitConfig {
            deduction_years: cli.deduction_years,
            depreciation_years: cli.depreciation_years,
            tax_rate_pct: cli.tax_rate,
            deduction_cap_pct: cli.deduction_cap,
        },
        annual_degradation_pct: cli.annual_degradation,
        lifespan_years: cli.lifespan_years,
        opex_ratio: cli.opex_ratio / 100.0,
        as_of,
    })
}

fn config_from_overrides(
    defaults: &Cli,
    overrides: &ConfigOverrides,
) -> Result<EngineConfig, String> {
    let mut cli = defaults.clone();

    if let Some(v) = overrides.average_tariff {
        cli.average_tariff = v;
    }
    if let Some(v) = overrides.residual_bill_ratio {
        cli.residual_bill_ratio = v;
    }
    if let Some(v) = overrides.deduction_years {
        cli.deduction_years = v;
    }
    if let Some(v) = overrides.depreciation_years {
        cli.depreciation_years = v;
    }
    if let Some(v) = overrides.tax_rate {
        cli.tax_rate = v;
    }
    if let Some(v) = overrides.deduction_cap {
        cli.deduction_cap = v;
    }
    if let Some(v) = overrides.annual_degradation {
        cli.annual_degradation = v;
    }
    if let Some(v) = overrides.lifespan_years {
        cli.lifespan_years = v;
    }
    if let Some(v) = overrides.opex_ratio {
        cli.opex_ratio = v;
    }

    let as_of = overrides
        .as_of
        .unwrap_or_else(|| Utc::now().date_naive());
    build_config(&cli, as_of)
}

pub async fn run_http_server(port: u16, data_path: Option<&str>) -> std::io::Result<()> {
    let raw = match data_path {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE_DATASET.to_string(),
    };
    let dataset: Dataset = serde_json::from_str(&raw).map_err(|e| {
        std::io::Error::new(std::io::ErrorKind::InvalidData, format!("invalid dataset: {e}"))
    })?;

    let state = Arc::new(AppState {
        dataset,
        defaults: default_cli(),
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/plants", get(plants_handler))
        .route("/plants/history", get(history_handler))
        .route("/plants/generation-history", get(generation_history_handler))
        .route("/plants/energy-distribution", get(energy_distribution_handler))
        .route("/plants/investment-summary", get(investment_summary_handler))
        .route("/plants/portfolio-summary", get(portfolio_summary_handler))
        .route("/plants/:id", get(plant_detail_handler))
        .fallback(not_found_handler)
        .with_state(state);

    let listener = TcpListener::bind(addr).await?;
    println!("pvledger HTTP API listening on http://{addr}");
    println!("Local access: http://127.0.0.1:{port}/plants");

    axum::serve(listener, app).await
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn plants_handler(
    State(state): State<Arc<AppState>>,
    Query(overrides): Query<ConfigOverrides>,
) -> Response {
    let config = match config_from_overrides(&state.defaults, &overrides) {
        Ok(config) => config,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };
    json_response(StatusCode::OK, plant_summaries(&state.dataset, &config))
}

async fn history_handler(
    State(state): State<Arc<AppState>>,
    Query(overrides): Query<ConfigOverrides>,
) -> Response {
    let config = match config_from_overrides(&state.defaults, &overrides) {
        Ok(config) => config,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };
    json_response(
        StatusCode::OK,
        normalize_all(&state.dataset.periods, &config.tariff),
    )
}

async fn generation_history_handler(
    State(state): State<Arc<AppState>>,
    Query(overrides): Query<ConfigOverrides>,
) -> Response {
    let config = match config_from_overrides(&state.defaults, &overrides) {
        Ok(config) => config,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };
    json_response(StatusCode::OK, generation_history(&state.dataset, &config))
}

async fn energy_distribution_handler(
    State(state): State<Arc<AppState>>,
    Query(overrides): Query<ConfigOverrides>,
) -> Response {
    let config = match config_from_overrides(&state.defaults, &overrides) {
        Ok(config) => config,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };
    json_response(StatusCode::OK, energy_distribution(&state.dataset, &config))
}

async fn investment_summary_handler(
    State(state): State<Arc<AppState>>,
    Query(overrides): Query<ConfigOverrides>,
) -> Response {
    let config = match config_from_overrides(&state.defaults, &overrides) {
        Ok(config) => config,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };
    match investment_summary(&state.dataset, &config, overrides.plant_id) {
        Ok(summary) => json_response(StatusCode::OK, summary),
        Err((status, msg)) => error_response(status, &msg),
    }
}

async fn portfolio_summary_handler(
    State(state): State<Arc<AppState>>,
    Query(overrides): Query<ConfigOverrides>,
) -> Response {
    let config = match config_from_overrides(&state.defaults, &overrides) {
        Ok(config) => config,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };
    json_response(StatusCode::OK, portfolio_summary(&state.dataset, &config))
}

async fn plant_detail_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
    Query(overrides): Query<ConfigOverrides>,
) -> Response {
    let config = match config_from_overrides(&state.defaults, &overrides) {
        Ok(config) => config,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };
    match plant_detail(&state.dataset, &config, id) {
        Ok(detail) => json_response(StatusCode::OK, detail),
        Err((status, msg)) => error_response(status, &msg),
    }
}

fn share_pct(part: f64, whole: f64) -> f64 {
    if whole > 0.0 { part / whole * 100.0 } else { 0.0 }
}

fn plant_status(record_count: usize, days_in_operation: i64) -> &'static str {
    if days_in_operation > 0 && record_count > 0 {
        "activa"
    } else {
        "pendiente"
    }
}

fn days_in_operation(plant: &Plant, as_of: NaiveDate) -> i64 {
    (as_of - plant.commissioned).num_days().max(0)
}

fn records_for(records: &[PeriodRecord], plant_id: u32) -> Vec<PeriodRecord> {
    records
        .iter()
        .filter(|r| r.plant_id == plant_id)
        .cloned()
        .collect()
}

fn plant_summaries(dataset: &Dataset, config: &EngineConfig) -> Vec<PlantSummary> {
    let records = normalize_all(&dataset.periods, &config.tariff);

    dataset
        .plants
        .iter()
        .map(|plant| {
            let own = records_for(&records, plant.id);
            let generated: f64 = own.iter().map(|r| r.generated_kwh).sum();
            let self_consumed: f64 = own.iter().map(|r| r.self_consumed_kwh).sum();
            let exported: f64 = own.iter().map(|r| r.exported_kwh).sum();
            let days = days_in_operation(plant, config.as_of);

            PlantSummary {
                id: plant.id,
                nombre: plant.name.clone(),
                capacidad_kwp: plant.capacity_kwp,
                estado: plant_status(own.len(), days),
                dias_operacion: days,
                autoconsumo_pct: share_pct(self_consumed, generated),
                exportacion_pct: share_pct(exported, generated),
            }
        })
        .collect()
}

fn plant_detail(
    dataset: &Dataset,
    config: &EngineConfig,
    plant_id: u32,
) -> Result<PlantDetailResponse, (StatusCode, String)> {
    let plant = find_plant(dataset, plant_id)?;
    let records = normalize_all(&dataset.periods, &config.tariff);
    let own = records_for(&records, plant.id);

    let mut years: BTreeMap<i32, Vec<&PeriodRecord>> = BTreeMap::new();
    for record in &own {
        years.entry(record.year).or_default().push(record);
    }

    let history = years
        .into_iter()
        .map(|(year, months)| PlantYearHistory {
            year,
            generation: months.iter().map(|r| r.generated_kwh).sum(),
            autoconsumo: months.iter().map(|r| r.self_consumed_kwh).sum(),
            exportacion: months.iter().map(|r| r.exported_kwh).sum(),
            months: months
                .iter()
                .map(|r| PlantMonthHistory {
                    month: r.month,
                    generation: r.generated_kwh,
                    autoconsumo: r.self_consumed_kwh,
                    exportacion: r.exported_kwh,
                    ahorro: r.savings,
                    facturado: r.billed,
                })
                .collect(),
        })
        .collect();

    let days = days_in_operation(plant, config.as_of);
    Ok(PlantDetailResponse {
        id: plant.id,
        nombre: plant.name.clone(),
        capacidad_kwp: plant.capacity_kwp,
        inversion: plant.investment,
        fecha_instalacion: plant.commissioned,
        hps: plant.daily_yield_hours,
        pr: plant.performance_ratio,
        estado: plant_status(own.len(), days),
        dias_operacion: days,
        history,
    })
}

fn generation_history(dataset: &Dataset, config: &EngineConfig) -> GenerationHistoryResponse {
    let records = normalize_all(&dataset.periods, &config.tariff);

    let parametros: Vec<GenerationParams> = dataset
        .plants
        .iter()
        .map(|plant| GenerationParams {
            plant_id: plant.id,
            capacidad_kwp: plant.capacity_kwp,
            hps: plant.daily_yield_hours,
            pr: plant.performance_ratio,
            objetivo_mensual_kwh: expected_monthly_generation(
                plant.capacity_kwp,
                plant.daily_yield_hours,
                plant.performance_ratio,
            ),
        })
        .collect();

    let targets: BTreeMap<u32, f64> = parametros
        .iter()
        .map(|p| (p.plant_id, p.objetivo_mensual_kwh))
        .collect();

    let data = records
        .iter()
        .map(|record| GenerationPoint {
            plant_id: record.plant_id,
            year: record.year,
            month: record.month,
            generacion_kwh: record.generated_kwh,
            objetivo_kwh: targets.get(&record.plant_id).copied().unwrap_or(0.0),
        })
        .collect();

    GenerationHistoryResponse { data, parametros }
}

fn energy_distribution(dataset: &Dataset, config: &EngineConfig) -> EnergyDistributionResponse {
    let records = normalize_all(&dataset.periods, &config.tariff);

    let mut by_month: BTreeMap<(i32, u32), (f64, f64, f64)> = BTreeMap::new();
    for record in &records {
        let entry = by_month.entry((record.year, record.month)).or_insert((0.0, 0.0, 0.0));
        entry.0 += record.self_consumed_kwh;
        entry.1 += record.exported_kwh;
        entry.2 += record.generated_kwh;
    }

    let mut by_year: BTreeMap<i32, (f64, f64, f64)> = BTreeMap::new();
    for (&(year, _), &(auto, export, generated)) in &by_month {
        let entry = by_year.entry(year).or_insert((0.0, 0.0, 0.0));
        entry.0 += auto;
        entry.1 += export;
        entry.2 += generated;
    }

    EnergyDistributionResponse {
        data: by_month
            .into_iter()
            .map(|((year, month), (auto, export, _))| DistributionPoint {
                year,
                month,
                autoconsumo_kwh: auto,
                exportacion_kwh: export,
            })
            .collect(),
        resumen: by_year
            .into_iter()
            .map(|(year, (auto, export, generated))| DistributionYearSummary {
                year,
                autoconsumo_pct: share_pct(auto, generated),
                exportacion_pct: share_pct(export, generated),
            })
            .collect(),
    }
}

fn investment_summary(
    dataset: &Dataset,
    config: &EngineConfig,
    plant_id: Option<u32>,
) -> Result<InvestmentSummaryResponse, (StatusCode, String)> {
    let plant = match plant_id {
        Some(id) => find_plant(dataset, id)?,
        None => match dataset.plants.as_slice() {
            [only] => only,
            _ => {
                return Err((
                    StatusCode::BAD_REQUEST,
                    "plant_id is required when multiple plants are configured".to_string(),
                ));
            }
        },
    };

    let records = normalize_all(&dataset.periods, &config.tariff);
    let own = records_for(&records, plant.id);

    let schedule = tax_benefit_schedule(plant.investment, &config.tax);
    let elapsed_months = own.len() as u32;
    let ahorro_total: f64 = own.iter().map(|r| r.savings).sum();
    let ingresos_exportacion: f64 = own.iter().map(|r| r.export_income).sum();
    let income_total = ahorro_total + ingresos_exportacion;
    let tax_to_date = tax_savings_to_date(&schedule, elapsed_months);

    let promedio_mensual = if elapsed_months > 0 {
        income_total / elapsed_months as f64
    } else {
        0.0
    };
    let monthly_recovery_rate = if elapsed_months > 0 {
        (income_total + tax_to_date) / elapsed_months as f64
    } else {
        0.0
    };

    let recuperacion = track_recovery(&RecoveryInputs {
        investment: plant.investment,
        savings_to_date: income_total,
        tax_savings_to_date: tax_to_date,
        avg_monthly_savings: monthly_recovery_rate,
        as_of: config.as_of,
    });

    let indicadores_reales = real_indicators(plant.investment, &own, &schedule);

    let projection = project_generation(&ProjectionParams {
        capacity_kwp: plant.capacity_kwp,
        daily_yield_hours: plant.daily_yield_hours,
        performance_ratio: plant.performance_ratio,
        annual_degradation_pct: config.annual_degradation_pct,
        lifespan_years: config.lifespan_years,
    });
    let year_one_generation = projection.first().map(|y| y.generation_kwh).unwrap_or(0.0);
    let indicadores_proyectados = projected_indicators(
        plant.investment,
        year_one_generation,
        config.tariff.average_tariff,
        schedule.first().map(|y| y.tax_saving).unwrap_or(0.0),
    );

    let opex_by_year: BTreeMap<i32, f64> = dataset
        .opex
        .iter()
        .filter(|o| o.plant_id == plant.id)
        .map(|o| (o.year, o.amount))
        .collect();
    let ebitda = ebitda_by_year(&own, &opex_by_year, config.opex_ratio);
    let saldos = own
        .iter()
        .map(|r| SaldoPoint {
            year: r.year,
            month: r.month,
            saldo: r.balance,
        })
        .collect();

    Ok(InvestmentSummaryResponse {
        inversion: InversionSection {
            total: plant.investment,
            capacidad_kwp: plant.capacity_kwp,
            fecha_instalacion: plant.commissioned,
        },
        ingresos: IngresosSection {
            ahorro_total,
            ingresos_exportacion,
            promedio_mensual,
            meses_operacion: elapsed_months,
        },
        beneficios_tributarios: BeneficiosSection {
            total: total_tax_savings(&schedule),
            acumulado_a_la_fecha: tax_to_date,
            programa: schedule,
        },
        recuperacion,
        indicadores_reales,
        indicadores_proyectados,
        ebitda,
        saldos,
    })
}

fn portfolio_summary(dataset: &Dataset, config: &EngineConfig) -> PortfolioSummary {
    consolidate(&normalize_all(&dataset.periods, &config.tariff))
}

fn find_plant(dataset: &Dataset, plant_id: u32) -> Result<&Plant, (StatusCode, String)> {
    dataset
        .plants
        .iter()
        .find(|p| p.id == plant_id)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("unknown plant {plant_id}")))
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}
