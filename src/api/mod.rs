use axum::{
    Router,
    extract::{Json, Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use uuid::Uuid;

use crate::cache::TtlCache;
use crate::core::{
    CalcError, CalculationResult, InvestmentTerms, RoiMode, TimeUnit, Volatility, assess_risk,
    calculate, countries, country_by_code, first_mini_for, mini_scenario_for, mini_scenarios_for,
    scenario_by_id, scenarios,
};

const RESULT_TTL: Duration = Duration::from_secs(3600);

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliRoiMode {
    RangeDerived,
    FlatTable,
}

impl From<CliRoiMode> for RoiMode {
    fn from(value: CliRoiMode) -> Self {
        match value {
            CliRoiMode::RangeDerived => RoiMode::RangeDerived,
            CliRoiMode::FlatTable => RoiMode::FlatTable,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiRoiMode {
    #[serde(alias = "rangeDerived", alias = "range_derived", alias = "range")]
    RangeDerived,
    #[serde(alias = "flatTable", alias = "flat_table", alias = "flat")]
    FlatTable,
}

impl From<ApiRoiMode> for CliRoiMode {
    fn from(value: ApiRoiMode) -> Self {
        match value {
            ApiRoiMode::RangeDerived => CliRoiMode::RangeDerived,
            ApiRoiMode::FlatTable => CliRoiMode::FlatTable,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CalculatePayload {
    scenario_id: Option<u32>,
    mini_scenario_id: Option<u32>,
    country_code: Option<String>,
    initial_investment: Option<f64>,
    additional_costs: Option<f64>,
    time_period: Option<f64>,
    time_unit: Option<String>,
    roi_mode: Option<ApiRoiMode>,
    volatility_seed: Option<u64>,
    session_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ComparePayload {
    scenario_ids: Option<String>,
    country_code: Option<String>,
    initial_investment: Option<f64>,
    additional_costs: Option<f64>,
    time_period: Option<f64>,
    time_unit: Option<String>,
    roi_mode: Option<ApiRoiMode>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RiskQuery {
    investment_amount: Option<f64>,
    country_code: Option<String>,
}

#[derive(Parser, Debug)]
#[command(
    name = "investwise",
    about = "Business ROI estimator (scenario catalogs + tax-aware ROI pipeline)"
)]
struct Cli {
    #[arg(long, default_value_t = 1)]
    scenario_id: u32,
    #[arg(long, help = "Mini-scenario id; defaults to the scenario's first one")]
    mini_scenario_id: Option<u32>,
    #[arg(long, default_value = "US")]
    country_code: String,
    #[arg(long, default_value_t = 10_000.0)]
    initial_investment: f64,
    #[arg(long, default_value_t = 0.0)]
    additional_costs: f64,
    #[arg(long, default_value_t = 1.0)]
    time_period: f64,
    #[arg(
        long,
        default_value = "years",
        help = "years, months, weeks or days; unrecognized values mean years"
    )]
    time_unit: String,
    #[arg(long, value_enum, default_value_t = CliRoiMode::RangeDerived)]
    roi_mode: CliRoiMode,
    #[arg(long, help = "Seed for the market volatility draw; omit to disable")]
    volatility_seed: Option<u64>,
}

#[derive(Debug)]
struct CalculationRequest {
    scenario_id: u32,
    mini_scenario_id: Option<u32>,
    country_code: String,
    terms: InvestmentTerms,
    mode: RoiMode,
    volatility: Volatility,
    session_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredCalculation {
    session_id: String,
    result: CalculationResult,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompareEntry {
    scenario_id: u32,
    scenario_name: String,
    mini_scenario_name: String,
    roi_percentage: f64,
    annualized_roi: f64,
    after_tax_profit: f64,
    risk_score: f64,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Clone)]
struct AppState {
    cache: Arc<TtlCache<StoredCalculation>>,
}

fn build_request(cli: Cli, session_id: Option<String>) -> Result<CalculationRequest, String> {
    if !cli.initial_investment.is_finite() || cli.initial_investment <= 0.0 {
        return Err("--initial-investment must be > 0".to_string());
    }

    if !cli.additional_costs.is_finite() || cli.additional_costs < 0.0 {
        return Err("--additional-costs must be >= 0".to_string());
    }

    if !cli.time_period.is_finite() || cli.time_period <= 0.0 {
        return Err("--time-period must be > 0".to_string());
    }

    if cli.country_code.trim().is_empty() {
        return Err("--country-code must not be empty".to_string());
    }

    Ok(CalculationRequest {
        scenario_id: cli.scenario_id,
        mini_scenario_id: cli.mini_scenario_id,
        country_code: cli.country_code,
        terms: InvestmentTerms {
            initial_investment: cli.initial_investment,
            additional_costs: cli.additional_costs,
            time_period: cli.time_period,
            time_unit: TimeUnit::from_name(&cli.time_unit),
        },
        mode: cli.roi_mode.into(),
        volatility: match cli.volatility_seed {
            Some(seed) => Volatility::Seeded(seed),
            None => Volatility::Disabled,
        },
        session_id,
    })
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let state = AppState {
        cache: Arc::new(TtlCache::new(RESULT_TTL)),
    };
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/roi/scenarios", get(scenarios_handler))
        .route(
            "/api/roi/scenarios/:scenario_id/mini-scenarios",
            get(mini_scenarios_handler),
        )
        .route(
            "/api/roi/calculate",
            get(calculate_get_handler).post(calculate_post_handler),
        )
        .route("/api/roi/calculation/:session_id", get(calculation_handler))
        .route("/api/roi/compare", get(compare_handler))
        .route(
            "/api/roi/risk-assessment/:scenario_id",
            get(risk_assessment_handler),
        )
        .route("/api/tax/countries", get(countries_handler))
        .route("/api/tax/countries/:code", get(country_handler))
        .fallback(not_found_handler)
        .with_state(state);

    let listener = TcpListener::bind(addr).await?;
    println!("InvestWise HTTP API listening on http://{addr}");
    println!("Local access: http://127.0.0.1:{port}/");

    axum::serve(listener, app).await
}

async fn index_handler() -> Response {
    json_response(
        StatusCode::OK,
        serde_json::json!({
            "service": "investwise",
            "endpoints": ["/api/roi", "/api/tax"],
        }),
    )
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, serde_json::json!({ "status": "healthy" }))
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn scenarios_handler() -> Response {
    json_response(StatusCode::OK, scenarios())
}

async fn mini_scenarios_handler(Path(scenario_id): Path<u32>) -> Response {
    if let Err(e) = scenario_by_id(scenario_id) {
        return calc_error_response(e);
    }
    json_response(StatusCode::OK, mini_scenarios_for(scenario_id))
}

async fn calculate_get_handler(
    State(state): State<AppState>,
    Query(payload): Query<CalculatePayload>,
) -> Response {
    calculate_handler_impl(state, payload).await
}

async fn calculate_post_handler(
    State(state): State<AppState>,
    Json(payload): Json<CalculatePayload>,
) -> Response {
    calculate_handler_impl(state, payload).await
}

async fn calculate_handler_impl(state: AppState, payload: CalculatePayload) -> Response {
    let request = match request_from_payload(payload) {
        Ok(request) => request,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };

    let stored = match run_calculation(&request) {
        Ok(stored) => stored,
        Err(e) => return calc_error_response(e),
    };

    state.cache.put(stored.session_id.clone(), stored.clone());
    json_response(StatusCode::OK, stored)
}

async fn calculation_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    match state.cache.get(&session_id) {
        Some(stored) => json_response(StatusCode::OK, stored),
        None => error_response(StatusCode::NOT_FOUND, "Calculation not found or expired"),
    }
}

async fn compare_handler(Query(payload): Query<ComparePayload>) -> Response {
    let scenario_ids = match parse_scenario_ids(payload.scenario_ids.as_deref().unwrap_or("")) {
        Ok(ids) => ids,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };

    let base = CalculatePayload {
        country_code: payload.country_code,
        initial_investment: payload.initial_investment,
        additional_costs: payload.additional_costs,
        time_period: payload.time_period,
        time_unit: payload.time_unit,
        roi_mode: payload.roi_mode,
        ..CalculatePayload::default()
    };
    let request = match request_from_payload(base) {
        Ok(request) => request,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };

    let mut entries = Vec::with_capacity(scenario_ids.len());
    for scenario_id in scenario_ids {
        let entry = CalculationRequest {
            scenario_id,
            mini_scenario_id: None,
            country_code: request.country_code.clone(),
            terms: request.terms.clone(),
            mode: request.mode,
            volatility: request.volatility,
            session_id: None,
        };
        match run_calculation(&entry) {
            Ok(stored) => entries.push(CompareEntry {
                scenario_id,
                scenario_name: stored.result.scenario_name,
                mini_scenario_name: stored.result.mini_scenario_name,
                roi_percentage: stored.result.roi_percentage,
                annualized_roi: stored.result.annualized_roi,
                after_tax_profit: stored.result.after_tax_profit,
                risk_score: stored.result.risk_score,
            }),
            Err(e) => return calc_error_response(e),
        }
    }

    json_response(StatusCode::OK, entries)
}

async fn risk_assessment_handler(
    Path(scenario_id): Path<u32>,
    Query(query): Query<RiskQuery>,
) -> Response {
    let cli = default_cli_for_api();
    let investment_amount = query.investment_amount.unwrap_or(cli.initial_investment);
    if !investment_amount.is_finite() || investment_amount <= 0.0 {
        return error_response(StatusCode::BAD_REQUEST, "investmentAmount must be > 0");
    }
    let country_code = query.country_code.unwrap_or(cli.country_code);

    let scenario = match scenario_by_id(scenario_id) {
        Ok(scenario) => scenario,
        Err(e) => return calc_error_response(e),
    };
    let country = match country_by_code(&country_code) {
        Ok(country) => country,
        Err(e) => return calc_error_response(e),
    };

    json_response(
        StatusCode::OK,
        assess_risk(scenario, country, investment_amount),
    )
}

async fn countries_handler() -> Response {
    json_response(StatusCode::OK, countries())
}

async fn country_handler(Path(code): Path<String>) -> Response {
    match country_by_code(&code) {
        Ok(country) => json_response(StatusCode::OK, country),
        Err(e) => calc_error_response(e),
    }
}

fn run_calculation(request: &CalculationRequest) -> Result<StoredCalculation, CalcError> {
    let scenario = scenario_by_id(request.scenario_id)?;
    let mini = match request.mini_scenario_id {
        Some(mini_id) => mini_scenario_for(request.scenario_id, mini_id)?,
        None => first_mini_for(request.scenario_id)?,
    };
    let country = country_by_code(&request.country_code)?;

    let result = calculate(
        &request.terms,
        scenario,
        mini,
        country,
        request.mode,
        request.volatility,
    )?;

    let session_id = request
        .session_id
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    Ok(StoredCalculation { session_id, result })
}

fn parse_scenario_ids(raw: &str) -> Result<Vec<u32>, String> {
    let ids = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .map_err(|_| format!("scenarioIds entry '{s}' is not a valid id"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if ids.is_empty() {
        return Err("scenarioIds must list at least one scenario id".to_string());
    }
    Ok(ids)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
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

fn calc_error_response(e: CalcError) -> Response {
    let status = match e {
        CalcError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        CalcError::NotFound(_) => StatusCode::NOT_FOUND,
    };
    error_response(status, &e.to_string())
}

#[cfg(test)]
fn request_from_json(json: &str) -> Result<CalculationRequest, String> {
    let payload = serde_json::from_str::<CalculatePayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    request_from_payload(payload)
}

fn request_from_payload(payload: CalculatePayload) -> Result<CalculationRequest, String> {
    let mut cli = default_cli_for_api();

    if let Some(v) = payload.scenario_id {
        cli.scenario_id = v;
    }
    if let Some(v) = payload.mini_scenario_id {
        cli.mini_scenario_id = Some(v);
    }
    if let Some(v) = payload.country_code {
        cli.country_code = v;
    }
    if let Some(v) = payload.initial_investment {
        cli.initial_investment = v;
    }
    if let Some(v) = payload.additional_costs {
        cli.additional_costs = v;
    }
    if let Some(v) = payload.time_period {
        cli.time_period = v;
    }
    if let Some(v) = payload.time_unit {
        cli.time_unit = v;
    }
    if let Some(v) = payload.roi_mode {
        cli.roi_mode = v.into();
    }
    if let Some(v) = payload.volatility_seed {
        cli.volatility_seed = Some(v);
    }

    let session_id = payload.session_id.filter(|s| !s.trim().is_empty());
    build_request(cli, session_id)
}

fn default_cli_for_api() -> Cli {
    Cli {
        scenario_id: 1,
        mini_scenario_id: None,
        country_code: "US".to_string(),
        initial_investment: 10_000.0,
        additional_costs: 0.0,
        time_period: 1.0,
        time_unit: "years".to_string(),
        roi_mode: CliRoiMode::RangeDerived,
        volatility_seed: None,
    }
}
