//! HTTP API for the dashboard front end.
//!
//! Every handler reads the immutable dataset snapshot out of the shared
//! application state and allocates a fresh response; none of them can fail
//! for any syntactically valid request.

use crate::aggregate;
use crate::app_state::SharedAppState;
use crate::filters;
use crate::metrics;
use crate::models::{
    CarbonFuelEntry, CarbonRecord, CarbonScenarioEntry, CarbonScenarioResponse, DataCenterRecord,
    DataCenterSummary, MonitorsQuery, MonitorsResponse, OperatorCount, PointsResponse,
    PowerRecord, ScatterPoint, ScenarioQuery, ScenarioRecord, ScenarioResponse,
    SizeDistributionEntry, StateCount, StatusCount, WaterFuelEntry, WaterRecord,
};

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use tower::{Layer, ServiceBuilder};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

/// The top-level service, with trailing slashes normalised away.
pub type Service = NormalizePath<Router>;

/// Returns the ready-to-serve application service.
pub fn service(state: SharedAppState) -> Service {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Returns the dashboard API router.
pub fn router(state: SharedAppState) -> Router {
    Router::new()
        .route("/api/monitors", get(monitors))
        .route("/api/water", get(water))
        .route("/api/carbon", get(carbon))
        .route("/api/power", get(power))
        .route("/api/scenario", get(scenario))
        .route("/api/water_scenario", get(water_scenario))
        .route("/api/carbon_scenario", get(carbon_scenario))
        .route("/api/water_fuel", get(water_fuel))
        .route("/api/carbon_fuel", get(carbon_fuel))
        .route("/api/water_carbon_data", get(water_carbon_data))
        .route("/api/data_center_summary", get(data_center_summary))
        .route("/health", get(health))
        .route("/metrics", get(metrics::metrics_handler))
        .layer(
            ServiceBuilder::new().layer(
                TraceLayer::new_for_http()
                    .on_request(metrics::request_counter)
                    .on_response(metrics::record_response_metrics),
            ),
        )
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// Monitor readings, optionally filtered by pollutant, plus data-center points.
async fn monitors(
    State(state): State<SharedAppState>,
    Query(params): Query<MonitorsQuery>,
) -> Json<MonitorsResponse> {
    let query = params.pollutant.unwrap_or_default();
    let monitors = filters::filter_by_pollutant(&state.datasets.monitors, &query)
        .into_iter()
        .cloned()
        .collect();
    Json(MonitorsResponse {
        timestamp: Utc::now(),
        monitors,
        data_centers: state.datasets.data_centers.clone(),
    })
}

async fn water(State(state): State<SharedAppState>) -> Json<PointsResponse<WaterRecord>> {
    Json(PointsResponse {
        timestamp: Utc::now(),
        points: state.datasets.water.clone(),
    })
}

async fn carbon(State(state): State<SharedAppState>) -> Json<PointsResponse<CarbonRecord>> {
    Json(PointsResponse {
        timestamp: Utc::now(),
        points: state.datasets.carbon.clone(),
    })
}

async fn power(State(state): State<SharedAppState>) -> Json<PointsResponse<PowerRecord>> {
    Json(PointsResponse {
        timestamp: Utc::now(),
        points: state.datasets.power.clone(),
    })
}

/// Scenario projections, optionally filtered by exact year.
async fn scenario(
    State(state): State<SharedAppState>,
    Query(params): Query<ScenarioQuery>,
) -> Json<ScenarioResponse> {
    let year = params.year.unwrap_or_default();
    let data = filters::filter_by_year(&state.datasets.scenarios, &year)
        .into_iter()
        .cloned()
        .collect();
    Json(ScenarioResponse {
        timestamp: Utc::now(),
        data,
    })
}

async fn water_scenario(
    State(state): State<SharedAppState>,
) -> Json<PointsResponse<ScenarioRecord>> {
    Json(PointsResponse {
        timestamp: Utc::now(),
        points: state.datasets.scenarios.clone(),
    })
}

/// Scenario projections reduced to the carbon column.
async fn carbon_scenario(
    State(state): State<SharedAppState>,
    Query(params): Query<ScenarioQuery>,
) -> Json<CarbonScenarioResponse> {
    let year = params.year.unwrap_or_default();
    let data = filters::filter_by_year(&state.datasets.scenarios, &year)
        .into_iter()
        .map(|record| CarbonScenarioEntry {
            year: record.year,
            carbon_mt_co2: record.carbon_mt_co2,
            scenario: record.scenario.clone(),
        })
        .collect();
    Json(CarbonScenarioResponse {
        timestamp: Utc::now(),
        data,
    })
}

/// Water footprint summed per primary fuel, largest first.
async fn water_fuel(State(state): State<SharedAppState>) -> Json<Vec<WaterFuelEntry>> {
    let totals = aggregate::aggregate_by(
        &state.datasets.water,
        |record: &WaterRecord| record.primary_fuel.as_str(),
        |record: &WaterRecord| Some(record.water_footprint),
    );
    Json(
        totals
            .into_iter()
            .map(|group| WaterFuelEntry {
                primary_fuel: group.key,
                water_footprint: group.total,
            })
            .collect(),
    )
}

/// Carbon footprint summed per primary fuel, largest first.
async fn carbon_fuel(State(state): State<SharedAppState>) -> Json<Vec<CarbonFuelEntry>> {
    let totals = aggregate::aggregate_by(
        &state.datasets.carbon,
        |record: &CarbonRecord| record.primary_fuel.as_str(),
        |record: &CarbonRecord| Some(record.carbon_footprint),
    );
    Json(
        totals
            .into_iter()
            .map(|group| CarbonFuelEntry {
                primary_fuel: group.key,
                carbon_footprint: group.total,
            })
            .collect(),
    )
}

/// Scatter points with bubble sizes scaled to the largest water footprint.
async fn water_carbon_data(State(state): State<SharedAppState>) -> Json<Vec<ScatterPoint>> {
    let rows = &state.datasets.scatter;
    let max_water = rows
        .iter()
        .map(|record| record.water_footprint)
        .fold(0.0_f64, f64::max);
    Json(
        rows.iter()
            .map(|record| ScatterPoint {
                total_mwh: record.total_mwh,
                scarcity_factor: record.scarcity_factor,
                water_footprint: record.water_footprint,
                carbon_intensity_tons_per_mwh: record.carbon_intensity_tons_per_mwh,
                size: record.water_footprint / max_water * 300.0,
            })
            .collect(),
    )
}

/// Summary tables over the data-center facility records.
async fn data_center_summary(State(state): State<SharedAppState>) -> Json<DataCenterSummary> {
    let rows = &state.datasets.data_centers;

    let status_counts = aggregate::count_by(rows, |record: &DataCenterRecord| {
        let status = record.status.trim();
        (!status.is_empty()).then(|| status.to_string())
    })
    .into_iter()
    .map(|group| StatusCount {
        status: group.key,
        count: group.count,
    })
    .collect();

    let mut top_states: Vec<StateCount> = aggregate::count_by(rows, |record: &DataCenterRecord| {
        let state = record.state.trim();
        (!state.is_empty()).then(|| state.to_string())
    })
    .into_iter()
    .map(|group| StateCount {
        state: group.key,
        count: group.count,
    })
    .collect();
    top_states.truncate(10);

    // Operator labels are free text; fold case and drop the placeholder values.
    let mut top_operators: Vec<OperatorCount> =
        aggregate::count_by(rows, |record: &DataCenterRecord| {
            let operator = record.operator.trim().to_lowercase();
            match operator.as_str() {
                "" | "none" | "unknown" => None,
                _ => Some(operator),
            }
        })
        .into_iter()
        .map(|group| OperatorCount {
            operator: group.key,
            count: group.count,
        })
        .collect();
    top_operators.truncate(10);

    let size_distribution = rows
        .iter()
        .filter_map(|record| {
            record
                .facility_size_sq_ft
                .map(|size| SizeDistributionEntry {
                    name: record.name.clone(),
                    state: record.state.clone(),
                    size_million_sq_ft: size / 1_000_000.0,
                })
        })
        .collect();

    Json(DataCenterSummary {
        timestamp: Utc::now(),
        status_counts,
        top_states,
        top_operators,
        size_distribution,
    })
}
