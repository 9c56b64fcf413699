//! Data types and associated functions and methods
//!
//! Record types hold one fully-parsed CSV row each; a record never exists in a
//! half-parsed state. Response envelopes preserve the field names of the
//! legacy dashboard API, which the front end depends on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aqi::Category;

/// One air-quality monitor reading with its derived classification.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonitorRecord {
    pub lat: f64,
    pub lon: f64,
    /// Derived AQI index, always at least 1.
    pub aqi: u32,
    /// Local site name.
    pub city: String,
    pub state: String,
    /// Derived AQI colour category.
    pub color: Category,
    /// Lower-cased pollutant label from the source CSV.
    pub pollutant: String,
}

/// One water-footprint measurement for a power plant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WaterRecord {
    pub lat: f64,
    pub lon: f64,
    pub water_footprint: f64,
    pub subbasin: String,
    pub state: String,
    pub primary_fuel: String,
}

/// One carbon-footprint measurement for a power plant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CarbonRecord {
    pub lat: f64,
    pub lon: f64,
    pub subbasin: String,
    pub state: String,
    pub primary_fuel: String,
    pub carbon_footprint: f64,
}

/// One power-consumption record for a power plant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PowerRecord {
    pub lat: f64,
    pub lon: f64,
    pub total_mwh: f64,
    pub subbasin: String,
    pub state: String,
    pub primary_fuel: String,
}

/// One point of the water/carbon scatter chart.
///
/// Only rows with positive generation and water footprint and a known carbon
/// intensity qualify.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScatterRecord {
    pub total_mwh: f64,
    pub scarcity_factor: Option<f64>,
    pub water_footprint: f64,
    pub carbon_intensity_tons_per_mwh: f64,
}

/// A scatter point with its derived bubble size.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub total_mwh: f64,
    pub scarcity_factor: Option<f64>,
    pub water_footprint: f64,
    pub carbon_intensity_tons_per_mwh: f64,
    /// Bubble size scaled to the largest water footprint in the table.
    pub size: f64,
}

/// One data-center facility record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DataCenterRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Operator")]
    pub operator: String,
    #[serde(rename = "PowerSource")]
    pub power_source: String,
    #[serde(rename = "CoolingSource")]
    pub cooling_source: String,
    #[serde(rename = "PropertySizeAcres")]
    pub property_size_acres: String,
    #[serde(rename = "ProjectCost")]
    pub project_cost: String,
    #[serde(rename = "Status")]
    pub status: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "SizeRank")]
    pub size_rank: String,
    /// Cleaned numeric facility size, used by the summary tables only.
    #[serde(skip_serializing)]
    pub facility_size_sq_ft: Option<f64>,
}

/// One forecast data point for a named scenario at a given year.
///
/// Conceptually keyed by (year, scenario) but duplicates may coexist.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScenarioRecord {
    pub year: i32,
    #[serde(rename = "energy_TWh")]
    pub energy_twh: f64,
    #[serde(rename = "carbon_MtCO2")]
    pub carbon_mt_co2: f64,
    #[serde(rename = "water_Mm3")]
    pub water_mm3: f64,
    pub scenario: String,
}

/// Query parameters accepted by the monitors endpoint.
#[derive(Debug, Deserialize)]
pub struct MonitorsQuery {
    pub pollutant: Option<String>,
}

/// Query parameters accepted by the scenario endpoints.
#[derive(Debug, Deserialize)]
pub struct ScenarioQuery {
    pub year: Option<String>,
}

/// Response for the monitors endpoint.
#[derive(Debug, Serialize)]
pub struct MonitorsResponse {
    pub timestamp: DateTime<Utc>,
    pub monitors: Vec<MonitorRecord>,
    pub data_centers: Vec<DataCenterRecord>,
}

/// Generic map-point response envelope.
#[derive(Debug, Serialize)]
pub struct PointsResponse<T: Serialize> {
    pub timestamp: DateTime<Utc>,
    pub points: Vec<T>,
}

/// Response for the scenario endpoint.
#[derive(Debug, Serialize)]
pub struct ScenarioResponse {
    pub timestamp: DateTime<Utc>,
    pub data: Vec<ScenarioRecord>,
}

/// A scenario record reduced to its carbon projection.
#[derive(Debug, PartialEq, Serialize)]
pub struct CarbonScenarioEntry {
    pub year: i32,
    #[serde(rename = "carbon_MtCO2")]
    pub carbon_mt_co2: f64,
    pub scenario: String,
}

/// Response for the carbon scenario endpoint.
#[derive(Debug, Serialize)]
pub struct CarbonScenarioResponse {
    pub timestamp: DateTime<Utc>,
    pub data: Vec<CarbonScenarioEntry>,
}

/// One group of the water-by-fuel aggregation.
#[derive(Debug, PartialEq, Serialize)]
pub struct WaterFuelEntry {
    pub primary_fuel: String,
    pub water_footprint: f64,
}

/// One group of the carbon-by-fuel aggregation.
#[derive(Debug, PartialEq, Serialize)]
pub struct CarbonFuelEntry {
    pub primary_fuel: String,
    pub carbon_footprint: f64,
}

/// Facility count per project status.
#[derive(Debug, PartialEq, Serialize)]
pub struct StatusCount {
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Count")]
    pub count: u64,
}

/// Facility count per state.
#[derive(Debug, PartialEq, Serialize)]
pub struct StateCount {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Count")]
    pub count: u64,
}

/// Facility count per operator.
#[derive(Debug, PartialEq, Serialize)]
pub struct OperatorCount {
    #[serde(rename = "Operator")]
    pub operator: String,
    #[serde(rename = "Count")]
    pub count: u64,
}

/// One facility's size in millions of square feet.
#[derive(Debug, PartialEq, Serialize)]
pub struct SizeDistributionEntry {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Size_Million_sq_ft")]
    pub size_million_sq_ft: f64,
}

/// Response for the data-center summary endpoint.
#[derive(Debug, Serialize)]
pub struct DataCenterSummary {
    pub timestamp: DateTime<Utc>,
    pub status_counts: Vec<StatusCount>,
    pub top_states: Vec<StateCount>,
    pub top_operators: Vec<OperatorCount>,
    pub size_distribution: Vec<SizeDistributionEntry>,
}
