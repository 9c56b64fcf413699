//! CSV dataset loading.
//!
//! Each dataset loads once at startup into an immutable in-memory table. The
//! loaders are best-effort: a row that fails to parse any required field is
//! dropped whole, and a missing or unreadable file yields an empty table
//! rather than failing startup.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use expanduser::expanduser;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::aqi::{self, Pollutant};
use crate::cli::CommandLineArgs;
use crate::error::DashboardError;
use crate::models::{
    CarbonRecord, DataCenterRecord, MonitorRecord, PowerRecord, ScatterRecord, ScenarioRecord,
    WaterRecord,
};

/// The full in-memory snapshot served by the dashboard.
///
/// The power and scatter tables are alternative views over the water
/// footprint CSV, mirroring the legacy data layout.
#[derive(Debug, Default)]
pub struct Datasets {
    pub monitors: Vec<MonitorRecord>,
    pub data_centers: Vec<DataCenterRecord>,
    pub water: Vec<WaterRecord>,
    pub carbon: Vec<CarbonRecord>,
    pub power: Vec<PowerRecord>,
    pub scatter: Vec<ScatterRecord>,
    pub scenarios: Vec<ScenarioRecord>,
}

/// Load every dataset named by the command line arguments.
pub fn load(args: &CommandLineArgs) -> Datasets {
    Datasets {
        monitors: load_path(&args.monitor_csv, "monitors", monitor_record),
        data_centers: load_path(&args.data_center_csv, "data_centers", data_center_record),
        water: load_path(&args.water_csv, "water", water_record),
        carbon: load_path(&args.carbon_csv, "carbon", carbon_record),
        power: load_path(&args.water_csv, "power", power_record),
        scatter: load_path(&args.water_csv, "scatter", scatter_record),
        scenarios: load_path(&args.impact_csv, "scenarios", scenario_record),
    }
}

/// Load one dataset from a CSV file path.
fn load_path<D, T, F>(path: &str, dataset: &'static str, convert: F) -> Vec<T>
where
    D: DeserializeOwned,
    F: Fn(D) -> Option<T>,
{
    let file = match open_dataset(path) {
        Ok(file) => file,
        Err(error) => {
            warn!(dataset, %error, "serving empty table");
            return Vec::new();
        }
    };
    let rows = read_rows(file, dataset, convert);
    info!(dataset, rows = rows.len(), "loaded dataset");
    rows
}

/// Open a dataset file, expanding a leading `~` in the path.
fn open_dataset(path: &str) -> Result<File, DashboardError> {
    let path = expanduser(path).unwrap_or_else(|_| PathBuf::from(path));
    File::open(&path).map_err(|source| DashboardError::DatasetOpen {
        path: path.display().to_string(),
        source,
    })
}

/// Read typed records from a CSV reader, skipping rows that fail to convert.
fn read_rows<D, T, F, R>(reader: R, dataset: &'static str, convert: F) -> Vec<T>
where
    D: DeserializeOwned,
    F: Fn(D) -> Option<T>,
    R: Read,
{
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for result in csv_reader.deserialize() {
        let raw: D = match result {
            Ok(raw) => raw,
            Err(error) => {
                let error = DashboardError::from(error);
                debug!(dataset, %error, "skipping unreadable row");
                continue;
            }
        };
        if let Some(record) = convert(raw) {
            rows.push(record);
        }
    }
    rows
}

/// Parse a required numeric field: trimmed, parseable and finite.
fn parse_finite(field: &str) -> Option<f64> {
    let value: f64 = field.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Parse a numeric field that may use thousands separators (e.g. "1,234.5").
fn parse_grouped(field: &str) -> Option<f64> {
    parse_finite(&field.replace(',', ""))
}

#[derive(Debug, Deserialize)]
struct MonitorRow {
    #[serde(rename = "Latitude")]
    latitude: String,
    #[serde(rename = "Longitude")]
    longitude: String,
    #[serde(rename = "Arithmetic Mean")]
    arithmetic_mean: String,
    #[serde(rename = "Local Site Name")]
    site_name: String,
    #[serde(rename = "Parameter Name")]
    parameter_name: String,
    #[serde(rename = "State Name")]
    state_name: String,
}

fn monitor_record(row: MonitorRow) -> Option<MonitorRecord> {
    let lat = parse_finite(&row.latitude)?;
    let lon = parse_finite(&row.longitude)?;
    let concentration = parse_finite(&row.arithmetic_mean)?;
    let pollutant = row.parameter_name.to_lowercase();
    // Rows with an unclassifiable pollutant never enter the table.
    let aqi = aqi::classify(concentration, Pollutant::from_label(&pollutant))?;
    Some(MonitorRecord {
        lat,
        lon,
        aqi: aqi.index,
        city: row.site_name,
        state: row.state_name,
        color: aqi.category,
        pollutant,
    })
}

#[derive(Debug, Deserialize)]
struct FootprintRow {
    #[serde(default)]
    lat: String,
    #[serde(default)]
    lon: String,
    #[serde(default)]
    water_footprint: String,
    #[serde(default)]
    carbon_footprint: String,
    #[serde(default)]
    total_mwh: String,
    #[serde(default)]
    subbasin: String,
    #[serde(default)]
    plant_state: String,
    #[serde(default)]
    primary_fuel: String,
    #[serde(default)]
    scarcity_factor: String,
    #[serde(default)]
    carbon_intensity_tons_per_mwh: String,
}

fn water_record(row: FootprintRow) -> Option<WaterRecord> {
    let lat = parse_finite(&row.lat)?;
    let lon = parse_finite(&row.lon)?;
    let water_footprint = parse_finite(&row.water_footprint)?;
    if water_footprint <= 0.0 {
        return None;
    }
    Some(WaterRecord {
        lat,
        lon,
        water_footprint,
        subbasin: row.subbasin,
        state: row.plant_state,
        primary_fuel: row.primary_fuel,
    })
}

fn carbon_record(row: FootprintRow) -> Option<CarbonRecord> {
    let lat = parse_finite(&row.lat)?;
    let lon = parse_finite(&row.lon)?;
    // Legacy exports wrote carbon footprints with thousands separators.
    let carbon_footprint = parse_grouped(&row.carbon_footprint)?;
    if carbon_footprint <= 0.0 {
        return None;
    }
    Some(CarbonRecord {
        lat,
        lon,
        subbasin: row.subbasin,
        state: row.plant_state,
        primary_fuel: row.primary_fuel,
        carbon_footprint,
    })
}

fn power_record(row: FootprintRow) -> Option<PowerRecord> {
    let lat = parse_finite(&row.lat)?;
    let lon = parse_finite(&row.lon)?;
    let total_mwh = parse_finite(&row.total_mwh)?;
    Some(PowerRecord {
        lat,
        lon,
        total_mwh,
        subbasin: row.subbasin,
        state: row.plant_state,
        primary_fuel: row.primary_fuel,
    })
}

fn scatter_record(row: FootprintRow) -> Option<ScatterRecord> {
    let total_mwh = parse_finite(&row.total_mwh)?;
    let water_footprint = parse_finite(&row.water_footprint)?;
    let carbon_intensity_tons_per_mwh = parse_finite(&row.carbon_intensity_tons_per_mwh)?;
    if total_mwh <= 0.0 || water_footprint <= 0.0 {
        return None;
    }
    Some(ScatterRecord {
        total_mwh,
        scarcity_factor: parse_finite(&row.scarcity_factor),
        water_footprint,
        carbon_intensity_tons_per_mwh,
    })
}

#[derive(Debug, Deserialize)]
struct DataCenterRow {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "City", default)]
    city: String,
    #[serde(rename = "State", default)]
    state: String,
    #[serde(rename = "Operator", default)]
    operator: String,
    #[serde(rename = "Power source", default)]
    power_source: String,
    #[serde(rename = "Cooling source", default)]
    cooling_source: String,
    #[serde(rename = "Property Size (acres)", default)]
    property_size_acres: String,
    #[serde(rename = "Project cost", default)]
    project_cost: String,
    #[serde(rename = "Status", default)]
    status: String,
    #[serde(rename = "Lat")]
    lat: String,
    #[serde(rename = "Long")]
    lon: String,
    #[serde(rename = "SizeRank (numeric)", default)]
    size_rank: String,
    #[serde(rename = "Facility size (sq ft)", default)]
    facility_size: String,
}

fn data_center_record(row: DataCenterRow) -> Option<DataCenterRecord> {
    let lat = parse_finite(&row.lat)?;
    let lon = parse_finite(&row.lon)?;
    Some(DataCenterRecord {
        name: row.name,
        city: row.city,
        state: row.state,
        operator: row.operator,
        power_source: row.power_source,
        cooling_source: row.cooling_source,
        property_size_acres: row.property_size_acres,
        project_cost: row.project_cost,
        status: row.status,
        lat,
        lon,
        size_rank: row.size_rank,
        facility_size_sq_ft: parse_grouped(&row.facility_size),
    })
}

#[derive(Debug, Deserialize)]
struct ScenarioRow {
    year: String,
    #[serde(rename = "energy_TWh")]
    energy_twh: String,
    #[serde(rename = "carbon_MtCO2")]
    carbon_mt_co2: String,
    #[serde(rename = "water_Mm3")]
    water_mm3: String,
    #[serde(default)]
    scenario: String,
}

fn scenario_record(row: ScenarioRow) -> Option<ScenarioRecord> {
    Some(ScenarioRecord {
        year: row.year.trim().parse().ok()?,
        energy_twh: parse_finite(&row.energy_twh)?,
        carbon_mt_co2: parse_finite(&row.carbon_mt_co2)?,
        water_mm3: parse_finite(&row.water_mm3)?,
        scenario: row.scenario.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aqi::Category;

    fn read<D, T, F>(csv: &str, convert: F) -> Vec<T>
    where
        D: DeserializeOwned,
        F: Fn(D) -> Option<T>,
    {
        read_rows(csv.as_bytes(), "test", convert)
    }

    #[test]
    fn monitors_drop_unparsable_rows() {
        let csv = "\
Latitude,Longitude,Arithmetic Mean,Local Site Name,Parameter Name,State Name
34.1,-118.2,0.060,Downtown LA,Ozone,California
not-a-lat,-118.2,0.060,Bad Row,Ozone,California
34.1,-118.2,15.0,Harbor,PM2.5 - Local Conditions,California
34.1,-118.2,1.5,Unknown,Sulfur dioxide,California
";
        let records = read(csv, monitor_record);
        assert_eq!(2, records.len());
        assert_eq!(67, records[0].aqi);
        assert_eq!(Category::Yellow, records[0].color);
        assert_eq!("ozone", records[0].pollutant);
        assert_eq!("pm2.5 - local conditions", records[1].pollutant);
    }

    #[test]
    fn monitors_missing_column_yields_empty_table() {
        let csv = "Latitude,Longitude\n34.1,-118.2\n";
        let records = read(csv, monitor_record);
        assert!(records.is_empty());
    }

    #[test]
    fn water_excludes_non_positive_footprints() {
        let csv = "\
lat,lon,water_footprint,subbasin,plant_state,primary_fuel
34.1,-118.2,120.5,Los Angeles,CA,Gas
34.2,-118.3,0,Los Angeles,CA,Coal
34.3,-118.4,-3.0,Los Angeles,CA,Coal
34.4,-118.5,,Los Angeles,CA,Coal
";
        let records = read(csv, water_record);
        assert_eq!(1, records.len());
        assert_eq!(120.5, records[0].water_footprint);
    }

    #[test]
    fn carbon_strips_thousands_separators() {
        let csv = "\
lat,lon,carbon_footprint,subbasin,plant_state,primary_fuel
34.1,-118.2,\"1,234.5\",Los Angeles,CA,Gas
";
        let records = read(csv, carbon_record);
        assert_eq!(1, records.len());
        assert_eq!(1234.5, records[0].carbon_footprint);
    }

    #[test]
    fn power_requires_total_mwh() {
        let csv = "\
lat,lon,total_mwh,primary_fuel
34.1,-118.2,5000,Gas
34.2,-118.3,,Coal
";
        let records = read(csv, power_record);
        assert_eq!(1, records.len());
        assert_eq!(5000.0, records[0].total_mwh);
    }

    #[test]
    fn scatter_requires_positive_generation_and_footprint() {
        let csv = "\
lat,lon,total_mwh,water_footprint,scarcity_factor,carbon_intensity_tons_per_mwh
34.1,-118.2,5000,120.5,0.8,0.4
34.2,-118.3,0,120.5,0.8,0.4
34.3,-118.4,5000,120.5,,0.4
34.4,-118.5,5000,120.5,0.8,
";
        let records = read(csv, scatter_record);
        assert_eq!(2, records.len());
        assert_eq!(Some(0.8), records[0].scarcity_factor);
        assert_eq!(None, records[1].scarcity_factor);
    }

    #[test]
    fn data_centers_require_coordinates() {
        let csv = "\
Name,City,State,Operator,Power source,Cooling source,Property Size (acres),Project cost,Status,Lat,Long,SizeRank (numeric),Facility size (sq ft)
Alpha,Ashburn,VA,AWS,Grid,Evaporative,100,$1B,Operational,39.0,-77.5,1,\"1,000,000\"
Beta,Reno,NV,,Grid,Air,50,$500M,Planned,,,2,250000
";
        let records = read(csv, data_center_record);
        assert_eq!(1, records.len());
        assert_eq!("Alpha", records[0].name);
        assert_eq!(Some(1_000_000.0), records[0].facility_size_sq_ft);
    }

    #[test]
    fn scenarios_require_parsable_year_and_allow_duplicates() {
        let csv = "\
year,energy_TWh,carbon_MtCO2,water_Mm3,scenario
2030,120.5,45.2,300.0,baseline
2030,120.5,45.2,300.0,baseline
not-a-year,120.5,45.2,300.0,baseline
2035,140.0,50.0,320.0,expansion
";
        let records = read(csv, scenario_record);
        assert_eq!(3, records.len());
        assert_eq!(records[0], records[1]);
        assert_eq!("expansion", records[2].scenario);
    }

    #[test]
    fn missing_file_yields_empty_table() {
        let records: Vec<MonitorRecord> =
            load_path("/nonexistent/monitors.csv", "monitors", monitor_record);
        assert!(records.is_empty());
    }
}
