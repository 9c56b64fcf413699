use crate::aqi::{self, Pollutant};
use crate::cli::CommandLineArgs;
use crate::datasets::Datasets;
use crate::models::*;

use clap::Parser;

/// Command line arguments with all defaults applied.
pub(crate) fn args() -> CommandLineArgs {
    CommandLineArgs::parse_from(["envdash"])
}

/// Build a monitor record with a consistent derived classification.
pub(crate) fn monitor(label: &str, concentration: f64, city: &str) -> MonitorRecord {
    let pollutant = label.to_lowercase();
    let aqi = aqi::classify(concentration, Pollutant::from_label(&pollutant)).unwrap();
    MonitorRecord {
        lat: 34.05,
        lon: -118.25,
        aqi: aqi.index,
        city: city.to_string(),
        state: "California".to_string(),
        color: aqi.category,
        pollutant,
    }
}

pub(crate) fn monitor_records() -> Vec<MonitorRecord> {
    vec![
        monitor("Ozone", 0.031, "Pasadena"),
        monitor("Ozone", 0.060, "Downtown LA"),
        monitor("PM2.5 - Local Conditions", 15.0, "Harbor"),
    ]
}

fn water(primary_fuel: &str, water_footprint: f64) -> WaterRecord {
    WaterRecord {
        lat: 34.1,
        lon: -118.2,
        water_footprint,
        subbasin: "Los Angeles".to_string(),
        state: "CA".to_string(),
        primary_fuel: primary_fuel.to_string(),
    }
}

pub(crate) fn water_records() -> Vec<WaterRecord> {
    vec![water("Coal", 10.0), water("Gas", 30.0), water("Coal", 5.0)]
}

pub(crate) fn carbon_records() -> Vec<CarbonRecord> {
    vec![
        CarbonRecord {
            lat: 34.1,
            lon: -118.2,
            subbasin: "Los Angeles".to_string(),
            state: "CA".to_string(),
            primary_fuel: "Coal".to_string(),
            carbon_footprint: 200.0,
        },
        CarbonRecord {
            lat: 34.2,
            lon: -118.3,
            subbasin: "Los Angeles".to_string(),
            state: "CA".to_string(),
            primary_fuel: "Gas".to_string(),
            carbon_footprint: 100.0,
        },
    ]
}

pub(crate) fn power_records() -> Vec<PowerRecord> {
    vec![PowerRecord {
        lat: 34.1,
        lon: -118.2,
        total_mwh: 5000.0,
        subbasin: "Los Angeles".to_string(),
        state: "CA".to_string(),
        primary_fuel: "Gas".to_string(),
    }]
}

pub(crate) fn scatter_records() -> Vec<ScatterRecord> {
    vec![
        ScatterRecord {
            total_mwh: 5000.0,
            scarcity_factor: Some(0.8),
            water_footprint: 100.0,
            carbon_intensity_tons_per_mwh: 0.4,
        },
        ScatterRecord {
            total_mwh: 2500.0,
            scarcity_factor: None,
            water_footprint: 50.0,
            carbon_intensity_tons_per_mwh: 0.2,
        },
    ]
}

fn data_center(name: &str, state: &str, status: &str, operator: &str) -> DataCenterRecord {
    DataCenterRecord {
        name: name.to_string(),
        city: "Ashburn".to_string(),
        state: state.to_string(),
        operator: operator.to_string(),
        power_source: "Grid".to_string(),
        cooling_source: "Evaporative".to_string(),
        property_size_acres: "100".to_string(),
        project_cost: "$1B".to_string(),
        status: status.to_string(),
        lat: 39.0,
        lon: -77.5,
        size_rank: "1".to_string(),
        facility_size_sq_ft: None,
    }
}

pub(crate) fn data_center_records() -> Vec<DataCenterRecord> {
    let mut records = vec![
        data_center("Alpha", "VA", "Operational", "AWS"),
        data_center("Beta", "VA", "Planned", "aws "),
        data_center("Gamma", "NV", "Operational", "Unknown"),
    ];
    records[0].facility_size_sq_ft = Some(1_500_000.0);
    records
}

pub(crate) fn scenario_records() -> Vec<ScenarioRecord> {
    vec![
        ScenarioRecord {
            year: 2030,
            energy_twh: 120.5,
            carbon_mt_co2: 45.2,
            water_mm3: 300.0,
            scenario: "baseline".to_string(),
        },
        ScenarioRecord {
            year: 2030,
            energy_twh: 150.0,
            carbon_mt_co2: 60.1,
            water_mm3: 340.0,
            scenario: "expansion".to_string(),
        },
        ScenarioRecord {
            year: 2035,
            energy_twh: 140.0,
            carbon_mt_co2: 50.0,
            water_mm3: 320.0,
            scenario: "baseline".to_string(),
        },
    ]
}

/// A fully-populated dataset snapshot.
pub(crate) fn datasets() -> Datasets {
    Datasets {
        monitors: monitor_records(),
        data_centers: data_center_records(),
        water: water_records(),
        carbon: carbon_records(),
        power: power_records(),
        scatter: scatter_records(),
        scenarios: scenario_records(),
    }
}
