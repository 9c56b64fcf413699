//! Command Line Interface (CLI) arguments.

use clap::Parser;

/// Environmental dashboard server command line interface
#[derive(Clone, Debug, Parser)]
pub struct CommandLineArgs {
    /// The IP address on which the server should listen
    #[arg(long, default_value = "0.0.0.0", env = "ENVDASH_HOST")]
    pub host: String,
    /// The port to which the server should bind
    #[arg(long, default_value_t = 3000, env = "ENVDASH_PORT")]
    pub port: u16,
    /// Flag indicating whether HTTPS should be used
    #[arg(long, default_value_t = false, env = "ENVDASH_HTTPS")]
    pub https: bool,
    /// Path to the certificate file to be used for HTTPS encryption
    #[arg(
        long,
        default_value = "~/.config/envdash/certs/cert.pem",
        env = "ENVDASH_CERT_FILE"
    )]
    pub cert_file: String,
    /// Path to the key file to be used for HTTPS encryption
    #[arg(
        long,
        default_value = "~/.config/envdash/certs/key.pem",
        env = "ENVDASH_KEY_FILE"
    )]
    pub key_file: String,
    /// Maximum time in seconds to wait for operations to complete upon receiving `ctrl+c` signal.
    #[arg(long, default_value_t = 60, env = "ENVDASH_SHUTDOWN_TIMEOUT")]
    pub graceful_shutdown_timeout: u64,
    /// Path to the air-quality monitor readings CSV
    #[arg(long, default_value = "data/OZ_PM_AQI.csv", env = "ENVDASH_MONITOR_CSV")]
    pub monitor_csv: String,
    /// Path to the data-center facility records CSV
    #[arg(
        long,
        default_value = "data/data_centers.csv",
        env = "ENVDASH_DATA_CENTER_CSV"
    )]
    pub data_center_csv: String,
    /// Path to the water footprint CSV (also serves the power and scatter tables)
    #[arg(
        long,
        default_value = "data/final_footprint_dataset.csv",
        env = "ENVDASH_WATER_CSV"
    )]
    pub water_csv: String,
    /// Path to the carbon footprint CSV (defaults to the water footprint file)
    #[arg(
        long,
        default_value = "data/final_footprint_dataset.csv",
        env = "ENVDASH_CARBON_CSV"
    )]
    pub carbon_csv: String,
    /// Path to the scenario projections CSV
    #[arg(
        long,
        default_value = "data/dc_impact_summary.csv",
        env = "ENVDASH_IMPACT_CSV"
    )]
    pub impact_csv: String,
}

/// Returns parsed command line arguments.
pub fn parse() -> CommandLineArgs {
    CommandLineArgs::parse()
}
