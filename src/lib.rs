//! This crate provides an environmental dashboard API server. It loads a set
//! of environmental and infrastructure CSV datasets (air-quality monitor
//! readings, data-center facility records, water and carbon footprint
//! measurements, power consumption and scenario projections) into memory at
//! startup and exposes them through read-only JSON endpoints for a dashboard
//! front end.
//!
//! The domain core is deliberately small and pure: the AQI breakpoint
//! classifier ([aqi]), grouped aggregation ([aggregate]) and row filtering
//! ([filters]) operate on an immutable snapshot of typed records and are safe
//! to call concurrently from any number of request handlers.
//!
//! The server is built on top of a number of open source components.
//!
//! * [Tokio](tokio), the most popular asynchronous Rust runtime.
//! * [Axum](axum) web framework, built by the Tokio team on top of the
//!   [hyper] HTTP library.
//! * [Serde](serde) performs (de)serialisation of CSV rows and JSON response
//!   data, with the [csv] crate handling the CSV framing.
//! * [Prometheus](prometheus) exposes request metrics.

pub mod aggregate;
pub mod app;
pub mod app_state;
pub mod aqi;
pub mod cli;
pub mod datasets;
pub mod error;
pub mod filters;
pub mod metrics;
pub mod models;
pub mod server;
#[cfg(test)]
pub mod test_utils;
pub mod tracing;
