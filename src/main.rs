//! This file defines the envdash binary entry point.

use envdash::app;
use envdash::app_state::AppState;
use envdash::cli;
use envdash::datasets;
use envdash::metrics;
use envdash::server;
use envdash::tracing;

use std::sync::Arc;

/// Application entry point
#[tokio::main]
async fn main() {
    let args = cli::parse();
    tracing::init_tracing();
    metrics::register_metrics();
    let datasets = datasets::load(&args);
    let state = Arc::new(AppState::new(&args, datasets));
    let service = app::service(state.clone());
    server::serve(&state.args, service).await;
}
