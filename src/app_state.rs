use crate::cli::CommandLineArgs;
use crate::datasets::Datasets;

use std::sync::Arc;

/// Shared application state passed to each request handler.
///
/// The dataset snapshot is built once before the server binds and is never
/// mutated afterwards, so handlers can read it concurrently without locking.
pub struct AppState {
    /// Command line arguments.
    pub args: CommandLineArgs,

    /// Immutable dataset snapshot.
    pub datasets: Datasets,
}

impl AppState {
    /// Create and return an [AppState].
    pub fn new(args: &CommandLineArgs, datasets: Datasets) -> Self {
        Self {
            args: args.clone(),
            datasets,
        }
    }
}

/// AppState wrapped in an Atomic Reference Count (Arc) to allow multiple references.
pub type SharedAppState = Arc<AppState>;
