//! Dataset providers for the dashboard: a built-in sample dataset and JSON
//! file loading. Both produce `Dataset` snapshots conforming to the core
//! schema; the engine trusts them as already validated.

pub mod sample;

use std::path::Path;

use tracing::info;

use adboard_core::error::DashboardResult;
use adboard_core::types::Dataset;

pub use sample::sample_dataset;

/// Loads a dataset from a JSON file shaped like `Dataset`'s serde model.
pub fn load_dataset(path: &Path) -> DashboardResult<Dataset> {
    let raw = std::fs::read_to_string(path)?;
    let dataset: Dataset = serde_json::from_str(&raw)?;
    info!(
        file = %path.display(),
        campaigns = dataset.campaigns.len(),
        daily_metrics = dataset.daily_metrics.len(),
        "dataset loaded"
    );
    Ok(dataset)
}
