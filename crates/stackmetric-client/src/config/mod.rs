//! Metric declaration loader (strict parsing).

pub mod schema;

use std::fs;

use stackmetric_core::{MetricError, Result};

pub use schema::{MetricDecl, MetricKind, MetricsConfig};

pub fn load_from_file(path: &str) -> Result<MetricsConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| MetricError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<MetricsConfig> {
    let cfg: MetricsConfig = serde_yaml::from_str(s)
        .map_err(|e| MetricError::InvalidConfig(format!("invalid yaml: {e}")))?;
    if let Err(e) = cfg.validate() {
        tracing::warn!(error = %e, "metric config rejected");
        return Err(e);
    }
    tracing::info!(version = cfg.version, metrics = cfg.metrics.len(), "metric config loaded");
    Ok(cfg)
}
