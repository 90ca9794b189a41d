//! Metric identity: the (category, name, monitor type) key.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{MetricError, Result};

/// Kind of aggregation a metric implies on the collector side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitorType {
    /// Accumulated count.
    Counter,
    /// Last absolute reading.
    Gauge,
    /// Running mean of submitted values.
    Average,
    /// Durations in seconds.
    Timer,
}

impl MonitorType {
    /// String representation used in logs and config files.
    pub fn as_str(self) -> &'static str {
        match self {
            MonitorType::Counter => "counter",
            MonitorType::Gauge => "gauge",
            MonitorType::Average => "average",
            MonitorType::Timer => "timer",
        }
    }
}

impl fmt::Display for MonitorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable identity of one tracked measurement.
///
/// Strings are reference counted: an identity is cloned into every submitted
/// record, so clones must stay cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MetricIdentity {
    category: Arc<str>,
    name: Arc<str>,
    #[serde(rename = "type")]
    monitor_type: MonitorType,
}

impl MetricIdentity {
    /// Build an identity. Category and name must be non-empty.
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        monitor_type: MonitorType,
    ) -> Result<Self> {
        let category = category.into();
        let name = name.into();
        if category.is_empty() {
            return Err(MetricError::InvalidArgument(
                "metric category must not be empty".into(),
            ));
        }
        if name.is_empty() {
            return Err(MetricError::InvalidArgument(
                "metric name must not be empty".into(),
            ));
        }
        Ok(Self {
            category: category.into(),
            name: name.into(),
            monitor_type,
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn monitor_type(&self) -> MonitorType {
        self.monitor_type
    }
}

impl fmt::Display for MetricIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({})", self.category, self.name, self.monitor_type)
    }
}
