use std::collections::HashSet;

use serde::Deserialize;
use stackmetric_core::{AutoReportPolicy, MetricError, MonitorType, Result};

use crate::metric::timer_name;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsConfig {
    pub version: u32,

    #[serde(default)]
    pub metrics: Vec<MetricDecl>,
}

impl MetricsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MetricError::UnsupportedVersion(self.version));
        }

        let mut seen = HashSet::new();
        let mut identities = HashSet::new();
        for m in &self.metrics {
            m.validate()?;
            if !seen.insert((m.category.as_str(), m.name.as_str())) {
                return Err(MetricError::InvalidConfig(format!(
                    "metric {}/{} declared more than once",
                    m.category, m.name
                )));
            }
            for (name, ty) in m.identities() {
                if !identities.insert((m.category.clone(), name.clone(), ty)) {
                    return Err(MetricError::InvalidConfig(format!(
                        "metric {}/{} ({ty}) is created by more than one declaration",
                        m.category, name
                    )));
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Average,
    Timer,
    Counter,
    Gauge,
    CounterAndTimer,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricDecl {
    pub category: String,
    pub name: String,
    pub kind: MetricKind,

    #[serde(default)]
    pub auto_report: AutoReportPolicy,
}

impl MetricDecl {
    /// Names and monitor types of every identity this declaration creates.
    pub fn identities(&self) -> Vec<(String, MonitorType)> {
        match self.kind {
            MetricKind::Average => vec![(self.name.clone(), MonitorType::Average)],
            MetricKind::Timer => vec![(self.name.clone(), MonitorType::Timer)],
            MetricKind::Counter => vec![(self.name.clone(), MonitorType::Counter)],
            MetricKind::Gauge => vec![(self.name.clone(), MonitorType::Gauge)],
            MetricKind::CounterAndTimer => vec![
                (self.name.clone(), MonitorType::Counter),
                (timer_name(&self.name), MonitorType::Timer),
            ],
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.category.is_empty() {
            return Err(MetricError::InvalidConfig(
                "metrics[].category must not be empty".into(),
            ));
        }
        if self.name.is_empty() {
            return Err(MetricError::InvalidConfig(format!(
                "metrics[].name must not be empty (category={})",
                self.category
            )));
        }
        Ok(())
    }
}
