//! Metrics built from a declaration file.

use std::collections::HashMap;

use stackmetric_core::{AutoReportPolicy, Result};

use crate::config::{MetricDecl, MetricKind, MetricsConfig};
use crate::manager::MetricManager;
use crate::metric::{Average, Counter, CounterAndTimer, Gauge, Instrument, Timer};

/// One declared metric, whatever its kind.
pub enum DeclaredMetric {
    Average(Average),
    Timer(Timer),
    Counter(Counter),
    Gauge(Gauge),
    CounterAndTimer(CounterAndTimer),
}

impl DeclaredMetric {
    /// Construct the metric and register its auto-report policy.
    fn build(manager: &MetricManager, decl: &MetricDecl) -> Result<Self> {
        let (c, n) = (decl.category.as_str(), decl.name.as_str());
        let mut metric = match decl.kind {
            MetricKind::Average => DeclaredMetric::Average(Average::new(manager, c, n)?),
            MetricKind::Timer => DeclaredMetric::Timer(Timer::new(manager, c, n)?),
            MetricKind::Counter => DeclaredMetric::Counter(Counter::new(manager, c, n)?),
            MetricKind::Gauge => DeclaredMetric::Gauge(Gauge::new(manager, c, n)?),
            MetricKind::CounterAndTimer => {
                DeclaredMetric::CounterAndTimer(CounterAndTimer::new(manager, c, n)?)
            }
        };
        metric.apply_policy(decl.auto_report);
        Ok(metric)
    }

    fn apply_policy(&mut self, policy: AutoReportPolicy) {
        match self {
            DeclaredMetric::Average(m) => m.core_mut().apply_policy(policy),
            DeclaredMetric::Timer(m) => m.core_mut().apply_policy(policy),
            DeclaredMetric::Counter(m) => m.core_mut().apply_policy(policy),
            DeclaredMetric::Gauge(m) => m.core_mut().apply_policy(policy),
            DeclaredMetric::CounterAndTimer(m) => m.apply_policy(policy),
        }
    }

    pub fn kind(&self) -> MetricKind {
        match self {
            DeclaredMetric::Average(_) => MetricKind::Average,
            DeclaredMetric::Timer(_) => MetricKind::Timer,
            DeclaredMetric::Counter(_) => MetricKind::Counter,
            DeclaredMetric::Gauge(_) => MetricKind::Gauge,
            DeclaredMetric::CounterAndTimer(_) => MetricKind::CounterAndTimer,
        }
    }

    pub fn auto_report_policy(&self) -> AutoReportPolicy {
        match self {
            DeclaredMetric::Average(m) => m.auto_report_policy(),
            DeclaredMetric::Timer(m) => m.auto_report_policy(),
            DeclaredMetric::Counter(m) => m.auto_report_policy(),
            DeclaredMetric::Gauge(m) => m.auto_report_policy(),
            DeclaredMetric::CounterAndTimer(m) => m.auto_report_policy(),
        }
    }
}

/// Declared metrics, looked up by category then name.
#[derive(Default)]
pub struct MetricSet {
    by_category: HashMap<String, HashMap<String, DeclaredMetric>>,
}

impl MetricSet {
    /// Build every metric in `cfg` against `manager`, registering each
    /// declared auto-report policy with the current collector.
    pub fn from_config(manager: &MetricManager, cfg: &MetricsConfig) -> Result<Self> {
        cfg.validate()?;

        let mut by_category: HashMap<String, HashMap<String, DeclaredMetric>> = HashMap::new();
        for decl in &cfg.metrics {
            let metric = DeclaredMetric::build(manager, decl)?;
            by_category
                .entry(decl.category.clone())
                .or_default()
                .insert(decl.name.clone(), metric);
        }

        let set = Self { by_category };
        tracing::info!(metrics = set.len(), "metric set built");
        Ok(set)
    }

    pub fn get(&self, category: &str, name: &str) -> Option<&DeclaredMetric> {
        self.by_category.get(category)?.get(name)
    }

    pub fn average(&self, category: &str, name: &str) -> Option<&Average> {
        match self.get(category, name)? {
            DeclaredMetric::Average(m) => Some(m),
            _ => None,
        }
    }

    pub fn timer(&self, category: &str, name: &str) -> Option<&Timer> {
        match self.get(category, name)? {
            DeclaredMetric::Timer(m) => Some(m),
            _ => None,
        }
    }

    pub fn counter(&self, category: &str, name: &str) -> Option<&Counter> {
        match self.get(category, name)? {
            DeclaredMetric::Counter(m) => Some(m),
            _ => None,
        }
    }

    pub fn gauge(&self, category: &str, name: &str) -> Option<&Gauge> {
        match self.get(category, name)? {
            DeclaredMetric::Gauge(m) => Some(m),
            _ => None,
        }
    }

    pub fn counter_and_timer(&self, category: &str, name: &str) -> Option<&CounterAndTimer> {
        match self.get(category, name)? {
            DeclaredMetric::CounterAndTimer(m) => Some(m),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.by_category.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear and return the touched flag of every declared metric, as a
    /// reporter does at the end of a window. Returns how many were touched.
    pub fn take_touched(&self) -> usize {
        self.by_category
            .values()
            .flat_map(HashMap::values)
            .filter(|m| match m {
                DeclaredMetric::Average(m) => m.take_touched(),
                DeclaredMetric::Timer(m) => m.take_touched(),
                DeclaredMetric::Counter(m) => m.take_touched(),
                DeclaredMetric::Gauge(m) => m.take_touched(),
                DeclaredMetric::CounterAndTimer(m) => {
                    let counted = m.counter().take_touched();
                    m.timer().take_touched() || counted
                }
            })
            .count()
    }
}
