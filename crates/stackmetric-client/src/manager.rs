//! Swappable collector handle shared by every metric.

use std::sync::Arc;

use arc_swap::ArcSwap;
use once_cell::sync::Lazy;

use stackmetric_core::{ArcMetricCollector, Metric, MetricIdentity, NoopCollector, Result};

use crate::metric::{Average, Counter, CounterAndTimer, Gauge, Timer};

static GLOBAL: Lazy<MetricManager> = Lazy::new(MetricManager::new);

/// Handle to the collector metrics submit through.
///
/// Clones share one slot. The slot is an atomically published pointer, so a
/// swap is visible to every thread on its next load and never blocks
/// submitters.
#[derive(Clone)]
pub struct MetricManager {
    slot: Arc<ArcSwap<ArcMetricCollector>>,
}

impl Default for MetricManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricManager {
    /// Handle backed by [`NoopCollector`].
    pub fn new() -> Self {
        Self::with_collector(Arc::new(NoopCollector))
    }

    pub fn with_collector(collector: ArcMetricCollector) -> Self {
        Self {
            slot: Arc::new(ArcSwap::from_pointee(collector)),
        }
    }

    /// Process-wide handle, created on first use with a no-op collector.
    pub fn global() -> &'static MetricManager {
        &GLOBAL
    }

    /// Current collector. Never absent.
    pub fn collector(&self) -> ArcMetricCollector {
        Arc::clone(&**self.slot.load())
    }

    /// Replace the collector for all metrics sharing this handle.
    pub fn set_collector(&self, collector: ArcMetricCollector) {
        self.slot.store(Arc::new(collector));
        tracing::debug!("metric collector replaced");
    }

    /// Go back to dropping everything.
    pub fn reset(&self) {
        self.set_collector(Arc::new(NoopCollector));
    }

    pub(crate) fn submit(&self, metric: Metric) {
        self.slot.load().submit(metric);
    }

    pub(crate) fn auto_report_zero(&self, identity: &MetricIdentity) {
        self.slot.load().auto_report_zero(identity);
    }

    pub(crate) fn auto_report_last(&self, identity: &MetricIdentity) {
        self.slot.load().auto_report_last(identity);
    }

    pub fn average(&self, category: impl Into<String>, name: impl Into<String>) -> Result<Average> {
        Average::new(self, category, name)
    }

    pub fn timer(&self, category: impl Into<String>, name: impl Into<String>) -> Result<Timer> {
        Timer::new(self, category, name)
    }

    pub fn counter(&self, category: impl Into<String>, name: impl Into<String>) -> Result<Counter> {
        Counter::new(self, category, name)
    }

    pub fn gauge(&self, category: impl Into<String>, name: impl Into<String>) -> Result<Gauge> {
        Gauge::new(self, category, name)
    }

    pub fn counter_and_timer(
        &self,
        category: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<CounterAndTimer> {
        CounterAndTimer::new(self, category, name)
    }
}
