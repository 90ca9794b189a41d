//! Collector contract implemented by aggregation backends.

use std::sync::Arc;

use crate::identity::MetricIdentity;
use crate::record::Metric;

/// Receives submitted values and auto-report registrations.
///
/// Implementations own aggregation, windowing and transmission, and are
/// responsible for their own thread safety: metrics call into them from any
/// thread without locking.
pub trait MetricCollector: Send + Sync {
    /// Accept one submitted value.
    fn submit(&self, metric: Metric);

    /// Report zero for `identity` in windows where it received nothing.
    fn auto_report_zero(&self, identity: &MetricIdentity);

    /// Repeat the last value of `identity` in windows where it received nothing.
    fn auto_report_last(&self, identity: &MetricIdentity);
}

pub type ArcMetricCollector = Arc<dyn MetricCollector>;

/// Collector that drops everything. Used whenever nothing else is installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCollector;

impl MetricCollector for NoopCollector {
    fn submit(&self, _metric: Metric) {}
    fn auto_report_zero(&self, _identity: &MetricIdentity) {}
    fn auto_report_last(&self, _identity: &MetricIdentity) {}
}
