use dashmap::DashMap;

use stackmetric_core::{AutoReportPolicy, Metric, MetricCollector, MetricIdentity};

/// Emits every submission and registration as a `tracing` event.
///
/// Registered auto-report policies are remembered so a reporting backend
/// layered on top can ask which identities want idle reports.
#[derive(Default)]
pub struct TracingCollector {
    policies: DashMap<MetricIdentity, AutoReportPolicy>,
}

impl TracingCollector {
    pub fn new() -> Self {
        Self {
            policies: DashMap::new(),
        }
    }

    /// Policy registered for `identity`, `None` if it never registered.
    pub fn policy_for(&self, identity: &MetricIdentity) -> AutoReportPolicy {
        self.policies
            .get(identity)
            .map(|p| *p.value())
            .unwrap_or_default()
    }

    pub fn registered(&self) -> Vec<(MetricIdentity, AutoReportPolicy)> {
        self.policies
            .iter()
            .map(|e| (e.key().clone(), *e.value()))
            .collect()
    }

    fn register(&self, identity: &MetricIdentity, policy: AutoReportPolicy) {
        let previous = self.policies.insert(identity.clone(), policy);
        tracing::debug!(
            category = identity.category(),
            name = identity.name(),
            monitor_type = %identity.monitor_type(),
            ?policy,
            ?previous,
            "auto-report registered"
        );
    }
}

impl MetricCollector for TracingCollector {
    fn submit(&self, metric: Metric) {
        let id = metric.identity();
        tracing::info!(
            category = id.category(),
            name = id.name(),
            monitor_type = %id.monitor_type(),
            value = metric.value(),
            is_increment = metric.is_increment(),
            occurred_ms = metric.occurred_ms(),
            "metric"
        );
    }

    fn auto_report_zero(&self, identity: &MetricIdentity) {
        self.register(identity, AutoReportPolicy::Zero);
    }

    fn auto_report_last(&self, identity: &MetricIdentity) {
        self.register(identity, AutoReportPolicy::Last);
    }
}
