use std::sync::Mutex;

use stackmetric_core::{Metric, MetricCollector, MetricIdentity};

/// One call received by a [`CaptureCollector`].
#[derive(Debug, Clone, PartialEq)]
pub enum CollectorEvent {
    Submit(Metric),
    AutoReportZero(MetricIdentity),
    AutoReportLast(MetricIdentity),
}

/// Keeps every call in arrival order. Meant for tests and diagnostics.
#[derive(Default)]
pub struct CaptureCollector {
    events: Mutex<Vec<CollectorEvent>>,
}

impl CaptureCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<CollectorEvent> {
        match self.events.lock() {
            Ok(g) => g.clone(),
            Err(_) => vec![],
        }
    }

    /// Submitted records only, in order.
    pub fn submissions(&self) -> Vec<Metric> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                CollectorEvent::Submit(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().map(|g| g.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drain everything captured so far.
    pub fn take(&self) -> Vec<CollectorEvent> {
        match self.events.lock() {
            Ok(mut g) => std::mem::take(&mut *g),
            Err(_) => vec![],
        }
    }

    fn push(&self, event: CollectorEvent) {
        if let Ok(mut g) = self.events.lock() {
            g.push(event);
        }
    }
}

impl MetricCollector for CaptureCollector {
    fn submit(&self, metric: Metric) {
        self.push(CollectorEvent::Submit(metric));
    }

    fn auto_report_zero(&self, identity: &MetricIdentity) {
        self.push(CollectorEvent::AutoReportZero(identity.clone()));
    }

    fn auto_report_last(&self, identity: &MetricIdentity) {
        self.push(CollectorEvent::AutoReportLast(identity.clone()));
    }
}
