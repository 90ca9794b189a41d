//! Metric kinds and the submission core they share.

mod average;
mod counter;
mod counter_and_timer;
mod gauge;
mod timer;

use std::sync::atomic::{AtomicBool, Ordering};

use stackmetric_core::{AutoReportPolicy, Metric, MetricIdentity, MonitorType, Result};

use crate::manager::MetricManager;

pub use average::Average;
pub use counter::Counter;
pub use counter_and_timer::CounterAndTimer;
pub(crate) use counter_and_timer::timer_name;
pub use gauge::Gauge;
pub use timer::Timer;

/// Identity, auto-report policy and touched flag shared by every metric kind.
///
/// Submitting only reads the identity and flips an atomic flag, so one core
/// can be used from many threads at once.
pub struct MetricCore {
    identity: MetricIdentity,
    policy: AutoReportPolicy,
    touched: AtomicBool,
    manager: MetricManager,
}

impl MetricCore {
    pub fn new(
        manager: &MetricManager,
        category: impl Into<String>,
        name: impl Into<String>,
        monitor_type: MonitorType,
    ) -> Result<Self> {
        let identity = MetricIdentity::new(category, name, monitor_type)?;
        Ok(Self {
            identity,
            policy: AutoReportPolicy::None,
            touched: AtomicBool::new(false),
            manager: manager.clone(),
        })
    }

    pub fn identity(&self) -> &MetricIdentity {
        &self.identity
    }

    pub fn auto_report_policy(&self) -> AutoReportPolicy {
        self.policy
    }

    /// Forward one value to whichever collector is current right now.
    pub fn submit(&self, value: f64, is_increment: bool) {
        self.touched.store(true, Ordering::Relaxed);
        tracing::trace!(
            category = self.identity.category(),
            name = self.identity.name(),
            monitor_type = %self.identity.monitor_type(),
            value,
            is_increment,
            "metric submitted"
        );
        self.manager
            .submit(Metric::new(self.identity.clone(), value, is_increment));
    }

    pub fn auto_report_zero(&mut self) {
        self.policy = AutoReportPolicy::Zero;
        self.manager.auto_report_zero(&self.identity);
    }

    pub fn auto_report_last(&mut self) {
        self.policy = AutoReportPolicy::Last;
        self.manager.auto_report_last(&self.identity);
    }

    /// Register `policy` with the collector. `None` registers nothing.
    pub fn apply_policy(&mut self, policy: AutoReportPolicy) {
        match policy {
            AutoReportPolicy::None => {}
            AutoReportPolicy::Zero => self.auto_report_zero(),
            AutoReportPolicy::Last => self.auto_report_last(),
        }
    }

    /// Whether anything was submitted since the flag was last cleared.
    pub fn is_touched(&self) -> bool {
        self.touched.load(Ordering::Relaxed)
    }

    /// Read and clear the touched flag.
    pub fn take_touched(&self) -> bool {
        self.touched.swap(false, Ordering::Relaxed)
    }
}

/// Common contract of single-identity metric kinds.
pub trait Instrument {
    fn core(&self) -> &MetricCore;
    fn core_mut(&mut self) -> &mut MetricCore;

    fn identity(&self) -> &MetricIdentity {
        self.core().identity()
    }

    fn auto_report_policy(&self) -> AutoReportPolicy {
        self.core().auto_report_policy()
    }

    fn is_touched(&self) -> bool {
        self.core().is_touched()
    }

    fn take_touched(&self) -> bool {
        self.core().take_touched()
    }

    /// Ask the collector to report zero while this metric sits idle.
    fn auto_report_zero_value(mut self) -> Self
    where
        Self: Sized,
    {
        self.core_mut().auto_report_zero();
        self
    }

    /// Ask the collector to repeat the last value while this metric sits idle.
    fn auto_report_last_value(mut self) -> Self
    where
        Self: Sized,
    {
        self.core_mut().auto_report_last();
        self
    }
}
