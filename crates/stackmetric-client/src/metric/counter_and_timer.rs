use std::time::SystemTime;

use stackmetric_core::{AutoReportPolicy, Result};

use super::{Counter, Instrument, Timer};
use crate::manager::MetricManager;

/// A counter and a timer updated together: each timed call counts one
/// occurrence and submits its duration.
///
/// The timer is named `"<name> Time"` in the same category, so both halves
/// stay distinct identities on the collector side.
pub struct CounterAndTimer {
    counter: Counter,
    timer: Timer,
}

impl CounterAndTimer {
    pub fn new(
        manager: &MetricManager,
        category: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self> {
        let category = category.into();
        let name = name.into();
        let paired = timer_name(&name);
        Ok(Self {
            counter: Counter::new(manager, category.clone(), name)?,
            timer: Timer::new(manager, category, paired)?,
        })
    }

    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    pub fn start(&self, started_at: Option<SystemTime>) {
        if started_at.is_none() {
            return;
        }
        self.counter.increment();
        self.timer.start(started_at);
    }

    pub fn start_ms(&self, started_at_ms: u64) {
        self.counter.increment();
        self.timer.start_ms(started_at_ms);
    }

    pub fn duration_ms(&self, elapsed_ms: u64) {
        self.counter.increment();
        self.timer.duration_ms(elapsed_ms);
    }

    pub fn auto_report_policy(&self) -> AutoReportPolicy {
        self.counter.auto_report_policy()
    }

    pub fn auto_report_zero_value(self) -> Self {
        Self {
            counter: self.counter.auto_report_zero_value(),
            timer: self.timer.auto_report_zero_value(),
        }
    }

    pub fn auto_report_last_value(self) -> Self {
        Self {
            counter: self.counter.auto_report_last_value(),
            timer: self.timer.auto_report_last_value(),
        }
    }

    pub(crate) fn apply_policy(&mut self, policy: AutoReportPolicy) {
        self.counter.core_mut().apply_policy(policy);
        self.timer.core_mut().apply_policy(policy);
    }
}

/// Name of the timer half paired with counter `name`.
pub(crate) fn timer_name(name: &str) -> String {
    format!("{name} Time")
}
