use stackmetric_core::{MonitorType, Result};

use super::{Instrument, MetricCore};
use crate::manager::MetricManager;

/// Accumulating count. Every call submits a delta.
pub struct Counter {
    core: MetricCore,
}

impl Counter {
    pub fn new(
        manager: &MetricManager,
        category: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            core: MetricCore::new(manager, category, name, MonitorType::Counter)?,
        })
    }

    pub fn increment(&self) {
        self.increment_by(1.0);
    }

    pub fn decrement(&self) {
        self.increment_by(-1.0);
    }

    pub fn increment_by(&self, value: f64) {
        self.core.submit(value, true);
    }

    pub fn decrement_by(&self, value: f64) {
        self.increment_by(-value);
    }
}

impl Instrument for Counter {
    fn core(&self) -> &MetricCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut MetricCore {
        &mut self.core
    }
}
