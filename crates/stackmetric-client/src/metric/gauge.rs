use stackmetric_core::{MonitorType, Result};

use super::{Instrument, MetricCore};
use crate::manager::MetricManager;

/// Absolute reading. Each `set` replaces the previous value.
pub struct Gauge {
    core: MetricCore,
}

impl Gauge {
    pub fn new(
        manager: &MetricManager,
        category: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            core: MetricCore::new(manager, category, name, MonitorType::Gauge)?,
        })
    }

    pub fn set(&self, value: f64) {
        self.core.submit(value, false);
    }
}

impl Instrument for Gauge {
    fn core(&self) -> &MetricCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut MetricCore {
        &mut self.core
    }
}
