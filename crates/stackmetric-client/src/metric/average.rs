use stackmetric_core::{MonitorType, Result};

use super::{Instrument, MetricCore};
use crate::manager::MetricManager;

/// Running mean. Each value is folded into the collector's aggregate.
pub struct Average {
    core: MetricCore,
}

impl Average {
    pub fn new(
        manager: &MetricManager,
        category: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            core: MetricCore::new(manager, category, name, MonitorType::Average)?,
        })
    }

    pub fn add_value(&self, value: f64) {
        self.core.submit(value, true);
    }
}

impl Instrument for Average {
    fn core(&self) -> &MetricCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut MetricCore {
        &mut self.core
    }
}
