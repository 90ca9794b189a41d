use std::time::{Duration, SystemTime};

use stackmetric_core::record::epoch_millis;
use stackmetric_core::{MonitorType, Result};

use super::{Instrument, MetricCore};
use crate::manager::MetricManager;

/// Durations, submitted in whole seconds.
///
/// Milliseconds are rounded half up: 1499 ms reports 1, 1500 ms reports 2.
/// Start times in the future count as zero elapsed.
pub struct Timer {
    core: MetricCore,
}

impl Timer {
    pub fn new(
        manager: &MetricManager,
        category: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            core: MetricCore::new(manager, category, name, MonitorType::Timer)?,
        })
    }

    /// Submit the time elapsed since `started_at`. `None` skips the call
    /// entirely, so conditional timing paths can pass through unset starts.
    pub fn start(&self, started_at: Option<SystemTime>) {
        let Some(started_at) = started_at else {
            return;
        };
        let elapsed = SystemTime::now()
            .duration_since(started_at)
            .unwrap_or_default();
        self.duration(elapsed);
    }

    /// Submit the time elapsed since `started_at_ms` (milliseconds since the
    /// Unix epoch).
    pub fn start_ms(&self, started_at_ms: u64) {
        let now_ms = epoch_millis(SystemTime::now());
        self.duration_ms(now_ms.saturating_sub(started_at_ms));
    }

    /// Submit a precomputed duration without consulting the clock.
    pub fn duration_ms(&self, elapsed_ms: u64) {
        self.core.submit(whole_seconds(elapsed_ms), true);
    }

    pub fn duration(&self, elapsed: Duration) {
        self.duration_ms(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX));
    }
}

impl Instrument for Timer {
    fn core(&self) -> &MetricCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut MetricCore {
        &mut self.core
    }
}

fn whole_seconds(ms: u64) -> f64 {
    (ms.saturating_add(500) / 1000) as f64
}
