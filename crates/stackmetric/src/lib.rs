//! Top-level facade crate for stackmetric.
//!
//! Re-exports core types and the client library so users can depend on a single crate.

pub mod core {
    pub use stackmetric_core::*;
}

pub mod client {
    pub use stackmetric_client::*;
}

pub use stackmetric_client::{
    Average, Counter, CounterAndTimer, Gauge, Instrument, MetricManager, Timer,
};
pub use stackmetric_core::{
    AutoReportPolicy, Metric, MetricCollector, MetricError, MetricIdentity, MonitorType, Result,
};
