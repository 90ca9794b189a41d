//! stackmetric client library.
//!
//! Application-facing metric kinds (averages, timers, counters, gauges), the
//! swappable collector handle they submit through, a couple of built-in
//! collectors, and strict YAML declaration of metric sets.
//!
//! Every metric takes a [`MetricManager`] at construction and looks the
//! collector up on each call, so replacing the collector takes effect on the
//! very next submission.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod collector;
pub mod config;
pub mod manager;
pub mod metric;
pub mod metric_set;

pub use collector::{CaptureCollector, CollectorEvent, TracingCollector};
pub use manager::MetricManager;
pub use metric::{Average, Counter, CounterAndTimer, Gauge, Instrument, MetricCore, Timer};
pub use metric_set::{DeclaredMetric, MetricSet};
