//! Built-in collectors.
//!
//! Real aggregation backends live outside this crate and implement
//! [`stackmetric_core::MetricCollector`] themselves. These two cover logging
//! and in-memory capture.

pub mod capture;
pub mod log;

pub use capture::{CaptureCollector, CollectorEvent};
pub use log::TracingCollector;
