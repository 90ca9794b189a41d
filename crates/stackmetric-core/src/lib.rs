//! stackmetric core: metric identities, value records, and the collector contract.
//!
//! This crate defines the types shared between instrumented code and whatever
//! backend aggregates the submitted values. It carries no runtime or logging
//! dependencies so collectors can be implemented against it in isolation.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! Every fallible path surfaces as `MetricError`/`Result`; instrumentation must
//! never take the host process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod collector;
pub mod error;
pub mod identity;
pub mod record;

pub use collector::{ArcMetricCollector, MetricCollector, NoopCollector};
/// Shared result type.
pub use error::{MetricError, Result};
pub use identity::{MetricIdentity, MonitorType};
pub use record::{AutoReportPolicy, Metric};
