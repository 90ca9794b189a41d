//! Submitted value records and auto-report policies.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::identity::MetricIdentity;

/// What the collector should report for an identity that saw no submissions
/// during a reporting window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoReportPolicy {
    /// Report nothing.
    #[default]
    None,
    /// Report a zero value.
    Zero,
    /// Repeat the last submitted value.
    Last,
}

/// One submitted value. Built fresh for every submission and handed to the
/// collector by value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    identity: MetricIdentity,
    value: f64,
    is_increment: bool,
    occurred_ms: u64,
}

impl Metric {
    /// Record stamped with the current wall-clock time.
    pub fn new(identity: MetricIdentity, value: f64, is_increment: bool) -> Self {
        Self::at(identity, value, is_increment, epoch_millis(SystemTime::now()))
    }

    /// Record stamped with an explicit epoch-millisecond timestamp.
    pub fn at(identity: MetricIdentity, value: f64, is_increment: bool, occurred_ms: u64) -> Self {
        Self {
            identity,
            value,
            is_increment,
            occurred_ms,
        }
    }

    pub fn identity(&self) -> &MetricIdentity {
        &self.identity
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// `true` when the value is a delta to fold into an aggregate, `false`
    /// when it replaces the last known value.
    pub fn is_increment(&self) -> bool {
        self.is_increment
    }

    /// Wall-clock time of the submission, in milliseconds since the Unix epoch.
    pub fn occurred_ms(&self) -> u64 {
        self.occurred_ms
    }

    pub fn into_identity(self) -> MetricIdentity {
        self.identity
    }
}

/// Milliseconds since the Unix epoch; clocks set before 1970 read as zero.
pub fn epoch_millis(t: SystemTime) -> u64 {
    t.duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}
