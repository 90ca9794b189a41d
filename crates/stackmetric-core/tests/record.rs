#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use stackmetric_core::record::epoch_millis;
use stackmetric_core::{AutoReportPolicy, Metric, MetricIdentity, MonitorType};

fn identity() -> MetricIdentity {
    MetricIdentity::new("Orders", "Total", MonitorType::Gauge).unwrap()
}

#[test]
fn record_keeps_what_it_was_given() {
    let m = Metric::at(identity(), 12.5, false, 1_700_000_000_000);
    assert_eq!(m.identity(), &identity());
    assert_eq!(m.value(), 12.5);
    assert!(!m.is_increment());
    assert_eq!(m.occurred_ms(), 1_700_000_000_000);
}

#[test]
fn new_record_is_stamped_now() {
    let before = epoch_millis(SystemTime::now());
    let m = Metric::new(identity(), 1.0, true);
    let after = epoch_millis(SystemTime::now());
    assert!(m.occurred_ms() >= before && m.occurred_ms() <= after);
}

#[test]
fn epoch_millis_clamps_pre_epoch_clock() {
    let t = UNIX_EPOCH - Duration::from_secs(10);
    assert_eq!(epoch_millis(t), 0);
    assert_eq!(epoch_millis(UNIX_EPOCH + Duration::from_millis(1500)), 1500);
}

#[test]
fn auto_report_policy_defaults_to_none() {
    assert_eq!(AutoReportPolicy::default(), AutoReportPolicy::None);
    let p: AutoReportPolicy = serde_yaml::from_str("last").unwrap();
    assert_eq!(p, AutoReportPolicy::Last);
}

#[test]
fn record_serializes_identity_fields() {
    let m = Metric::at(identity(), 3.0, true, 42);
    let s = serde_yaml::to_string(&m).unwrap();
    assert!(s.contains("category: Orders"));
    assert!(s.contains("type: gauge"));
    assert!(s.contains("is_increment: true"));
}
