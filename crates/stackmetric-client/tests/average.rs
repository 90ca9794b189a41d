#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use stackmetric_client::{Average, CaptureCollector, CollectorEvent, Instrument, MetricManager};
use stackmetric_core::{AutoReportPolicy, MonitorType};

fn capture_manager() -> (MetricManager, Arc<CaptureCollector>) {
    let capture = Arc::new(CaptureCollector::new());
    (MetricManager::with_collector(capture.clone()), capture)
}

#[test]
fn constructor_sets_identity() {
    let manager = MetricManager::new();
    let metric = Average::new(&manager, "category", "name").unwrap();
    assert_eq!(metric.identity().category(), "category");
    assert_eq!(metric.identity().name(), "name");
    assert_eq!(metric.identity().monitor_type(), MonitorType::Average);
    assert_eq!(metric.auto_report_policy(), AutoReportPolicy::None);
}

#[test]
fn constructor_rejects_empty_name() {
    let manager = MetricManager::new();
    let err = Average::new(&manager, "category", "").err().expect("must fail");
    assert_eq!(err.code(), "INVALID_ARGUMENT");
}

#[test]
fn add_value_submits_increment() {
    let (manager, capture) = capture_manager();
    let metric = manager.average("category", "name").unwrap();

    metric.add_value(14.5);

    let subs = capture.submissions();
    assert_eq!(subs.len(), 1);
    assert_eq!(subs[0].identity(), metric.identity());
    assert_eq!(subs[0].value(), 14.5);
    assert!(subs[0].is_increment());
}

#[test]
fn auto_report_zero_value_registers_once_and_chains() {
    let (manager, capture) = capture_manager();
    let metric = manager.average("category", "name").unwrap();
    let identity = metric.identity().clone();

    let metric = metric.auto_report_zero_value();

    assert_eq!(metric.identity(), &identity);
    assert_eq!(metric.auto_report_policy(), AutoReportPolicy::Zero);
    assert_eq!(capture.events(), vec![CollectorEvent::AutoReportZero(identity)]);
}

#[test]
fn auto_report_last_value_registers_once_and_chains() {
    let (manager, capture) = capture_manager();
    let metric = manager.average("category", "name").unwrap().auto_report_last_value();

    assert_eq!(metric.auto_report_policy(), AutoReportPolicy::Last);
    assert_eq!(
        capture.events(),
        vec![CollectorEvent::AutoReportLast(metric.identity().clone())]
    );
}

#[test]
fn submitting_without_collector_is_silent() {
    let manager = MetricManager::new();
    let metric = manager.average("category", "name").unwrap().auto_report_zero_value();
    metric.add_value(1.0);
    assert!(metric.is_touched());
}
