#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use stackmetric_client::{CaptureCollector, CollectorEvent, Instrument, MetricManager};
use stackmetric_core::{AutoReportPolicy, MonitorType};

fn capture_manager() -> (MetricManager, Arc<CaptureCollector>) {
    let capture = Arc::new(CaptureCollector::new());
    (MetricManager::with_collector(capture.clone()), capture)
}

#[test]
fn counter_submits_signed_increments() {
    let (manager, capture) = capture_manager();
    let counter = manager.counter("Orders", "Placed").unwrap();
    assert_eq!(counter.identity().monitor_type(), MonitorType::Counter);

    counter.increment();
    counter.decrement();
    counter.increment_by(4.0);
    counter.decrement_by(2.5);

    let subs = capture.submissions();
    let values: Vec<f64> = subs.iter().map(|m| m.value()).collect();
    assert_eq!(values, vec![1.0, -1.0, 4.0, -2.5]);
    assert!(subs.iter().all(|m| m.is_increment()));
}

#[test]
fn gauge_submits_absolute_values() {
    let (manager, capture) = capture_manager();
    let gauge = manager.gauge("Queue", "Depth").unwrap().auto_report_last_value();
    assert_eq!(gauge.identity().monitor_type(), MonitorType::Gauge);
    assert_eq!(gauge.auto_report_policy(), AutoReportPolicy::Last);

    gauge.set(17.0);

    let subs = capture.submissions();
    assert_eq!(subs.len(), 1);
    assert_eq!(subs[0].value(), 17.0);
    assert!(!subs[0].is_increment());
}

#[test]
fn counter_auto_report_zero_chains() {
    let (manager, capture) = capture_manager();
    let counter = manager.counter("Orders", "Placed").unwrap().auto_report_zero_value();
    assert_eq!(
        capture.events(),
        vec![CollectorEvent::AutoReportZero(counter.identity().clone())]
    );
}

#[test]
fn counter_and_timer_submits_both_halves() {
    let (manager, capture) = capture_manager();
    let pair = manager.counter_and_timer("Orders", "Checkout").unwrap();

    assert_eq!(pair.counter().identity().name(), "Checkout");
    assert_eq!(pair.timer().identity().name(), "Checkout Time");
    assert_eq!(pair.timer().identity().category(), "Orders");

    pair.duration_ms(3000);
    pair.start(Some(SystemTime::now() - Duration::from_secs(2)));

    let subs = capture.submissions();
    assert_eq!(subs.len(), 4);
    assert_eq!(subs[0].identity(), pair.counter().identity());
    assert_eq!(subs[0].value(), 1.0);
    assert_eq!(subs[1].identity(), pair.timer().identity());
    assert_eq!(subs[1].value(), 3.0);
    assert_eq!(subs[2].identity(), pair.counter().identity());
    assert_eq!(subs[3].identity(), pair.timer().identity());
    assert!((subs[3].value() - 2.0).abs() <= 0.5);
    assert!(subs.iter().all(|m| m.is_increment()));
}

#[test]
fn counter_and_timer_skips_missing_start() {
    let (manager, capture) = capture_manager();
    let pair = manager.counter_and_timer("Orders", "Checkout").unwrap();

    pair.start(None);

    assert!(capture.is_empty());
}

#[test]
fn counter_and_timer_auto_report_covers_both() {
    let (manager, capture) = capture_manager();
    let pair = manager
        .counter_and_timer("Orders", "Checkout")
        .unwrap()
        .auto_report_last_value();

    assert_eq!(pair.auto_report_policy(), AutoReportPolicy::Last);
    assert_eq!(
        capture.events(),
        vec![
            CollectorEvent::AutoReportLast(pair.counter().identity().clone()),
            CollectorEvent::AutoReportLast(pair.timer().identity().clone()),
        ]
    );
}

#[test]
fn gauge_auto_report_zero_chains() {
    let (manager, capture) = capture_manager();
    let gauge = manager.gauge("Queue", "Depth").unwrap();
    let identity = gauge.identity().clone();

    let gauge = gauge.auto_report_zero_value();

    assert_eq!(gauge.identity(), &identity);
    assert_eq!(gauge.auto_report_policy(), AutoReportPolicy::Zero);
    assert_eq!(capture.events(), vec![CollectorEvent::AutoReportZero(identity)]);
}

#[test]
fn counter_and_timer_auto_report_zero_covers_both() {
    let (manager, capture) = capture_manager();
    let pair = manager.counter_and_timer("Orders", "Checkout").unwrap();
    let counter_id = pair.counter().identity().clone();
    let timer_id = pair.timer().identity().clone();

    let pair = pair.auto_report_zero_value();

    assert_eq!(pair.counter().identity(), &counter_id);
    assert_eq!(pair.timer().identity(), &timer_id);
    assert_eq!(pair.auto_report_policy(), AutoReportPolicy::Zero);
    assert_eq!(
        capture.events(),
        vec![
            CollectorEvent::AutoReportZero(counter_id),
            CollectorEvent::AutoReportZero(timer_id),
        ]
    );
}

#[test]
fn counter_and_timer_start_ms_submits_one_of_each() {
    let (manager, capture) = capture_manager();
    let pair = manager.counter_and_timer("Orders", "Checkout").unwrap();
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis() as u64;

    pair.start_ms(now_ms - 5000);

    let subs = capture.submissions();
    assert_eq!(subs.len(), 2);
    assert_eq!(subs[0].identity(), pair.counter().identity());
    assert_eq!(subs[0].value(), 1.0);
    assert_eq!(subs[1].identity(), pair.timer().identity());
    assert!((subs[1].value() - 5.0).abs() <= 0.5);
    assert!(subs.iter().all(|m| m.is_increment()));
}
