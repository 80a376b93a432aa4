//! Analytics dispatch metrics and observability.
//!
//! Tracks what the event dispatcher does with each event: counted, forwarded
//! to the external collector, or dropped on a forward failure. Failures are
//! never surfaced to callers, so the counters are the only way to see them.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global dispatch metrics singleton.
pub struct DispatchMetrics {
    /// Total events accepted by the dispatcher
    dispatched: AtomicUsize,

    /// Events forwarded to the external collector
    forwarded: AtomicUsize,

    /// Forward attempts that failed (logged and swallowed)
    forward_failures: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<DispatchMetrics> = OnceLock::new();

impl DispatchMetrics {
    /// Get the global dispatch metrics instance.
    pub fn global() -> &'static DispatchMetrics {
        METRICS.get_or_init(|| DispatchMetrics {
            dispatched: AtomicUsize::new(0),
            forwarded: AtomicUsize::new(0),
            forward_failures: AtomicUsize::new(0),
        })
    }

    pub fn record_dispatch(&self) {
        self.dispatched.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_forward(&self) {
        self.forwarded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_forward_failure(&self) {
        self.forward_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn dispatched(&self) -> usize {
        self.dispatched.load(Ordering::Relaxed)
    }

    pub fn forwarded(&self) -> usize {
        self.forwarded.load(Ordering::Relaxed)
    }

    pub fn forward_failures(&self) -> usize {
        self.forward_failures.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let forwarded = self.forwarded();
        let failures = self.forward_failures();
        let attempts = forwarded + failures;
        let forward_success_rate = if attempts > 0 {
            (forwarded as f64 / attempts as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            dispatched: self.dispatched(),
            forwarded,
            forward_failures: failures,
            forward_success_rate,
        }
    }

    /// Reset all counters to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.dispatched.store(0, Ordering::Relaxed);
        self.forwarded.store(0, Ordering::Relaxed);
        self.forward_failures.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of the dispatch counters, served by the metrics endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub dispatched: usize,
    pub forwarded: usize,
    pub forward_failures: usize,
    pub forward_success_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_counters_accumulate() {
        let metrics = DispatchMetrics::global();
        metrics.reset();

        metrics.record_dispatch();
        metrics.record_dispatch();
        metrics.record_forward();
        metrics.record_forward_failure();

        assert_eq!(metrics.dispatched(), 2);
        assert_eq!(metrics.forwarded(), 1);
        assert_eq!(metrics.forward_failures(), 1);
    }

    #[test]
    #[serial]
    fn test_report_success_rate() {
        let metrics = DispatchMetrics::global();
        metrics.reset();

        for _ in 0..3 {
            metrics.record_forward();
        }
        metrics.record_forward_failure();

        let report = metrics.report();
        assert_eq!(report.forwarded, 3);
        assert_eq!(report.forward_failures, 1);
        assert!((report.forward_success_rate - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    #[serial]
    fn test_report_with_no_attempts() {
        let metrics = DispatchMetrics::global();
        metrics.reset();

        let report = metrics.report();
        assert_eq!(report.dispatched, 0);
        assert!((report.forward_success_rate - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    #[serial]
    fn test_report_serializes() {
        let metrics = DispatchMetrics::global();
        metrics.reset();
        metrics.record_dispatch();

        let json = serde_json::to_string(&metrics.report()).expect("Should serialize");
        assert!(json.contains("dispatched"));
        assert!(json.contains("forward_success_rate"));
    }
}
