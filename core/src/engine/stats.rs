//! Per-virtual-user outcome tally

use crate::model::TestResult;
use chrono::{DateTime, Utc};

/// Counters owned by a single virtual user for the lifetime of one run
///
/// The total request count is derived (`success + failure`), so the
/// `total == success + failure` invariant holds by construction and survives
/// any merge order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VuStats {
    /// Requests with no transport error and status < 400
    pub success: u64,

    /// Requests that failed at the transport level or returned status >= 400
    pub failure: u64,

    /// Sum of per-request latencies in whole milliseconds
    pub total_latency_ms: u64,
}

impl VuStats {
    /// Create an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful request
    pub fn record_success(&mut self, latency_ms: u64) {
        self.success += 1;
        self.total_latency_ms += latency_ms;
    }

    /// Record a failed request
    pub fn record_failure(&mut self, latency_ms: u64) {
        self.failure += 1;
        self.total_latency_ms += latency_ms;
    }

    /// Total requests issued (success + failure)
    pub fn total(&self) -> u64 {
        self.success + self.failure
    }

    /// Arithmetic-mean latency in whole milliseconds, 0 when no requests ran
    pub fn avg_latency_ms(&self) -> i64 {
        if self.total() == 0 {
            0
        } else {
            (self.total_latency_ms / self.total()) as i64
        }
    }

    /// Fold another worker's tally into this one
    ///
    /// Associative and commutative, so merge order across workers does not
    /// affect the reduced totals.
    pub fn merge(&mut self, other: &VuStats) {
        self.success += other.success;
        self.failure += other.failure;
        self.total_latency_ms += other.total_latency_ms;
    }

    /// Reduce the merged tally into a final [`TestResult`]
    pub fn into_result(
        self,
        test_id: String,
        script_id: &str,
        started_at: DateTime<Utc>,
    ) -> TestResult {
        TestResult {
            test_id,
            script_id: script_id.to_string(),
            total_requests: self.total(),
            success: self.success,
            failure: self.failure,
            avg_latency_ms: self.avg_latency_ms(),
            started_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_defaults() {
        let stats = VuStats::new();
        assert_eq!(stats.total(), 0);
        assert_eq!(stats.avg_latency_ms(), 0);
    }

    #[test]
    fn test_stats_record() {
        let mut stats = VuStats::new();
        stats.record_success(10);
        stats.record_success(30);
        stats.record_failure(20);

        assert_eq!(stats.success, 2);
        assert_eq!(stats.failure, 1);
        assert_eq!(stats.total(), 3);
        assert_eq!(stats.avg_latency_ms(), 20);
    }

    #[test]
    fn test_stats_merge() {
        let mut a = VuStats::new();
        a.record_success(10);
        a.record_failure(20);

        let mut b = VuStats::new();
        b.record_success(30);

        a.merge(&b);

        assert_eq!(a.success, 2);
        assert_eq!(a.failure, 1);
        assert_eq!(a.total(), 3);
        assert_eq!(a.total_latency_ms, 60);
    }

    #[test]
    fn test_stats_into_result_invariants() {
        let mut stats = VuStats::new();
        stats.record_success(5);
        stats.record_failure(15);

        let started_at = Utc::now();
        let result = stats.into_result("t1".to_string(), "s1", started_at);

        assert_eq!(result.total_requests, result.success + result.failure);
        assert_eq!(result.avg_latency_ms, 10);
        assert_eq!(result.script_id, "s1");
        assert_eq!(result.started_at, started_at);
    }

    /// Sharded accumulation must lose no updates under heavy concurrency:
    /// 50 workers each recording 1000 outcomes reduce to exactly 50_000.
    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_tallies_reduce_without_lost_updates() {
        const WORKERS: usize = 50;
        const INCREMENTS: u64 = 1000;

        let mut handles = Vec::with_capacity(WORKERS);
        for worker in 0..WORKERS {
            handles.push(tokio::spawn(async move {
                let mut local = VuStats::new();
                for i in 0..INCREMENTS {
                    if (worker as u64 + i) % 2 == 0 {
                        local.record_success(1);
                    } else {
                        local.record_failure(1);
                    }
                    if i % 100 == 0 {
                        tokio::task::yield_now().await;
                    }
                }
                local
            }));
        }

        let mut totals = VuStats::new();
        for handle in handles {
            totals.merge(&handle.await.expect("worker task panicked"));
        }

        assert_eq!(totals.total(), WORKERS as u64 * INCREMENTS);
        assert_eq!(totals.success + totals.failure, totals.total());
        assert_eq!(totals.total_latency_ms, WORKERS as u64 * INCREMENTS);
    }
}
