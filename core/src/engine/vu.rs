//! Virtual-user execution loop

use crate::model::Step;

use super::stats::VuStats;

use std::sync::Arc;
use std::time::Instant;

/// Outcome of a single issued request
struct StepOutcome {
    success: bool,
    latency_ms: u64,
}

/// One virtual user: a task that replays the script's steps in a loop
/// until the run deadline
///
/// VUs share the HTTP client (stateless use, pooled connections) and own
/// their tally exclusively; the tally is handed back to the engine when the
/// deadline is reached.
pub(crate) struct VirtualUser {
    id: u32,
    client: reqwest::Client,
    steps: Arc<[Step]>,
    deadline: Instant,
}

impl VirtualUser {
    pub(crate) fn new(
        id: u32,
        client: reqwest::Client,
        steps: Arc<[Step]>,
        deadline: Instant,
    ) -> Self {
        Self {
            id,
            client,
            steps,
            deadline,
        }
    }

    /// Run until the deadline and return the local tally
    ///
    /// The deadline is checked between full passes, so a pass that starts
    /// before the deadline always completes; at least one pass runs even for
    /// the shortest configured duration.
    pub(crate) async fn run(self) -> VuStats {
        let mut stats = VuStats::new();

        tracing::debug!(vu_id = self.id, "virtual user started");

        loop {
            for step in self.steps.iter() {
                let outcome = self.execute_step(step).await;
                if outcome.success {
                    stats.record_success(outcome.latency_ms);
                } else {
                    stats.record_failure(outcome.latency_ms);
                }
            }

            if Instant::now() >= self.deadline {
                break;
            }
        }

        tracing::debug!(
            vu_id = self.id,
            completed = stats.total(),
            failures = stats.failure,
            "virtual user finished"
        );

        stats
    }

    /// Issue one request and classify its outcome
    ///
    /// Latency is dispatch-to-completion in whole milliseconds. Success
    /// means no transport error occurred and the status code is below 400.
    /// Transport failures (timeout, connection refused, DNS) are outcomes,
    /// not errors: they never abort the worker or the run.
    async fn execute_step(&self, step: &Step) -> StepOutcome {
        let dispatched = Instant::now();
        let sent = self.client.request(step.method.into(), &step.url).send().await;
        let latency_ms = dispatched.elapsed().as_millis() as u64;

        match sent {
            Ok(response) => {
                let success = response.status().as_u16() < 400;
                // Drain the body so the pooled connection is released even
                // on non-2xx paths.
                let _ = response.bytes().await;
                StepOutcome {
                    success,
                    latency_ms,
                }
            }
            Err(error) => {
                tracing::trace!(vu_id = self.id, url = %step.url, error = %error, "request failed");
                StepOutcome {
                    success: false,
                    latency_ms,
                }
            }
        }
    }
}
