//! The in-process execution backend

use crate::config::TestConfig;
use crate::error::{Error, Result};
use crate::model::{Script, Step, TestResult};
use crate::traits::Executor;

use super::stats::VuStats;
use super::vu::VirtualUser;

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Timestamp layout used to derive run ids
const TEST_ID_FORMAT: &str = "%Y%m%d%H%M%S";

/// In-process load-generation engine
///
/// Holds one shared `reqwest::Client`; all virtual users of a run reuse it
/// so requests benefit from connection pooling. The engine itself carries no
/// per-run state; each [`Executor::run`] call owns its accumulator for the
/// lifetime of that run and discards it after the reduction.
#[derive(Debug, Clone, Default)]
pub struct LoadEngine {
    client: reqwest::Client,
}

impl LoadEngine {
    /// Create an engine with a default HTTP client
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine around an existing client
    ///
    /// Lets the caller decide transport policy (timeouts, TLS, proxies);
    /// the engine imposes none of its own.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Executor for LoadEngine {
    async fn run(&self, script: &Script, config: &TestConfig) -> Result<TestResult> {
        if script.steps.is_empty() {
            return Err(Error::validation("script has no steps"));
        }

        let steps: Arc<[Step]> = script.steps.clone().into();
        let started_at = Utc::now();
        let test_id = started_at.format(TEST_ID_FORMAT).to_string();
        let deadline = Instant::now() + Duration::from_secs(config.duration);

        tracing::info!(
            test_id = %test_id,
            script_id = %script.id,
            vus = config.vus,
            duration_secs = config.duration,
            steps = steps.len(),
            "starting in-process load run"
        );

        let mut handles = Vec::with_capacity(config.vus as usize);
        for vu_id in 0..config.vus {
            let vu = VirtualUser::new(vu_id, self.client.clone(), Arc::clone(&steps), deadline);
            handles.push(tokio::spawn(vu.run()));
        }

        // Blocking join semantics: the run always executes for its full
        // configured duration once started.
        let mut totals = VuStats::new();
        for (vu_id, handle) in handles.into_iter().enumerate() {
            match handle.await {
                Ok(stats) => totals.merge(&stats),
                Err(error) => {
                    tracing::error!(vu_id, error = %error, "virtual user task panicked");
                }
            }
        }

        tracing::info!(
            test_id = %test_id,
            total_requests = totals.total(),
            success = totals.success,
            failure = totals.failure,
            avg_latency_ms = totals.avg_latency_ms(),
            "load run completed"
        );

        Ok(totals.into_result(test_id, &config.script_id, started_at))
    }
}
