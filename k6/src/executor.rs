//! k6 process execution

use crate::generator;
use crate::telemetry::RunMetrics;

use loadbench_core::{Error, Executor, Result, Script, TestConfig, TestResult};

use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::io::AsyncBufReadExt;
use tokio::process::Command;

/// Timestamp layout used to derive run ids and result filenames
const TEST_ID_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Execution backend that shells out to the k6 executable
///
/// Implements the same [`Executor`] interface as the in-process engine:
/// the rendered script artifact is written to `scripts_dir`, k6 runs it with
/// NDJSON telemetry directed to `results_dir`, and the telemetry is reduced
/// into a [`TestResult`].
#[derive(Debug, Clone)]
pub struct K6Executor {
    binary: String,
    scripts_dir: PathBuf,
    results_dir: PathBuf,
}

impl K6Executor {
    /// Create an executor writing artifacts under the given directories
    pub fn new(scripts_dir: impl Into<PathBuf>, results_dir: impl Into<PathBuf>) -> Self {
        Self {
            binary: "k6".to_string(),
            scripts_dir: scripts_dir.into(),
            results_dir: results_dir.into(),
        }
    }

    /// Override the runner binary name (used by tests)
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    async fn parse_results(&self, path: &Path) -> Result<RunMetrics> {
        let file = tokio::fs::File::open(path).await?;
        let mut lines = tokio::io::BufReader::new(file).lines();

        let mut metrics = RunMetrics::new();
        while let Some(line) = lines.next_line().await? {
            metrics.observe_line(&line);
        }

        Ok(metrics)
    }
}

#[async_trait]
impl Executor for K6Executor {
    async fn run(&self, script: &Script, config: &TestConfig) -> Result<TestResult> {
        if script.steps.is_empty() {
            return Err(Error::validation("script has no steps"));
        }

        // Probe for the runner before writing any artifact.
        which::which(&self.binary).map_err(|_| {
            Error::execution(format!(
                "{} is not installed; install the k6 CLI to use this backend",
                self.binary
            ))
        })?;

        let started_at = Utc::now();
        let test_id = started_at.format(TEST_ID_FORMAT).to_string();

        tokio::fs::create_dir_all(&self.scripts_dir).await?;
        tokio::fs::create_dir_all(&self.results_dir).await?;

        let script_path = self.scripts_dir.join(format!("{}.js", script.id));
        let result_path = self
            .results_dir
            .join(format!("{}-{}.json", script.id, test_id));

        tokio::fs::write(&script_path, generator::generate(script, config)).await?;

        tracing::info!(
            test_id = %test_id,
            script_id = %script.id,
            vus = config.vus,
            duration_secs = config.duration,
            script_path = %script_path.display(),
            "starting k6 run"
        );

        let output = Command::new(&self.binary)
            .arg("run")
            .arg("--out")
            .arg(format!("json={}", result_path.display()))
            .arg("--vus")
            .arg(config.vus.to_string())
            .arg("--duration")
            .arg(format!("{}s", config.duration))
            .arg(&script_path)
            .output()
            .await?;

        if !output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::execution(format!(
                "k6 exited with {}: {}{}",
                output.status, stdout, stderr
            )));
        }

        let metrics = self.parse_results(&result_path).await?;

        tracing::info!(
            test_id = %test_id,
            total_requests = metrics.http_reqs,
            failed = metrics.http_req_failed,
            max_vus = metrics.max_vus,
            iterations = metrics.iterations,
            "k6 run completed"
        );

        Ok(TestResult {
            test_id,
            script_id: config.script_id.clone(),
            total_requests: metrics.http_reqs,
            success: metrics.successes(),
            failure: metrics.http_req_failed,
            avg_latency_ms: metrics.avg_duration_ms().round() as i64,
            started_at,
        })
    }
}
