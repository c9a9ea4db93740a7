//! Service layer gluing stores, backends, and the profile catalog
//!
//! Thin plumbing around the engine: resolve, validate, execute, persist.

use crate::config::{TestConfig, TestProfile, TestType};
use crate::error::{Error, Result};
use crate::model::{Method, Script, Step, TestResult};
use crate::traits::{Executor, ResultLog, ScriptStore};

use std::collections::HashMap;
use std::sync::Arc;

/// Runs load tests and records their results
pub struct TestService {
    scripts: Arc<dyn ScriptStore>,
    results: Arc<dyn ResultLog>,
    executor: Arc<dyn Executor>,
    profiles: HashMap<TestType, TestProfile>,
}

impl TestService {
    /// Create a new test service
    ///
    /// The profile catalog is passed in explicitly; it is read-only for the
    /// lifetime of the service.
    pub fn new(
        scripts: Arc<dyn ScriptStore>,
        results: Arc<dyn ResultLog>,
        executor: Arc<dyn Executor>,
        profiles: HashMap<TestType, TestProfile>,
    ) -> Self {
        Self {
            scripts,
            results,
            executor,
            profiles,
        }
    }

    /// Execute one run described by `config` and append its result to the log
    ///
    /// Validation happens here, once, before the execution backend is
    /// invoked; backends receive only pre-validated input.
    pub async fn run_test(&self, config: TestConfig) -> Result<TestResult> {
        config.validate()?;

        let script = self.scripts.find_by_id(&config.script_id)?;
        if script.steps.is_empty() {
            return Err(Error::validation("script has no steps"));
        }

        if let Some(profile) = self.profiles.get(&config.test_type) {
            if profile.ramp_up {
                // Profiles can ask for staged concurrency, but no ramp
                // algorithm exists yet; the run executes at constant VUs.
                tracing::warn!(
                    profile = %profile.name,
                    "ramp-up staging is not implemented; running at constant vus"
                );
            }
        }

        let result = self.executor.run(&script, &config).await?;
        self.results.append(result.clone());

        Ok(result)
    }

    /// All recorded results, in insertion order
    pub fn history(&self) -> Vec<TestResult> {
        self.results.list_all()
    }

    /// Recorded results for one script
    pub fn script_history(&self, script_id: &str) -> Vec<TestResult> {
        self.results.list_by_script(script_id)
    }

    /// The read-only preset catalog
    pub fn profiles(&self) -> &HashMap<TestType, TestProfile> {
        &self.profiles
    }
}

/// Creates and lists scripts
pub struct ScriptService {
    scripts: Arc<dyn ScriptStore>,
}

impl ScriptService {
    /// Create a new script service
    pub fn new(scripts: Arc<dyn ScriptStore>) -> Self {
        Self { scripts }
    }

    /// Create and persist a one-step GET script for `target_url`
    pub fn create_from_url(&self, target_url: &str) -> Result<Script> {
        let parsed = url::Url::parse(target_url)
            .map_err(|e| Error::validation(format!("invalid url: {e}")))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(Error::validation(format!(
                "unsupported url scheme: {}",
                parsed.scheme()
            )));
        }

        let script = Script {
            id: uuid::Uuid::new_v4().to_string(),
            steps: vec![Step::new(Method::Get, String::from(parsed))],
        };

        self.scripts.save(&script)?;
        tracing::info!(script_id = %script.id, url = target_url, "script created");

        Ok(script)
    }

    /// All stored scripts
    pub fn list(&self) -> Result<Vec<Script>> {
        self.scripts.find_all()
    }

    /// Look up one script by id
    pub fn get(&self, id: &str) -> Result<Script> {
        self.scripts.find_by_id(id)
    }
}
