//! Core traits for execution backends and persistence boundaries
//!
//! These traits are defined in core to avoid circular dependencies.
//! Implementations live in their respective crates (`loadbench-k6`,
//! `loadbench-storage`).

use crate::config::TestConfig;
use crate::error::Result;
use crate::model::{Script, TestResult};
use async_trait::async_trait;

/// Common execution interface implemented by every backend
///
/// Both the in-process [`crate::LoadEngine`] and the external k6 adapter
/// implement this trait, so the service layer is agnostic to which backend
/// generated the traffic. The call blocks until the run's deadline has been
/// observed by every worker; there is no cancellation path.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Execute one run of `script` under `config`, producing exactly one
    /// result
    ///
    /// Assumes a pre-validated config. A result where
    /// `failure == total_requests` is a valid outcome (unreachable target),
    /// not an error; errors describe setup or infrastructure problems only.
    async fn run(&self, script: &Script, config: &TestConfig) -> Result<TestResult>;
}

/// Script persistence boundary
pub trait ScriptStore: Send + Sync {
    /// Persist a script
    fn save(&self, script: &Script) -> Result<()>;

    /// Look up a script by id
    ///
    /// # Errors
    /// Returns [`crate::Error::NotFound`] for unknown ids.
    fn find_by_id(&self, id: &str) -> Result<Script>;

    /// List all stored scripts
    fn find_all(&self) -> Result<Vec<Script>>;
}

/// Append-only log of completed runs
///
/// Entries are never mutated or removed; `list_all` preserves insertion
/// order.
pub trait ResultLog: Send + Sync {
    /// Append a completed result (no dedup, no validation)
    fn append(&self, result: TestResult);

    /// All results, in insertion order
    fn list_all(&self) -> Vec<TestResult>;

    /// Results for one script, in insertion order
    fn list_by_script(&self, script_id: &str) -> Vec<TestResult>;
}
