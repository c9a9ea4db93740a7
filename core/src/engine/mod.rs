//! In-process load-generation engine
//!
//! The engine turns a script plus a run configuration into real concurrent
//! HTTP traffic: it spawns one task per virtual user (VU), and each VU
//! replays the script's ordered steps in a loop until the run's wall-clock
//! deadline. A VU that finishes a full pass before the deadline immediately
//! starts the next one; there is no pacing or think time beyond the
//! target's own latency, so sustained concurrency equals the configured
//! VU count.
//!
//! Aggregation uses ownership transfer instead of a shared lock: every VU
//! records outcomes into its own [`VuStats`] tally, and the engine merges all
//! tallies exactly once after joining the workers. Counters belonging to one
//! request are only ever touched by the worker that owns them, so no update
//! can be lost or torn under concurrency.
//!
//! # Example
//!
//! ```ignore
//! use loadbench_core::{Executor, LoadEngine, Script, Step, Method, TestConfig};
//!
//! let engine = LoadEngine::new();
//! let result = engine.run(&script, &config).await?;
//! assert_eq!(result.total_requests, result.success + result.failure);
//! ```

mod in_process;
mod stats;
mod vu;

pub use in_process::LoadEngine;
pub use stats::VuStats;

#[cfg(test)]
mod tests;
