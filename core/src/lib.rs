//! loadbench-core: data model and load-generation engine
//!
//! This crate provides the foundational types used across all loadbench
//! components, including:
//!
//! - Script and test-run data structures (steps, configs, results)
//! - The in-process load-generation engine (virtual users + aggregation)
//! - Core traits (Executor, ScriptStore, ResultLog)
//! - Error handling
//!
//! Execution backends (the in-process [`LoadEngine`] here, the k6 adapter in
//! `loadbench-k6`) implement the same [`Executor`] trait, so callers are
//! agnostic to which backend ran a test.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod profiles;
pub mod service;
pub mod traits;

pub use config::{TestConfig, TestProfile, TestType};
pub use engine::LoadEngine;
pub use error::{Error, Result};
pub use model::{Method, Script, Step, TestResult};
pub use service::{ScriptService, TestService};
pub use traits::{Executor, ResultLog, ScriptStore};
