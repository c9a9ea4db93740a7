//! loadbench-storage: persistence for scripts and run results
//!
//! This crate provides implementations of the core persistence traits:
//!
//! - [`FileScriptStore`]: one JSON document per script under a directory
//! - [`MemoryScriptStore`]: ephemeral store for tests and throwaway runs
//! - [`MemoryResultLog`]: append-only, process-lifetime log of completed runs

#![warn(missing_docs)]
#![warn(clippy::all)]

mod result_log;
mod script_store;

pub use result_log::MemoryResultLog;
pub use script_store::{FileScriptStore, MemoryScriptStore};
