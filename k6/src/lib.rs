//! loadbench-k6: external-runner execution backend
//!
//! An alternate backend that delegates actual traffic generation to the
//! separately installed `k6` executable. A script + config pair is rendered
//! into a k6 JavaScript artifact, k6 runs it with its structured telemetry
//! directed to an NDJSON sink, and the sink is stream-parsed back into the
//! same `TestResult` shape the in-process engine produces. Callers never
//! know which backend executed a run.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod executor;
pub mod generator;
pub mod telemetry;

pub use executor::K6Executor;
pub use generator::generate;
pub use telemetry::RunMetrics;
