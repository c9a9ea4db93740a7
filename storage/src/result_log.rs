//! In-memory result log

use loadbench_core::{ResultLog, TestResult};
use parking_lot::RwLock;

/// Append-only in-memory log of completed runs
///
/// Durable for the process lifetime only. Entries are never mutated or
/// removed; readers always observe insertion order.
#[derive(Debug, Default)]
pub struct MemoryResultLog {
    results: RwLock<Vec<TestResult>>,
}

impl MemoryResultLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultLog for MemoryResultLog {
    fn append(&self, result: TestResult) {
        self.results.write().push(result);
    }

    fn list_all(&self) -> Vec<TestResult> {
        self.results.read().clone()
    }

    fn list_by_script(&self, script_id: &str) -> Vec<TestResult> {
        self.results
            .read()
            .iter()
            .filter(|r| r.script_id == script_id)
            .cloned()
            .collect()
    }
}
