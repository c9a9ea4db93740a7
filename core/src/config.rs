//! Run configuration types

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Load-test category of a run
///
/// The category is descriptive metadata today; the engine runs at a constant
/// virtual-user count regardless. See [`TestProfile::ramp_up`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestType {
    /// Minimal traffic to verify the target responds at all
    Smoke,
    /// Sustained expected traffic
    Load,
    /// Traffic beyond expected capacity
    Stress,
    /// Sudden short burst
    Spike,
    /// Long-running sustained traffic
    Soak,
    /// Gradually increasing traffic
    RampUp,
}

impl Default for TestType {
    fn default() -> Self {
        TestType::Load
    }
}

/// Configuration for one test run
///
/// Defines which script to replay, how many concurrent virtual users to
/// launch, and for how long. Validation happens once, before an execution
/// backend is invoked; backends assume pre-validated input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestConfig {
    /// Script to execute
    pub script_id: String,

    /// Test category
    #[serde(rename = "type", default)]
    pub test_type: TestType,

    /// Number of concurrent virtual users
    pub vus: u32,

    /// Run duration in seconds
    pub duration: u64,
}

impl TestConfig {
    /// Validate the configuration
    ///
    /// # Errors
    /// Returns [`Error::Validation`] if the script id is empty or either
    /// `vus` or `duration` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.script_id.is_empty() {
            return Err(Error::validation("scriptId is required"));
        }
        if self.vus == 0 {
            return Err(Error::validation("vus must be greater than 0"));
        }
        if self.duration == 0 {
            return Err(Error::validation("duration must be greater than 0"));
        }
        Ok(())
    }
}

/// Named preset configuration
///
/// A read-only catalog entry, not runtime state. See
/// [`crate::profiles::builtin_profiles`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestProfile {
    /// Human-readable profile name
    pub name: String,
    /// Virtual users the profile suggests
    pub vus: u32,
    /// Duration in seconds the profile suggests
    pub duration: u64,
    /// Whether the profile asks for staged concurrency
    ///
    /// No staged-concurrency behavior exists in the engine; the flag is
    /// carried through and surfaced as a warning when selected.
    #[serde(default)]
    pub ramp_up: bool,
}
