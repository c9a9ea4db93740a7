//! Built-in test profile catalog
//!
//! The catalog is constructed once at process start and threaded through the
//! service layer explicitly; there is no package-level mutable state.

use crate::config::{TestProfile, TestType};
use std::collections::HashMap;

/// Build the default preset catalog
pub fn builtin_profiles() -> HashMap<TestType, TestProfile> {
    HashMap::from([
        (
            TestType::Smoke,
            TestProfile {
                name: "Smoke Test".to_string(),
                vus: 1,
                duration: 10,
                ramp_up: false,
            },
        ),
        (
            TestType::Load,
            TestProfile {
                name: "Load Test".to_string(),
                vus: 50,
                duration: 60,
                ramp_up: false,
            },
        ),
        (
            TestType::Stress,
            TestProfile {
                name: "Stress Test".to_string(),
                vus: 200,
                duration: 60,
                ramp_up: false,
            },
        ),
        (
            TestType::Spike,
            TestProfile {
                name: "Spike Test".to_string(),
                vus: 300,
                duration: 20,
                ramp_up: false,
            },
        ),
        (
            TestType::Soak,
            TestProfile {
                name: "Soak Test".to_string(),
                vus: 30,
                duration: 3600,
                ramp_up: false,
            },
        ),
        (
            TestType::RampUp,
            TestProfile {
                name: "Ramp Up Test".to_string(),
                vus: 100,
                duration: 120,
                ramp_up: true,
            },
        ),
    ])
}
