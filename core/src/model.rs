//! Script and test-run data structures
//!
//! Wire names are camelCase (`scriptId`, `totalRequests`, ...) to stay
//! compatible with the JSON surface consumed by the frontend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// HTTP method of a single script step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
    /// PATCH
    Patch,
    /// HEAD
    Head,
    /// OPTIONS
    Options,
}

impl Method {
    /// Uppercase verb, as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }

    /// Lowercase verb form expected by the k6 scripting dialect
    /// (`http.get`, `http.post`, ...)
    ///
    /// Every variant maps explicitly; there is no silent `get` fallback for
    /// unrecognized verbs because the enum is closed.
    pub fn k6_verb(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Delete => "del",
            Method::Patch => "patch",
            Method::Head => "head",
            Method::Options => "options",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
            Method::Patch => reqwest::Method::PATCH,
            Method::Head => reqwest::Method::HEAD,
            Method::Options => reqwest::Method::OPTIONS,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single HTTP request template within a script
///
/// Immutable once part of a [`Script`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// HTTP method to issue
    pub method: Method,
    /// Target URL
    pub url: String,
}

impl Step {
    /// Create a new step
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
        }
    }
}

/// An ordered sequence of HTTP steps
///
/// Owned by the script store; execution backends only borrow it for the
/// duration of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// Unique script identifier
    pub id: String,
    /// Ordered steps, replayed in full by every virtual user
    pub steps: Vec<Step>,
}

/// Outcome of one completed run
///
/// Created exactly once per run, immutable thereafter, appended to the
/// result log. Invariant: `total_requests == success + failure`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    /// Run identifier, derived from the run's start timestamp
    pub test_id: String,
    /// Script this run executed
    pub script_id: String,
    /// Total requests issued
    pub total_requests: u64,
    /// Requests that completed with no transport error and status < 400
    pub success: u64,
    /// Requests that failed at the transport level or returned status >= 400
    pub failure: u64,
    /// Arithmetic-mean latency in whole milliseconds (0 when no requests ran)
    pub avg_latency_ms: i64,
    /// Wall-clock time the run was dispatched
    pub started_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_serialization_uppercase() {
        assert_eq!(serde_json::to_string(&Method::Get).unwrap(), "\"GET\"");
        assert_eq!(serde_json::to_string(&Method::Delete).unwrap(), "\"DELETE\"");

        let parsed: Method = serde_json::from_str("\"POST\"").unwrap();
        assert_eq!(parsed, Method::Post);
    }

    #[test]
    fn test_method_k6_verbs_cover_all_variants() {
        for (method, verb) in [
            (Method::Get, "get"),
            (Method::Post, "post"),
            (Method::Put, "put"),
            (Method::Delete, "del"),
            (Method::Patch, "patch"),
            (Method::Head, "head"),
            (Method::Options, "options"),
        ] {
            assert_eq!(method.k6_verb(), verb);
        }
    }

    #[test]
    fn test_script_roundtrip() {
        let script = Script {
            id: "abc".to_string(),
            steps: vec![
                Step::new(Method::Get, "http://example.com"),
                Step::new(Method::Post, "http://example.com/submit"),
            ],
        };
        let json = serde_json::to_string(&script).unwrap();
        let parsed: Script = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, script);
    }

    #[test]
    fn test_result_json_format() {
        let result = TestResult {
            test_id: "20240101120000".to_string(),
            script_id: "abc".to_string(),
            total_requests: 10,
            success: 9,
            failure: 1,
            avg_latency_ms: 42,
            started_at: Utc::now(),
        };
        let json = serde_json::to_string(&result).unwrap();

        assert!(json.contains("\"testId\":\"20240101120000\""));
        assert!(json.contains("\"scriptId\":\"abc\""));
        assert!(json.contains("\"totalRequests\":10"));
        assert!(json.contains("\"avgLatencyMs\":42"));
        assert!(json.contains("\"startedAt\""));
    }
}
