//! k6 telemetry stream parsing
//!
//! k6 emits one JSON record per line when run with `--out json=<path>`.
//! Only records with `type == "Point"` carry metric samples; everything
//! else (metric declarations, etc.) is ignored. The stream may be large and
//! partially malformed, so unparseable lines are skipped, never fatal.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// One line of k6's NDJSON output
#[derive(Debug, Deserialize)]
struct TelemetryLine {
    #[serde(rename = "type")]
    kind: String,
    metric: String,
    data: PointData,
}

/// Payload of a telemetry record
#[derive(Debug, Deserialize)]
struct PointData {
    #[serde(default)]
    #[allow(dead_code)]
    time: Option<String>,
    value: f64,
    #[serde(default)]
    #[allow(dead_code)]
    tags: Option<HashMap<String, Value>>,
}

/// Metrics reduced from one k6 run's telemetry stream
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunMetrics {
    /// Total HTTP requests issued (`http_reqs` point count)
    pub http_reqs: u64,

    /// Requests k6 classified as failed (`http_req_failed` with value > 0)
    pub http_req_failed: u64,

    /// Maximum concurrently active VUs observed (`vus` running max)
    pub max_vus: u64,

    /// Completed script iterations (informational, not part of the result)
    pub iterations: u64,

    duration_sum_ms: f64,
    duration_count: u64,
}

impl RunMetrics {
    /// Create an empty reduction
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one telemetry line into the reduction
    ///
    /// Lines that do not parse as the expected record shape, or that are not
    /// `Point` records, are skipped.
    pub fn observe_line(&mut self, line: &str) {
        let point: TelemetryLine = match serde_json::from_str(line) {
            Ok(point) => point,
            Err(_) => return,
        };

        if point.kind != "Point" {
            return;
        }

        match point.metric.as_str() {
            "http_reqs" => self.http_reqs += 1,
            "http_req_failed" => {
                if point.data.value > 0.0 {
                    self.http_req_failed += 1;
                }
            }
            "http_req_duration" => {
                self.duration_sum_ms += point.data.value;
                self.duration_count += 1;
            }
            "vus" => {
                let vus = point.data.value as u64;
                if vus > self.max_vus {
                    self.max_vus = vus;
                }
            }
            "iterations" => self.iterations += 1,
            _ => {}
        }
    }

    /// Arithmetic-mean request duration in milliseconds
    pub fn avg_duration_ms(&self) -> f64 {
        if self.duration_count == 0 {
            0.0
        } else {
            self.duration_sum_ms / self.duration_count as f64
        }
    }

    /// Successful requests: total minus failed
    pub fn successes(&self) -> u64 {
        self.http_reqs.saturating_sub(self.http_req_failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(metric: &str, value: f64) -> String {
        format!(
            r#"{{"type":"Point","metric":"{metric}","data":{{"time":"2024-01-01T00:00:00Z","value":{value},"tags":{{"url":"http://example.com"}}}}}}"#
        )
    }

    fn reduce(lines: &[String]) -> RunMetrics {
        let mut metrics = RunMetrics::new();
        for line in lines {
            metrics.observe_line(line);
        }
        metrics
    }

    #[test]
    fn test_point_reduction_rules() {
        let metrics = reduce(&[
            point("http_reqs", 1.0),
            point("http_reqs", 1.0),
            point("http_reqs", 1.0),
            point("http_req_failed", 1.0),
            point("http_req_failed", 0.0), // value 0 means the request passed
            point("http_req_duration", 100.0),
            point("http_req_duration", 200.0),
            point("vus", 5.0),
            point("vus", 10.0),
            point("vus", 7.0),
            point("iterations", 1.0),
        ]);

        assert_eq!(metrics.http_reqs, 3);
        assert_eq!(metrics.http_req_failed, 1);
        assert_eq!(metrics.successes(), 2);
        assert!((metrics.avg_duration_ms() - 150.0).abs() < f64::EPSILON);
        assert_eq!(metrics.max_vus, 10);
        assert_eq!(metrics.iterations, 1);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let metrics = reduce(&[
            point("http_reqs", 1.0),
            "not json at all".to_string(),
            r#"{"type":"Point"}"#.to_string(), // missing fields
            "{\"truncated\":".to_string(),
            point("http_reqs", 1.0),
        ]);

        assert_eq!(metrics.http_reqs, 2);
    }

    #[test]
    fn test_non_point_records_are_ignored() {
        let metric_decl = r#"{"type":"Metric","metric":"http_reqs","data":{"value":0}}"#;
        let metrics = reduce(&[metric_decl.to_string(), point("http_reqs", 1.0)]);

        assert_eq!(metrics.http_reqs, 1);
    }

    #[test]
    fn test_unknown_metrics_are_ignored() {
        let metrics = reduce(&[point("data_received", 1234.0), point("http_reqs", 1.0)]);

        assert_eq!(metrics.http_reqs, 1);
        assert_eq!(metrics.http_req_failed, 0);
    }

    #[test]
    fn test_empty_stream_yields_zeroes() {
        let metrics = RunMetrics::new();
        assert_eq!(metrics.http_reqs, 0);
        assert_eq!(metrics.successes(), 0);
        assert_eq!(metrics.avg_duration_ms(), 0.0);
    }
}
