//! Tests for the in-process engine
//!
//! The engine issues real HTTP traffic, so these tests stand up a local
//! target bound to an ephemeral port instead of mocking the client.

use crate::config::{TestConfig, TestType};
use crate::error::Error;
use crate::model::{Method, Script, Step};
use crate::traits::Executor;

use super::LoadEngine;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;

async fn spawn_target() -> SocketAddr {
    let app = Router::new()
        .route("/ok", get(|| async { "ok" }))
        .route(
            "/boom",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test target");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test target server");
    });

    addr
}

fn config(script_id: &str, vus: u32, duration: u64) -> TestConfig {
    TestConfig {
        script_id: script_id.to_string(),
        test_type: TestType::Smoke,
        vus,
        duration,
    }
}

fn one_step_script(id: &str, url: String) -> Script {
    Script {
        id: id.to_string(),
        steps: vec![Step::new(Method::Get, url)],
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_run_two_vus_one_second() {
    let addr = spawn_target().await;
    let script = one_step_script("s1", format!("http://{addr}/ok"));
    let engine = LoadEngine::new();

    let result = engine
        .run(&script, &config("s1", 2, 1))
        .await
        .expect("run failed");

    // At least one full pass per VU.
    assert!(result.total_requests >= 2, "got {}", result.total_requests);
    assert_eq!(result.total_requests, result.success + result.failure);
    assert_eq!(result.failure, 0);
    assert!(result.avg_latency_ms >= 0);
    assert_eq!(result.script_id, "s1");
    assert!(!result.test_id.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_status_400_and_above_counts_as_failure() {
    let addr = spawn_target().await;
    let script = one_step_script("s2", format!("http://{addr}/boom"));
    let engine = LoadEngine::new();

    let result = engine
        .run(&script, &config("s2", 1, 1))
        .await
        .expect("run failed");

    assert!(result.total_requests >= 1);
    assert_eq!(result.success, 0);
    assert_eq!(result.failure, result.total_requests);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_unresolvable_host_is_data_not_error() {
    let script = one_step_script("s3", "http://host.invalid/".to_string());
    let engine = LoadEngine::new();

    // Transport failures fold into the failure counter; the run itself
    // completes without error.
    let result = engine
        .run(&script, &config("s3", 1, 1))
        .await
        .expect("transport failures must not abort the run");

    assert!(result.total_requests >= 1);
    assert_eq!(result.success, 0);
    assert_eq!(result.failure, result.total_requests);
    assert_eq!(result.total_requests, result.success + result.failure);
}

#[tokio::test]
async fn test_empty_script_is_a_setup_error() {
    let script = Script {
        id: "s4".to_string(),
        steps: Vec::new(),
    };
    let engine = LoadEngine::new();

    let result = engine.run(&script, &config("s4", 1, 1)).await;

    assert!(matches!(result, Err(Error::Validation(_))));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_multi_step_scripts_replay_in_full_passes() {
    let addr = spawn_target().await;
    let script = Script {
        id: "s5".to_string(),
        steps: vec![
            Step::new(Method::Get, format!("http://{addr}/ok")),
            Step::new(Method::Get, format!("http://{addr}/boom")),
        ],
    };
    let engine = LoadEngine::new();

    let result = engine
        .run(&script, &config("s5", 1, 1))
        .await
        .expect("run failed");

    // Every pass issues both steps, one success and one failure.
    assert_eq!(result.total_requests % 2, 0);
    assert_eq!(result.success, result.failure);
    assert_eq!(result.total_requests, result.success + result.failure);
}
