//! Request handlers

use crate::error::ApiError;
use crate::AppState;

use loadbench_core::{Script, TestConfig, TestProfile, TestResult, TestType};

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;

/// Body of `POST /scripts`
#[derive(Debug, Deserialize)]
pub(crate) struct CreateScriptRequest {
    url: String,
}

pub(crate) async fn create_script(
    State(state): State<AppState>,
    Json(req): Json<CreateScriptRequest>,
) -> Result<(StatusCode, Json<Script>), ApiError> {
    let script = state.scripts.create_from_url(&req.url)?;
    Ok((StatusCode::CREATED, Json(script)))
}

pub(crate) async fn list_scripts(
    State(state): State<AppState>,
) -> Result<Json<Vec<Script>>, ApiError> {
    Ok(Json(state.scripts.list()?))
}

/// Query parameters of `GET /scripts/k6`
///
/// `vus`/`duration` default to the values the original standalone generator
/// used, so the artifact is runnable as downloaded.
#[derive(Debug, Deserialize)]
pub(crate) struct K6ScriptParams {
    id: String,
    #[serde(default = "default_vus")]
    vus: u32,
    #[serde(default = "default_duration")]
    duration: u64,
}

fn default_vus() -> u32 {
    10
}

fn default_duration() -> u64 {
    10
}

pub(crate) async fn get_k6_script(
    State(state): State<AppState>,
    Query(params): Query<K6ScriptParams>,
) -> Result<impl IntoResponse, ApiError> {
    if params.vus == 0 {
        return Err(loadbench_core::Error::validation("vus must be greater than 0").into());
    }
    if params.duration == 0 {
        return Err(loadbench_core::Error::validation("duration must be greater than 0").into());
    }

    let script = state.scripts.get(&params.id)?;

    let config = TestConfig {
        script_id: params.id,
        test_type: TestType::default(),
        vus: params.vus,
        duration: params.duration,
    };
    let code = loadbench_k6::generate(&script, &config);

    Ok((
        [
            (header::CONTENT_TYPE, "application/javascript"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=test.js",
            ),
        ],
        code,
    ))
}

pub(crate) async fn run_test(
    State(state): State<AppState>,
    Json(config): Json<TestConfig>,
) -> Result<Json<TestResult>, ApiError> {
    let result = state.tests.run_test(config).await?;
    Ok(Json(result))
}

/// Query parameters of `GET /history`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HistoryParams {
    script_id: Option<String>,
}

pub(crate) async fn history(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> Json<Vec<TestResult>> {
    let results = match params.script_id.as_deref() {
        Some(script_id) => state.tests.script_history(script_id),
        None => state.tests.history(),
    };
    Json(results)
}

pub(crate) async fn profiles(
    State(state): State<AppState>,
) -> Json<HashMap<TestType, TestProfile>> {
    Json(state.tests.profiles().clone())
}

pub(crate) async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "message": "loadbench is running",
    }))
}
