//! loadbench server binary
//!
//! Wires the storage layer, an execution backend, and the HTTP API
//! together and serves until interrupted.

mod cli;

use cli::{Backend, Cli};

use loadbench_api::{router, AppState};
use loadbench_core::{
    Executor, LoadEngine, ResultLog, ScriptService, ScriptStore, TestService,
};
use loadbench_k6::K6Executor;
use loadbench_storage::{FileScriptStore, MemoryResultLog};

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let scripts: Arc<dyn ScriptStore> = Arc::new(
        FileScriptStore::new(&cli.scripts_dir)
            .with_context(|| format!("creating script store at {}", cli.scripts_dir.display()))?,
    );
    let results: Arc<dyn ResultLog> = Arc::new(MemoryResultLog::new());

    let executor: Arc<dyn Executor> = match cli.backend {
        Backend::InProcess => Arc::new(LoadEngine::new()),
        Backend::K6 => Arc::new(K6Executor::new(&cli.scripts_dir, &cli.results_dir)),
    };

    let state = AppState {
        tests: Arc::new(TestService::new(
            Arc::clone(&scripts),
            results,
            executor,
            loadbench_core::profiles::builtin_profiles(),
        )),
        scripts: Arc::new(ScriptService::new(scripts)),
    };

    let listener = tokio::net::TcpListener::bind(cli.listen)
        .await
        .with_context(|| format!("binding {}", cli.listen))?;

    tracing::info!(
        listen = %cli.listen,
        backend = ?cli.backend,
        scripts_dir = %cli.scripts_dir.display(),
        "loadbench listening"
    );

    axum::serve(listener, router(state))
        .await
        .context("server error")?;

    Ok(())
}
