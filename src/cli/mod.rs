//! Command-line interface

use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Which execution backend serves `POST /tests/run`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Built-in engine driving virtual users from this process
    InProcess,
    /// Shell out to the k6 CLI
    K6,
}

/// HTTP load-testing platform
#[derive(Debug, Parser)]
#[command(name = "loadbench", version, about)]
pub struct Cli {
    /// Address the API server listens on
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub listen: SocketAddr,

    /// Directory where scripts are stored
    #[arg(long, default_value = "./scripts")]
    pub scripts_dir: PathBuf,

    /// Directory where k6 run artifacts are written
    #[arg(long, default_value = "./scripts/results")]
    pub results_dir: PathBuf,

    /// Execution backend
    #[arg(long, value_enum, default_value_t = Backend::InProcess)]
    pub backend: Backend,
}
