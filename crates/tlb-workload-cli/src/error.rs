//! CLI error types

use thiserror::Error;
use tlb_workload::WorkloadError;

/// CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Workload(#[from] WorkloadError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
