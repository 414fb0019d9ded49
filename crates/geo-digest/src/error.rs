//! CLI error type

use geo_digest_lib::DataError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to load input: {0}")]
    Load(#[from] DataError),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}
