use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ErgError {
    #[error("failed to load ERG dataset from {path}: {reason}")]
    DatasetLoad { path: PathBuf, reason: String },

    #[error("ERG dataset integrity violation: {0}")]
    DataIntegrity(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
