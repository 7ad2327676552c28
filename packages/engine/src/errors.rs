//! Error types for the engine

use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Template error: {0}")]
    Template(String),

    #[error("Field data error: {0}")]
    FieldData(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Active page {0} not found in site")]
    ActivePageMissing(String),
}
