use thiserror::Error;

#[derive(Error, Debug)]
pub enum TypeForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Layout Validation Error: {0}")]
    Validation(String),

    #[error("Optimizer Environment Error: {0}")]
    Environment(String),
}

pub type TfResult<T> = Result<T, TypeForgeError>;
