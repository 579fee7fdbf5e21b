use thiserror::Error;

#[derive(Error, Debug)]
pub enum QboardError {
    #[error("Question not found: {0}")]
    QuestionNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid question data: {0}")]
    Schema(String),

    #[error("Import failed: {0}")]
    Import(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, QboardError>;
