use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScholarQuestError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid deadline '{0}': expected YYYY-MM-DD")]
    InvalidDeadline(String),

    #[error("ScholarQuestError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for ScholarQuestError {
    fn from(error: std::io::Error) -> Self {
        ScholarQuestError::Io(Box::new(error))
    }
}
