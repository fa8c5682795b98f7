use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data file '{path}' not found")]
    FileNotFound { path: String },

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

impl SaveError {
    pub fn is_recoverable(&self) -> bool {
        match self {
            SaveError::Io(_) => true,
            SaveError::FileNotFound { .. } => true,
            SaveError::Json(_) => false,
            SaveError::InvalidFormat(_) => false,
        }
    }
}
