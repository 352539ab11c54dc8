use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwimlaneError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SwimlaneError {
    pub fn card_not_found(id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("Card {}", id))
    }

    pub fn column_not_found(id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("Column {}", id))
    }
}
