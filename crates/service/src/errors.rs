use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// No JSON payload where one is required.
    #[error("Missing data")]
    MissingBody,
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Index out of range")]
    IndexOutOfRange { index: usize, len: usize },
}

impl ServiceError {
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Stable numeric code for logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::MissingBody => 1001,
            ServiceError::InvalidJson(_) => 1002,
            ServiceError::InvalidCredentials => 1101,
            ServiceError::Unauthorized => 1102,
            ServiceError::IndexOutOfRange { .. } => 1201,
        }
    }
}
