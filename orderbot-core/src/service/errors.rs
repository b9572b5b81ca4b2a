use crate::exchange::ExchangeError;
use orderbot_common::ValidationError;
use thiserror::Error;

/// Service layer error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Exchange error: {0}")]
    Exchange(#[from] ExchangeError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl ServiceError {
    /// Process exit status for this failure
    pub fn exit_code(&self) -> u8 {
        match self {
            ServiceError::Config(_) => 1,
            ServiceError::Validation(_) => 2,
            ServiceError::Exchange(_) => 3,
            ServiceError::Output(_) => 4,
        }
    }
}

impl From<::config::ConfigError> for ServiceError {
    fn from(err: ::config::ConfigError) -> Self {
        ServiceError::Config(err.to_string())
    }
}
