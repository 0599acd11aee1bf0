use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Trip not found: {0}")]
    TripNotFound(String),

    #[error(transparent)]
    Domain(#[from] tripkit_shared::Error),
}
