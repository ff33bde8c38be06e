use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("background task failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<diesel::result::Error> for Error {
    fn from(err: diesel::result::Error) -> Self {
        Error::Database(err.to_string())
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Error::Task(err.to_string())
    }
}

/// Failures of the opportunity operations.
///
/// The not-found variants are caller errors; [`ServiceError::Store`] wraps
/// infrastructure failures.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("account not found: {name}")]
    AccountNotFound { name: String },

    #[error("dealer not found: {dealer_id}")]
    DealerNotFound {
        dealer_id: crate::domain::DealerId,
    },

    #[error("opportunity not found: {id}")]
    OpportunityNotFound { id: crate::domain::OpportunityId },

    #[error(transparent)]
    Store(#[from] Error),
}
