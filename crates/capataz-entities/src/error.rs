//! Error types for the entity modeling layer

use std::time::Duration;

/// Errors that can occur while modeling entities or driving server tasks
#[derive(Debug, thiserror::Error)]
pub enum EntityError {
    #[error(transparent)]
    Client(#[from] capataz_client::ClientError),

    #[error("unknown entity '{0}'")]
    UnknownEntity(String),

    #[error("no value for path placeholder ':{0}'")]
    MissingParent(String),

    #[error("unexpected API response: {0}")]
    UnexpectedResponse(String),

    #[error("invalid value for field '{field}': {reason}")]
    Validation { field: String, reason: String },

    #[error("task {id} did not finish within {timeout:?}")]
    TaskTimeout { id: String, timeout: Duration },

    #[error("task {id} ended with state '{state}' and result '{result}'")]
    TaskFailed {
        id: String,
        state: String,
        result: String,
    },

    #[error("entity dependency chain exceeds depth {0}")]
    DependencyDepth(usize),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EntityError>;
