use thiserror::Error;

use crate::backend::BackendError;

/// Errors produced by registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Occurs when registering an id that already has a record
    /// in the world state.
    #[error("investor with id {0} already exists")]
    AlreadyExists(String),
    /// Occurs when updating or viewing an id with no record
    /// in the world state.
    #[error("investor with id {0} does not exist")]
    NotFound(String),
    #[error("failed to read from world state: {0}")]
    StorageRead(#[source] BackendError),
    #[error("failed to write to world state: {0}")]
    StorageWrite(#[source] BackendError),
    #[error("failed to serialize investor record: {0}")]
    Encoding(#[source] serde_json::Error),
    /// Stored bytes that do not decode as an investor record. Only
    /// reachable when something other than this contract wrote the key.
    #[error("failed to deserialize investor record: {0}")]
    Decoding(#[source] serde_json::Error),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
