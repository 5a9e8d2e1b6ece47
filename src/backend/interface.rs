use thiserror::Error;

/// Failures surfaced by a ledger backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed world state file: {0}")]
    Format(#[from] serde_json::Error),
    /// The platform refused or failed the state access.
    #[error("ledger unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, BackendError>;

/// The narrow view of the platform's world state offered to contract logic.
///
/// `get_state` and `put_state` are independent calls; read-your-write
/// visibility and commit-time conflict validation belong to the platform,
/// not to implementors of this trait.
pub trait LedgerContext {
    /// Returns the value stored under `key`, or `None` if the key is unset.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Associates `key` with `value` in the world state.
    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<()>;
}
