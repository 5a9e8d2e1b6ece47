mod interface;
mod json_store;
mod memory;

pub use interface::{BackendError, LedgerContext, Result};
pub use json_store::JsonStore;
pub use memory::MemoryLedger;
