use std::collections::HashMap;

use crate::backend::interface::{LedgerContext, Result};

/// World state held in a plain map. Stands in for the platform ledger in
/// tests and short-lived tooling; offers no durability.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    state: HashMap<String, Vec<u8>>,
}

impl MemoryLedger {
    pub fn new() -> MemoryLedger {
        MemoryLedger { state: HashMap::new() }
    }
}

impl LedgerContext for MemoryLedger {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.state.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.state.insert(key.to_owned(), value.to_vec());
        Ok(())
    }
}
