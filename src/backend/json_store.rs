use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::backend::interface::{LedgerContext, Result};

/// World state persisted as a single JSON document on disk.
///
/// The whole state is loaded by [`JsonStore::open`] and written back by
/// [`JsonStore::save`]; callers decide when a batch of contract calls is
/// worth committing. Values are kept as the raw bytes the contract wrote.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    state: BTreeMap<String, Vec<u8>>,
}

impl JsonStore {
    /// Opens the state file at `path`, starting empty if it does not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<JsonStore> {
        let path = path.as_ref().to_owned();
        let state: BTreeMap<String, Vec<u8>> = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            BTreeMap::new()
        };

        debug!("opened world state at {} ({} keys)", path.display(), state.len());
        Ok(JsonStore { path, state })
    }

    /// Writes the current state back to the file it was opened from.
    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.state)?;
        fs::write(&self.path, content)?;

        debug!("saved world state to {} ({} keys)", self.path.display(), self.state.len());
        Ok(())
    }
}

impl LedgerContext for JsonStore {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.state.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.state.insert(key.to_owned(), value.to_vec());
        Ok(())
    }
}
