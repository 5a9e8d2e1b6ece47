use std::{fs, net::SocketAddr, path::{Path, PathBuf}};

use serde::{Serialize, Deserialize};
use anyhow::{self, Context};

#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP listener binds to.
    pub listen: SocketAddr,
    /// Location of the world-state file backing the registry.
    pub state_file: PathBuf,
}

impl AppConfig {
    pub fn read(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file_content = fs::read_to_string(filepath)
            .with_context(|| "failed to read config file")?;
        let config = toml::from_str(&file_content)
            .with_context(|| "failed to parse config file")?;
        return Ok(config);
    }
}
