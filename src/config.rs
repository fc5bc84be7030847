use crate::error::{Result, RoomqlError};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".roomql.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomqlConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default)]
    pub backend: StoreBackend,
}

/// Which accessor implementation backs the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Placeholder data; writes are echoed and nothing is kept.
    #[default]
    Fixture,
    /// In-process map that lives as long as the server.
    Memory,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Fixture => write!(f, "fixture"),
            StoreBackend::Memory => write!(f, "memory"),
        }
    }
}

impl RoomqlConfig {
    /// Loads the nearest `.roomql.yml` above `start_path`, or defaults when
    /// there is none.
    pub fn discover(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads an explicit config file, which must exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RoomqlError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: RoomqlConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
