use crate::error::{RegistryError, Result};
use crate::store::check_key;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_STORAGE_KEY: &str = "eldenLord_users";
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;

/// Configuration for the registry, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Key the user list is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Simulated latency before a registration is persisted (0 disables it)
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_submit_delay_ms() -> u64 {
    DEFAULT_SUBMIT_DELAY_MS
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            submit_delay_ms: default_submit_delay_ms(),
        }
    }
}

impl RegistryConfig {
    pub const KEYS: [&'static str; 2] = ["storage-key", "submit-delay-ms"];

    /// Reads `config.json` from `data_dir`. A missing file means defaults;
    /// missing fields fall back to their defaults individually.
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        match fs::read_to_string(data_dir.as_ref().join(CONFIG_FILENAME)) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(RegistryError::Io(e)),
        }
    }

    /// Writes `config.json`, creating `data_dir` on first use.
    pub fn save<P: AsRef<Path>>(&self, data_dir: P) -> Result<()> {
        let data_dir = data_dir.as_ref();
        fs::create_dir_all(data_dir)?;
        fs::write(
            data_dir.join(CONFIG_FILENAME),
            serde_json::to_string_pretty(self)?,
        )?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "submit-delay-ms" => Some(self.submit_delay_ms.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "storage-key" => {
                let value = value.trim();
                check_key(value)?;
                self.storage_key = value.to_string();
                Ok(())
            }
            "submit-delay-ms" => {
                self.submit_delay_ms = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("Invalid value for submit-delay-ms: {}", value))?;
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}
