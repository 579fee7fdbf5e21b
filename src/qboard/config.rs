use crate::error::{QboardError, Result};
use crate::store::DEFAULT_SLOT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for qboard, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QboardConfig {
    /// CSV file to load questions from; the bundled set when unset
    #[serde(default)]
    pub source: Option<PathBuf>,

    /// Name of the progress slot (file stem inside the data dir)
    #[serde(default = "default_slot")]
    pub slot: String,
}

fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILENAME)
}

fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}

impl Default for QboardConfig {
    fn default() -> Self {
        Self {
            source: None,
            slot: default_slot(),
        }
    }
}

impl QboardConfig {
    pub const KEYS: [&'static str; 2] = ["source", "slot"];

    /// Read `config.json` from `dir`. A missing file yields the defaults and
    /// missing fields take their default values.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        match fs::read_to_string(config_path(dir.as_ref())) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(QboardError::Io(e)),
        }
    }

    /// Write `config.json` into `dir`, creating the directory as needed.
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        fs::write(config_path(dir), serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "source" => Some(
                self.source
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "bundled".to_string()),
            ),
            "slot" => Some(self.slot.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "source" => {
                let value = value.trim();
                self.source = if value.is_empty() || value == "bundled" {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                Ok(())
            }
            "slot" => {
                let slot = value.trim().trim_end_matches(".json");
                if slot.is_empty() || slot.contains(['/', '\\']) {
                    return Err(format!("Invalid slot name: {}", value));
                }
                self.slot = slot.to_string();
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}
