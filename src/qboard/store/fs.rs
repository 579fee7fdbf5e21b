use super::{ProgressStore, DEFAULT_SLOT};
use crate::error::{QboardError, Result};
use crate::model::ProgressMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileStore {
    root: PathBuf,
    slot: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            slot: DEFAULT_SLOT.to_string(),
        }
    }

    pub fn with_slot(mut self, slot: &str) -> Self {
        self.slot = slot.trim_end_matches(".json").to_string();
        self
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    fn slot_path(&self) -> PathBuf {
        self.root.join(format!("{}.json", self.slot))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(QboardError::Io)?;
        }
        Ok(())
    }
}

impl ProgressStore for FileStore {
    fn load(&self) -> Result<Option<ProgressMap>> {
        let path = self.slot_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(QboardError::Io)?;
        let value: serde_json::Value =
            serde_json::from_str(&content).map_err(QboardError::Serialization)?;
        match value {
            serde_json::Value::Object(map) => Ok(Some(map)),
            _ => Err(QboardError::Store(format!(
                "{} does not hold a JSON object",
                path.display()
            ))),
        }
    }

    fn save(&mut self, progress: &ProgressMap) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let path = self.slot_path();

        // Write to a sibling temp file then rename, so a crash never leaves half a slot.
        let tmp = path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(progress).map_err(QboardError::Serialization)?;
        fs::write(&tmp, content).map_err(QboardError::Io)?;
        fs::rename(&tmp, &path).map_err(QboardError::Io)?;

        debug!(path = %path.display(), entries = progress.len(), "saved progress");
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        let path = self.slot_path();
        if path.exists() {
            fs::remove_file(&path).map_err(QboardError::Io)?;
            debug!(path = %path.display(), "removed progress slot");
        }
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.slot_path()
    }
}
