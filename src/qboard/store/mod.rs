//! # Storage Layer
//!
//! Progress lives in a single named slot holding a JSON object
//! `{title: bool, ...}`. The [`ProgressStore`] trait abstracts where that slot
//! is kept so the board logic never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one pretty-printed JSON file per slot
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!
//! ## Slot Semantics
//!
//! An absent slot means "no progress recorded". [`ProgressStore::clear`] removes
//! the slot instead of writing an empty map, so a reset board and a never-used
//! board look identical to the loader.
//!
//! ```text
//! $QBOARD_HOME/
//! ├── config.json              # QboardConfig
//! └── question-progress.json   # the progress slot
//! ```

use crate::error::Result;
use crate::model::ProgressMap;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

pub const DEFAULT_SLOT: &str = "question-progress";

pub trait ProgressStore {
    /// Read the slot. `Ok(None)` when nothing has been saved.
    fn load(&self) -> Result<Option<ProgressMap>>;

    /// Replace the slot's content.
    fn save(&mut self, progress: &ProgressMap) -> Result<()>;

    /// Remove the slot entirely.
    fn clear(&mut self) -> Result<()>;

    /// Where the slot lives, for messages.
    fn location(&self) -> PathBuf;
}
