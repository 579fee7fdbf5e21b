use crate::board::QuestionBoard;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QboardError, Result};
use crate::store::ProgressStore;
use std::fs;
use std::path::{Path, PathBuf};

pub const EXPORT_FILENAME: &str = "progress.json";

/// Write the saved progress map (not the record set) as indented JSON.
///
/// `dest` may be a directory, in which case the file is `dest/progress.json`,
/// or a file path used as given.
pub fn run<S: ProgressStore>(board: &QuestionBoard<S>, dest: &Path) -> Result<CmdResult> {
    let json = to_json(board)?;
    let path = export_path(dest);
    fs::write(&path, json).map_err(QboardError::Io)?;

    let entries = board.saved_progress()?.map(|m| m.len()).unwrap_or(0);
    let mut result = CmdResult::default().with_export_path(path.clone());
    if entries == 0 {
        result.add_message(CmdMessage::info("No saved progress; exported an empty map."));
    }
    result.add_message(CmdMessage::success(format!(
        "Exported {} entr{} to {}",
        entries,
        if entries == 1 { "y" } else { "ies" },
        path.display()
    )));
    Ok(result)
}

/// The export payload; `{}` when nothing is saved.
pub fn to_json<S: ProgressStore>(board: &QuestionBoard<S>) -> Result<String> {
    let progress = board.saved_progress()?.unwrap_or_default();
    serde_json::to_string_pretty(&progress).map_err(QboardError::Serialization)
}

fn export_path(dest: &Path) -> PathBuf {
    if dest.is_dir() {
        dest.join(EXPORT_FILENAME)
    } else {
        dest.to_path_buf()
    }
}
