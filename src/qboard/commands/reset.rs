use crate::board::{QuestionBoard, Writeback};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ProgressStore;

use super::helpers::summary;

/// Clear every completed flag and remove the saved slot. If the slot cannot
/// be removed the flags stay as they were.
pub fn run<S: ProgressStore>(board: &mut QuestionBoard<S>) -> Result<CmdResult> {
    let cleared = board.completed_count();
    board.update_progress(
        |questions| {
            for q in questions {
                q.completed = false;
            }
        },
        Writeback::Remove,
    )?;

    let mut result = CmdResult::default().with_progress(summary(board));
    result.add_message(CmdMessage::success(format!(
        "Progress reset ({} question{} cleared)",
        cleared,
        if cleared == 1 { "" } else { "s" }
    )));
    Ok(result)
}
