use crate::board::QuestionBoard;
use crate::commands::{CmdMessage, CmdResult};
use crate::loader::DataSource;
use crate::store::ProgressStore;

use super::helpers::summary;

/// Startup load. Problems become warnings; the board stays usable, possibly empty.
pub fn run<S: ProgressStore>(board: &mut QuestionBoard<S>, source: &DataSource) -> CmdResult {
    let report = board.load(source);
    let mut result = CmdResult::default().with_progress(summary(board));

    if let Some(err) = &report.fetch_error {
        result.add_message(CmdMessage::warning(format!(
            "No questions loaded. {}",
            err
        )));
    }
    if !report.row_errors.is_empty() {
        let first = &report.row_errors[0];
        result.add_message(CmdMessage::warning(format!(
            "Skipped {} malformed row{} (first: {})",
            report.row_errors.len(),
            if report.row_errors.len() == 1 { "" } else { "s" },
            first
        )));
    }
    if let Some(err) = &report.progress_error {
        result.add_message(CmdMessage::warning(format!(
            "Saved progress could not be read and was ignored: {}",
            err
        )));
    }
    result
}
