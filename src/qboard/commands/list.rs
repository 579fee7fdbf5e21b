use crate::board::QuestionBoard;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{FilterConfig, SortConfig};
use crate::store::ProgressStore;

use super::helpers::summary;

pub fn run<S: ProgressStore>(
    board: &QuestionBoard<S>,
    filter: &FilterConfig,
    sort: &SortConfig,
) -> Result<CmdResult> {
    let listed: Vec<_> = board
        .displayed(filter, sort)
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::default().with_progress(summary(board));
    if listed.len() < board.questions().len() {
        result.add_message(CmdMessage::info(format!(
            "Showing {} of {} questions",
            listed.len(),
            board.questions().len()
        )));
    }
    Ok(result.with_listed_questions(listed))
}
