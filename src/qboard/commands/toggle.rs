use crate::board::{QuestionBoard, Writeback};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ProgressStore;
use std::collections::HashSet;

use super::helpers::{resolve_all, summary, Selector};

/// Flip the completed flag of each selected question, then rewrite the saved
/// map from the full record set.
///
/// A question named by several selectors (`1 "#1"`, or its number and its
/// title) is flipped once. Nothing changes if any selector is unknown or the
/// write fails.
pub fn run<S: ProgressStore>(board: &mut QuestionBoard<S>, selectors: &[Selector]) -> Result<CmdResult> {
    let mut indexes = resolve_all(board, selectors)?;
    let mut seen = HashSet::new();
    indexes.retain(|idx| seen.insert(*idx));

    if !indexes.is_empty() {
        board.update_progress(
            |questions| {
                for &idx in &indexes {
                    questions[idx].completed = !questions[idx].completed;
                }
            },
            Writeback::Records,
        )?;
    }

    let mut result = CmdResult::default();
    let affected: Vec<_> = indexes
        .iter()
        .map(|&idx| board.questions()[idx].clone())
        .collect();
    for question in &affected {
        let state = if question.completed { "done" } else { "not done" };
        result.add_message(CmdMessage::success(format!(
            "Marked \"{}\" as {}",
            question.title, state
        )));
    }

    Ok(result
        .with_affected_questions(affected)
        .with_progress(summary(board)))
}
