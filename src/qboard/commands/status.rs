use crate::board::QuestionBoard;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Difficulty;
use crate::store::ProgressStore;

use super::helpers::summary;

/// Overall completion plus a per-difficulty breakdown.
pub fn run<S: ProgressStore>(board: &QuestionBoard<S>) -> Result<CmdResult> {
    let stats = summary(board);
    let mut result = CmdResult::default().with_progress(stats);

    for d in Difficulty::ALL {
        let (done, total) = board
            .questions()
            .iter()
            .filter(|q| q.difficulty == d.label())
            .fold((0, 0), |(done, total), q| {
                (done + usize::from(q.completed), total + 1)
            });
        if total > 0 {
            result.add_message(CmdMessage::info(format!("{:<7} {}/{}", d.label(), done, total)));
        }
    }

    if board.saved_progress()?.is_none() {
        result.add_message(CmdMessage::info("No progress saved yet."));
    }
    result.add_message(CmdMessage::info(format!(
        "Progress slot: {}",
        board.store().location().display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::BoardFixture;

    #[test]
    fn test_status_counts_by_difficulty() {
        let fixture = BoardFixture::new().with_completed(&["Valid Parentheses"]);
        let result = run(&fixture.board).unwrap();

        let stats = result.progress.unwrap();
        assert_eq!((stats.completed, stats.total, stats.percent), (1, 4, 25));
        let lines: Vec<_> = result.messages.iter().map(|m| m.content.as_str()).collect();
        assert!(lines.contains(&"Easy    1/2"));
        assert!(lines.contains(&"Hard    0/1"));
    }

    #[test]
    fn test_status_notes_missing_slot() {
        let fixture = BoardFixture::new();
        let result = run(&fixture.board).unwrap();
        assert!(result
            .messages
            .iter()
            .any(|m| m.content == "No progress saved yet."));
    }
}
