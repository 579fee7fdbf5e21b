use crate::board::QuestionBoard;
use crate::commands::ProgressSummary;
use crate::error::{QboardError, Result};
use crate::store::ProgressStore;
use std::fmt;

/// How a user points at a question: its dataset position or its title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Position(usize),
    Title(String),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Position(n) => write!(f, "#{}", n),
            Selector::Title(t) => write!(f, "\"{}\"", t),
        }
    }
}

/// Index into the board's record set for `selector`.
///
/// Titles match exactly first; failing that, a single case-insensitive match is
/// accepted. Several case-insensitive matches are an error rather than a guess.
pub fn resolve<S: ProgressStore>(board: &QuestionBoard<S>, selector: &Selector) -> Result<usize> {
    let questions = board.questions();
    match selector {
        Selector::Position(n) => questions
            .iter()
            .position(|q| q.position == *n)
            .ok_or_else(|| QboardError::QuestionNotFound(selector.to_string())),
        Selector::Title(title) => {
            if let Some(idx) = questions.iter().position(|q| &q.title == title) {
                return Ok(idx);
            }
            let folded: Vec<usize> = questions
                .iter()
                .enumerate()
                .filter(|(_, q)| q.title.to_lowercase() == title.to_lowercase())
                .map(|(i, _)| i)
                .collect();
            match folded.as_slice() {
                [idx] => Ok(*idx),
                [] => Err(QboardError::QuestionNotFound(selector.to_string())),
                _ => Err(QboardError::Api(format!(
                    "{} matches several questions; use the exact title or its number",
                    selector
                ))),
            }
        }
    }
}

pub fn resolve_all<S: ProgressStore>(
    board: &QuestionBoard<S>,
    selectors: &[Selector],
) -> Result<Vec<usize>> {
    selectors.iter().map(|s| resolve(board, s)).collect()
}

pub fn summary<S: ProgressStore>(board: &QuestionBoard<S>) -> ProgressSummary {
    ProgressSummary {
        completed: board.completed_count(),
        total: board.questions().len(),
        percent: board.progress_percent(),
    }
}
