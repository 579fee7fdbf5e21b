//! # Question Board
//!
//! [`QuestionBoard`] is the single owner of mutable state: the full record set
//! and the progress store. Commands change completed flags only through
//! [`QuestionBoard::update_progress`], which applies the change, writes the
//! slot back and drives the [`StoreState`] machine:
//!
//! ```text
//! Uninitialized --load--> Loaded --write starts--> Dirty --write done--> Loaded
//! ```
//!
//! A failed write leaves the board `Dirty`, restores the flags as they were
//! before the change, and returns the error. The displayed
//! list is never stored here; it is derived on demand by [`crate::pipeline`].

use crate::error::Result;
use crate::loader::{merge_progress, parse_csv, DataSource, RowError};
use crate::model::{FilterConfig, ProgressMap, Question, SortConfig, StoreState};
use crate::pipeline;
use crate::store::ProgressStore;
use tracing::{debug, warn};

/// What happened during startup load. Nothing in here is fatal.
#[derive(Debug, Default, Clone)]
pub struct LoadReport {
    pub loaded: usize,
    pub row_errors: Vec<RowError>,
    /// The data source could not be read or its header was unusable.
    pub fetch_error: Option<String>,
    /// The saved progress could not be read; records start uncompleted.
    pub progress_error: Option<String>,
}

/// What [`QuestionBoard::update_progress`] writes after changing the records.
pub(crate) enum Writeback {
    /// `{title -> completed}` rebuilt from the full record set.
    Records,
    /// This exact map, unknown titles included.
    Verbatim(ProgressMap),
    /// Delete the slot.
    Remove,
}

pub struct QuestionBoard<S: ProgressStore> {
    store: S,
    questions: Vec<Question>,
    state: StoreState,
}

impl<S: ProgressStore> QuestionBoard<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            questions: Vec::new(),
            state: StoreState::Uninitialized,
        }
    }

    /// Fetch and parse the dataset once, then merge saved progress into it.
    pub fn load(&mut self, source: &DataSource) -> LoadReport {
        match source.fetch() {
            Ok(text) => self.load_from_text(&text),
            Err(e) => {
                warn!(%source, error = %e, "could not read question data");
                self.questions.clear();
                self.state = StoreState::Loaded;
                LoadReport {
                    fetch_error: Some(format!("Could not read {}: {}", source, e)),
                    ..Default::default()
                }
            }
        }
    }

    pub fn load_from_text(&mut self, text: &str) -> LoadReport {
        let mut report = LoadReport::default();

        match parse_csv(text) {
            Ok(outcome) => {
                self.questions = outcome.questions;
                report.row_errors = outcome.errors;
            }
            Err(e) => {
                warn!(error = %e, "question data rejected");
                self.questions.clear();
                report.fetch_error = Some(e.to_string());
            }
        }

        match self.store.load() {
            Ok(progress) => merge_progress(&mut self.questions, progress.as_ref()),
            Err(e) => {
                warn!(error = %e, "ignoring unreadable progress");
                merge_progress(&mut self.questions, None);
                report.progress_error = Some(e.to_string());
            }
        }

        report.loaded = self.questions.len();
        self.state = StoreState::Loaded;
        debug!(loaded = report.loaded, "board loaded");
        report
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn state(&self) -> StoreState {
        self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// The persisted map as it is right now, `None` if the slot is absent.
    pub fn saved_progress(&self) -> Result<Option<ProgressMap>> {
        self.store.load()
    }

    /// `{title -> completed}` over the full record set.
    pub fn progress_from_records(&self) -> ProgressMap {
        self.questions
            .iter()
            .map(|q| (q.title.clone(), serde_json::Value::Bool(q.completed)))
            .collect()
    }

    /// Apply `change` to the records, then persist per `writeback`.
    ///
    /// If the store rejects the write, every completed flag goes back to its
    /// value before `change` ran, so records never disagree with the slot.
    pub(crate) fn update_progress<F>(&mut self, change: F, writeback: Writeback) -> Result<()>
    where
        F: FnOnce(&mut [Question]),
    {
        let before: Vec<bool> = self.questions.iter().map(|q| q.completed).collect();
        change(&mut self.questions);

        let written = match writeback {
            Writeback::Records => {
                let progress = self.progress_from_records();
                self.write_progress(&progress)
            }
            Writeback::Verbatim(progress) => self.write_progress(&progress),
            Writeback::Remove => self.remove_progress(),
        };

        if let Err(e) = &written {
            warn!(error = %e, "progress write failed, restoring completed flags");
            for (q, completed) in self.questions.iter_mut().zip(before) {
                q.completed = completed;
            }
        }
        written
    }

    fn write_progress(&mut self, progress: &ProgressMap) -> Result<()> {
        self.state = StoreState::Dirty;
        self.store.save(progress)?;
        self.state = StoreState::Loaded;
        Ok(())
    }

    fn remove_progress(&mut self) -> Result<()> {
        self.state = StoreState::Dirty;
        self.store.clear()?;
        self.state = StoreState::Loaded;
        Ok(())
    }

    pub fn displayed(&self, filter: &FilterConfig, sort: &SortConfig) -> Vec<&Question> {
        pipeline::derive(&self.questions, filter, sort)
    }

    pub fn completed_count(&self) -> usize {
        self.questions.iter().filter(|q| q.completed).count()
    }

    pub fn progress_percent(&self) -> u8 {
        pipeline::progress_percent(&self.questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::SAMPLE_CSV;
    use crate::store::memory::InMemoryStore;
    use serde_json::json;
    use std::path::PathBuf;

    #[test]
    fn test_starts_uninitialized_then_loaded() {
        let mut board = QuestionBoard::new(InMemoryStore::new());
        assert_eq!(board.state(), StoreState::Uninitialized);
        let report = board.load_from_text(SAMPLE_CSV);
        assert_eq!(board.state(), StoreState::Loaded);
        assert_eq!(report.loaded, 4);
        assert!(report.row_errors.is_empty());
    }

    #[test]
    fn test_load_merges_saved_progress() {
        let saved = json!({"LRU Cache": true, "Gone": true});
        let store = InMemoryStore::with_progress(saved.as_object().unwrap().clone());
        let mut board = QuestionBoard::new(store);
        board.load_from_text(SAMPLE_CSV);

        let done: Vec<_> = board
            .questions()
            .iter()
            .filter(|q| q.completed)
            .map(|q| q.title.as_str())
            .collect();
        assert_eq!(done, vec!["LRU Cache"]);
        assert_eq!(board.progress_percent(), 25);
    }

    #[test]
    fn test_fetch_failure_leaves_empty_dataset() {
        let mut board = QuestionBoard::new(InMemoryStore::new());
        let source = DataSource::File(PathBuf::from("/no/such/questions.csv"));
        let report = board.load(&source);

        assert!(board.questions().is_empty());
        assert!(report.fetch_error.is_some());
        assert_eq!(board.state(), StoreState::Loaded);
        assert_eq!(board.progress_percent(), 0);
    }

    #[test]
    fn test_bad_header_is_reported_not_fatal() {
        let mut board = QuestionBoard::new(InMemoryStore::new());
        let report = board.load_from_text("Name,Level\nTwo Sum,Easy\n");
        assert!(board.questions().is_empty());
        assert!(report.fetch_error.unwrap().contains("missing column"));
    }

    fn mark_all(questions: &mut [Question]) {
        for q in questions {
            q.completed = true;
        }
    }

    #[test]
    fn test_failed_write_leaves_board_dirty() {
        let mut board = QuestionBoard::new(InMemoryStore::new());
        board.load_from_text(SAMPLE_CSV);
        board.store().set_simulate_write_error(true);

        assert!(board.update_progress(mark_all, Writeback::Records).is_err());
        assert_eq!(board.state(), StoreState::Dirty);

        board.store().set_simulate_write_error(false);
        board.update_progress(mark_all, Writeback::Records).unwrap();
        assert_eq!(board.state(), StoreState::Loaded);
        assert_eq!(board.completed_count(), 4);
    }

    #[test]
    fn test_failed_write_restores_flags() {
        let saved = json!({"LRU Cache": true});
        let store = InMemoryStore::with_progress(saved.as_object().unwrap().clone());
        let mut board = QuestionBoard::new(store);
        board.load_from_text(SAMPLE_CSV);
        board.store().set_simulate_write_error(true);

        for writeback in [
            Writeback::Records,
            Writeback::Verbatim(ProgressMap::new()),
            Writeback::Remove,
        ] {
            assert!(board.update_progress(mark_all, writeback).is_err());
            let done: Vec<_> = board
                .questions()
                .iter()
                .filter(|q| q.completed)
                .map(|q| q.title.as_str())
                .collect();
            assert_eq!(done, vec!["LRU Cache"]);
        }
        assert_eq!(board.saved_progress().unwrap(), saved.as_object().cloned());
    }

    #[test]
    fn test_progress_from_records_covers_every_question() {
        let mut board = QuestionBoard::new(InMemoryStore::new());
        board.load_from_text(SAMPLE_CSV);
        let map = board.progress_from_records();
        assert_eq!(map.len(), 4);
        assert!(map.values().all(|v| v == &json!(false)));
    }
}
