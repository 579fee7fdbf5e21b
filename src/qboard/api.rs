//! # API Facade
//!
//! A **thin facade** over the command layer and the single entry point for every
//! board operation, whatever UI sits on top.
//!
//! The facade:
//! - **Loads** the board once, on construction, and keeps the startup messages
//! - **Normalizes inputs** (raw selector strings become [`Selector`]s)
//! - **Dispatches** to `commands::*::run` and returns `Result<CmdResult>`
//!
//! It performs no I/O of its own beyond what the commands do, and formats
//! nothing for display.
//!
//! ## Generic Over ProgressStore
//!
//! `BoardApi<S: ProgressStore>`:
//! - Production: `BoardApi<FileStore>`
//! - Testing: `BoardApi<InMemoryStore>`

use crate::board::QuestionBoard;
use crate::commands::{self, CmdMessage, CmdResult, QboardPaths, Selector};
use crate::error::Result;
use crate::loader::DataSource;
use crate::model::{FilterConfig, SortConfig};
use crate::store::ProgressStore;
use std::path::Path;

pub struct BoardApi<S: ProgressStore> {
    board: QuestionBoard<S>,
    paths: QboardPaths,
    startup: Vec<CmdMessage>,
}

impl<S: ProgressStore> BoardApi<S> {
    /// Build the board and perform the one startup load from `source`.
    pub fn new(store: S, paths: QboardPaths, source: &DataSource) -> Self {
        let mut board = QuestionBoard::new(store);
        let loaded = commands::load::run(&mut board, source);
        Self {
            board,
            paths,
            startup: loaded.messages,
        }
    }

    /// Warnings raised while loading (missing data, skipped rows, unreadable progress).
    pub fn startup_messages(&self) -> &[CmdMessage] {
        &self.startup
    }

    pub fn board(&self) -> &QuestionBoard<S> {
        &self.board
    }

    pub fn list(&self, filter: &FilterConfig, sort: &SortConfig) -> Result<CmdResult> {
        commands::list::run(&self.board, filter, sort)
    }

    pub fn toggle<I: AsRef<str>>(&mut self, inputs: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(inputs);
        commands::toggle::run(&mut self.board, &selectors)
    }

    pub fn reset(&mut self) -> Result<CmdResult> {
        commands::reset::run(&mut self.board)
    }

    pub fn export(&self, dest: &Path) -> Result<CmdResult> {
        commands::export::run(&self.board, dest)
    }

    pub fn import(&mut self, path: &Path) -> Result<CmdResult> {
        commands::import::run(&mut self.board, path)
    }

    pub fn status(&self) -> Result<CmdResult> {
        commands::status::run(&self.board)
    }

    pub fn paths(&self) -> &QboardPaths {
        &self.paths
    }
}

/// Config does not need a loaded board, so it is reachable without one.
pub fn config(paths: &QboardPaths, action: ConfigAction) -> Result<CmdResult> {
    commands::config::run(paths, action)
}

/// All-numeric input selects by position; anything else is one title.
fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Vec<Selector> {
    // 1. Try to parse ALL inputs as positions
    let positions: std::result::Result<Vec<usize>, _> = inputs
        .iter()
        .map(|s| s.as_ref().trim().trim_start_matches('#').parse::<usize>())
        .collect();

    if let Ok(positions) = positions {
        return positions.into_iter().map(Selector::Position).collect();
    }

    // 2. Otherwise the words form a single title, so `toggle Two Sum` works unquoted
    let title = inputs
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");

    vec![Selector::Title(title)]
}

pub use crate::commands::config::ConfigAction;
pub use commands::{MessageLevel, ProgressSummary};
