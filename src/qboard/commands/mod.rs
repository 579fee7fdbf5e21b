use crate::config::QboardConfig;
use crate::model::Question;
use std::path::PathBuf;

pub mod config;
pub mod export;
pub mod helpers;
pub mod import;
pub mod list;
pub mod load;
pub mod reset;
pub mod status;
pub mod toggle;

pub use helpers::Selector;

#[derive(Debug, Clone)]
pub struct QboardPaths {
    /// Holds `config.json` and the progress slot.
    pub data_dir: PathBuf,
}

impl QboardPaths {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    fn at(level: MessageLevel, content: impl Into<String>) -> Self {
        let content = content.into();
        Self { level, content }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::at(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::at(MessageLevel::Success, content)
    }

    /// Shown on stderr, but the command still succeeded.
    pub fn warning(content: impl Into<String>) -> Self {
        Self::at(MessageLevel::Warning, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::at(MessageLevel::Error, content)
    }
}

/// Completion totals over the full record set, for the progress header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_questions: Vec<Question>,
    pub listed_questions: Vec<Question>,
    pub progress: Option<ProgressSummary>,
    pub export_path: Option<PathBuf>,
    pub config: Option<QboardConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_questions(mut self, questions: Vec<Question>) -> Self {
        self.affected_questions = questions;
        self
    }

    pub fn with_listed_questions(mut self, questions: Vec<Question>) -> Self {
        self.listed_questions = questions;
        self
    }

    pub fn with_progress(mut self, progress: ProgressSummary) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn with_export_path(mut self, path: PathBuf) -> Self {
        self.export_path = Some(path);
        self
    }

    pub fn with_config(mut self, config: QboardConfig) -> Self {
        self.config = Some(config);
        self
    }
}
