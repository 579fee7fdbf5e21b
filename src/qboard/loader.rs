//! # Data Loader
//!
//! Turns CSV text into [`Question`] records.
//!
//! The first row is the header and field names are taken literally from it, so
//! column order is free and unknown columns are ignored. Parsing is best-effort:
//! a row with the wrong number of columns, a row that cannot be read into a
//! record, or a row repeating an earlier title is reported as a [`RowError`] and
//! skipped while the remaining rows are still parsed.
//!
//! The header itself is not best-effort. Without the required columns nothing
//! can be loaded, and the whole parse fails with [`QboardError::Schema`].

use crate::error::{QboardError, Result};
use crate::model::{is_completed, Difficulty, ProgressMap, Question};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// The question set shipped with the binary.
pub const BUNDLED_CSV: &str = include_str!("../../data/questions.csv");

pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Title",
    "Difficulty",
    "Frequency",
    "Link",
    "AcceptanceRate",
    "Topics",
];

#[derive(Debug, Deserialize)]
struct RawQuestion {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Difficulty")]
    difficulty: String,
    #[serde(rename = "Frequency")]
    frequency: String,
    #[serde(rename = "Link")]
    link: String,
    #[serde(rename = "AcceptanceRate")]
    acceptance_rate: String,
    #[serde(rename = "Topics")]
    topics: String,
}

impl RawQuestion {
    fn into_question(self, position: usize) -> Question {
        // Recognised difficulties are stored in canonical spelling so filtering
        // and badges agree; anything else is kept as written.
        let difficulty = match Difficulty::parse_lenient(&self.difficulty) {
            Some(d) => d.label().to_string(),
            None => self.difficulty,
        };
        Question {
            position,
            title: self.title,
            difficulty,
            frequency: self.frequency,
            link: self.link,
            acceptance_rate: self.acceptance_rate,
            topics: self.topics,
            completed: false,
        }
    }
}

/// A row that was excluded from the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 1-based line in the source text, when known.
    pub line: Option<u64>,
    pub message: String,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {}: {}", line, self.message),
            None => f.write_str(&self.message),
        }
    }
}

#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub questions: Vec<Question>,
    pub errors: Vec<RowError>,
}

pub fn parse_csv(text: &str) -> Result<ParseOutcome> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();
    if !missing.is_empty() {
        return Err(QboardError::Schema(format!(
            "missing column(s): {}",
            missing.join(", ")
        )));
    }

    let mut outcome = ParseOutcome::default();
    let mut seen: HashSet<String> = HashSet::new();

    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                outcome.errors.push(RowError {
                    line: e.position().map(|p| p.line()),
                    message: e.to_string(),
                });
                continue;
            }
        };
        let line = record.position().map(|p| p.line());

        let raw: RawQuestion = match record.deserialize(Some(&headers)) {
            Ok(raw) => raw,
            Err(e) => {
                outcome.errors.push(RowError {
                    line,
                    message: e.to_string(),
                });
                continue;
            }
        };

        if !seen.insert(raw.title.clone()) {
            outcome.errors.push(RowError {
                line,
                message: format!("duplicate title: {}", raw.title),
            });
            continue;
        }

        let position = outcome.questions.len() + 1;
        outcome.questions.push(raw.into_question(position));
    }

    for err in &outcome.errors {
        warn!(%err, "skipped question row");
    }
    debug!(
        loaded = outcome.questions.len(),
        skipped = outcome.errors.len(),
        "parsed question data"
    );
    Ok(outcome)
}

/// Sets each record's `completed` flag from the progress map; absent titles are not completed.
pub fn merge_progress(questions: &mut [Question], progress: Option<&ProgressMap>) {
    for q in questions.iter_mut() {
        q.completed = progress.map(|p| is_completed(p, &q.title)).unwrap_or(false);
    }
}

/// Where the question CSV comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DataSource {
    #[default]
    Bundled,
    File(PathBuf),
}

impl DataSource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => DataSource::File(p),
            None => DataSource::Bundled,
        }
    }

    /// Reads the CSV text once. No retry.
    pub fn fetch(&self) -> Result<String> {
        match self {
            DataSource::Bundled => Ok(BUNDLED_CSV.to_string()),
            DataSource::File(path) => fs::read_to_string(path).map_err(QboardError::Io),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Bundled => f.write_str("bundled question set"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const HEADER: &str = "Title,Difficulty,Frequency,Link,AcceptanceRate,Topics\n";

    #[test]
    fn test_parses_header_keyed_rows() {
        let text = format!(
            "{}Two Sum,Easy,85.5,https://leetcode.com/problems/two-sum,49.1%,\"Array, Hash Table\"\n",
            HEADER
        );
        let outcome = parse_csv(&text).unwrap();
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.questions.len(), 1);

        let q = &outcome.questions[0];
        assert_eq!(q.position, 1);
        assert_eq!(q.title, "Two Sum");
        assert_eq!(q.topics, "Array, Hash Table");
        assert!(!q.completed);
    }

    #[test]
    fn test_column_order_is_free_and_extra_columns_ignored() {
        let text = "Topics,Link,Extra,Title,Frequency,Difficulty,AcceptanceRate\n\
                    Heap,https://x,ignored,Merge K Lists,42.1,Hard,51.0%\n";
        let outcome = parse_csv(text).unwrap();
        assert_eq!(outcome.questions.len(), 1);
        assert_eq!(outcome.questions[0].title, "Merge K Lists");
        assert_eq!(outcome.questions[0].difficulty, "Hard");
    }

    #[test]
    fn test_wrong_column_count_is_skipped_and_parsing_continues() {
        let text = format!(
            "{}Two Sum,Easy,85.5,https://a,49%,Array\nBroken,Easy\nValid Parentheses,Easy,70,https://b,40%,Stack\n",
            HEADER
        );
        let outcome = parse_csv(&text).unwrap();
        let titles: Vec<_> = outcome.questions.iter().map(|q| q.title.as_str()).collect();
        assert_eq!(titles, vec!["Two Sum", "Valid Parentheses"]);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].line, Some(3));
        assert_eq!(outcome.questions[1].position, 2);
    }

    #[test]
    fn test_missing_required_column_fails_whole_parse() {
        let text = "Title,Difficulty\nTwo Sum,Easy\n";
        match parse_csv(text) {
            Err(QboardError::Schema(msg)) => {
                assert!(msg.contains("Frequency"));
                assert!(msg.contains("Topics"));
            }
            other => panic!("Expected Schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_difficulty_is_canonicalised_when_recognised() {
        let text = format!(
            "{}A,  easy ,1,l,1%,t\nB,HARD,1,l,1%,t\nC,Expert,1,l,1%,t\n",
            HEADER
        );
        let outcome = parse_csv(&text).unwrap();
        let diffs: Vec<_> = outcome
            .questions
            .iter()
            .map(|q| q.difficulty.as_str())
            .collect();
        assert_eq!(diffs, vec!["Easy", "Hard", "Expert"]);
        assert_eq!(outcome.questions[2].badge(), None);
    }

    #[test]
    fn test_duplicate_titles_keep_first() {
        let text = format!("{}A,Easy,1,first,1%,t\nA,Hard,2,second,2%,t\n", HEADER);
        let outcome = parse_csv(&text).unwrap();
        assert_eq!(outcome.questions.len(), 1);
        assert_eq!(outcome.questions[0].link, "first");
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].message.contains("duplicate"));
    }

    #[test]
    fn test_merge_progress_defaults_to_false() {
        let text = format!("{}A,Easy,1,l,1%,t\nB,Easy,1,l,1%,t\n", HEADER);
        let mut questions = parse_csv(&text).unwrap().questions;

        let progress = json!({"A": true, "Unknown": true});
        merge_progress(&mut questions, progress.as_object());
        assert!(questions[0].completed);
        assert!(!questions[1].completed);

        merge_progress(&mut questions, None);
        assert!(!questions[0].completed);
    }

    #[test]
    fn test_bundled_data_parses_cleanly() {
        let outcome = parse_csv(BUNDLED_CSV).unwrap();
        assert!(outcome.errors.is_empty(), "{:?}", outcome.errors);
        assert!(outcome.questions.len() >= 20);
    }

    #[test]
    fn test_fetch_missing_file_errors() {
        let source = DataSource::File(PathBuf::from("/definitely/not/here.csv"));
        assert!(matches!(source.fetch(), Err(QboardError::Io(_))));
    }
}
