use crate::board::{QuestionBoard, Writeback};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QboardError, Result};
use crate::model::{is_completed, ProgressMap};
use crate::store::ProgressStore;
use std::fs;
use std::path::Path;

use super::helpers::summary;

/// Replace progress with the contents of a JSON file.
///
/// Any JSON object is accepted and saved verbatim; titles it does not mention
/// become not completed, and keys that match no question are kept but unused.
/// On any read, parse or write failure the board and the saved slot are untouched.
pub fn run<S: ProgressStore>(board: &mut QuestionBoard<S>, path: &Path) -> Result<CmdResult> {
    let text = fs::read_to_string(path)
        .map_err(|e| QboardError::Import(format!("{}: {}", path.display(), e)))?;
    let mut result = apply_json(board, &text)?;
    result.add_message(CmdMessage::info(format!("Imported from {}", path.display())));
    Ok(result)
}

pub fn apply_json<S: ProgressStore>(board: &mut QuestionBoard<S>, text: &str) -> Result<CmdResult> {
    let progress = parse_progress(text)?;
    let unknown = progress
        .keys()
        .filter(|k| !board.questions().iter().any(|q| &q.title == *k))
        .count();

    let flags = progress.clone();
    board.update_progress(
        move |questions| {
            for q in questions {
                q.completed = is_completed(&flags, &q.title);
            }
        },
        Writeback::Verbatim(progress),
    )?;

    let stats = summary(board);
    let mut result = CmdResult::default().with_progress(stats);
    result.add_message(CmdMessage::success(format!(
        "Progress imported: {} of {} questions completed",
        stats.completed, stats.total
    )));
    if unknown > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} imported entr{} did not match any question",
            unknown,
            if unknown == 1 { "y" } else { "ies" }
        )));
    }
    Ok(result)
}

fn parse_progress(text: &str) -> Result<ProgressMap> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| QboardError::Import(format!("invalid JSON: {}", e)))?;
    match value {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(QboardError::Import(format!(
            "expected a JSON object of title -> true/false, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::export;
    use crate::store::memory::fixtures::BoardFixture;
    use serde_json::json;

    #[test]
    fn test_import_replaces_flags_and_saves_verbatim() {
        let mut fixture = BoardFixture::new().with_completed(&["Two Sum"]);
        let payload = json!({"LRU Cache": true, "Somewhere Else": true, "Merge K Lists": "yes"});

        let result = apply_json(&mut fixture.board, &payload.to_string()).unwrap();

        let done: Vec<_> = fixture
            .board
            .questions()
            .iter()
            .filter(|q| q.completed)
            .map(|q| q.title.as_str())
            .collect();
        assert_eq!(done, vec!["LRU Cache"]);
        assert_eq!(
            fixture.board.saved_progress().unwrap(),
            payload.as_object().cloned()
        );
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("did not match")));
    }

    #[test]
    fn test_export_then_import_roundtrip() {
        let mut fixture = BoardFixture::new().with_completed(&["Two Sum", "Valid Parentheses"]);
        let exported = export::to_json(&fixture.board).unwrap();
        let before = fixture.board.saved_progress().unwrap();

        crate::commands::reset::run(&mut fixture.board).unwrap();
        apply_json(&mut fixture.board, &exported).unwrap();

        assert_eq!(fixture.board.saved_progress().unwrap(), before);
        assert_eq!(fixture.board.completed_count(), 2);
    }

    #[test]
    fn test_invalid_json_changes_nothing() {
        let mut fixture = BoardFixture::new().with_completed(&["Two Sum"]);
        let before = fixture.board.saved_progress().unwrap();
        let writes = fixture.board.store().write_count();

        let err = apply_json(&mut fixture.board, "{not json").unwrap_err();
        assert!(matches!(err, QboardError::Import(_)));
        assert_eq!(fixture.board.saved_progress().unwrap(), before);
        assert_eq!(fixture.board.store().write_count(), writes);
        assert!(fixture.board.questions()[0].completed);
    }

    #[test]
    fn test_non_object_json_is_rejected() {
        let mut fixture = BoardFixture::new();
        let err = apply_json(&mut fixture.board, "[\"Two Sum\"]").unwrap_err();
        assert!(err.to_string().contains("an array"));
        assert!(fixture.board.saved_progress().unwrap().is_none());
    }

    #[test]
    fn test_import_missing_file() {
        let mut fixture = BoardFixture::new();
        let err = run(&mut fixture.board, Path::new("/no/such/progress.json")).unwrap_err();
        assert!(matches!(err, QboardError::Import(_)));
    }

    #[test]
    fn test_import_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        fs::write(&path, r#"{"Merge K Lists": true}"#).unwrap();

        let mut fixture = BoardFixture::new();
        let result = run(&mut fixture.board, &path).unwrap();
        assert_eq!(result.progress.unwrap().completed, 1);
    }

    #[test]
    fn test_failed_write_keeps_previous_progress() {
        let mut fixture = BoardFixture::new().with_completed(&["Two Sum"]);
        let before = fixture.board.saved_progress().unwrap();
        fixture.board.store().set_simulate_write_error(true);

        let payload = json!({"LRU Cache": true, "Merge K Lists": true});
        assert!(apply_json(&mut fixture.board, &payload.to_string()).is_err());

        let done: Vec<_> = fixture
            .board
            .questions()
            .iter()
            .filter(|q| q.completed)
            .map(|q| q.title.as_str())
            .collect();
        assert_eq!(done, vec!["Two Sum"]);
        assert_eq!(fixture.board.saved_progress().unwrap(), before);
    }
}
