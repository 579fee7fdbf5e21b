use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Persisted progress: question title -> completed flag.
///
/// Kept as a raw JSON object so an imported file is stored verbatim, including
/// entries for titles the dataset does not know about.
pub type ProgressMap = serde_json::Map<String, serde_json::Value>;

/// A title counts as completed only when its entry is JSON `true`.
pub fn is_completed(progress: &ProgressMap, title: &str) -> bool {
    progress
        .get(title)
        .and_then(serde_json::Value::as_bool)
        .unwrap_or(false)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Lenient parse used for source data: ignores case and surrounding whitespace.
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        let wanted = raw.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// 1-based row position in the loaded dataset. Stable across filters and sorts.
    pub position: usize,
    pub title: String,
    pub difficulty: String,
    pub frequency: String,
    pub link: String,
    pub acceptance_rate: String,
    pub topics: String,
    #[serde(default)]
    pub completed: bool,
}

impl Question {
    /// The badge shown for this question, `None` when the difficulty text is unrecognised.
    pub fn badge(&self) -> Option<Difficulty> {
        Difficulty::parse_lenient(&self.difficulty)
    }

    pub fn frequency_value(&self) -> Option<f64> {
        self.frequency
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| !v.is_nan())
    }

    pub fn topic_list(&self) -> Vec<&str> {
        self.topics
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    pub fn label(&self) -> &'static str {
        match self {
            DifficultyFilter::All => "all",
            DifficultyFilter::Only(d) => d.label(),
        }
    }
}

impl FromStr for DifficultyFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(DifficultyFilter::All);
        }
        Difficulty::parse_lenient(s)
            .map(DifficultyFilter::Only)
            .ok_or_else(|| format!("Unknown difficulty: {} (expected all, easy, medium or hard)", s))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    pub search_term: String,
    pub difficulty: DifficultyFilter,
}

/// Column the displayed list is ordered by.
///
/// `Frequency` compares numerically. The text keys compare case-insensitively
/// with a case-sensitive tie-break, by Unicode code point: there is no locale
/// collation, so an accented title such as "Écart" sorts after "Zigzag".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Title,
    Difficulty,
    Frequency,
    AcceptanceRate,
    Topics,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Difficulty => "difficulty",
            SortKey::Frequency => "frequency",
            SortKey::AcceptanceRate => "acceptance",
            SortKey::Topics => "topics",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SortKey::Title),
            "difficulty" => Ok(SortKey::Difficulty),
            "frequency" | "freq" => Ok(SortKey::Frequency),
            "acceptance" | "acceptance-rate" | "acceptancerate" => Ok(SortKey::AcceptanceRate),
            "topics" => Ok(SortKey::Topics),
            other => Err(format!("Unknown sort key: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            key: SortKey::Frequency,
            direction: SortDirection::Descending,
        }
    }
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Selecting the active key flips direction; any other key starts ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key;
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Lifecycle of the progress slot as seen by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreState {
    #[default]
    Uninitialized,
    Loaded,
    /// A write-back is in progress, or the last one failed.
    Dirty,
}
