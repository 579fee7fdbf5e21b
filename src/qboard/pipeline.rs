//! # Filter/Sort Engine
//!
//! Pure derivation of the displayed list from the full record set. Nothing here
//! mutates state; callers re-run [`derive`] after every change to any input.
//!
//! Ordering rules:
//! - Frequency compares numerically. Values that do not parse as a number sort
//!   after every number (ascending) and tie among themselves.
//! - Every other key compares as text, case-insensitively first with a
//!   case-sensitive tie-break. Characters order by code point, not by locale,
//!   so accented letters land after `z` (see [`SortKey`]).
//! - Descending reverses the comparator rather than the output, and the sort
//!   is stable, so equal keys keep dataset order in both directions.

use crate::model::{DifficultyFilter, FilterConfig, Question, SortConfig, SortDirection, SortKey};
use std::cmp::Ordering;

pub fn derive<'a>(
    questions: &'a [Question],
    filter: &FilterConfig,
    sort: &SortConfig,
) -> Vec<&'a Question> {
    let term = filter.search_term.to_lowercase();

    let mut listed: Vec<&Question> = questions
        .iter()
        .filter(|q| matches_search(q, &term))
        .filter(|q| matches_difficulty(q, filter.difficulty))
        .collect();

    listed.sort_by(|a, b| {
        let ord = compare(a, b, sort.key);
        match sort.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    listed
}

/// `term_lower` must already be lowercased. Empty matches everything.
pub fn matches_search(question: &Question, term_lower: &str) -> bool {
    term_lower.is_empty()
        || question.title.to_lowercase().contains(term_lower)
        || question.topics.to_lowercase().contains(term_lower)
}

pub fn matches_difficulty(question: &Question, filter: DifficultyFilter) -> bool {
    match filter {
        DifficultyFilter::All => true,
        DifficultyFilter::Only(d) => question.difficulty == d.label(),
    }
}

/// Ascending comparison of two questions on `key`.
pub fn compare(a: &Question, b: &Question, key: SortKey) -> Ordering {
    match key {
        SortKey::Frequency => compare_frequency(a.frequency_value(), b.frequency_value()),
        SortKey::Title => collate(&a.title, &b.title),
        SortKey::Difficulty => collate(&a.difficulty, &b.difficulty),
        SortKey::AcceptanceRate => collate(&a.acceptance_rate, &b.acceptance_rate),
        SortKey::Topics => collate(&a.topics, &b.topics),
    }
}

fn compare_frequency(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Share of completed questions as a whole percentage; 0 for an empty set.
pub fn progress_percent(questions: &[Question]) -> u8 {
    if questions.is_empty() {
        return 0;
    }
    let done = questions.iter().filter(|q| q.completed).count();
    ((done as f64 / questions.len() as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    fn q(position: usize, title: &str, difficulty: &str, frequency: &str, topics: &str) -> Question {
        Question {
            position,
            title: title.into(),
            difficulty: difficulty.into(),
            frequency: frequency.into(),
            link: format!("https://leetcode.com/problems/{}", position),
            acceptance_rate: format!("{}.0%", 40 + position),
            topics: topics.into(),
            completed: false,
        }
    }

    fn sample() -> Vec<Question> {
        vec![
            q(1, "Two Sum", "Easy", "85.5", "Array, Hash Table"),
            q(2, "Merge K Lists", "Hard", "42.1", "Linked List, Heap"),
            q(3, "LRU Cache", "Medium", "77", "Hash Table, Design"),
            q(4, "Word Ladder", "Hard", "n/a", "BFS"),
            q(5, "Valid Parentheses", "Easy", "60.25", "Stack, String"),
        ]
    }

    fn titles(list: &[&Question]) -> Vec<String> {
        list.iter().map(|q| q.title.clone()).collect()
    }

    #[test]
    fn test_default_sort_is_frequency_descending() {
        let data = vec![
            q(1, "Two Sum", "Easy", "85.5", ""),
            q(2, "Merge K Lists", "Hard", "42.1", ""),
        ];
        let listed = derive(&data, &FilterConfig::default(), &SortConfig::default());
        assert_eq!(titles(&listed), vec!["Two Sum", "Merge K Lists"]);

        let filter = FilterConfig {
            search_term: String::new(),
            difficulty: DifficultyFilter::Only(Difficulty::Hard),
        };
        let listed = derive(&data, &filter, &SortConfig::default());
        assert_eq!(titles(&listed), vec!["Merge K Lists"]);
    }

    #[test]
    fn test_search_matches_title_or_topics_case_insensitively() {
        let data = sample();
        for term in ["hash", "HASH", "two", "heap", "zzz", ""] {
            let filter = FilterConfig {
                search_term: term.to_string(),
                ..Default::default()
            };
            let listed = derive(&data, &filter, &SortConfig::default());
            let lower = term.to_lowercase();
            let has = |q: &Question| {
                q.title.to_lowercase().contains(&lower) || q.topics.to_lowercase().contains(&lower)
            };
            assert!(listed.iter().all(|q| has(*q)), "term {:?}", term);
            let excluded = data
                .iter()
                .filter(|q| !listed.iter().any(|l| l.position == q.position));
            assert!(excluded.into_iter().all(|q| !has(q)), "term {:?}", term);
        }
    }

    #[test]
    fn test_difficulty_filter_is_exact() {
        let mut data = sample();
        data.push(q(6, "Odd Casing", "hard", "10", ""));
        for d in Difficulty::ALL {
            let filter = FilterConfig {
                search_term: String::new(),
                difficulty: DifficultyFilter::Only(d),
            };
            let listed = derive(&data, &filter, &SortConfig::default());
            assert!(!listed.is_empty());
            assert!(listed.iter().all(|q| q.difficulty == d.label()));
        }
    }

    #[test]
    fn test_frequency_directions_are_reversed_for_numeric_values() {
        let data = sample();
        let desc = derive(
            &data,
            &FilterConfig::default(),
            &SortConfig::new(SortKey::Frequency, SortDirection::Descending),
        );
        let asc = derive(
            &data,
            &FilterConfig::default(),
            &SortConfig::new(SortKey::Frequency, SortDirection::Ascending),
        );

        fn numeric(list: &[&Question]) -> Vec<String> {
            list.iter()
                .filter(|q| q.frequency_value().is_some())
                .map(|q| q.title.clone())
                .collect()
        }
        let mut reversed = numeric(&asc);
        reversed.reverse();
        assert_eq!(numeric(&desc), reversed);
        assert_eq!(
            numeric(&asc),
            vec!["Merge K Lists", "Valid Parentheses", "LRU Cache", "Two Sum"]
        );
    }

    #[test]
    fn test_unparseable_frequency_sorts_after_numbers_ascending() {
        let data = sample();
        let asc = derive(
            &data,
            &FilterConfig::default(),
            &SortConfig::new(SortKey::Frequency, SortDirection::Ascending),
        );
        assert_eq!(asc.last().unwrap().title, "Word Ladder");
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let data = vec![
            q(1, "B", "Easy", "5", ""),
            q(2, "A", "Easy", "5", ""),
            q(3, "C", "Easy", "x", ""),
            q(4, "D", "Easy", "y", ""),
        ];
        let asc = derive(
            &data,
            &FilterConfig::default(),
            &SortConfig::new(SortKey::Frequency, SortDirection::Ascending),
        );
        assert_eq!(titles(&asc), vec!["B", "A", "C", "D"]);

        let desc = derive(&data, &FilterConfig::default(), &SortConfig::default());
        assert_eq!(titles(&desc), vec!["C", "D", "B", "A"]);
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let data = vec![
            q(1, "banana", "Easy", "1", ""),
            q(2, "Apple", "Easy", "1", ""),
            q(3, "cherry", "Easy", "1", ""),
        ];
        let asc = derive(
            &data,
            &FilterConfig::default(),
            &SortConfig::new(SortKey::Title, SortDirection::Ascending),
        );
        assert_eq!(titles(&asc), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_progress_percent_rounds() {
        let mut data = sample();
        assert_eq!(progress_percent(&data), 0);
        data[0].completed = true;
        assert_eq!(progress_percent(&data), 20);
        data.truncate(3);
        assert_eq!(progress_percent(&data), 33);
        data[1].completed = true;
        assert_eq!(progress_percent(&data), 67);
        assert_eq!(progress_percent(&[]), 0);
    }

    #[test]
    fn test_accented_titles_sort_by_code_point() {
        let data = vec![
            q(1, "Écart", "Easy", "1", ""),
            q(2, "zigzag", "Easy", "1", ""),
            q(3, "Edit Distance", "Easy", "1", ""),
        ];
        let asc = derive(
            &data,
            &FilterConfig::default(),
            &SortConfig::new(SortKey::Title, SortDirection::Ascending),
        );
        assert_eq!(titles(&asc), vec!["Edit Distance", "zigzag", "Écart"]);
    }
}
