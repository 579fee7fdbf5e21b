use super::ProgressStore;
use crate::error::{QboardError, Result};
use crate::model::ProgressMap;
use std::cell::RefCell;
use std::path::PathBuf;

/// In-memory progress slot for testing.
///
/// Uses `RefCell` so tests can inspect or corrupt state through `&self`.
#[derive(Default)]
pub struct InMemoryStore {
    slot: RefCell<Option<ProgressMap>>,
    writes: RefCell<usize>,
    simulate_write_error: RefCell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_progress(progress: ProgressMap) -> Self {
        let store = Self::new();
        *store.slot.borrow_mut() = Some(progress);
        store
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Current slot content, bypassing the trait.
    pub fn peek(&self) -> Option<ProgressMap> {
        self.slot.borrow().clone()
    }

    /// Number of successful saves and clears.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }

    fn check_writable(&self) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(QboardError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl ProgressStore for InMemoryStore {
    fn load(&self) -> Result<Option<ProgressMap>> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&mut self, progress: &ProgressMap) -> Result<()> {
        self.check_writable()?;
        *self.slot.borrow_mut() = Some(progress.clone());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.check_writable()?;
        *self.slot.borrow_mut() = None;
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://question-progress")
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::board::QuestionBoard;
    use crate::commands::Selector;
    use crate::store::memory::InMemoryStore;

    pub const SAMPLE_CSV: &str = "\
Title,Difficulty,Frequency,Link,AcceptanceRate,Topics
Two Sum,Easy,85.5,https://leetcode.com/problems/two-sum,49.1%,\"Array, Hash Table\"
Merge K Lists,Hard,42.1,https://leetcode.com/problems/merge-k-sorted-lists,51.0%,\"Linked List, Heap\"
LRU Cache,Medium,77.0,https://leetcode.com/problems/lru-cache,42.3%,\"Hash Table, Design\"
Valid Parentheses,easy,60.25,https://leetcode.com/problems/valid-parentheses,40.7%,\"Stack, String\"
";

    pub struct BoardFixture {
        pub board: QuestionBoard<InMemoryStore>,
    }

    impl Default for BoardFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BoardFixture {
        /// A loaded board over [`SAMPLE_CSV`] with no saved progress.
        pub fn new() -> Self {
            Self::with_store(InMemoryStore::new())
        }

        pub fn with_store(store: InMemoryStore) -> Self {
            let mut board = QuestionBoard::new(store);
            board.load_from_text(SAMPLE_CSV);
            Self { board }
        }

        pub fn with_completed(mut self, titles: &[&str]) -> Self {
            for title in titles {
                let selector = Selector::Title(title.to_string());
                crate::commands::toggle::run(&mut self.board, &[selector]).unwrap();
            }
            self
        }
    }
}
