//! Shared helpers for in-memory board integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use placard::board::adapters::memory::InMemoryStorage;
use placard::board::domain::TaskId;
use placard::board::services::Board;

/// Storage key used by every in-memory test.
pub const KEY: &str = "kanban_editorial_v1";

/// Board type used by in-memory tests.
pub type MemoryBoard = Board<InMemoryStorage, DefaultClock>;

/// Opens a board over `storage`.
pub fn open_board(storage: &InMemoryStorage) -> MemoryBoard {
    Board::open(Arc::new(storage.clone()), Arc::new(DefaultClock), KEY)
}

/// Builds a task identifier, failing the test on zero.
///
/// # Errors
///
/// Returns an error if `value` is zero.
pub fn task_id(value: u64) -> Result<TaskId, eyre::Report> {
    TaskId::new(value).map_err(|err| eyre::eyre!("invalid task id in test: {err}"))
}
