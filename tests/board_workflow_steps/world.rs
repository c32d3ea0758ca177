//! Shared world state for board workflow BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use placard::board::{
    adapters::memory::InMemoryStorage,
    domain::TaskId,
    services::{Board, CommandOutcome},
};
use rstest::fixture;

/// Storage key used by the scenarios.
pub const KEY: &str = "kanban_editorial_v1";

/// Board type used by the BDD world.
pub type WorldBoard = Board<InMemoryStorage, DefaultClock>;

/// Scenario world for board workflow behaviour tests.
pub struct BoardWorld {
    pub storage: InMemoryStorage,
    pub board: Option<WorldBoard>,
    pub last_outcome: Option<CommandOutcome>,
}

impl BoardWorld {
    /// Creates a world with fresh storage and no open board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: InMemoryStorage::new(),
            board: None,
            last_outcome: None,
        }
    }

    /// Opens the board over the world's storage.
    pub fn open_board(&mut self) {
        self.board = Some(Board::open(
            Arc::new(self.storage.clone()),
            Arc::new(DefaultClock),
            KEY,
        ));
    }

    /// Returns the open board.
    ///
    /// # Errors
    ///
    /// Returns an error if no step has opened the board yet.
    pub fn board(&self) -> Result<&WorldBoard, eyre::Report> {
        self.board
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing board in scenario world"))
    }

    /// Returns the open board mutably.
    ///
    /// # Errors
    ///
    /// Returns an error if no step has opened the board yet.
    pub fn board_mut(&mut self) -> Result<&mut WorldBoard, eyre::Report> {
        self.board
            .as_mut()
            .ok_or_else(|| eyre::eyre!("missing board in scenario world"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Parses a task identifier from a scenario step.
///
/// # Errors
///
/// Returns an error if `value` is zero.
pub fn task_id(value: u64) -> Result<TaskId, eyre::Report> {
    TaskId::new(value).map_err(|err| eyre::eyre!("invalid task id in scenario: {err}"))
}
