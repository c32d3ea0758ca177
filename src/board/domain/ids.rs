//! Identifier type for board tasks.

use super::BoardDomainError;
use std::fmt;

/// Positive, immutable identifier of a task on the board.
///
/// Identifiers are drawn from the board's monotonic counter and are never
/// reassigned, even after the task they named has been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// The first identifier handed out by an empty board.
    pub const FIRST: Self = Self(1);

    /// Creates a validated task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidTaskId`] when the value is zero.
    pub const fn new(value: u64) -> Result<Self, BoardDomainError> {
        if value == 0 {
            return Err(BoardDomainError::InvalidTaskId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the identifier that follows this one, or `None` when the
    /// numeric range is exhausted.
    #[must_use]
    pub const fn successor(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(next) => Some(Self(next)),
            None => None,
        }
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<u64> for TaskId {
    type Error = BoardDomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskId> for u64 {
    fn from(id: TaskId) -> Self {
        id.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
