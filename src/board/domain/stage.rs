//! Board stages and directional moves between them.

use super::{BoardDomainError, ParseStageError};
use serde::Serialize;
use std::fmt;

/// One of the three fixed workflow columns, in board order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Work not yet started.
    Todo,
    /// Work underway.
    Progress,
    /// Finished work.
    Done,
}

impl Stage {
    /// Every stage in left-to-right board order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::Progress, Self::Done];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Progress => "progress",
            Self::Done => "done",
        }
    }

    /// Returns the human-readable column heading.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::Progress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Returns the zero-based position of the stage on the board.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Todo => 0,
            Self::Progress => 1,
            Self::Done => 2,
        }
    }

    /// Returns the stage at a zero-based board position.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Todo),
            1 => Some(Self::Progress),
            2 => Some(Self::Done),
            _ => None,
        }
    }

    /// Returns the neighbouring stage in `direction`, or `None` past either
    /// end of the board.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Left => match self.index().checked_sub(1) {
                Some(index) => Self::from_index(index),
                None => None,
            },
            Direction::Right => Self::from_index(self.index() + 1),
        }
    }

    /// Returns `true` for the leftmost stage.
    #[must_use]
    pub const fn is_first(self) -> bool {
        matches!(self, Self::Todo)
    }

    /// Returns `true` for the rightmost stage.
    #[must_use]
    pub const fn is_last(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl TryFrom<&str> for Stage {
    type Error = ParseStageError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "progress" => Ok(Self::Progress),
            "done" => Ok(Self::Done),
            _ => Err(ParseStageError(value.to_owned())),
        }
    }
}

impl std::str::FromStr for Stage {
    type Err = ParseStageError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of an explicit one-column move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards [`Stage::Todo`] (`-1`).
    Left,
    /// Towards [`Stage::Done`] (`+1`).
    Right,
}

impl Direction {
    /// Returns the signed column offset.
    #[must_use]
    pub const fn offset(self) -> i64 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }
}

impl TryFrom<i64> for Direction {
    type Error = BoardDomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Left),
            1 => Ok(Self::Right),
            other => Err(BoardDomainError::InvalidDirection(other)),
        }
    }
}
