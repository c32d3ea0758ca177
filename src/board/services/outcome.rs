//! Outcomes of board commands and the notices shown for them.

use std::fmt;

use crate::board::domain::Stage;

/// Short user-facing message produced by a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// A task was created in [`Stage::Todo`].
    TaskAdded,
    /// A task was moved to the given stage.
    Moved(Stage),
    /// A task was deleted.
    Deleted,
    /// The board was cleared.
    Cleared,
    /// The title was blank.
    TitleRequired,
    /// The task could not be created, e.g. because identifiers ran out.
    AddFailed,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TaskAdded => write!(f, "Task posted to {} ✓", Stage::Todo.label()),
            Self::Moved(stage) => write!(f, "→ Moved to {}", stage.label()),
            Self::Deleted => f.write_str("Task deleted"),
            Self::Cleared => f.write_str("Board cleared"),
            Self::TitleRequired => f.write_str("Please enter a task title"),
            Self::AddFailed => f.write_str("Task could not be added"),
        }
    }
}

/// What a command did, and so whether the caller should notify and
/// re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// State changed and was persisted.
    Changed(Notice),
    /// Input failed validation; state is untouched.
    Rejected(Notice),
    /// Nothing to do: no mutation, no write, no notice.
    Unchanged,
}

impl CommandOutcome {
    /// Returns the notice to display, if any.
    #[must_use]
    pub const fn notice(&self) -> Option<Notice> {
        match self {
            Self::Changed(notice) | Self::Rejected(notice) => Some(*notice),
            Self::Unchanged => None,
        }
    }

    /// Returns `true` when the board must be re-rendered.
    #[must_use]
    pub const fn needs_render(&self) -> bool {
        matches!(self, Self::Changed(_))
    }
}
