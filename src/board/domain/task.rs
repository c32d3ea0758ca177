//! Task values and the validated title type.

use super::{BoardDomainError, Stage, TaskId};
use chrono::{DateTime, Local};
use mockable::Clock;
use std::fmt;

/// `chrono` format of the short creation-date label, e.g. `Feb 20`.
const DATE_LABEL_FORMAT: &str = "%b %-d";

/// Formats the short creation-date label for `moment`, e.g. `Feb 20`.
#[must_use]
pub fn date_label(moment: &DateTime<Local>) -> String {
    moment.format(DATE_LABEL_FORMAT).to_string()
}

/// Non-empty, trimmed task title.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the value is empty after
    /// trimming.
    pub fn new(value: impl AsRef<str>) -> Result<Self, BoardDomainError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyTitle);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskTitle {
    type Error = BoardDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskTitle> for String {
    fn from(title: TaskTitle) -> Self {
        title.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single card on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: String,
    stage: Stage,
    date_label: String,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, possibly empty.
    pub description: String,
    /// Persisted stage.
    pub stage: Stage,
    /// Persisted creation-date label.
    pub date_label: String,
}

impl Task {
    /// Creates a new task in [`Stage::Todo`] dated with the clock's current
    /// local day.
    #[must_use]
    pub fn new(id: TaskId, title: TaskTitle, description: &str, clock: &impl Clock) -> Self {
        Self {
            id,
            title,
            description: description.trim().to_owned(),
            stage: Stage::Todo,
            date_label: date_label(&clock.local()),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            stage: data.stage,
            date_label: data.date_label,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, which may be empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the stage the task currently sits in.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the short creation-date label.
    #[must_use]
    pub fn date_label(&self) -> &str {
        &self.date_label
    }

    /// Reassigns the task's stage.
    pub(crate) const fn set_stage(&mut self, stage: Stage) {
        self.stage = stage;
    }
}
