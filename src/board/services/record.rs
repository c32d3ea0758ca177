//! Wire format of the persisted board record.
//!
//! The stored value is `{ "tasks": [{ id, title, desc, col, date }],
//! "nextId": n }`. Decoding is lenient per entry and strict on shape: a
//! record whose `tasks` is not a list or whose `nextId` is not a positive
//! integer below `u64::MAX` is rejected as a whole, while individual
//! malformed entries are dropped. An identifier of `u64::MAX` leaves the
//! counter nowhere to advance, so entries carrying one count as malformed.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::board::domain::{PersistedTaskData, Snapshot, Stage, Task, TaskId, TaskTitle};

/// Reasons a stored value cannot be decoded into a snapshot.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The value is not valid JSON.
    #[error("stored value is not valid JSON: {0}")]
    Json(String),
    /// The value is JSON but not an object.
    #[error("stored value is not an object")]
    NotAnObject,
    /// `tasks` is missing or not a list.
    #[error("stored tasks are not a list")]
    TasksNotAList,
    /// `nextId` is missing, not a positive integer, or has no successor.
    #[error("stored nextId is not a usable positive integer")]
    InvalidNextId,
}

/// Serialized task entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Task identifier.
    pub id: u64,
    /// Task title.
    pub title: String,
    /// Task description.
    #[serde(default)]
    pub desc: String,
    /// Stage name.
    pub col: String,
    /// Creation-date label.
    #[serde(default)]
    pub date: String,
}

/// Serialized board record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardRecord {
    /// Task entries.
    pub tasks: Vec<TaskRecord>,
    /// Next identifier to assign.
    pub next_id: u64,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            title: task.title().as_str().to_owned(),
            desc: task.description().to_owned(),
            col: task.stage().as_str().to_owned(),
            date: task.date_label().to_owned(),
        }
    }
}

impl From<&Snapshot> for BoardRecord {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            tasks: snapshot.tasks().iter().map(TaskRecord::from).collect(),
            next_id: snapshot.next_id().value(),
        }
    }
}

impl TaskRecord {
    fn into_task(self) -> Option<Task> {
        let id = TaskId::new(self.id).ok()?;
        id.successor()?;
        Some(Task::from_persisted(PersistedTaskData {
            id,
            title: TaskTitle::new(&self.title).ok()?,
            description: self.desc,
            stage: Stage::try_from(self.col.as_str()).ok()?,
            date_label: self.date,
        }))
    }
}

/// Serializes a snapshot into its stored string form.
///
/// # Errors
///
/// Returns [`serde_json::Error`] if serialization fails.
pub fn encode(snapshot: &Snapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string(&BoardRecord::from(snapshot))
}

/// Decodes a stored string into a snapshot.
///
/// Entries that cannot be read as a task, or that repeat an identifier seen
/// earlier in the list, are dropped and counted in the returned tally.
///
/// # Errors
///
/// Returns [`RecordError`] when the record as a whole has the wrong shape.
pub fn decode(raw: &str) -> Result<(Snapshot, usize), RecordError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|err| RecordError::Json(err.to_string()))?;
    let Value::Object(mut fields) = value else {
        return Err(RecordError::NotAnObject);
    };
    let Some(Value::Array(entries)) = fields.remove("tasks") else {
        return Err(RecordError::TasksNotAList);
    };
    let next_id = fields
        .get("nextId")
        .and_then(Value::as_u64)
        .and_then(|raw_id| TaskId::new(raw_id).ok())
        .filter(|id| id.successor().is_some())
        .ok_or(RecordError::InvalidNextId)?;

    let total = entries.len();
    let mut seen = HashSet::with_capacity(total);
    let tasks: Vec<Task> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<TaskRecord>(entry).ok())
        .filter_map(TaskRecord::into_task)
        .filter(|task| seen.insert(task.id()))
        .collect();
    let dropped = total.saturating_sub(tasks.len());
    Ok((Snapshot::new(tasks, next_id), dropped))
}
