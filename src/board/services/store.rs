//! Authoritative in-memory task collection and identifier counter.
//!
//! The store never persists or renders on its own; callers save and
//! re-render after any outcome that reports a change.

use mockable::Clock;
use tracing::debug;

use crate::board::domain::{BoardDomainError, Direction, Snapshot, Stage, Task, TaskId, TaskTitle};

/// Result of a stage reassignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The task now sits in the given stage.
    Moved(Stage),
    /// Unknown task, already in place, or no stage in that direction.
    Unchanged,
}

/// Result of a single-task removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The task was removed.
    Removed(Task),
    /// No task carried the identifier.
    Absent,
}

/// Owner of the task collection and the monotonic identifier counter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl TaskStore {
    /// Creates an empty store whose counter starts at 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the contents of `snapshot`.
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let (tasks, next_id) = snapshot.into_parts();
        Self { tasks, next_id }
    }

    /// Captures the current collection and counter.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.tasks.clone(), self.next_id)
    }

    /// Returns all tasks in source order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the identifier the next [`TaskStore::add`] will assign.
    #[must_use]
    pub const fn next_id(&self) -> TaskId {
        self.next_id
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the board holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends a new [`Stage::Todo`] task drawn from the counter.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] without touching the store
    /// when `title` is blank after trimming, and
    /// [`BoardDomainError::IdsExhausted`] when the counter has no successor
    /// left to advance to.
    pub fn add(
        &mut self,
        title: &str,
        description: &str,
        clock: &impl Clock,
    ) -> Result<Task, BoardDomainError> {
        let validated = TaskTitle::new(title)?;
        let id = self.next_id;
        let following = id.successor().ok_or(BoardDomainError::IdsExhausted)?;
        let task = Task::new(id, validated, description, clock);
        self.next_id = following;
        self.tasks.push(task.clone());
        debug!(task_id = %id, "task added");
        Ok(task)
    }

    /// Moves a task one stage in `direction`.
    pub fn move_by(&mut self, id: TaskId, direction: Direction) -> MoveOutcome {
        let Some(target) = self.get(id).and_then(|task| task.stage().step(direction)) else {
            return MoveOutcome::Unchanged;
        };
        self.move_to(id, target)
    }

    /// Moves a task to `stage`; idempotent when it is already there.
    pub fn move_to(&mut self, id: TaskId, stage: Stage) -> MoveOutcome {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            return MoveOutcome::Unchanged;
        };
        if task.stage() == stage {
            return MoveOutcome::Unchanged;
        }
        task.set_stage(stage);
        debug!(task_id = %id, stage = %stage, "task moved");
        MoveOutcome::Moved(stage)
    }

    /// Deletes a task. Its identifier is never handed out again.
    pub fn remove(&mut self, id: TaskId) -> RemoveOutcome {
        let Some(position) = self.tasks.iter().position(|task| task.id() == id) else {
            return RemoveOutcome::Absent;
        };
        let removed = self.tasks.remove(position);
        debug!(task_id = %id, "task removed");
        RemoveOutcome::Removed(removed)
    }

    /// Removes every task and resets the counter to 1.
    ///
    /// Returns the number of tasks removed; an already empty store is left
    /// untouched, counter included, and reports zero.
    pub fn clear_all(&mut self) -> usize {
        if self.tasks.is_empty() {
            return 0;
        }
        let cleared = self.tasks.len();
        self.tasks.clear();
        self.next_id = TaskId::FIRST;
        debug!(cleared, "board cleared");
        cleared
    }
}
