//! Pointer drag tracking.

use thiserror::Error;

use crate::board::domain::{Stage, TaskId};

/// State of the drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A card is being dragged.
    Dragging(TaskId),
}

/// A resolved drop: which task goes where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    /// The dragged task.
    pub task_id: TaskId,
    /// The stage it was dropped on.
    pub stage: Stage,
}

/// Errors returned while resolving a drop.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DragError {
    /// A drop arrived with no drag in progress.
    #[error("no drag in progress")]
    NotDragging,
}

/// Tracks which task, if any, is mid-drag.
///
/// The session holds only the identifier; it never owns or mutates tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    /// Creates an idle session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    /// Returns the dragged task, if any.
    #[must_use]
    pub const fn dragged(&self) -> Option<TaskId> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging(task_id) => Some(task_id),
        }
    }

    /// Starts dragging `task_id`. A second begin replaces the tracked task.
    pub const fn begin(&mut self, task_id: TaskId) {
        self.state = DragState::Dragging(task_id);
    }

    /// Returns to idle whether the drag dropped, failed or was abandoned.
    pub const fn end(&mut self) {
        self.state = DragState::Idle;
    }

    /// Pairs the dragged task with `stage`. The session stays dragging
    /// until [`DragSession::end`].
    ///
    /// # Errors
    ///
    /// Returns [`DragError::NotDragging`] when idle.
    pub const fn resolve_drop(&self, stage: Stage) -> Result<DropTarget, DragError> {
        match self.state {
            DragState::Idle => Err(DragError::NotDragging),
            DragState::Dragging(task_id) => Ok(DropTarget { task_id, stage }),
        }
    }
}
