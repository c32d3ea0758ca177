//! The board command surface.
//!
//! Every mutating command follows the same path: store mutation, then a
//! snapshot write, then an outcome telling the caller to re-render. No-ops
//! stop before the write.

use std::sync::Arc;

use mockable::Clock;
use tracing::warn;

use super::{
    CommandOutcome, DragSession, DragState, MoveOutcome, Notice, RemoveOutcome,
    SnapshotPersistence, TaskStore,
};
use crate::board::domain::{BoardDomainError, Direction, Stage, TaskId};
use crate::board::ports::KeyValueStorage;
use crate::board::view::{BoardView, RenderError, render_board};

/// Owns the task store, the drag session and the persistence adapter for
/// one board.
pub struct Board<S, C>
where
    S: KeyValueStorage,
    C: Clock,
{
    persistence: SnapshotPersistence<S>,
    store: TaskStore,
    drag: DragSession,
    clock: Arc<C>,
}

impl<S, C> Board<S, C>
where
    S: KeyValueStorage,
    C: Clock,
{
    /// Opens the board stored under `key`.
    ///
    /// When the seed stands in for missing or unusable data it is written
    /// back immediately, so the next session starts from the same board.
    #[must_use]
    pub fn open(storage: Arc<S>, clock: Arc<C>, key: impl Into<String>) -> Self {
        let persistence = SnapshotPersistence::new(storage, key);
        let loaded = persistence.load_or_seed();
        if loaded.origin.is_seed() {
            persistence.save(&loaded.snapshot);
        }
        Self {
            persistence,
            store: TaskStore::from_snapshot(loaded.snapshot),
            drag: DragSession::new(),
            clock,
        }
    }

    /// Returns the task store.
    #[must_use]
    pub const fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Returns the persistence adapter.
    #[must_use]
    pub const fn persistence(&self) -> &SnapshotPersistence<S> {
        &self.persistence
    }

    /// Returns the drag session state.
    #[must_use]
    pub const fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    /// Adds a task from form input.
    pub fn add_task(&mut self, title: &str, description: &str) -> CommandOutcome {
        match self.store.add(title, description, &*self.clock) {
            Ok(_) => self.commit(Notice::TaskAdded),
            Err(BoardDomainError::EmptyTitle) => CommandOutcome::Rejected(Notice::TitleRequired),
            Err(
                err @ (BoardDomainError::IdsExhausted
                | BoardDomainError::InvalidTaskId(_)
                | BoardDomainError::InvalidDirection(_)),
            ) => {
                warn!(error = %err, "task not added");
                CommandOutcome::Rejected(Notice::AddFailed)
            }
        }
    }

    /// Moves a task one stage left or right.
    pub fn move_task(&mut self, id: TaskId, direction: Direction) -> CommandOutcome {
        let outcome = self.store.move_by(id, direction);
        self.commit_move(outcome)
    }

    /// Moves a task onto `stage`, as a drop does.
    pub fn drop_task(&mut self, id: TaskId, stage: Stage) -> CommandOutcome {
        let outcome = self.store.move_to(id, stage);
        self.commit_move(outcome)
    }

    /// Deletes a task.
    pub fn delete_task(&mut self, id: TaskId) -> CommandOutcome {
        match self.store.remove(id) {
            RemoveOutcome::Removed(_) => self.commit(Notice::Deleted),
            RemoveOutcome::Absent => CommandOutcome::Unchanged,
        }
    }

    /// Clears the board. Confirmation is the caller's job.
    pub fn clear_all(&mut self) -> CommandOutcome {
        if self.store.clear_all() == 0 {
            return CommandOutcome::Unchanged;
        }
        self.commit(Notice::Cleared)
    }

    /// Starts dragging a card.
    pub const fn begin_drag(&mut self, id: TaskId) {
        self.drag.begin(id);
    }

    /// Drops the dragged card onto `stage`.
    ///
    /// A drop with no drag in progress is ignored. The session keeps
    /// dragging until [`Board::end_drag`].
    pub fn drop_dragged(&mut self, stage: Stage) -> CommandOutcome {
        match self.drag.resolve_drop(stage) {
            Ok(target) => self.drop_task(target.task_id, target.stage),
            Err(_) => CommandOutcome::Unchanged,
        }
    }

    /// Ends the drag, however it finished.
    pub const fn end_drag(&mut self) {
        self.drag.end();
    }

    /// Projects the current state for rendering.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView::build(self.store.tasks(), &*self.clock)
    }

    /// Renders the current state as HTML.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the template fails to render.
    pub fn render_html(&self) -> Result<String, RenderError> {
        render_board(&self.view())
    }

    fn commit_move(&self, outcome: MoveOutcome) -> CommandOutcome {
        match outcome {
            MoveOutcome::Moved(stage) => self.commit(Notice::Moved(stage)),
            MoveOutcome::Unchanged => CommandOutcome::Unchanged,
        }
    }

    fn commit(&self, notice: Notice) -> CommandOutcome {
        self.persistence.save(&self.store.snapshot());
        CommandOutcome::Changed(notice)
    }
}
