//! Application services for the task board.

mod board;
mod drag;
mod outcome;
mod persistence;
pub mod record;
mod store;

pub use board::Board;
pub use drag::{DragError, DragSession, DragState, DropTarget};
pub use outcome::{CommandOutcome, Notice};
pub use persistence::{LoadedSnapshot, SnapshotOrigin, SnapshotPersistence};
pub use store::{MoveOutcome, RemoveOutcome, TaskStore};
