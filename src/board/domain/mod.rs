//! Domain model for the task board.
//!
//! Holds the typed identifiers, the closed stage enumeration and the task
//! and snapshot values. Nothing here touches storage or markup.

mod error;
mod ids;
mod snapshot;
mod stage;
mod task;

pub use error::{BoardDomainError, ParseStageError};
pub use ids::TaskId;
pub use snapshot::Snapshot;
pub use stage::{Direction, Stage};
pub use task::{PersistedTaskData, Task, TaskTitle, date_label};
