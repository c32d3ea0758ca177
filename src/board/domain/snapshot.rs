//! Complete board state as persisted between sessions.

use super::{PersistedTaskData, Stage, Task, TaskId, TaskTitle};

/// Counter value paired with the seed tasks.
const SEED_NEXT_ID: u64 = 10;

/// Seed rows: identifier, title, description, stage, date label.
const SEED_ROWS: [(u64, &str, &str, Stage, &str); 5] = [
    (1, "Build Api", "Setup Node.js and Express for the backend", Stage::Todo, "Feb 20"),
    (2, "Register Page", "Create register page with React", Stage::Todo, "Feb 21"),
    (3, "Integrate Login", "Connect Login APIs to the frontend", Stage::Todo, "Feb 22"),
    (4, "Login Page", "Create Login page with React", Stage::Progress, "Feb 23"),
    (5, "Initiate Project", "Setup the environment for the MERN project", Stage::Done, "Feb 18"),
];

/// The task collection together with the identifier counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl Snapshot {
    /// Creates a snapshot, raising `next_id` above every task identifier so
    /// the counter never hands out an identifier already in use.
    ///
    /// Tasks must carry identifiers below `u64::MAX`; the record decoder
    /// drops any that do not.
    #[must_use]
    pub fn new(tasks: Vec<Task>, next_id: TaskId) -> Self {
        let floor = tasks
            .iter()
            .filter_map(|task| task.id().successor())
            .max()
            .unwrap_or(TaskId::FIRST);
        Self {
            tasks,
            next_id: next_id.max(floor),
        }
    }

    /// Returns an empty snapshot whose counter starts at 1.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: TaskId::FIRST,
        }
    }

    /// Returns the fixed five-task example board used when nothing usable
    /// is stored.
    #[must_use]
    pub fn seed() -> Self {
        let tasks = SEED_ROWS
            .iter()
            .filter_map(|&(id, title, description, stage, date_label)| {
                Some(Task::from_persisted(PersistedTaskData {
                    id: TaskId::new(id).ok()?,
                    title: TaskTitle::new(title).ok()?,
                    description: description.to_owned(),
                    stage,
                    date_label: date_label.to_owned(),
                }))
            })
            .collect();
        let next_id = TaskId::new(SEED_NEXT_ID).unwrap_or(TaskId::FIRST);
        Self::new(tasks, next_id)
    }

    /// Returns the tasks in source order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the next identifier to assign.
    #[must_use]
    pub const fn next_id(&self) -> TaskId {
        self.next_id
    }

    /// Splits the snapshot into its collection and counter.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Task>, TaskId) {
        (self.tasks, self.next_id)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}
