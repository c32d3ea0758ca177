//! Per-stage projection of the task collection.

use chrono::{DateTime, Local};
use mockable::Clock;
use serde::Serialize;

use super::escape_html;
use crate::board::domain::{Stage, Task};

/// `chrono` format of the board header date, upper-cased after formatting.
const HEADER_DATE_FORMAT: &str = "%a, %b %-d, %Y";

/// Formats the board header date for `moment`, e.g. `MON, OCT 19, 2026`.
#[must_use]
pub fn header_date_label(moment: &DateTime<Local>) -> String {
    moment.format(HEADER_DATE_FORMAT).to_string().to_uppercase()
}

/// Tasks in `stage`, in source order.
///
/// The sequence is lazy and can be restarted by cloning it.
pub fn project(tasks: &[Task], stage: Stage) -> impl Iterator<Item = &Task> + Clone {
    tasks.iter().filter(move |task| task.stage() == stage)
}

/// Number of tasks in each stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageCounts {
    counts: [usize; 3],
}

impl StageCounts {
    /// Counts the tasks in every stage.
    #[must_use]
    pub fn tally(tasks: &[Task]) -> Self {
        let mut counts = [0_usize; 3];
        for task in tasks {
            if let Some(slot) = counts.get_mut(task.stage().index()) {
                *slot += 1;
            }
        }
        Self { counts }
    }

    /// Returns the count for `stage`.
    #[must_use]
    pub fn of(&self, stage: Stage) -> usize {
        self.counts.get(stage.index()).copied().unwrap_or_default()
    }

    /// Returns the count across all stages.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// A rendered card. All text fields are already HTML-escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    /// Raw task identifier, bound to card controls.
    pub id: u64,
    /// Zero-padded number, e.g. `#04`.
    pub number_label: String,
    /// Escaped title.
    pub title: String,
    /// Escaped description; `None` when the task has none.
    pub description: Option<String>,
    /// Escaped creation-date label.
    pub date: String,
    /// Whether the move-left control is enabled.
    pub can_move_left: bool,
    /// Whether the move-right control is enabled.
    pub can_move_right: bool,
}

impl CardView {
    fn from_task(task: &Task) -> Self {
        let stage = task.stage();
        let description = task.description();
        Self {
            id: task.id().value(),
            number_label: format!("#{}", pad(task.id().value())),
            title: escape_html(task.title().as_str()),
            description: (!description.is_empty()).then(|| escape_html(description)),
            date: escape_html(task.date_label()),
            can_move_left: !stage.is_first(),
            can_move_right: !stage.is_last(),
        }
    }
}

/// One board column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView {
    /// Stage shown in the column.
    pub stage: Stage,
    /// Column heading.
    pub label: &'static str,
    /// Number of cards.
    pub count: usize,
    /// Zero-padded count, e.g. `03`.
    pub count_label: String,
    /// Cards in source order.
    pub cards: Vec<CardView>,
}

/// The whole board as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    /// Columns in board order.
    pub columns: Vec<ColumnView>,
    /// Total number of tasks.
    pub total: usize,
    /// `1 task` or `N tasks`.
    pub stat_label: String,
    /// Upper-cased current date, e.g. `MON, OCT 19, 2026`.
    pub header_date: String,
}

impl BoardView {
    /// Projects `tasks` into columns, dating the header with `clock`.
    #[must_use]
    pub fn build(tasks: &[Task], clock: &impl Clock) -> Self {
        let counts = StageCounts::tally(tasks);
        let columns = Stage::ALL
            .into_iter()
            .map(|stage| ColumnView {
                stage,
                label: stage.label(),
                count: counts.of(stage),
                count_label: pad(counts.of(stage)),
                cards: project(tasks, stage).map(CardView::from_task).collect(),
            })
            .collect();
        let total = counts.total();
        Self {
            columns,
            total,
            stat_label: stat_label(total),
            header_date: header_date_label(&clock.local()),
        }
    }

    /// Returns the column for `stage`.
    #[must_use]
    pub fn column(&self, stage: Stage) -> Option<&ColumnView> {
        self.columns.iter().find(|column| column.stage == stage)
    }
}

fn pad(value: impl std::fmt::Display) -> String {
    format!("{value:0>2}")
}

fn stat_label(total: usize) -> String {
    if total == 1 {
        "1 task".to_owned()
    } else {
        format!("{total} tasks")
    }
}
