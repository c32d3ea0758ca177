//! Read-side projection of the board.
//!
//! Everything here is a pure function of the task collection; the view keeps
//! no state of its own and is rebuilt in full after every change.

mod markup;
mod projector;

pub use markup::{RenderError, escape_html, render_board};
pub use projector::{BoardView, CardView, ColumnView, StageCounts, header_date_label, project};
