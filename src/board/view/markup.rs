//! HTML markup for the board.
//!
//! Card controls carry the task identifier as `data-task-id` and the action
//! as `data-action`; listeners are attached by the host page, never through
//! inline handler strings.

use minijinja::{AutoEscape, Environment, HtmlEscape};
use thiserror::Error;

use super::BoardView;

const BOARD_TEMPLATE_NAME: &str = "board.html";
const EMPTY_HINT: &str = "— no items —";

const BOARD_TEMPLATE: &str = r#"<header class="board-head"><span id="live-date">{{ board.header_date }}</span><span id="stat">{{ board.stat_label }}</span></header>
<main class="board">
{%- for column in board.columns %}
<section class="column" data-stage="{{ column.stage }}">
<h2 class="column-title">{{ column.label }} <span class="count" id="cnt-{{ column.stage }}">{{ column.count_label }}</span></h2>
<div class="zone" id="zone-{{ column.stage }}">
{%- if not column.cards %}
<div class="empty-hint">{{ empty_hint }}</div>
{%- endif %}
{%- for card in column.cards %}
<article class="card" draggable="true" data-task-id="{{ card.id }}">
<span class="card-number mono">{{ card.number_label }}</span>
<div class="card-title">{{ card.title }}</div>
{%- if card.description %}
<div class="card-desc">{{ card.description }}</div>
{%- endif %}
<div class="card-foot"><span class="card-date">{{ card.date }}</span>
<button class="btn-arrow" title="Move left" data-action="move-left" data-task-id="{{ card.id }}"{% if not card.can_move_left %} disabled{% endif %}>←</button>
<button class="btn-arrow" title="Move right" data-action="move-right" data-task-id="{{ card.id }}"{% if not card.can_move_right %} disabled{% endif %}>→</button>
<button class="btn-del" title="Delete task" data-action="delete" data-task-id="{{ card.id }}">✕</button>
</div>
</article>
{%- endfor %}
</div>
</section>
{%- endfor %}
</main>
"#;

/// Errors returned while rendering board markup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The template engine rejected the board.
    #[error("failed to render board markup: {0}")]
    Template(String),
}

/// Replaces HTML-significant characters (`& < > " ' /`) with entities.
#[must_use]
pub fn escape_html(value: &str) -> String {
    HtmlEscape(value).to_string()
}

/// Renders the board as an HTML fragment.
///
/// Text fields of `view` are escaped during projection, so the template
/// engine's own escaping is switched off to avoid double-encoding.
///
/// # Errors
///
/// Returns [`RenderError::Template`] if the template fails to render.
pub fn render_board(view: &BoardView) -> Result<String, RenderError> {
    let mut environment = Environment::new();
    environment.set_auto_escape_callback(|_| AutoEscape::None);
    environment
        .add_template(BOARD_TEMPLATE_NAME, BOARD_TEMPLATE)
        .map_err(|err| RenderError::Template(err.to_string()))?;
    let template = environment
        .get_template(BOARD_TEMPLATE_NAME)
        .map_err(|err| RenderError::Template(err.to_string()))?;
    template
        .render(minijinja::context! { board => view, empty_hint => EMPTY_HINT })
        .map_err(|err| RenderError::Template(err.to_string()))
}
