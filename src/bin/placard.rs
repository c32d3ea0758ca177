//! Command-line front end for a placard board.
//!
//! Usage:
//!
//! ```text
//! placard [--data-dir <dir>] [--key <key>] <command>
//! ```
//!
//! Commands mirror the board controls: `show`, `add`, `move`, `drop`,
//! `delete` and `clear`. Each successful change prints its notice; a command
//! that changes nothing prints nothing. `clear` refuses to run without
//! `--yes`, standing in for the confirmation dialog.

use std::io::{self, Write};
use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use mockable::{Clock, DefaultClock};
use placard::board::{
    adapters::dir::DirStorage,
    domain::{Direction, Stage, TaskId},
    ports::KeyValueStorage,
    services::{Board, CommandOutcome},
    view::{StageCounts, project},
};
use placard::config::BoardConfig;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "PLACARD_LOG";

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Parser)]
#[command(name = "placard", version, about = "Three-stage task board")]
struct Cli {
    /// Directory holding the board snapshot.
    #[arg(long, global = true)]
    data_dir: Option<Utf8PathBuf>,

    /// Storage key of the board snapshot.
    #[arg(long, global = true)]
    key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the board.
    Show {
        /// Print HTML markup instead of plain text.
        #[arg(long)]
        html: bool,
    },
    /// Post a new task to To Do.
    Add {
        /// Task title.
        title: String,
        /// Optional description.
        #[arg(long, default_value = "")]
        desc: String,
    },
    /// Move a task one stage left or right.
    Move {
        /// Task identifier.
        id: u64,
        /// Direction to move in.
        direction: MoveArg,
    },
    /// Drop a task onto a stage.
    Drop {
        /// Task identifier.
        id: u64,
        /// Destination stage.
        stage: StageArg,
    },
    /// Delete a task.
    Delete {
        /// Task identifier.
        id: u64,
    },
    /// Remove every task and reset numbering.
    Clear {
        /// Confirm that the board should be cleared.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MoveArg {
    Left,
    Right,
}

impl From<MoveArg> for Direction {
    fn from(value: MoveArg) -> Self {
        match value {
            MoveArg::Left => Self::Left,
            MoveArg::Right => Self::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StageArg {
    Todo,
    Progress,
    Done,
}

impl From<StageArg> for Stage {
    fn from(value: StageArg) -> Self {
        match value {
            StageArg::Todo => Self::Todo,
            StageArg::Progress => Self::Progress,
            StageArg::Done => Self::Done,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("refusing to clear the board without --yes")]
    ClearNotConfirmed,
}

fn main() -> Result<(), BoxError> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = BoardConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config = config.with_data_dir(data_dir);
    }
    if let Some(key) = cli.key {
        config = config.with_storage_key(key)?;
    }

    let storage = Arc::new(DirStorage::open(config.data_dir())?);
    let mut board = Board::open(storage, Arc::new(DefaultClock), config.storage_key());
    let mut stdout = io::stdout().lock();

    let outcome = match cli.command {
        Command::Show { html } => {
            if html {
                writeln!(stdout, "{}", board.render_html()?)?;
            } else {
                write_plain(&mut stdout, &board)?;
            }
            return Ok(());
        }
        Command::Add { title, desc } => board.add_task(&title, &desc),
        Command::Move { id, direction } => board.move_task(TaskId::new(id)?, direction.into()),
        Command::Drop { id, stage } => {
            board.begin_drag(TaskId::new(id)?);
            let outcome = board.drop_dragged(stage.into());
            board.end_drag();
            outcome
        }
        Command::Delete { id } => board.delete_task(TaskId::new(id)?),
        Command::Clear { yes } => {
            if !yes {
                return Err(CliError::ClearNotConfirmed.into());
            }
            board.clear_all()
        }
    };

    report(&mut stdout, outcome)?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn report(out: &mut impl Write, outcome: CommandOutcome) -> io::Result<()> {
    outcome
        .notice()
        .map_or(Ok(()), |notice| writeln!(out, "{notice}"))
}

fn write_plain<S, C>(out: &mut impl Write, board: &Board<S, C>) -> io::Result<()>
where
    S: KeyValueStorage,
    C: Clock,
{
    let view = board.view();
    let tasks = board.store().tasks();
    let counts = StageCounts::tally(tasks);
    writeln!(out, "{}  ·  {}", view.header_date, view.stat_label)?;
    for stage in Stage::ALL {
        writeln!(out)?;
        writeln!(out, "{} ({:02})", stage.label(), counts.of(stage))?;
        if counts.of(stage) == 0 {
            writeln!(out, "  — no items —")?;
        }
        for task in project(tasks, stage) {
            writeln!(out, "  #{:02} {} [{}]", task.id().value(), task.title(), task.date_label())?;
            if !task.description().is_empty() {
                writeln!(out, "      {}", task.description())?;
            }
        }
    }
    Ok(())
}
