//! Command sequences exercised through the public board API.

use super::helpers::{KEY, open_board, task_id};
use placard::board::adapters::memory::InMemoryStorage;
use placard::board::domain::{Direction, Stage};
use placard::board::ports::KeyValueStorage;
use placard::board::services::{CommandOutcome, Notice};
use rstest::{fixture, rstest};

#[fixture]
fn storage() -> InMemoryStorage {
    InMemoryStorage::new()
}

#[rstest]
fn seeded_board_walkthrough(storage: InMemoryStorage) -> Result<(), eyre::Report> {
    let mut board = open_board(&storage);
    eyre::ensure!(board.store().len() == 5, "seed should hold five tasks");

    let added = board.add_task("Write tests", "");
    eyre::ensure!(
        added == CommandOutcome::Changed(Notice::TaskAdded),
        "unexpected add outcome {added:?}"
    );
    let new_id = task_id(10)?;
    let task = board
        .store()
        .get(new_id)
        .ok_or_else(|| eyre::eyre!("task 10 should exist"))?;
    eyre::ensure!(task.stage() == Stage::Todo, "new tasks start in To Do");

    let moved = board.move_task(new_id, Direction::Right);
    eyre::ensure!(
        moved == CommandOutcome::Changed(Notice::Moved(Stage::Progress)),
        "unexpected move outcome {moved:?}"
    );

    let repeated = board.drop_task(new_id, Stage::Progress);
    eyre::ensure!(repeated == CommandOutcome::Unchanged, "drop in place must be a no-op");

    board.delete_task(new_id);
    eyre::ensure!(board.store().len() == 5, "delete should restore the seed size");

    let cleared = board.clear_all();
    eyre::ensure!(cleared == CommandOutcome::Changed(Notice::Cleared), "clear should report");
    eyre::ensure!(board.store().is_empty(), "board should be empty");
    eyre::ensure!(board.store().next_id().value() == 1, "counter should reset");
    Ok(())
}

#[rstest]
fn reopened_board_sees_previous_session(storage: InMemoryStorage) -> Result<(), eyre::Report> {
    let mut first = open_board(&storage);
    first.add_task("Persist me", "across sessions");
    first.drop_task(task_id(10)?, Stage::Done);

    let second = open_board(&storage);
    let task = second
        .store()
        .get(task_id(10)?)
        .ok_or_else(|| eyre::eyre!("task should survive reopen"))?;

    eyre::ensure!(task.stage() == Stage::Done, "stage should persist");
    eyre::ensure!(task.description() == "across sessions", "description should persist");
    eyre::ensure!(second.store() == first.store(), "stores should match");
    Ok(())
}

#[rstest]
fn corrupt_record_is_replaced_by_seed(storage: InMemoryStorage) -> Result<(), eyre::Report> {
    storage.insert_raw(KEY, r#"{"tasks": "oops", "nextId": 4}"#)?;

    let board = open_board(&storage);

    eyre::ensure!(board.store().len() == 5, "seed should replace corrupt data");
    eyre::ensure!(board.store().next_id().value() == 10, "seed counter should be 10");
    let rewritten = storage
        .read(KEY)?
        .ok_or_else(|| eyre::eyre!("seed should be written back"))?;
    eyre::ensure!(rewritten.contains("\"nextId\":10"), "seed should be persisted");
    Ok(())
}

#[rstest]
fn interleaved_controls_stay_consistent(storage: InMemoryStorage) -> Result<(), eyre::Report> {
    let mut board = open_board(&storage);
    let id = task_id(1)?;

    board.begin_drag(id);
    board.move_task(id, Direction::Right);
    let dropped = board.drop_dragged(Stage::Progress);
    board.end_drag();

    eyre::ensure!(
        dropped == CommandOutcome::Unchanged,
        "button already moved the card, drop must be a no-op"
    );

    board.delete_task(id);
    board.begin_drag(id);
    let stale = board.drop_dragged(Stage::Done);
    board.end_drag();
    eyre::ensure!(stale == CommandOutcome::Unchanged, "dropping a deleted card is a no-op");

    let view = board.view();
    eyre::ensure!(view.total == board.store().len(), "view total should match store");
    Ok(())
}
