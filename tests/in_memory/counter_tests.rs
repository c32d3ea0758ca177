//! Identifier counter behaviour across sessions.

use super::helpers::{open_board, task_id};
use placard::board::adapters::memory::InMemoryStorage;
use rstest::rstest;

#[rstest]
fn ids_keep_increasing_after_deletes_and_reopen() -> Result<(), eyre::Report> {
    let storage = InMemoryStorage::new();
    let mut board = open_board(&storage);

    board.add_task("Ten", "");
    board.add_task("Eleven", "");
    board.delete_task(task_id(11)?);

    let mut reopened = open_board(&storage);
    reopened.add_task("Twelve", "");

    let ids: Vec<u64> = reopened
        .store()
        .tasks()
        .iter()
        .map(|task| task.id().value())
        .collect();
    eyre::ensure!(ids == vec![1, 2, 3, 4, 5, 10, 12], "unexpected ids {ids:?}");
    Ok(())
}

#[rstest]
fn clear_restarts_numbering_at_one() -> Result<(), eyre::Report> {
    let storage = InMemoryStorage::new();
    let mut board = open_board(&storage);

    board.clear_all();
    let mut reopened = open_board(&storage);
    reopened.add_task("First again", "");

    eyre::ensure!(
        reopened.store().get(task_id(1)?).is_some(),
        "numbering should restart at 1"
    );
    eyre::ensure!(reopened.store().len() == 1, "cleared board should not reseed");
    Ok(())
}
