//! When steps for board workflow BDD scenarios.

use super::world::{BoardWorld, task_id};
use placard::board::domain::{Direction, Stage};
use rstest_bdd_macros::when;

#[when(r#"the user adds a task titled "{title}""#)]
fn add_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let outcome = world.board_mut()?.add_task(&title, "");
    world.last_outcome = Some(outcome);
    Ok(())
}

#[when("the user submits the add form with a blank title")]
fn add_blank_task(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let outcome = world.board_mut()?.add_task("   ", "ignored");
    world.last_outcome = Some(outcome);
    Ok(())
}

#[when("the user moves task {id:u64} {direction}")]
fn move_task(world: &mut BoardWorld, id: u64, direction: String) -> Result<(), eyre::Report> {
    let parsed = match direction.as_str() {
        "left" => Direction::Left,
        "right" => Direction::Right,
        other => return Err(eyre::eyre!("unknown direction in scenario: {other}")),
    };
    let task = task_id(id)?;
    let outcome = world.board_mut()?.move_task(task, parsed);
    world.last_outcome = Some(outcome);
    Ok(())
}

#[when(r#"the user drags task {id:u64} onto "{stage}""#)]
fn drag_task(world: &mut BoardWorld, id: u64, stage: String) -> Result<(), eyre::Report> {
    let target = Stage::try_from(stage.as_str())
        .map_err(|err| eyre::eyre!("invalid stage in scenario: {err}"))?;
    let task = task_id(id)?;
    let board = world.board_mut()?;
    board.begin_drag(task);
    let outcome = board.drop_dragged(target);
    board.end_drag();
    world.last_outcome = Some(outcome);
    Ok(())
}

#[when("the user clears the board")]
fn clear_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let outcome = world.board_mut()?.clear_all();
    world.last_outcome = Some(outcome);
    Ok(())
}
