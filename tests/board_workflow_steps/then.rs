//! Then steps for board workflow BDD scenarios.

use super::world::{BoardWorld, KEY, task_id};
use placard::board::{
    domain::Stage,
    ports::KeyValueStorage,
    services::{CommandOutcome, DragState, record},
};
use rstest_bdd_macros::then;

#[then(r#"the last command reports "{message}""#)]
fn last_command_reports(world: &BoardWorld, message: String) -> Result<(), eyre::Report> {
    let outcome = world
        .last_outcome
        .ok_or_else(|| eyre::eyre!("missing command outcome"))?;
    let notice = outcome
        .notice()
        .ok_or_else(|| eyre::eyre!("expected a notice, command changed nothing"))?;
    if notice.to_string() != message {
        return Err(eyre::eyre!("expected notice {message:?}, found {notice:?}"));
    }
    Ok(())
}

#[then("the last command changed nothing")]
fn last_command_changed_nothing(world: &BoardWorld) -> Result<(), eyre::Report> {
    let outcome = world
        .last_outcome
        .ok_or_else(|| eyre::eyre!("missing command outcome"))?;
    if outcome != CommandOutcome::Unchanged {
        return Err(eyre::eyre!("expected no-op, got {outcome:?}"));
    }
    Ok(())
}

#[then(r#"task {id:u64} is in stage "{stage}""#)]
fn task_is_in_stage(world: &BoardWorld, id: u64, stage: String) -> Result<(), eyre::Report> {
    let expected = Stage::try_from(stage.as_str())
        .map_err(|err| eyre::eyre!("invalid stage in scenario: {err}"))?;
    let task = world
        .board()?
        .store()
        .get(task_id(id)?)
        .ok_or_else(|| eyre::eyre!("task {id} not found"))?;
    if task.stage() != expected {
        return Err(eyre::eyre!(
            "expected stage {}, found {}",
            expected.as_str(),
            task.stage().as_str()
        ));
    }
    Ok(())
}

#[then("the board holds {count:usize} tasks")]
fn board_holds(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.board()?.store().len();
    if actual != count {
        return Err(eyre::eyre!("expected {count} tasks, found {actual}"));
    }
    Ok(())
}

#[then("the next identifier is {id:u64}")]
fn next_identifier_is(world: &BoardWorld, id: u64) -> Result<(), eyre::Report> {
    let actual = world.board()?.store().next_id().value();
    if actual != id {
        return Err(eyre::eyre!("expected next identifier {id}, found {actual}"));
    }
    Ok(())
}

#[then("the drag session is idle")]
fn drag_session_is_idle(world: &BoardWorld) -> Result<(), eyre::Report> {
    let state = world.board()?.drag_state();
    if state != DragState::Idle {
        return Err(eyre::eyre!("expected idle drag session, found {state:?}"));
    }
    Ok(())
}

#[then("the stored board matches the board")]
fn stored_board_matches(world: &BoardWorld) -> Result<(), eyre::Report> {
    let raw = world
        .storage
        .read(KEY)?
        .ok_or_else(|| eyre::eyre!("nothing stored"))?;
    let (stored, _) = record::decode(&raw)?;
    if stored != world.board()?.store().snapshot() {
        return Err(eyre::eyre!("stored board diverged from in-memory board"));
    }
    Ok(())
}
