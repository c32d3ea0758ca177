//! Given steps for board workflow BDD scenarios.

use super::world::{BoardWorld, KEY};
use rstest_bdd_macros::given;

#[given("a board opened on empty storage")]
fn board_on_empty_storage(world: &mut BoardWorld) {
    world.open_board();
}

#[given("a board opened on corrupt storage")]
fn board_on_corrupt_storage(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world
        .storage
        .insert_raw(KEY, r#"{"tasks": 5, "nextId": 2}"#)?;
    world.open_board();
    Ok(())
}
