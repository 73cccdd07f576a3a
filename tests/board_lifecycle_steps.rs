//! Behaviour tests for board ordering and the task lifecycle.

#[path = "board_lifecycle_steps/mod.rs"]
mod board_lifecycle_steps_defs;

use board_lifecycle_steps_defs::world::{BoardWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/board_lifecycle.feature",
    name = "Move the last task to the top of a member's list"
)]
#[tokio::test(flavor = "multi_thread")]
async fn move_last_task_to_top(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_lifecycle.feature",
    name = "Move a task to another member"
)]
#[tokio::test(flavor = "multi_thread")]
async fn move_task_to_another_member(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_lifecycle.feature",
    name = "Complete a task from the middle of the list"
)]
#[tokio::test(flavor = "multi_thread")]
async fn complete_middle_task(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_lifecycle.feature",
    name = "Restore a completed task to the end of the list"
)]
#[tokio::test(flavor = "multi_thread")]
async fn restore_completed_task(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_lifecycle.feature",
    name = "Reject a task with a blank title"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reject_blank_title(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_lifecycle.feature",
    name = "Clear one member's completed history"
)]
#[tokio::test(flavor = "multi_thread")]
async fn clear_member_history(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_lifecycle.feature",
    name = "Deleting a member removes all of their tasks"
)]
#[tokio::test(flavor = "multi_thread")]
async fn delete_member_cascades(world: BoardWorld) {
    let _ = world;
}
