//! When steps for board BDD scenarios.

use super::world::{BoardWorld, run_async};
use rstest_bdd_macros::when;
use teamboard::board::domain::NewTask;

#[when(r#"task "{title}" is moved to position {index:u32} for "{name}""#)]
fn move_task(
    world: &mut BoardWorld,
    title: String,
    index: u32,
    name: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let member_id = world.member_id(&name)?;
    run_async(world.service.reorder_task(&task_id, &member_id, index))?;
    Ok(())
}

#[when(r#"task "{title}" is completed"#)]
fn complete_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    run_async(world.service.complete_task(&task_id))?;
    Ok(())
}

#[when(r#"task "{title}" is restored"#)]
fn restore_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    run_async(world.service.restore_task(&task_id))?;
    Ok(())
}

#[when(r#"a task with a blank title is added for "{name}""#)]
fn add_blank_task(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    let member_id = world.member_id(&name)?;
    let result = run_async(
        world
            .service
            .add_task(NewTask::new("", 5.0, member_id.as_str())),
    );
    world.last_error = result.err();
    Ok(())
}

#[when(r#"the completed history of "{name}" is cleared"#)]
fn clear_history(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    let member_id = world.member_id(&name)?;
    let removed = run_async(world.service.clear_completed_tasks_for_member(&member_id))?;
    world.cleared = Some(removed);
    Ok(())
}

#[when(r#"team member "{name}" is deleted"#)]
fn delete_member(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    let member_id = world.member_id(&name)?;
    run_async(world.service.delete_team_member(&member_id))?;
    Ok(())
}
