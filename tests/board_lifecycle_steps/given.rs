//! Given steps for board BDD scenarios.

use super::world::{BoardWorld, run_async, titles};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use teamboard::board::domain::NewTask;

#[given(r#"a team member "{name}""#)]
fn team_member(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    let member = run_async(world.service.add_team_member(&name, None))
        .wrap_err("add team member for scenario")?;
    world.members.insert(name, member.id().clone());
    Ok(())
}

#[given(r#""{name}" is assigned tasks "{list}""#)]
fn assigned_tasks(world: &mut BoardWorld, name: String, list: String) -> Result<(), eyre::Report> {
    let member_id = world.member_id(&name)?;
    for title in titles(&list) {
        let task = run_async(
            world
                .service
                .add_task(NewTask::new(title.clone(), 3.0, member_id.as_str())),
        )
        .wrap_err("add task for scenario")?;
        world.tasks.insert(title, task.id().clone());
    }
    Ok(())
}

#[given(r#"task "{title}" has been completed"#)]
fn task_has_been_completed(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    run_async(world.service.complete_task(&task_id)).wrap_err("complete task for scenario")?;
    Ok(())
}
