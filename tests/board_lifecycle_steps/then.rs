//! Then steps for board BDD scenarios.

use super::world::{BoardWorld, run_async, titles};
use rstest_bdd_macros::then;
use teamboard::board::{domain::BoardDomainError, services::BoardServiceError};

#[then(r#""{name}" has tasks in order "{list}""#)]
fn tasks_in_order(world: &BoardWorld, name: String, list: String) -> Result<(), eyre::Report> {
    let actual: Vec<String> = world
        .active_tasks(&name)?
        .iter()
        .map(|task| task.title().to_owned())
        .collect();
    let expected = titles(&list);
    if actual != expected {
        return Err(eyre::eyre!("expected order {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the priorities of "{name}" are dense"#)]
fn priorities_are_dense(world: &BoardWorld, name: String) -> Result<(), eyre::Report> {
    let tasks = world.active_tasks(&name)?;
    for (position, task) in (0_u32..).zip(&tasks) {
        if task.priority() != position {
            return Err(eyre::eyre!(
                "task {} has priority {}, expected {position}",
                task.title(),
                task.priority()
            ));
        }
    }
    Ok(())
}

#[then(r#"task "{title}" has priority {priority:u32}"#)]
fn task_has_priority(world: &BoardWorld, title: String, priority: u32) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let document = run_async(world.service.document())?;
    let task = document.active_task(&task_id)?;
    if task.priority() != priority {
        return Err(eyre::eyre!(
            "expected priority {priority}, found {}",
            task.priority()
        ));
    }
    Ok(())
}

#[then(r#"task "{title}" is in the completed history of "{name}""#)]
fn task_in_history(world: &BoardWorld, title: String, name: String) -> Result<(), eyre::Report> {
    let member_id = world.member_id(&name)?;
    let history = run_async(world.service.completed_tasks_for_member(&member_id))?;
    let found = history.iter().any(|task| task.title() == title && task.completed_at().is_some());
    if !found {
        return Err(eyre::eyre!("task {title} missing from completed history"));
    }
    Ok(())
}

#[then(r#""{name}" has {count:usize} completed tasks"#)]
fn completed_count(world: &BoardWorld, name: String, count: usize) -> Result<(), eyre::Report> {
    let member_id = world.member_id(&name)?;
    let history = run_async(world.service.completed_tasks_for_member(&member_id))?;
    if history.len() != count {
        return Err(eyre::eyre!(
            "expected {count} completed tasks, found {}",
            history.len()
        ));
    }
    Ok(())
}

#[then(r#"{count:usize} completed tasks were cleared"#)]
fn cleared_count(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    if world.cleared != Some(count) {
        return Err(eyre::eyre!(
            "expected {count} cleared tasks, found {:?}",
            world.cleared
        ));
    }
    Ok(())
}

#[then("the request fails with a validation error")]
fn request_fails_with_validation_error(world: &BoardWorld) -> Result<(), eyre::Report> {
    if !matches!(
        world.last_error,
        Some(BoardServiceError::Domain(BoardDomainError::EmptyTaskTitle))
    ) {
        return Err(eyre::eyre!(
            "expected EmptyTaskTitle error, got {:?}",
            world.last_error
        ));
    }
    Ok(())
}

#[then(r#""{name}" has no active tasks"#)]
fn no_active_tasks(world: &BoardWorld, name: String) -> Result<(), eyre::Report> {
    let tasks = world.active_tasks(&name)?;
    if !tasks.is_empty() {
        return Err(eyre::eyre!("expected no active tasks, found {}", tasks.len()));
    }
    Ok(())
}

#[then(r#"no task on the board belongs to "{name}""#)]
fn no_task_belongs_to(world: &BoardWorld, name: String) -> Result<(), eyre::Report> {
    let member_id = world.member_id(&name)?;
    let document = run_async(world.service.document())?;
    let orphaned = document
        .tasks()
        .iter()
        .chain(document.completed_tasks())
        .any(|task| task.assigned_to() == &member_id);
    if orphaned {
        return Err(eyre::eyre!("tasks of deleted member {name} remain"));
    }
    if document.member(&member_id).is_ok() {
        return Err(eyre::eyre!("member {name} still on the board"));
    }
    Ok(())
}
