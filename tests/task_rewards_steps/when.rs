//! When steps for task rewards BDD scenarios.

use super::world::{RewardsWorld, participant};
use rstest_bdd_macros::when;
use task_rewards::task::services::CreateTaskRequest;

#[when(r#""{name}" completes the task"#)]
fn complete_task(world: &mut RewardsWorld, name: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    let profile_id = world.profile_id(&name);
    let result = world
        .ledger
        .complete_task(&participant(&name)?, task_id, profile_id);
    world.last_result = Some(result.map(|_| ()));
    Ok(())
}

#[when(r#"the administrator reassigns the task to "{assignee}""#)]
fn admin_reassigns(world: &mut RewardsWorld, assignee: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    let result = world
        .ledger
        .admin_reassign_task(&world.cap, task_id, participant(&assignee)?);
    world.last_result = Some(result.map(|_| ()));
    Ok(())
}

#[when(r#""{creator}" tries to create an untitled task worth {points:u64} points"#)]
fn try_create_untitled_task(
    world: &mut RewardsWorld,
    creator: String,
    points: u64,
) -> Result<(), eyre::Report> {
    let result = world
        .ledger
        .create_task(&participant(&creator)?, CreateTaskRequest::new("", points));
    if let Ok(task) = &result {
        world.current_task = Some(task.id());
    }
    world.last_result = Some(result.map(|_| ()));
    Ok(())
}

#[when(r#""{name}" completes the task crediting the profile of "{owner}""#)]
fn complete_task_for_other_profile(
    world: &mut RewardsWorld,
    name: String,
    owner: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    let profile_id = world.profile_id(&owner);
    let result = world
        .ledger
        .complete_task(&participant(&name)?, task_id, profile_id);
    world.last_result = Some(result.map(|_| ()));
    Ok(())
}
