//! Given steps for task rewards BDD scenarios.

use super::world::{RewardsWorld, participant};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use task_rewards::task::services::CreateTaskRequest;

#[given("a fresh task ledger")]
fn fresh_ledger(world: &mut RewardsWorld) {
    *world = RewardsWorld::new();
}

#[given(r#"participant "{name}" has a profile"#)]
fn participant_has_profile(world: &mut RewardsWorld, name: String) -> Result<(), eyre::Report> {
    let owner = participant(&name)?;
    let profile = world
        .ledger
        .create_profile(&owner)
        .wrap_err("create profile for scenario participant")?;
    world.profiles.insert(name, profile.id());
    Ok(())
}

#[given(r#""{creator}" created a task "{title}" worth {points:u64} points"#)]
fn created_task(
    world: &mut RewardsWorld,
    creator: String,
    title: String,
    points: u64,
) -> Result<(), eyre::Report> {
    let task = world
        .ledger
        .create_task(&participant(&creator)?, CreateTaskRequest::new(title, points))
        .wrap_err("create scenario task")?;
    world.current_task = Some(task.id());
    Ok(())
}

#[given(r#""{creator}" assigned the task to "{assignee}""#)]
fn assigned_task(
    world: &mut RewardsWorld,
    creator: String,
    assignee: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    world
        .ledger
        .assign_task(&participant(&creator)?, task_id, participant(&assignee)?)
        .wrap_err("assign scenario task")?;
    Ok(())
}
