//! Then steps for task rewards BDD scenarios.

use super::world::{RewardsWorld, participant};
use rstest_bdd_macros::then;
use task_rewards::task::{domain::LedgerEvent, services::TaskLedgerError};

#[then(r#""{name}" has {points:u64} points, {completed:u64} completed tasks and level {level:u8}"#)]
fn profile_totals(
    world: &RewardsWorld,
    name: String,
    points: u64,
    completed: u64,
    level: u8,
) -> Result<(), eyre::Report> {
    let profile = world
        .ledger
        .find_profile_by_owner(&participant(&name)?)
        .map_err(|err| eyre::eyre!("profile lookup failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("expected {name} to have a profile"))?;

    eyre::ensure!(
        profile.total_points_earned() == points,
        "expected {points} points, found {}",
        profile.total_points_earned()
    );
    eyre::ensure!(
        profile.total_tasks_completed() == completed,
        "expected {completed} completed tasks, found {}",
        profile.total_tasks_completed()
    );
    eyre::ensure!(
        profile.level().value() == level,
        "expected level {level}, found {}",
        profile.level()
    );
    Ok(())
}

#[then("the board shows {created:u64} created and {completed:u64} completed tasks")]
fn board_totals(world: &RewardsWorld, created: u64, completed: u64) -> Result<(), eyre::Report> {
    let board = world
        .ledger
        .board()
        .map_err(|err| eyre::eyre!("board snapshot failed: {err}"))?;
    eyre::ensure!(
        board.total_tasks_created() == created,
        "expected {created} created tasks, found {}",
        board.total_tasks_created()
    );
    eyre::ensure!(
        board.total_tasks_completed() == completed,
        "expected {completed} completed tasks, found {}",
        board.total_tasks_completed()
    );
    Ok(())
}

#[then("{count:usize} level-up records were emitted")]
fn level_up_records(world: &RewardsWorld, count: usize) -> Result<(), eyre::Report> {
    let found = world
        .log
        .events()
        .iter()
        .filter(|event| matches!(event, LedgerEvent::UserLeveledUp { .. }))
        .count();
    eyre::ensure!(found == count, "expected {count} level-up records, found {found}");
    Ok(())
}

#[then("the last operation succeeds")]
fn last_operation_succeeds(world: &RewardsWorld) -> Result<(), eyre::Report> {
    match &world.last_result {
        Some(Ok(())) => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("expected success, got {err}")),
        None => Err(eyre::eyre!("no operation was recorded")),
    }
}

#[then(r#"the last operation fails with "{code}""#)]
fn last_operation_fails_with(world: &RewardsWorld, code: String) -> Result<(), eyre::Report> {
    match &world.last_result {
        Some(Err(TaskLedgerError::Domain(err))) if err.code() == code => Ok(()),
        other => Err(eyre::eyre!("expected {code} rejection, got {other:?}")),
    }
}

#[then(r#"the task is assigned to "{assignee}""#)]
fn task_assigned_to(world: &RewardsWorld, assignee: String) -> Result<(), eyre::Report> {
    let task = world
        .ledger
        .find_task(world.task_id()?)
        .map_err(|err| eyre::eyre!("task lookup failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("scenario task is missing"))?;
    let expected = participant(&assignee)?;
    eyre::ensure!(
        task.assignee() == Some(&expected),
        "expected assignee {expected}, found {:?}",
        task.assignee()
    );
    Ok(())
}

#[then(r#"the last operation is rejected because "{name}" does not own the profile"#)]
fn last_operation_rejected_for_ownership(
    world: &RewardsWorld,
    name: String,
) -> Result<(), eyre::Report> {
    let expected = participant(&name)?;
    match &world.last_result {
        Some(Err(TaskLedgerError::NotProfileOwner { caller, .. })) if *caller == expected => Ok(()),
        other => Err(eyre::eyre!("expected ownership rejection, got {other:?}")),
    }
}
