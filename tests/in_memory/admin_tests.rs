//! In-memory integration tests for credential-gated reassignment.

use rstest::rstest;
use task_rewards::task::{
    domain::{AssignedBy, LedgerEvent, TaskDomainError},
    services::{CreateTaskRequest, TaskLedgerError},
};

use super::helpers::{LedgerFixture, ledger, participant};

#[rstest]
fn admin_overrides_existing_assignee(#[from(ledger)] fixture: LedgerFixture) {
    let creator = participant("alice");
    let task = fixture.assigned_task(&creator, &participant("bob"), 20);

    let reassigned = fixture
        .ledger
        .admin_reassign_task(&fixture.cap, task.id(), participant("carol"))
        .expect("admin reassignment should succeed");

    assert_eq!(reassigned.assignee(), Some(&participant("carol")));
    assert!(matches!(
        fixture.log.events().last(),
        Some(LedgerEvent::TaskAssigned {
            assigned_by: AssignedBy::Admin,
            ..
        })
    ));
}

#[rstest]
fn new_assignee_completes_after_override(#[from(ledger)] fixture: LedgerFixture) {
    let creator = participant("alice");
    let carol = participant("carol");
    let profile = fixture.profile(&carol);
    let task = fixture.assigned_task(&creator, &participant("bob"), 20);
    fixture
        .ledger
        .admin_reassign_task(&fixture.cap, task.id(), carol.clone())
        .expect("admin reassignment should succeed");

    let previous_assignee = fixture
        .ledger
        .complete_task(&participant("bob"), task.id(), profile.id());
    assert!(matches!(
        previous_assignee,
        Err(TaskLedgerError::Domain(TaskDomainError::NotAssignee))
    ));

    let completion = fixture
        .ledger
        .complete_task(&carol, task.id(), profile.id())
        .expect("new assignee can complete");
    assert_eq!(completion.points_awarded, 20);
}

#[rstest]
fn admin_cannot_reassign_completed_task(#[from(ledger)] fixture: LedgerFixture) {
    let creator = participant("alice");
    let worker = participant("bob");
    let profile = fixture.profile(&worker);
    let task = fixture.assigned_task(&creator, &worker, 20);
    fixture
        .ledger
        .complete_task(&worker, task.id(), profile.id())
        .expect("completion should succeed");
    let events_before = fixture.log.len();

    let result = fixture
        .ledger
        .admin_reassign_task(&fixture.cap, task.id(), participant("carol"));

    assert!(matches!(
        result,
        Err(TaskLedgerError::Domain(TaskDomainError::TaskAlreadyCompleted))
    ));
    assert_eq!(fixture.log.len(), events_before);
}

#[rstest]
fn credential_moved_to_another_thread_keeps_authority(#[from(ledger)] fixture: LedgerFixture) {
    let LedgerFixture { ledger, cap, log } = fixture;
    let task = ledger
        .create_task(&participant("alice"), CreateTaskRequest::new("Handover", 5))
        .expect("task creation should succeed");
    let remote_ledger = ledger.clone();

    let reassigned = std::thread::spawn(move || {
        remote_ledger.admin_reassign_task(&cap, task.id(), participant("dave"))
    })
    .join()
    .expect("holder thread should not panic")
    .expect("moved credential should authorise");

    assert_eq!(reassigned.assignee(), Some(&participant("dave")));
    assert_eq!(log.len(), 2);
}
