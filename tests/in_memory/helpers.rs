//! Shared test helpers for in-memory ledger integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use task_rewards::task::{
    adapters::memory::{InMemoryEventLog, InMemoryProfileRepository, InMemoryTaskRepository},
    domain::{AdminCap, LedgerEvent, ParticipantId, Task, UserProfile},
    services::{CreateTaskRequest, TaskLedger},
};

/// Ledger type wired to in-memory adapters.
pub type TestLedger = TaskLedger<
    InMemoryTaskRepository,
    InMemoryProfileRepository,
    InMemoryEventLog<DefaultClock>,
    DefaultClock,
>;

/// A freshly bootstrapped ledger with its credential and audit log.
pub struct LedgerFixture {
    pub ledger: TestLedger,
    pub cap: AdminCap,
    pub log: Arc<InMemoryEventLog<DefaultClock>>,
}

impl LedgerFixture {
    /// Returns the event names recorded so far.
    pub fn event_types(&self) -> Vec<&'static str> {
        self.log
            .events()
            .iter()
            .map(LedgerEvent::event_type)
            .collect()
    }

    /// Creates a task as `creator` and assigns it to `assignee`.
    pub fn assigned_task(
        &self,
        creator: &ParticipantId,
        assignee: &ParticipantId,
        reward_points: u64,
    ) -> Task {
        let task = self
            .ledger
            .create_task(creator, CreateTaskRequest::new("Assigned work", reward_points))
            .expect("task creation should succeed");
        self.ledger
            .assign_task(creator, task.id(), assignee.clone())
            .expect("assignment should succeed")
    }

    /// Creates a profile for `owner`.
    pub fn profile(&self, owner: &ParticipantId) -> UserProfile {
        self.ledger
            .create_profile(owner)
            .expect("profile creation should succeed")
    }
}

/// Provides a freshly bootstrapped ledger for each test.
#[fixture]
pub fn ledger() -> LedgerFixture {
    let clock = Arc::new(DefaultClock);
    let log = Arc::new(InMemoryEventLog::new(Arc::clone(&clock)));
    let (ledger, cap) = TaskLedger::genesis(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(InMemoryProfileRepository::new()),
        Arc::clone(&log),
        clock,
    );
    LedgerFixture { ledger, cap, log }
}

/// Builds a participant identity from a known-good literal.
pub fn participant(name: &str) -> ParticipantId {
    ParticipantId::new(name).expect("test participant should be valid")
}
