//! Shared world state for task rewards BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use task_rewards::task::{
    adapters::memory::{InMemoryEventLog, InMemoryProfileRepository, InMemoryTaskRepository},
    domain::{AdminCap, ParticipantId, ProfileId, TaskId},
    services::{TaskLedger, TaskLedgerError},
};

/// Ledger type used by the BDD world.
pub type TestLedger = TaskLedger<
    InMemoryTaskRepository,
    InMemoryProfileRepository,
    InMemoryEventLog<DefaultClock>,
    DefaultClock,
>;

/// Scenario world for task rewards behaviour tests.
pub struct RewardsWorld {
    pub ledger: TestLedger,
    pub cap: AdminCap,
    pub log: Arc<InMemoryEventLog<DefaultClock>>,
    pub profiles: HashMap<String, ProfileId>,
    pub current_task: Option<TaskId>,
    pub last_result: Option<Result<(), TaskLedgerError>>,
}

impl RewardsWorld {
    /// Creates a world around a freshly bootstrapped ledger.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(DefaultClock);
        let log = Arc::new(InMemoryEventLog::new(Arc::clone(&clock)));
        let (ledger, cap) = TaskLedger::genesis(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(InMemoryProfileRepository::new()),
            Arc::clone(&log),
            clock,
        );
        Self {
            ledger,
            cap,
            log,
            profiles: HashMap::new(),
            current_task: None,
            last_result: None,
        }
    }

    /// Returns the task the scenario is working on.
    pub fn task_id(&self) -> Result<TaskId, eyre::Report> {
        self.current_task
            .ok_or_else(|| eyre::eyre!("missing current task in scenario world"))
    }

    /// Returns the profile registered for `name`, or a fresh unknown one.
    pub fn profile_id(&self, name: &str) -> ProfileId {
        self.profiles.get(name).copied().unwrap_or_default()
    }
}

impl Default for RewardsWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> RewardsWorld {
    RewardsWorld::default()
}

/// Parses a participant name captured from a step.
pub fn participant(name: &str) -> Result<ParticipantId, eyre::Report> {
    ParticipantId::new(name).map_err(|err| eyre::eyre!("invalid participant in step: {err}"))
}
