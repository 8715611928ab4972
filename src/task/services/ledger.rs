//! Identifier-based ledger service over the entity arenas.

use crate::task::{
    domain::{
        AdminCap, AdminCapId, Level, ParticipantId, ProfileId, Task, TaskBoard, TaskDomainError,
        TaskId, UserProfile,
    },
    ports::{
        EntityHandle, EventSink, LedgerRepositoryError, ProfileRepository, TaskRepository,
    },
    services::operations::{self, CreateTaskRequest},
};
use mockable::Clock;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use tracing::{debug, info};

/// Service-level errors for ledger operations.
#[derive(Debug, Error)]
pub enum TaskLedgerError {
    /// A guard rejected the operation.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] LedgerRepositoryError),
    /// No task exists with the given identifier.
    #[error("task {0} not found")]
    TaskNotFound(TaskId),
    /// No profile exists with the given identifier.
    #[error("profile {0} not found")]
    ProfileNotFound(ProfileId),
    /// The caller tried to credit a profile owned by someone else.
    #[error("profile {profile_id} is not owned by {caller}")]
    NotProfileOwner {
        /// Profile presented for the award.
        profile_id: ProfileId,
        /// Participant completing the task.
        caller: ParticipantId,
    },
}

/// Result type for ledger service operations.
pub type TaskLedgerResult<T> = Result<T, TaskLedgerError>;

/// Receipt returned by a successful completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCompletion {
    /// Task snapshot after completion.
    pub task: Task,
    /// Profile snapshot after the award.
    pub profile: UserProfile,
    /// Points credited to the profile.
    pub points_awarded: u64,
    /// New level when the award raised it.
    pub level_up: Option<Level>,
}

/// Task reward ledger.
///
/// Owns the single shared [`TaskBoard`] and remembers which [`AdminCap`] its
/// genesis minted. Tasks and profiles are resolved through the repositories
/// and locked for the duration of each call, always in the order task,
/// profile, board.
pub struct TaskLedger<T, P, E, C>
where
    T: TaskRepository,
    P: ProfileRepository,
    E: EventSink,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    profiles: Arc<P>,
    sink: Arc<E>,
    clock: Arc<C>,
    board: Arc<Mutex<TaskBoard>>,
    admin_cap_id: AdminCapId,
}

impl<T, P, E, C> Clone for TaskLedger<T, P, E, C>
where
    T: TaskRepository,
    P: ProfileRepository,
    E: EventSink,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            profiles: Arc::clone(&self.profiles),
            sink: Arc::clone(&self.sink),
            clock: Arc::clone(&self.clock),
            board: Arc::clone(&self.board),
            admin_cap_id: self.admin_cap_id,
        }
    }
}

fn lock<V>(mutex: &Mutex<V>) -> Result<MutexGuard<'_, V>, LedgerRepositoryError> {
    mutex.lock().map_err(|err| LedgerRepositoryError::poisoned(&err))
}

fn log_rejection(operation: &'static str, err: &TaskDomainError) {
    debug!(operation, code = err.code(), "ledger operation rejected");
}

impl<T, P, E, C> TaskLedger<T, P, E, C>
where
    T: TaskRepository,
    P: ProfileRepository,
    E: EventSink,
    C: Clock + Send + Sync,
{
    /// Bootstraps a ledger with a fresh board and mints its only
    /// administrator credential.
    #[must_use]
    pub fn genesis(tasks: Arc<T>, profiles: Arc<P>, sink: Arc<E>, clock: Arc<C>) -> (Self, AdminCap) {
        let cap = AdminCap::mint();
        let board = TaskBoard::new();
        info!(board_id = %board.id(), admin_cap_id = %cap.id(), "task ledger genesis");

        let ledger = Self {
            tasks,
            profiles,
            sink,
            clock,
            board: Arc::new(Mutex::new(board)),
            admin_cap_id: cap.id(),
        };
        (ledger, cap)
    }

    /// Returns the identifier of the credential minted at genesis.
    #[must_use]
    pub const fn admin_cap_id(&self) -> AdminCapId {
        self.admin_cap_id
    }

    /// Returns a snapshot of the board counters.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLedgerError::Repository`] when the board lock is
    /// poisoned.
    pub fn board(&self) -> TaskLedgerResult<TaskBoard> {
        Ok(lock(&self.board)?.clone())
    }

    /// Creates the caller's profile.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerRepositoryError::DuplicateProfileOwner`] when the
    /// caller already has a profile.
    pub fn create_profile(&self, caller: &ParticipantId) -> TaskLedgerResult<UserProfile> {
        let profile = operations::create_profile_with(
            caller.clone(),
            &*self.clock,
            &*self.sink,
            |profile| self.profiles.insert(profile.clone()),
        )?;
        info!(profile_id = %profile.id(), owner = %caller, "profile created");
        Ok(profile)
    }

    /// Creates a task owned by `caller`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLedgerError::Domain`] for invalid input and
    /// [`TaskLedgerError::Repository`] when storage rejects the task.
    pub fn create_task(
        &self,
        caller: &ParticipantId,
        request: CreateTaskRequest,
    ) -> TaskLedgerResult<Task> {
        let mut board = lock(&self.board)?;
        let task = operations::create_task_with(
            &mut board,
            request,
            caller.clone(),
            &*self.clock,
            &*self.sink,
            |task| {
                self.tasks
                    .insert(task.clone())
                    .map_err(TaskLedgerError::from)
            },
        )
        .inspect_err(|err| {
            if let TaskLedgerError::Domain(domain) = err {
                log_rejection("create_task", domain);
            }
        })?;
        let total_created = board.total_tasks_created();
        drop(board);

        info!(
            task_id = %task.id(),
            creator = %caller,
            reward_points = task.reward_points(),
            total_created,
            "task created"
        );
        Ok(task)
    }

    /// Assigns a task on behalf of its creator.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLedgerError::TaskNotFound`] for unknown tasks and
    /// [`TaskLedgerError::Domain`] when a guard rejects the call.
    pub fn assign_task(
        &self,
        caller: &ParticipantId,
        task_id: TaskId,
        assignee: ParticipantId,
    ) -> TaskLedgerResult<Task> {
        let handle = self.checkout_task(task_id)?;
        let mut task = lock(&handle)?;
        operations::assign_task(&mut task, assignee, caller, &*self.sink)
            .inspect_err(|err| log_rejection("assign_task", err))?;

        info!(task_id = %task_id, assignee = ?task.assignee(), "task assigned");
        Ok(task.clone())
    }

    /// Overwrites a task's assignee under administrator authority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotAdmin`] when `cap` was minted by a
    /// different ledger, [`TaskLedgerError::TaskNotFound`] for unknown tasks,
    /// and [`TaskDomainError::TaskAlreadyCompleted`] for completed tasks.
    pub fn admin_reassign_task(
        &self,
        cap: &AdminCap,
        task_id: TaskId,
        new_assignee: ParticipantId,
    ) -> TaskLedgerResult<Task> {
        if cap.id() != self.admin_cap_id {
            let err = TaskDomainError::NotAdmin;
            log_rejection("admin_reassign_task", &err);
            return Err(err.into());
        }

        let handle = self.checkout_task(task_id)?;
        let mut task = lock(&handle)?;
        let previous = operations::admin_reassign_task(cap, &mut task, new_assignee, &*self.sink)
            .inspect_err(|err| log_rejection("admin_reassign_task", err))?;

        info!(
            task_id = %task_id,
            previous = ?previous,
            assignee = ?task.assignee(),
            "task reassigned by administrator"
        );
        Ok(task.clone())
    }

    /// Completes a task as its assignee and credits the caller's profile.
    ///
    /// Task guards are checked first, then profile ownership.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLedgerError::TaskNotFound`] or
    /// [`TaskLedgerError::ProfileNotFound`] for unknown identifiers,
    /// [`TaskLedgerError::Domain`] when a guard rejects the call, and
    /// [`TaskLedgerError::NotProfileOwner`] when `profile_id` belongs to
    /// another participant.
    pub fn complete_task(
        &self,
        caller: &ParticipantId,
        task_id: TaskId,
        profile_id: ProfileId,
    ) -> TaskLedgerResult<TaskCompletion> {
        let task_handle = self.checkout_task(task_id)?;
        let profile_handle = self.checkout_profile(profile_id)?;

        let mut task = lock(&task_handle)?;
        let mut profile = lock(&profile_handle)?;
        task.ensure_completable_by(caller)
            .inspect_err(|err| log_rejection("complete_task", err))?;
        if profile.owner() != caller {
            debug!(
                operation = "complete_task",
                profile_id = %profile_id,
                caller = %caller,
                "ledger operation rejected: profile owned by another participant"
            );
            return Err(TaskLedgerError::NotProfileOwner {
                profile_id,
                caller: caller.clone(),
            });
        }

        let mut board = lock(&self.board)?;
        let award = operations::complete_task(
            &mut task,
            &mut board,
            &mut profile,
            caller,
            &*self.sink,
        )
        .inspect_err(|err| log_rejection("complete_task", err))?;
        let total_completed = board.total_tasks_completed();
        drop(board);

        info!(
            task_id = %task_id,
            profile_id = %profile_id,
            points = award.points,
            total_points = award.total_points,
            total_completed,
            "task completed"
        );
        if let Some(level) = award.level_up {
            info!(profile_id = %profile_id, %level, "profile leveled up");
        }

        Ok(TaskCompletion {
            task: task.clone(),
            profile: profile.clone(),
            points_awarded: award.points,
            level_up: award.level_up,
        })
    }

    /// Returns a task snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLedgerError::Repository`] when lookup fails.
    pub fn find_task(&self, task_id: TaskId) -> TaskLedgerResult<Option<Task>> {
        Ok(self.tasks.find_by_id(task_id)?)
    }

    /// Returns a profile snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLedgerError::Repository`] when lookup fails.
    pub fn find_profile(&self, profile_id: ProfileId) -> TaskLedgerResult<Option<UserProfile>> {
        Ok(self.profiles.find_by_id(profile_id)?)
    }

    /// Returns the profile owned by `owner`, if one was created.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLedgerError::Repository`] when lookup fails.
    pub fn find_profile_by_owner(
        &self,
        owner: &ParticipantId,
    ) -> TaskLedgerResult<Option<UserProfile>> {
        Ok(self.profiles.find_by_owner(owner)?)
    }

    fn checkout_task(&self, task_id: TaskId) -> TaskLedgerResult<EntityHandle<Task>> {
        self.tasks
            .checkout(task_id)?
            .ok_or(TaskLedgerError::TaskNotFound(task_id))
    }

    fn checkout_profile(&self, profile_id: ProfileId) -> TaskLedgerResult<EntityHandle<UserProfile>> {
        self.profiles
            .checkout(profile_id)?
            .ok_or(TaskLedgerError::ProfileNotFound(profile_id))
    }
}
