//! Core ledger operations over exclusively borrowed entities.
//!
//! Each operation checks every guard before it writes anything and emits
//! its audit records only after all writes succeeded. A returned error
//! therefore means no entity changed and no record was emitted.

use crate::task::{
    domain::{
        AdminCap, AssignedBy, Award, LedgerEvent, ParticipantId, Task, TaskBoard, TaskDomainError,
        UserProfile,
    },
    ports::EventSink,
};
use mockable::Clock;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    reward_points: u64,
}

impl CreateTaskRequest {
    /// Creates a request with an empty description.
    #[must_use]
    pub fn new(title: impl Into<String>, reward_points: u64) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            reward_points,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Creates a task owned by `caller` and counts it on the board.
///
/// # Errors
///
/// Returns [`TaskDomainError::EmptyTitle`],
/// [`TaskDomainError::InvalidRewardPoints`] or
/// [`TaskDomainError::CounterOverflow`].
pub fn create_task(
    board: &mut TaskBoard,
    request: CreateTaskRequest,
    caller: ParticipantId,
    clock: &impl Clock,
    sink: &impl EventSink,
) -> Result<Task, TaskDomainError> {
    create_task_with(board, request, caller, clock, sink, |_| Ok(()))
}

/// Creates a task, letting `admit` accept it before anything is committed.
///
/// `admit` runs after validation and before the board is incremented, so a
/// storage layer can reject the task without leaving a counted, announced
/// task behind.
///
/// # Errors
///
/// Returns the validation errors of [`create_task`] or whatever `admit`
/// returns.
pub fn create_task_with<E, F>(
    board: &mut TaskBoard,
    request: CreateTaskRequest,
    caller: ParticipantId,
    clock: &impl Clock,
    sink: &impl EventSink,
    admit: F,
) -> Result<Task, E>
where
    E: From<TaskDomainError>,
    F: FnOnce(&Task) -> Result<(), E>,
{
    let task = Task::new(
        request.title,
        request.description,
        request.reward_points,
        caller,
        clock,
    )?;
    board.ensure_can_record_creation()?;
    admit(&task)?;
    board.increment_created()?;

    sink.emit(LedgerEvent::TaskCreated {
        task_id: task.id(),
        creator: task.creator().clone(),
        title: task.title().to_owned(),
        reward_points: task.reward_points(),
    });
    Ok(task)
}

/// Assigns an unassigned task on behalf of its creator.
///
/// # Errors
///
/// Returns [`TaskDomainError::NotCreator`],
/// [`TaskDomainError::TaskAlreadyCompleted`] or
/// [`TaskDomainError::TaskAlreadyAssigned`].
pub fn assign_task(
    task: &mut Task,
    assignee: ParticipantId,
    caller: &ParticipantId,
    sink: &impl EventSink,
) -> Result<(), TaskDomainError> {
    task.assign(caller, assignee.clone())?;
    sink.emit(LedgerEvent::TaskAssigned {
        task_id: task.id(),
        assignee,
        assigned_by: AssignedBy::Participant(caller.clone()),
    });
    Ok(())
}

/// Overwrites a pending task's assignee under administrator authority.
///
/// Unlike [`assign_task`] this replaces an existing assignee. Returns the
/// previous assignee.
///
/// # Errors
///
/// Returns [`TaskDomainError::TaskAlreadyCompleted`].
pub fn admin_reassign_task(
    cap: &AdminCap,
    task: &mut Task,
    new_assignee: ParticipantId,
    sink: &impl EventSink,
) -> Result<Option<ParticipantId>, TaskDomainError> {
    let previous = task.reassign(cap, new_assignee.clone())?;
    sink.emit(LedgerEvent::TaskAssigned {
        task_id: task.id(),
        assignee: new_assignee,
        assigned_by: AssignedBy::Admin,
    });
    Ok(previous)
}

/// Completes a task, credits `profile` and counts the completion.
///
/// Emits `UserLeveledUp` when the award raises the profile level, followed
/// by `TaskCompleted`.
///
/// # Errors
///
/// Returns [`TaskDomainError::TaskAlreadyCompleted`],
/// [`TaskDomainError::TaskNotAssigned`], [`TaskDomainError::NotAssignee`],
/// [`TaskDomainError::PointsOverflow`] or
/// [`TaskDomainError::CounterOverflow`].
pub fn complete_task(
    task: &mut Task,
    board: &mut TaskBoard,
    profile: &mut UserProfile,
    caller: &ParticipantId,
    sink: &impl EventSink,
) -> Result<Award, TaskDomainError> {
    task.ensure_completable_by(caller)?;
    profile.ensure_can_award(task.reward_points())?;
    board.ensure_can_record_completion()?;

    let points = task.complete(caller)?;
    let award = profile.award(points)?;
    board.increment_completed()?;

    if let Some(new_level) = award.level_up {
        sink.emit(LedgerEvent::UserLeveledUp {
            profile_id: profile.id(),
            owner: profile.owner().clone(),
            new_level,
            total_points: award.total_points,
        });
    }
    sink.emit(LedgerEvent::TaskCompleted {
        task_id: task.id(),
        completed_by: caller.clone(),
        points_awarded: points,
    });
    Ok(award)
}

/// Creates a level-one profile for `caller`.
#[must_use]
pub fn create_profile(
    caller: ParticipantId,
    clock: &impl Clock,
    sink: &impl EventSink,
) -> UserProfile {
    let profile = UserProfile::new(caller, clock);
    announce_profile(&profile, sink);
    profile
}

/// Creates a profile, letting `admit` accept it before it is announced.
///
/// # Errors
///
/// Returns whatever `admit` returns.
pub fn create_profile_with<E, F>(
    caller: ParticipantId,
    clock: &impl Clock,
    sink: &impl EventSink,
    admit: F,
) -> Result<UserProfile, E>
where
    F: FnOnce(&UserProfile) -> Result<(), E>,
{
    let profile = UserProfile::new(caller, clock);
    admit(&profile)?;
    announce_profile(&profile, sink);
    Ok(profile)
}

fn announce_profile(profile: &UserProfile, sink: &impl EventSink) {
    sink.emit(LedgerEvent::ProfileCreated {
        profile_id: profile.id(),
        owner: profile.owner().clone(),
    });
}
