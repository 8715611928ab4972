//! In-memory task arena.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use crate::task::{
    domain::{Task, TaskId},
    ports::{EntityHandle, LedgerRepositoryError, LedgerRepositoryResult, TaskRepository},
};

/// Thread-safe in-memory task repository.
///
/// Each task lives behind its own mutex; the outer lock only guards the
/// identifier index.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<TaskId, EntityHandle<Task>>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn insert(&self, task: Task) -> LedgerRepositoryResult<()> {
        let mut tasks = self
            .tasks
            .write()
            .map_err(|err| LedgerRepositoryError::poisoned(&err))?;
        if tasks.contains_key(&task.id()) {
            return Err(LedgerRepositoryError::DuplicateTask(task.id()));
        }
        tasks.insert(task.id(), Arc::new(Mutex::new(task)));
        Ok(())
    }

    fn checkout(&self, id: TaskId) -> LedgerRepositoryResult<Option<EntityHandle<Task>>> {
        let tasks = self
            .tasks
            .read()
            .map_err(|err| LedgerRepositoryError::poisoned(&err))?;
        Ok(tasks.get(&id).cloned())
    }

    fn find_by_id(&self, id: TaskId) -> LedgerRepositoryResult<Option<Task>> {
        let Some(handle) = self.checkout(id)? else {
            return Ok(None);
        };
        let task = handle
            .lock()
            .map_err(|err| LedgerRepositoryError::poisoned(&err))?;
        Ok(Some(task.clone()))
    }
}
