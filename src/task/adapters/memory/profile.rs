//! In-memory profile arena.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use crate::task::{
    domain::{ParticipantId, ProfileId, UserProfile},
    ports::{EntityHandle, LedgerRepositoryError, LedgerRepositoryResult, ProfileRepository},
};

/// Thread-safe in-memory profile repository with an owner index.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    state: Arc<RwLock<InMemoryProfileState>>,
}

#[derive(Debug, Default)]
struct InMemoryProfileState {
    profiles: HashMap<ProfileId, EntityHandle<UserProfile>>,
    owner_index: HashMap<ParticipantId, ProfileId>,
}

impl InMemoryProfileRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn snapshot(handle: &EntityHandle<UserProfile>) -> LedgerRepositoryResult<UserProfile> {
    let profile = handle
        .lock()
        .map_err(|err| LedgerRepositoryError::poisoned(&err))?;
    Ok(profile.clone())
}

impl ProfileRepository for InMemoryProfileRepository {
    fn insert(&self, profile: UserProfile) -> LedgerRepositoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| LedgerRepositoryError::poisoned(&err))?;
        if state.profiles.contains_key(&profile.id()) {
            return Err(LedgerRepositoryError::DuplicateProfile(profile.id()));
        }
        if state.owner_index.contains_key(profile.owner()) {
            return Err(LedgerRepositoryError::DuplicateProfileOwner(
                profile.owner().clone(),
            ));
        }

        state
            .owner_index
            .insert(profile.owner().clone(), profile.id());
        state
            .profiles
            .insert(profile.id(), Arc::new(Mutex::new(profile)));
        Ok(())
    }

    fn checkout(
        &self,
        id: ProfileId,
    ) -> LedgerRepositoryResult<Option<EntityHandle<UserProfile>>> {
        let state = self
            .state
            .read()
            .map_err(|err| LedgerRepositoryError::poisoned(&err))?;
        Ok(state.profiles.get(&id).cloned())
    }

    fn find_by_id(&self, id: ProfileId) -> LedgerRepositoryResult<Option<UserProfile>> {
        self.checkout(id)?.as_ref().map(snapshot).transpose()
    }

    fn find_by_owner(
        &self,
        owner: &ParticipantId,
    ) -> LedgerRepositoryResult<Option<UserProfile>> {
        let handle = {
            let state = self
                .state
                .read()
                .map_err(|err| LedgerRepositoryError::poisoned(&err))?;
            state
                .owner_index
                .get(owner)
                .and_then(|id| state.profiles.get(id))
                .cloned()
        };
        handle.as_ref().map(snapshot).transpose()
    }
}
