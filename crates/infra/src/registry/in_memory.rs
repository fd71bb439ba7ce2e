use std::collections::HashMap;
use std::collections::hash_map::Entry as MapEntry;
use std::sync::{RwLock, RwLockReadGuard};

use cookbook_core::{DomainError, DomainResult, Entity, EntryName};
use cookbook_recipes::{Entry, RecipeSummary};

use super::r#trait::Registry;

/// In-memory cookbook registry.
///
/// The check-then-insert runs under the write lock; summaries hold the read
/// lock for the whole traversal.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    entries: RwLock<HashMap<EntryName, Entry>>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, HashMap<EntryName, Entry>>> {
        self.entries
            .read()
            .map_err(|_| DomainError::internal("registry lock poisoned"))
    }
}

impl Registry for InMemoryRegistry {
    fn get(&self, name: &str) -> DomainResult<Option<Entry>> {
        Ok(self.read()?.get(name).cloned())
    }

    fn insert(&self, entry: Entry) -> DomainResult<()> {
        let mut map = self
            .entries
            .write()
            .map_err(|_| DomainError::internal("registry lock poisoned"))?;

        match map.entry(entry.id().clone()) {
            MapEntry::Occupied(existing) => {
                tracing::debug!(name = %existing.key(), "rejected duplicate entry name");
                Err(DomainError::duplicate(existing.key().as_str()))
            }
            MapEntry::Vacant(slot) => {
                tracing::info!(
                    name = %slot.key(),
                    kind = entry.kind().as_str(),
                    "cookbook entry registered"
                );
                slot.insert(entry);
                Ok(())
            }
        }
    }

    fn summarize(&self, name: &str) -> DomainResult<RecipeSummary> {
        let map = self.read()?;
        cookbook_recipes::summarize(&*map, name)
    }

    fn len(&self) -> DomainResult<usize> {
        Ok(self.read()?.len())
    }
}
