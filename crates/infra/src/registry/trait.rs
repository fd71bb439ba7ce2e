use serde_json::Value as JsonValue;
use std::sync::Arc;

use cookbook_core::{DomainResult, EntryName};
use cookbook_recipes::{Entry, RecipeSummary};

/// Process-wide store of cookbook entries, keyed by name.
///
/// Entries are only ever added. `insert` is insert-if-absent and must be atomic
/// with respect to concurrent inserts of the same name. `summarize` must see a
/// consistent snapshot for the whole traversal.
pub trait Registry: Send + Sync {
    /// Look up an entry by its exact name.
    fn get(&self, name: &str) -> DomainResult<Option<Entry>>;

    /// Insert `entry` unless its name is already claimed.
    fn insert(&self, entry: Entry) -> DomainResult<()>;

    /// Resolve the recipe `name` against the current contents.
    fn summarize(&self, name: &str) -> DomainResult<RecipeSummary>;

    fn len(&self) -> DomainResult<usize>;

    fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Validate an untyped payload and insert the resulting entry.
    fn create_entry(&self, data: &JsonValue) -> DomainResult<EntryName> {
        let entry = cookbook_recipes::parse_entry(data)?;
        let name = entry.name().clone();
        self.insert(entry)?;
        Ok(name)
    }
}

impl<S> Registry for Arc<S>
where
    S: Registry + ?Sized,
{
    fn get(&self, name: &str) -> DomainResult<Option<Entry>> {
        (**self).get(name)
    }

    fn insert(&self, entry: Entry) -> DomainResult<()> {
        (**self).insert(entry)
    }

    fn summarize(&self, name: &str) -> DomainResult<RecipeSummary> {
        (**self).summarize(name)
    }

    fn len(&self) -> DomainResult<usize> {
        (**self).len()
    }
}
