//! Read-only view over a set of entries, used by the resolver.

use std::collections::HashMap;
use std::hash::BuildHasher;

use cookbook_core::EntryName;

use crate::entry::Entry;

/// Lookup-by-name over a snapshot of cookbook entries.
pub trait Cookbook {
    fn lookup(&self, name: &str) -> Option<&Entry>;
}

impl<C> Cookbook for &C
where
    C: Cookbook + ?Sized,
{
    fn lookup(&self, name: &str) -> Option<&Entry> {
        (**self).lookup(name)
    }
}

impl<S: BuildHasher> Cookbook for HashMap<EntryName, Entry, S> {
    fn lookup(&self, name: &str) -> Option<&Entry> {
        self.get(name)
    }
}
