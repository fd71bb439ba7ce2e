//! Entity trait: things stored under a key that never changes.

/// Anything the registry stores and looks up by identity.
///
/// For cookbook entries the identity is the entry name; once stored it is
/// never rewritten, so `id` is safe to use as a map key.
pub trait Entity {
    /// Key type the entity is stored under.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity's key.
    fn id(&self) -> &Self::Id;
}
