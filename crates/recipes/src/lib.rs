//! Cookbook domain module.
//!
//! This crate contains the entry model, payload validation, recipe resolution
//! and name normalization, implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage).

pub mod cookbook;
pub mod entry;
pub mod name;
pub mod summary;
pub mod validate;

pub use cookbook::Cookbook;
pub use entry::{Entry, EntryKind, Ingredient, Recipe, RequiredItem};
pub use name::normalize_name;
pub use summary::{summarize, RecipeSummary};
pub use validate::parse_entry;
