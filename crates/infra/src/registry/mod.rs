//! Cookbook registry abstractions.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryRegistry;
pub use r#trait::Registry;
