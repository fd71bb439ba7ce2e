//! Infrastructure layer: entry storage and configuration.

pub mod config;
pub mod registry;

pub use config::{ConfigError, ServerConfig};
pub use registry::{InMemoryRegistry, Registry};
