use std::sync::Arc;

use serde_json::Value as JsonValue;

use cookbook_core::{DomainResult, EntryName};
use cookbook_infra::Registry;
use cookbook_recipes::{Entry, RecipeSummary};

/// Handles shared by every request handler.
#[derive(Clone)]
pub struct AppServices {
    registry: Arc<dyn Registry>,
}

impl AppServices {
    pub fn new(registry: Arc<dyn Registry>) -> Self {
        Self { registry }
    }

    pub fn create_entry(&self, body: &JsonValue) -> DomainResult<EntryName> {
        self.registry.create_entry(body)
    }

    pub fn summary(&self, name: &str) -> DomainResult<RecipeSummary> {
        self.registry.summarize(name)
    }

    pub fn entry(&self, name: &str) -> DomainResult<Option<Entry>> {
        self.registry.get(name)
    }
}
