use std::collections::HashSet;

use serde::Serialize;

use cookbook_core::{DomainError, DomainResult, Entity, EntryName};

/// Discriminator carried in the `type` field of entry payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Recipe,
    Ingredient,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Recipe => "recipe",
            EntryKind::Ingredient => "ingredient",
        }
    }
}

impl core::str::FromStr for EntryKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recipe" => Ok(EntryKind::Recipe),
            "ingredient" => Ok(EntryKind::Ingredient),
            other => Err(DomainError::malformed(format!(
                "type must be one of: recipe, ingredient (got '{other}')"
            ))),
        }
    }
}

/// A `(name, quantity)` line item of a recipe.
///
/// The name is not checked against the registry here; missing references only
/// surface when the owning recipe is summarized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequiredItem {
    pub name: String,
    pub quantity: i64,
}

impl RequiredItem {
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// Terminal entry with a fixed per-unit cook time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    name: EntryName,
    cook_time: u64,
}

impl Ingredient {
    pub fn new(name: EntryName, cook_time: u64) -> Self {
        Self { name, cook_time }
    }

    pub fn name(&self) -> &EntryName {
        &self.name
    }

    pub fn cook_time(&self) -> u64 {
        self.cook_time
    }
}

/// Composite entry built from quantities of other entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    name: EntryName,
    required_items: Vec<RequiredItem>,
}

impl Recipe {
    /// Build a recipe, rejecting line items that name the same entry twice.
    pub fn new(name: EntryName, required_items: Vec<RequiredItem>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(required_items.len());
        for item in &required_items {
            if !seen.insert(item.name.as_str()) {
                return Err(DomainError::malformed(format!(
                    "requiredItems lists '{}' more than once",
                    item.name
                )));
            }
        }

        Ok(Self {
            name,
            required_items,
        })
    }

    pub fn name(&self) -> &EntryName {
        &self.name
    }

    pub fn required_items(&self) -> &[RequiredItem] {
        &self.required_items
    }
}

/// A cookbook entry: either an ingredient or a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entry {
    Recipe(Recipe),
    Ingredient(Ingredient),
}

impl Entry {
    pub fn name(&self) -> &EntryName {
        match self {
            Entry::Recipe(r) => r.name(),
            Entry::Ingredient(i) => i.name(),
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Recipe(_) => EntryKind::Recipe,
            Entry::Ingredient(_) => EntryKind::Ingredient,
        }
    }

    pub fn as_recipe(&self) -> Option<&Recipe> {
        match self {
            Entry::Recipe(r) => Some(r),
            Entry::Ingredient(_) => None,
        }
    }

    pub fn as_ingredient(&self) -> Option<&Ingredient> {
        match self {
            Entry::Ingredient(i) => Some(i),
            Entry::Recipe(_) => None,
        }
    }
}

impl Entity for Entry {
    type Id = EntryName;

    fn id(&self) -> &Self::Id {
        self.name()
    }
}

impl From<Ingredient> for Entry {
    fn from(value: Ingredient) -> Self {
        Entry::Ingredient(value)
    }
}

impl From<Recipe> for Entry {
    fn from(value: Recipe) -> Self {
        Entry::Recipe(value)
    }
}
