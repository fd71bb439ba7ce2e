//! Entry payload validation.
//!
//! Turns an untyped JSON payload into a well-formed [`Entry`]. Validation is
//! all-or-nothing: any malformed field rejects the whole payload. Name
//! uniqueness is not checked here; the registry enforces it atomically on
//! insert.

use serde_json::{Map, Value};

use cookbook_core::{DomainError, DomainResult, EntryName};

use crate::entry::{Entry, EntryKind, Ingredient, Recipe, RequiredItem};

/// Parse and validate an entry payload.
pub fn parse_entry(data: &Value) -> DomainResult<Entry> {
    let obj = data
        .as_object()
        .ok_or_else(|| DomainError::malformed("entry must be a JSON object"))?;

    let name = EntryName::new(require_str(obj, "name")?)?;
    let kind: EntryKind = require_str(obj, "type")?.parse()?;

    match kind {
        EntryKind::Ingredient => {
            let cook_time = parse_cook_time(obj.get("cookTime"))?;
            Ok(Ingredient::new(name, cook_time).into())
        }
        EntryKind::Recipe => {
            let items = obj
                .get("requiredItems")
                .and_then(Value::as_array)
                .ok_or_else(|| DomainError::malformed("requiredItems must be an array"))?;

            let items = items
                .iter()
                .enumerate()
                .map(|(idx, item)| parse_required_item(idx, item))
                .collect::<DomainResult<Vec<_>>>()?;

            Ok(Recipe::new(name, items)?.into())
        }
    }
}

fn require_str<'a>(obj: &'a Map<String, Value>, field: &str) -> DomainResult<&'a str> {
    obj.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| DomainError::malformed(format!("{field} must be a string")))
}

fn parse_cook_time(value: Option<&Value>) -> DomainResult<u64> {
    match value {
        Some(Value::Number(n)) => {
            if let Some(v) = n.as_u64() {
                Ok(v)
            } else if n.is_i64() {
                Err(DomainError::malformed("cookTime cannot be negative"))
            } else {
                Err(DomainError::malformed("cookTime must be an integer"))
            }
        }
        _ => Err(DomainError::malformed("cookTime must be an integer")),
    }
}

fn parse_required_item(idx: usize, item: &Value) -> DomainResult<RequiredItem> {
    let obj = item.as_object().ok_or_else(|| {
        DomainError::malformed(format!("requiredItems[{idx}] must be an object"))
    })?;

    let name = obj.get("name").and_then(Value::as_str).ok_or_else(|| {
        DomainError::malformed(format!("requiredItems[{idx}].name must be a string"))
    })?;

    let quantity = obj.get("quantity").and_then(Value::as_i64).ok_or_else(|| {
        DomainError::malformed(format!("requiredItems[{idx}].quantity must be an integer"))
    })?;

    Ok(RequiredItem::new(name, quantity))
}
