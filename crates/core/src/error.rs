//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Creation failures (`MalformedInput`, `DuplicateName`) and resolution
/// failures (`UnresolvableReference`, `NotARecipe`) are deliberately coarse at
/// the HTTP boundary; the variants exist so callers can log the actual reason.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An entry payload was missing fields or had the wrong shape.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The entry name is already claimed in the registry.
    #[error("duplicate name: {0}")]
    DuplicateName(String),

    /// A recipe (transitively) references a missing entry, or references itself.
    #[error("unresolvable reference: {0}")]
    UnresolvableReference(String),

    /// The queried name does not exist or is not a recipe.
    #[error("not a recipe: {0}")]
    NotARecipe(String),

    /// A domain invariant was violated (e.g. arithmetic overflow).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// Storage failed independently of the request (e.g. a poisoned lock).
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    pub fn unresolvable(msg: impl Into<String>) -> Self {
        Self::UnresolvableReference(msg.into())
    }

    pub fn not_a_recipe(name: impl Into<String>) -> Self {
        Self::NotARecipe(name.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Stable machine-readable code, used in JSON error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedInput(_) => "malformed_input",
            Self::DuplicateName(_) => "duplicate_name",
            Self::UnresolvableReference(_) => "unresolvable_reference",
            Self::NotARecipe(_) => "not_a_recipe",
            Self::InvariantViolation(_) => "invariant_violation",
            Self::Internal(_) => "internal_error",
        }
    }
}
