//! Domain-level error types.

use std::fmt;

use thiserror::Error;

/// Domain errors - business rule, lookup and persistence failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("user not found: uid={uid}")]
    UserNotFound { uid: String },

    #[error("validation error: {0}")]
    InvalidLength(#[from] InvalidLength),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Repository(#[from] RepoError),
}

impl DomainError {
    /// True when the failure came from user input breaking a domain rule.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidLength(_) | Self::Profile(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound { .. })
    }
}

/// Text exceeded its byte-length bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("text must be at most {max} bytes")]
pub struct InvalidLength {
    pub max: usize,
}

/// A profile field that must not be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    LastName,
    FirstName,
    Email,
}

impl MissingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingField::LastName => "last_name",
            MissingField::FirstName => "first_name",
            MissingField::Email => "email",
        }
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is required", self.as_str())
    }
}

/// Profile update rejected; lists every missing field, not just the first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation error: {}", join_reasons(.missing))]
pub struct ProfileError {
    pub missing: Vec<MissingField>,
}

fn join_reasons(missing: &[MissingField]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Storage connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
