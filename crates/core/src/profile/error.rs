use thiserror::Error;

/// Errors that can occur when validating a profile draft.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Full name cannot be empty")]
    EmptyFullName,
    #[error("Email cannot be empty")]
    EmptyEmail,
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
    #[error("Recipe ids cannot be blank ({field})")]
    BlankRecipeId { field: &'static str },
}
