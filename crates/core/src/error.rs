//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// conflicts, illegal lifecycle transitions).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. zero or a parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested resource was not found (domain-level).
    #[error("not found")]
    NotFound,

    /// A conflict occurred (e.g. duplicate identifier).
    #[error("conflict: {0}")]
    Conflict(String),

    /// The requested action has no transition from the current state.
    ///
    /// Both fields hold the lowercase wire names (`"pay"`, `"paid"`).
    #[error("Cannot {action} invoice in {state} state")]
    InvalidTransition { action: String, state: String },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn invalid_transition(action: impl Into<String>, state: impl Into<String>) -> Self {
        Self::InvalidTransition {
            action: action.into(),
            state: state.into(),
        }
    }

    /// Short machine-readable code for rendering at process boundaries.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Validation(_) => "validation_error",
            DomainError::InvalidId(_) => "invalid_id",
            DomainError::NotFound => "not_found",
            DomainError::Conflict(_) => "conflict",
            DomainError::InvalidTransition { .. } => "invalid_transition",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_transition_message_names_action_and_state() {
        let err = DomainError::invalid_transition("pay", "paid");
        assert_eq!(err.to_string(), "Cannot pay invoice in paid state");
        assert_eq!(err.code(), "invalid_transition");
    }

    #[test]
    fn every_variant_has_a_distinct_code() {
        let codes = [
            DomainError::validation("bad").code(),
            DomainError::invalid_id("0").code(),
            DomainError::not_found().code(),
            DomainError::conflict("dup").code(),
            DomainError::invalid_transition("void", "draft").code(),
        ];
        assert_eq!(
            codes,
            ["validation_error", "invalid_id", "not_found", "conflict", "invalid_transition"]
        );
    }

    #[test]
    fn constructors_map_to_variants() {
        assert_eq!(
            DomainError::conflict("dup"),
            DomainError::Conflict("dup".to_string())
        );
        assert_eq!(DomainError::not_found().to_string(), "not found");
        assert_eq!(
            DomainError::invalid_id("zero").to_string(),
            "invalid identifier: zero"
        );
    }
}
