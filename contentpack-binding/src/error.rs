//! Error types for the binding core.

use thiserror::Error;

/// Result type for binding operations.
pub type BindingResult<T> = Result<T, BindingError>;

/// Errors that can occur when mutating the binding model.
///
/// Delete-parameter and unbind are deliberately error-free: they are
/// reachable via repeated UI clicks and must stay idempotent no-ops when the
/// target is already gone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// A parameter with this name is already registered.
    #[error("parameter name already in use: {0}")]
    DuplicateName(String),

    /// A binding referenced a parameter that is not registered. Usually a
    /// stale reference in the host, not a user error.
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),
}
