//! Error types for hook registration

use thiserror::Error;

use super::operation::OperationId;

/// Errors while building the hook table. All of these are raised before the
/// module starts serving calls.
#[derive(Debug, Error)]
pub enum HookError {
    #[error("a before-hook is already registered for {0}")]
    DuplicateBefore(OperationId),

    #[error("hook registry is sealed; cannot register for {0}")]
    Sealed(OperationId),

    #[error("{0} is already bound to a different parameter shape")]
    ShapeMismatch(OperationId),
}
