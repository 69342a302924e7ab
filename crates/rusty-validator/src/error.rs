// File: src/error.rs
// Purpose: Errors raised by misuse of the validator API

use thiserror::Error;

/// Programming errors. Failed checks are never reported through this type;
/// they land in the [`ErrorStore`](crate::ErrorStore).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidatorError {
    #[error("no active field: call `set` before applying rules")]
    NoActiveField,
}
