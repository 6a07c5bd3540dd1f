//! Build errors for context construction.

use crate::core::RegistryError;
use thiserror::Error;

/// Errors that can occur when building a dispatch context.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states registered. Add at least one state with .state(id, handler)")]
    NoStates,

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
