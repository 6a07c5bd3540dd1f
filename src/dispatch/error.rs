//! Dispatch error types.

use crate::core::RegistryError;
use thiserror::Error;

/// Errors that can occur while dispatching an event.
///
/// All errors are reported synchronously to the caller of the context API;
/// none are swallowed internally and none are retried.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The current state's handler defines no behavior for the event and
    /// the context's fallback policy is `Reject`.
    #[error("state '{state}' does not handle event '{event}'")]
    UnsupportedEvent { state: String, event: String },

    /// A state id failed registry validation.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
