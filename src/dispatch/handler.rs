//! The per-state handler interface.

use crate::core::{EventKind, StateId};
use crate::dispatch::context::TransitionScope;
use crate::dispatch::error::DispatchError;

/// What a handler did with a dispatched event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The handler defined behavior for the event.
    Handled,

    /// The handler does not recognize the event. The context's fallback
    /// policy decides whether this is an error or a no-op.
    Unhandled,
}

/// Behavior associated with one state, for all event kinds.
///
/// One handler is registered per [`StateId`]; the context forwards every
/// dispatched event to the handler of the current state, passing a
/// [`TransitionScope`] through which the handler may request a transition.
///
/// Handlers are stateless shared values (`Send + Sync`, held behind `Arc`);
/// data that varies per call travels in `args`. A handler that never calls
/// [`TransitionScope::transition_to`] makes its state a sink.
///
/// Returning [`DispatchOutcome::Unhandled`] discards any transition
/// requested earlier in the same call, so an unrecognized event can never
/// leave the context partially mutated.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{EventKind, StateId};
/// use switchyard::dispatch::{DispatchError, DispatchOutcome, StateHandler, TransitionScope};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Power {
///     Off,
///     On,
/// }
///
/// impl StateId for Power {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///         }
///     }
/// }
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Button {
///     Press,
///     Hold,
/// }
///
/// impl EventKind for Button {
///     fn name(&self) -> &str {
///         match self {
///             Self::Press => "Press",
///             Self::Hold => "Hold",
///         }
///     }
/// }
///
/// struct OffState;
///
/// impl StateHandler<Power, Button> for OffState {
///     fn handle(
///         &self,
///         event: &Button,
///         scope: &mut TransitionScope<'_, Power>,
///         _args: &(),
///     ) -> Result<DispatchOutcome, DispatchError> {
///         match event {
///             Button::Press => {
///                 scope.transition_to(Power::On)?;
///                 Ok(DispatchOutcome::Handled)
///             }
///             Button::Hold => Ok(DispatchOutcome::Unhandled),
///         }
///     }
/// }
/// ```
pub trait StateHandler<S: StateId, E: EventKind, Args = ()>: Send + Sync {
    /// Handle one dispatched event.
    ///
    /// Runs to completion before `dispatch` returns; must not block.
    fn handle(
        &self,
        event: &E,
        scope: &mut TransitionScope<'_, S>,
        args: &Args,
    ) -> Result<DispatchOutcome, DispatchError>;
}
