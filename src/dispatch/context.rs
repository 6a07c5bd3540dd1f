//! The dispatch context: current-state pointer plus the dispatch entry point.

use crate::core::{
    DispatchHistory, DispatchRecord, EventKind, RegistryError, StateId, StateLookup, StateRegistry,
};
use crate::dispatch::error::DispatchError;
use crate::dispatch::handler::{DispatchOutcome, StateHandler};
use chrono::Utc;
use std::sync::Arc;

/// Registry alias binding the handler slot to the engine's handler trait.
pub type DispatchRegistry<S, E, Args = ()> = StateRegistry<S, dyn StateHandler<S, E, Args>>;

/// Policy applied when the current handler reports an event as
/// [`DispatchOutcome::Unhandled`].
///
/// The two variants correspond to the two contracts a machine can document
/// for unrecognized events: surface a typed error, or stay put silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Fail the dispatch with [`DispatchError::UnsupportedEvent`]. The
    /// default.
    #[default]
    Reject,

    /// Treat the event as a no-op: the current state is kept, nothing is
    /// recorded, and the caller sees `Ok(Unhandled)`.
    Ignore,
}

/// Narrow capability handed to a handler for the duration of one `handle`
/// call.
///
/// The scope exposes exactly what a handler may do with its context: read
/// the current state and request a transition. It does not grant dispatch
/// access, so a handler cannot re-enter the machine it is running in.
pub struct TransitionScope<'a, S: StateId> {
    lookup: &'a dyn StateLookup<S>,
    current: &'a S,
    pending: Option<S>,
}

impl<'a, S: StateId> TransitionScope<'a, S> {
    pub(crate) fn new(lookup: &'a dyn StateLookup<S>, current: &'a S) -> Self {
        Self {
            lookup,
            current,
            pending: None,
        }
    }

    /// Request a transition to `id`.
    ///
    /// The target is validated against the registry immediately: an
    /// unregistered id fails with [`RegistryError::UnknownState`] and leaves
    /// the context untouched. A valid target is applied by the context after
    /// the handler returns; if called more than once in a single `handle`
    /// call, the last request wins. Requesting the current state is valid
    /// and idempotent.
    pub fn transition_to(&mut self, id: S) -> Result<(), DispatchError> {
        if !self.lookup.contains_id(&id) {
            return Err(RegistryError::UnknownState {
                state: id.name().to_string(),
            }
            .into());
        }
        self.pending = Some(id);
        Ok(())
    }

    /// The state whose handler is currently running. No side effect.
    pub fn current(&self) -> &S {
        self.current
    }

    pub(crate) fn into_pending(self) -> Option<S> {
        self.pending
    }
}

/// The dispatch context.
///
/// Owns the handler registry exclusively and a single mutable
/// current-state field. External callers drive the machine through
/// [`dispatch`](Context::dispatch); handlers mutate it only through the
/// [`TransitionScope`] they receive.
///
/// The context is single-threaded by design: `dispatch` runs the handler to
/// completion before returning and holds no lock. Callers needing shared
/// access must serialize dispatch calls externally.
pub struct Context<S: StateId, E: EventKind, Args = ()> {
    registry: DispatchRegistry<S, E, Args>,
    initial: S,
    current: S,
    policy: FallbackPolicy,
    history: DispatchHistory<S, E>,
}

impl<S: StateId, E: EventKind, Args> std::fmt::Debug for Context<S, E, Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("initial", &self.initial)
            .field("current", &self.current)
            .field("policy", &self.policy)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

impl<S: StateId, E: EventKind, Args> Context<S, E, Args> {
    /// Create a context in `initial` with the default `Reject` fallback
    /// policy.
    ///
    /// Fails with [`RegistryError::UnknownState`] if `initial` is not
    /// registered.
    pub fn new(initial: S, registry: DispatchRegistry<S, E, Args>) -> Result<Self, RegistryError> {
        Self::with_policy(initial, registry, FallbackPolicy::default())
    }

    /// Create a context with an explicit fallback policy.
    pub fn with_policy(
        initial: S,
        registry: DispatchRegistry<S, E, Args>,
        policy: FallbackPolicy,
    ) -> Result<Self, RegistryError> {
        Self::from_parts(initial.clone(), initial, DispatchHistory::new(), registry, policy)
    }

    /// Assemble a context from explicit parts, validating that both the
    /// initial and current ids are registered. Used by snapshot restore.
    pub(crate) fn from_parts(
        initial: S,
        current: S,
        history: DispatchHistory<S, E>,
        registry: DispatchRegistry<S, E, Args>,
        policy: FallbackPolicy,
    ) -> Result<Self, RegistryError> {
        registry.resolve(&initial)?;
        registry.resolve(&current)?;
        Ok(Self {
            registry,
            initial,
            current,
            policy,
            history,
        })
    }

    /// Dispatch one event to the current state's handler.
    ///
    /// Resolves the current handler, runs it to completion with a fresh
    /// [`TransitionScope`], then applies at most one pending transition.
    /// The current state changes if and only if the handler requested a
    /// transition and returned [`DispatchOutcome::Handled`] without error.
    ///
    /// An `Unhandled` return is routed through the context's
    /// [`FallbackPolicy`]; any transition the handler requested before
    /// returning `Unhandled` is discarded.
    pub fn dispatch(&mut self, event: E, args: &Args) -> Result<DispatchOutcome, DispatchError> {
        // Unreachable while the construction invariants hold, but resolution
        // failure stays a checked error rather than a panic.
        let handler = Arc::clone(self.registry.resolve(&self.current)?);

        let mut scope = TransitionScope::new(&self.registry, &self.current);
        let outcome = handler.handle(&event, &mut scope, args)?;
        let pending = scope.into_pending();

        match outcome {
            DispatchOutcome::Unhandled => match self.policy {
                FallbackPolicy::Reject => Err(DispatchError::UnsupportedEvent {
                    state: self.current.name().to_string(),
                    event: event.name().to_string(),
                }),
                FallbackPolicy::Ignore => Ok(DispatchOutcome::Unhandled),
            },
            DispatchOutcome::Handled => {
                if let Some(next) = pending {
                    self.history = self.history.record(DispatchRecord {
                        from: self.current.clone(),
                        to: next.clone(),
                        event,
                        timestamp: Utc::now(),
                    });
                    self.current = next;
                }
                Ok(DispatchOutcome::Handled)
            }
        }
    }

    /// The current state. Read-only, no side effect.
    pub fn current(&self) -> &S {
        &self.current
    }

    /// The state the context was constructed in.
    pub fn initial(&self) -> &S {
        &self.initial
    }

    /// All transitions applied so far.
    pub fn history(&self) -> &DispatchHistory<S, E> {
        &self.history
    }

    /// The fallback policy for unhandled events.
    pub fn policy(&self) -> FallbackPolicy {
        self.policy
    }

    /// Read-only view of the handler registry.
    pub fn registry(&self) -> &DispatchRegistry<S, E, Args> {
        &self.registry
    }
}
