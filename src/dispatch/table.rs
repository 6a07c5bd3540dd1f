//! Declarative table-driven handlers.
//!
//! Transition logic is normally encoded in handler code. For states whose
//! behavior is a plain `(event) -> target` table, `TableHandler` offers the
//! equivalent declarative encoding as an ordinary [`StateHandler`], so both
//! styles run on the same engine and can be mixed within one registry.

use crate::core::{EventKind, Guard, StateId};
use crate::dispatch::context::TransitionScope;
use crate::dispatch::error::DispatchError;
use crate::dispatch::handler::{DispatchOutcome, StateHandler};

struct TableRule<S, E, Args> {
    event: E,
    guard: Option<Guard<Args>>,
    target: S,
}

/// A [`StateHandler`] built from declarative transition rules.
///
/// Rules are consulted in the order they were added and the first match
/// wins: a rule matches when its event equals the dispatched event and its
/// guard (if any) passes against the per-call args. An event no rule
/// matches is reported as [`DispatchOutcome::Unhandled`] and falls through
/// to the context's fallback policy.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{EventKind, Guard, StateId};
/// use switchyard::dispatch::TableHandler;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Speed {
///     Off,
///     Low,
/// }
///
/// impl StateId for Speed {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::Low => "Low",
///         }
///     }
/// }
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Chain {
///     Pull,
/// }
///
/// impl EventKind for Chain {
///     fn name(&self) -> &str {
///         "Pull"
///     }
/// }
///
/// let off: TableHandler<Speed, Chain> = TableHandler::new().on(Chain::Pull, Speed::Low);
/// ```
pub struct TableHandler<S: StateId, E: EventKind, Args = ()> {
    rules: Vec<TableRule<S, E, Args>>,
}

impl<S: StateId, E: EventKind, Args> TableHandler<S, E, Args> {
    /// Create a handler with no rules. Every event is unhandled until
    /// rules are added.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add an unconditional rule: `event` transitions to `target`.
    pub fn on(mut self, event: E, target: S) -> Self {
        self.rules.push(TableRule {
            event,
            guard: None,
            target,
        });
        self
    }

    /// Add a guarded rule: `event` transitions to `target` when `guard`
    /// passes against the per-call args.
    pub fn on_when(mut self, event: E, guard: Guard<Args>, target: S) -> Self {
        self.rules.push(TableRule {
            event,
            guard: Some(guard),
            target,
        });
        self
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check whether the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<S: StateId, E: EventKind, Args> Default for TableHandler<S, E, Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateId, E: EventKind, Args> StateHandler<S, E, Args> for TableHandler<S, E, Args> {
    fn handle(
        &self,
        event: &E,
        scope: &mut TransitionScope<'_, S>,
        args: &Args,
    ) -> Result<DispatchOutcome, DispatchError> {
        for rule in &self.rules {
            if rule.event == *event && rule.guard.as_ref().is_none_or(|g| g.check(args)) {
                scope.transition_to(rule.target.clone())?;
                return Ok(DispatchOutcome::Handled);
            }
        }
        Ok(DispatchOutcome::Unhandled)
    }
}
