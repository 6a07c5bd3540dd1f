//! Builder for constructing dispatch contexts.

use crate::builder::error::BuildError;
use crate::core::{EventKind, StateId};
use crate::dispatch::{Context, DispatchRegistry, FallbackPolicy, StateHandler};
use std::sync::Arc;

/// Builder for constructing contexts with a fluent API.
///
/// Registration errors surface at the `.state()` call that caused them;
/// everything else is validated by `.build()`.
pub struct ContextBuilder<S: StateId, E: EventKind, Args = ()> {
    initial: Option<S>,
    registry: DispatchRegistry<S, E, Args>,
    policy: FallbackPolicy,
}

impl<S: StateId, E: EventKind, Args> ContextBuilder<S, E, Args> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            registry: DispatchRegistry::new(),
            policy: FallbackPolicy::default(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Register one state and its handler.
    /// Returns an error if the id is already registered.
    pub fn state<H>(mut self, id: S, handler: H) -> Result<Self, BuildError>
    where
        H: StateHandler<S, E, Args> + 'static,
    {
        self.registry.register(id, Arc::new(handler))?;
        Ok(self)
    }

    /// Set the policy for events the current handler does not recognize.
    /// Defaults to [`FallbackPolicy::Reject`].
    pub fn unhandled(mut self, policy: FallbackPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build the context.
    /// Returns an error if required fields are missing or the initial
    /// state is unregistered.
    pub fn build(self) -> Result<Context<S, E, Args>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.registry.is_empty() {
            return Err(BuildError::NoStates);
        }

        Ok(Context::with_policy(initial, self.registry, self.policy)?)
    }
}

impl<S: StateId, E: EventKind, Args> Default for ContextBuilder<S, E, Args> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RegistryError;
    use crate::dispatch::TableHandler;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Step {
        First,
        Second,
    }

    impl StateId for Step {
        fn name(&self) -> &str {
            match self {
                Self::First => "First",
                Self::Second => "Second",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Tick {
        Next,
    }

    impl EventKind for Tick {
        fn name(&self) -> &str {
            "Next"
        }
    }

    fn forward(target: Step) -> TableHandler<Step, Tick> {
        TableHandler::new().on(Tick::Next, target)
    }

    #[test]
    fn builder_validates_missing_initial_state() {
        let result = ContextBuilder::<Step, Tick>::new()
            .state(Step::First, forward(Step::Second))
            .unwrap()
            .build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_requires_states() {
        let result = ContextBuilder::<Step, Tick>::new()
            .initial(Step::First)
            .build();

        assert!(matches!(result, Err(BuildError::NoStates)));
    }

    #[test]
    fn builder_rejects_unknown_initial_state() {
        let result = ContextBuilder::<Step, Tick>::new()
            .initial(Step::Second)
            .state(Step::First, forward(Step::First))
            .unwrap()
            .build();

        assert!(matches!(
            result,
            Err(BuildError::Registry(RegistryError::UnknownState { .. }))
        ));
    }

    #[test]
    fn builder_rejects_duplicate_states() {
        let result = ContextBuilder::<Step, Tick>::new()
            .initial(Step::First)
            .state(Step::First, forward(Step::First))
            .unwrap()
            .state(Step::First, forward(Step::Second));

        assert!(matches!(
            result,
            Err(BuildError::Registry(RegistryError::DuplicateState { .. }))
        ));
    }

    #[test]
    fn fluent_api_builds_context() {
        let mut ctx = ContextBuilder::new()
            .initial(Step::First)
            .state(Step::First, forward(Step::Second))
            .unwrap()
            .state(Step::Second, forward(Step::First))
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(ctx.current(), &Step::First);
        ctx.dispatch(Tick::Next, &()).unwrap();
        assert_eq!(ctx.current(), &Step::Second);
    }

    #[test]
    fn unhandled_policy_is_passed_through() {
        let ctx = ContextBuilder::<Step, Tick>::new()
            .initial(Step::First)
            .state(Step::First, TableHandler::new())
            .unwrap()
            .unhandled(FallbackPolicy::Ignore)
            .build()
            .unwrap();

        assert_eq!(ctx.policy(), FallbackPolicy::Ignore);
    }
}
