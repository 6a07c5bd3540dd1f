//! State registry mapping identifiers to their handlers.
//!
//! The registry is the leaf component of the engine: it holds state objects
//! and their identifiers, and guarantees that every id the context can reach
//! resolves to exactly one handler.

use crate::core::id::StateId;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// `register` was called twice for the same id. The first mapping is
    /// retained.
    #[error("state '{state}' is already registered")]
    DuplicateState { state: String },

    /// An id was referenced that has no registered handler.
    #[error("no handler registered for state '{state}'")]
    UnknownState { state: String },
}

/// Membership view over a registry, independent of its handler type.
///
/// Transition scopes validate target ids through this trait, so the scope
/// type does not have to name the registry's handler parameter.
pub trait StateLookup<S: StateId> {
    /// Check whether `id` has a registered handler.
    fn contains_id(&self, id: &S) -> bool;
}

/// Map from state ids to shared handlers.
///
/// A registry is populated once, before the owning context is built, and is
/// immutable afterwards; there is no removal operation. `H` is normally the
/// `dyn StateHandler` trait object behind the
/// [`DispatchRegistry`](crate::dispatch::DispatchRegistry) alias, but any
/// shared per-state capability works.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{StateId, StateRegistry};
/// use serde::{Deserialize, Serialize};
/// use std::sync::Arc;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Phase {
///     One,
///     Two,
/// }
///
/// impl StateId for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::One => "One",
///             Self::Two => "Two",
///         }
///     }
/// }
///
/// let mut registry: StateRegistry<Phase, &'static str> = StateRegistry::new();
/// registry.register(Phase::One, Arc::new("first")).unwrap();
///
/// assert!(registry.contains(&Phase::One));
/// assert!(registry.resolve(&Phase::Two).is_err());
/// ```
pub struct StateRegistry<S: StateId, H: ?Sized> {
    handlers: HashMap<S, Arc<H>>,
}

impl<S: StateId, H: ?Sized> StateRegistry<S, H> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Insert one id-to-handler mapping.
    ///
    /// Fails with [`RegistryError::DuplicateState`] if `id` is already
    /// registered; the existing mapping is retained.
    pub fn register(&mut self, id: S, handler: Arc<H>) -> Result<(), RegistryError> {
        if self.handlers.contains_key(&id) {
            return Err(RegistryError::DuplicateState {
                state: id.name().to_string(),
            });
        }
        self.handlers.insert(id, handler);
        Ok(())
    }

    /// Look up the handler registered for `id`.
    ///
    /// Fails with [`RegistryError::UnknownState`] if `id` is absent.
    pub fn resolve(&self, id: &S) -> Result<&Arc<H>, RegistryError> {
        self.handlers.get(id).ok_or_else(|| RegistryError::UnknownState {
            state: id.name().to_string(),
        })
    }

    /// Check whether `id` has a registered handler.
    pub fn contains(&self, id: &S) -> bool {
        self.handlers.contains_key(id)
    }

    /// Iterate over the registered ids in arbitrary order.
    pub fn ids(&self) -> impl Iterator<Item = &S> {
        self.handlers.keys()
    }

    /// Number of registered states.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check whether the registry holds no states.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<S: StateId, H: ?Sized> Default for StateRegistry<S, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateId, H: ?Sized> StateLookup<S> for StateRegistry<S, H> {
    fn contains_id(&self, id: &S) -> bool {
        self.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        A,
        B,
        C,
    }

    impl StateId for TestState {
        fn name(&self) -> &str {
            match self {
                Self::A => "A",
                Self::B => "B",
                Self::C => "C",
            }
        }
    }

    fn registry_of(entries: &[(TestState, u32)]) -> StateRegistry<TestState, u32> {
        let mut registry = StateRegistry::new();
        for (id, tag) in entries {
            registry.register(id.clone(), Arc::new(*tag)).unwrap();
        }
        registry
    }

    #[test]
    fn new_registry_is_empty() {
        let registry: StateRegistry<TestState, u32> = StateRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(!registry.contains(&TestState::A));
    }

    #[test]
    fn register_then_resolve() {
        let registry = registry_of(&[(TestState::A, 1), (TestState::B, 2)]);

        assert_eq!(registry.len(), 2);
        assert_eq!(**registry.resolve(&TestState::A).unwrap(), 1);
        assert_eq!(**registry.resolve(&TestState::B).unwrap(), 2);
    }

    #[test]
    fn resolve_unknown_state_fails() {
        let registry = registry_of(&[(TestState::A, 1)]);

        let err = registry.resolve(&TestState::C).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::UnknownState { ref state } if state == "C"
        ));
    }

    #[test]
    fn duplicate_registration_retains_first_mapping() {
        let mut registry = registry_of(&[(TestState::A, 1)]);

        let err = registry.register(TestState::A, Arc::new(99)).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::DuplicateState { ref state } if state == "A"
        ));

        assert_eq!(registry.len(), 1);
        assert_eq!(**registry.resolve(&TestState::A).unwrap(), 1);
    }

    #[test]
    fn ids_enumerates_registered_states() {
        let registry = registry_of(&[(TestState::A, 1), (TestState::C, 3)]);

        let mut ids: Vec<&TestState> = registry.ids().collect();
        ids.sort_by(|a, b| a.name().cmp(b.name()));

        assert_eq!(ids, vec![&TestState::A, &TestState::C]);
    }

    #[test]
    fn lookup_trait_matches_contains() {
        let registry = registry_of(&[(TestState::B, 2)]);
        let lookup: &dyn StateLookup<TestState> = &registry;

        assert!(lookup.contains_id(&TestState::B));
        assert!(!lookup.contains_id(&TestState::A));
    }

    #[test]
    fn error_messages_name_the_state() {
        let err = RegistryError::UnknownState {
            state: "Ghost".to_string(),
        };
        assert_eq!(err.to_string(), "no handler registered for state 'Ghost'");

        let err = RegistryError::DuplicateState {
            state: "A".to_string(),
        };
        assert_eq!(err.to_string(), "state 'A' is already registered");
    }
}
