//! Identifier traits for states and events.
//!
//! A dispatch engine is parameterized by two opaque identifier families:
//! `StateId` names the states a context can occupy, `EventKind` names the
//! operations external callers can invoke. Both are plain comparable values
//! with no behavior of their own.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Identifier naming one state in a dispatch context.
///
/// State ids are immutable values used as registry keys and as the
/// context's current-state pointer. All methods are pure.
///
/// # Required Traits
///
/// - `Clone`: ids are copied into history records and pending transitions
/// - `Eq` + `Hash`: ids key the handler registry
/// - `Debug`: ids must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: ids must be serializable for snapshots
///
/// # Example
///
/// ```rust
/// use switchyard::core::StateId;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// impl StateId for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Locked => "Locked",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Locked.name(), "Locked");
/// ```
pub trait StateId:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/diagnostics.
    ///
    /// Returns a static string reference for zero-cost naming.
    fn name(&self) -> &str;
}

/// Identifier naming one externally invocable operation.
///
/// The set of event kinds a context understands is fixed when its handlers
/// are written; dispatching an event a handler does not recognize falls
/// through to the context's fallback policy.
///
/// # Example
///
/// ```rust
/// use switchyard::core::EventKind;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorEvent {
///     Push,
///     Lock,
///     Unlock,
/// }
///
/// impl EventKind for DoorEvent {
///     fn name(&self) -> &str {
///         match self {
///             Self::Push => "Push",
///             Self::Lock => "Lock",
///             Self::Unlock => "Unlock",
///         }
///     }
/// }
///
/// assert_eq!(DoorEvent::Push.name(), "Push");
/// ```
pub trait EventKind:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the event's name for display/diagnostics.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Active,
        Done,
    }

    impl StateId for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Active => "Active",
                Self::Done => "Done",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Start,
        Stop,
    }

    impl EventKind for TestEvent {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Stop => "Stop",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Active.name(), "Active");
        assert_eq!(TestState::Done.name(), "Done");
    }

    #[test]
    fn event_name_returns_correct_value() {
        assert_eq!(TestEvent::Start.name(), "Start");
        assert_eq!(TestEvent::Stop.name(), "Stop");
    }

    #[test]
    fn state_ids_key_a_map() {
        let mut map = HashMap::new();
        map.insert(TestState::Idle, 1);
        map.insert(TestState::Active, 2);

        assert_eq!(map.get(&TestState::Idle), Some(&1));
        assert_eq!(map.get(&TestState::Active), Some(&2));
        assert_eq!(map.get(&TestState::Done), None);
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Active;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn event_serializes_correctly() {
        let event = TestEvent::Stop;
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: TestEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }

    #[test]
    fn ids_are_cloneable_and_comparable() {
        let state = TestState::Idle;
        let cloned = state.clone();
        assert_eq!(state, cloned);
        assert_ne!(state, TestState::Done);

        let event = TestEvent::Start;
        assert_eq!(event, event.clone());
        assert_ne!(event, TestEvent::Stop);
    }
}
