//! Switchyard: a minimal finite-state dispatch engine
//!
//! A [`Context`] holds the identifier of its current state and forwards
//! every dispatched event to the handler registered for that state. Handlers
//! request transitions through a narrow [`TransitionScope`] passed into each
//! call, so all transition logic lives in per-state handler code and the
//! current-state pointer has exactly one writer.
//!
//! Dispatch is synchronous and pure in-memory: the handler runs to
//! completion before `dispatch` returns, nothing blocks, nothing retries,
//! and the engine itself never logs.
//!
//! # Core Concepts
//!
//! - **Identifiers**: opaque [`StateId`] / [`EventKind`] values naming
//!   states and externally invocable operations
//! - **Registry**: an immutable map from state id to its handler, built
//!   once before the context
//! - **Context**: the single dispatch entry point; the only component that
//!   mutates the current state
//! - **History**: immutable tracking of applied transitions over time
//!
//! # Example
//!
//! ```rust
//! use switchyard::{event_kind, state_id};
//! use switchyard::dispatch::{
//!     Context, DispatchError, DispatchOutcome, DispatchRegistry, StateHandler, TableHandler,
//!     TransitionScope,
//! };
//! use std::sync::Arc;
//!
//! state_id! {
//!     enum Signal {
//!         A,
//!         B,
//!         C,
//!     }
//! }
//!
//! event_kind! {
//!     enum Input {
//!         On,
//!         Off,
//!         Ack,
//!     }
//! }
//!
//! // Transition logic in handler code...
//! struct StateA;
//!
//! impl StateHandler<Signal, Input> for StateA {
//!     fn handle(
//!         &self,
//!         event: &Input,
//!         scope: &mut TransitionScope<'_, Signal>,
//!         _args: &(),
//!     ) -> Result<DispatchOutcome, DispatchError> {
//!         match event {
//!             Input::On => scope.transition_to(Signal::C)?,
//!             Input::Off => scope.transition_to(Signal::B)?,
//!             Input::Ack => scope.transition_to(Signal::A)?,
//!         }
//!         Ok(DispatchOutcome::Handled)
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut registry: DispatchRegistry<Signal, Input> = DispatchRegistry::new();
//! registry.register(Signal::A, Arc::new(StateA))?;
//!
//! // ...or declarative tables, mixed freely in one registry.
//! registry.register(
//!     Signal::B,
//!     Arc::new(
//!         TableHandler::new()
//!             .on(Input::On, Signal::A)
//!             .on(Input::Off, Signal::C),
//!     ),
//! )?;
//! registry.register(
//!     Signal::C,
//!     Arc::new(TableHandler::new().on(Input::On, Signal::B)),
//! )?;
//!
//! let mut machine = Context::new(Signal::A, registry)?;
//!
//! machine.dispatch(Input::On, &())?;
//! assert_eq!(machine.current(), &Signal::C);
//!
//! machine.dispatch(Input::On, &())?;
//! assert_eq!(machine.current(), &Signal::B);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod core;
pub mod dispatch;
pub mod snapshot;

// Re-export commonly used types
pub use crate::builder::{BuildError, ContextBuilder};
pub use crate::core::{
    DispatchHistory, DispatchRecord, EventKind, Guard, RegistryError, StateId, StateLookup,
    StateRegistry,
};
pub use crate::dispatch::{
    Context, DispatchError, DispatchOutcome, DispatchRegistry, FallbackPolicy, StateHandler,
    TableHandler, TransitionScope,
};
pub use crate::snapshot::{Snapshot, SnapshotError, SNAPSHOT_VERSION};
