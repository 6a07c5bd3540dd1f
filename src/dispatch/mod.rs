//! The dispatch engine.
//!
//! A [`Context`] owns a registry of per-state handlers and a single mutable
//! current-state pointer. External callers push events in through
//! [`Context::dispatch`]; the current state's handler runs to completion
//! and may request a transition through the [`TransitionScope`] it
//! receives. Dispatch is synchronous and lock-free by design - concurrent
//! use of one context must be serialized by the caller.

mod context;
mod error;
mod handler;
mod table;

pub use context::{Context, DispatchRegistry, FallbackPolicy, TransitionScope};
pub use error::DispatchError;
pub use handler::{DispatchOutcome, StateHandler};
pub use table::TableHandler;
