//! Builder API for ergonomic context construction.
//!
//! This module provides a fluent builder and identifier macros for creating
//! dispatch contexts with minimal boilerplate while keeping construction
//! failures typed.

pub mod context;
pub mod error;
pub mod macros;

pub use context::ContextBuilder;
pub use error::BuildError;
