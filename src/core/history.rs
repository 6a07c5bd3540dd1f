//! Dispatch history tracking.
//!
//! Provides immutable tracking of applied transitions over time. Only
//! transitions a handler actually requested are recorded; ignored events
//! leave no trace, so a history always equals the path the context's
//! current-state pointer has taken.

use crate::core::id::{EventKind, StateId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied transition.
///
/// Records are immutable values naming the states involved, the event whose
/// handler requested the transition, and when it was applied.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DispatchRecord<S: StateId, E: EventKind> {
    /// The state transitioned from
    pub from: S,
    /// The state transitioned to
    pub to: S,
    /// The dispatched event whose handler requested the transition
    pub event: E,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of applied transitions.
///
/// History is immutable - the `record` method returns a new history with
/// the record added, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{DispatchHistory, DispatchRecord, EventKind, StateId};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Phase {
///     Start,
///     Middle,
///     End,
/// }
///
/// impl StateId for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::Start => "Start",
///             Self::Middle => "Middle",
///             Self::End => "End",
///         }
///     }
/// }
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Step {
///     Advance,
/// }
///
/// impl EventKind for Step {
///     fn name(&self) -> &str {
///         "Advance"
///     }
/// }
///
/// let history = DispatchHistory::new()
///     .record(DispatchRecord {
///         from: Phase::Start,
///         to: Phase::Middle,
///         event: Step::Advance,
///         timestamp: Utc::now(),
///     })
///     .record(DispatchRecord {
///         from: Phase::Middle,
///         to: Phase::End,
///         event: Step::Advance,
///         timestamp: Utc::now(),
///     });
///
/// let path = history.path();
/// assert_eq!(path.len(), 3); // Start -> Middle -> End
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DispatchHistory<S: StateId, E: EventKind> {
    records: Vec<DispatchRecord<S, E>>,
}

impl<S: StateId, E: EventKind> Default for DispatchHistory<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateId, E: EventKind> DispatchHistory<S, E> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the record appended.
    pub fn record(&self, record: DispatchRecord<S, E>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the `from` state of the first
    /// record, then the `to` state of each record. Empty for an empty
    /// history.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Calculate total duration from first to last record.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all records in order.
    pub fn records(&self) -> &[DispatchRecord<S, E>] {
        &self.records
    }
}
