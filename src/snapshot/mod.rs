//! Snapshot and restore functionality for dispatch contexts.
//!
//! A snapshot is a plain serializable value capturing where a context is
//! (initial state, current state, applied-transition history). Handlers are
//! not serializable and are NOT part of a snapshot; restoring requires the
//! caller to supply a freshly built registry.

use crate::core::{DispatchHistory, EventKind, StateId};
use crate::dispatch::{Context, DispatchRegistry, FallbackPolicy};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable capture of a dispatch context.
///
/// Encodes to JSON for readability or to a compact binary form; both
/// decoders validate the format version before returning.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Snapshot<S: StateId, E: EventKind> {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was taken
    pub timestamp: DateTime<Utc>,

    /// State the context was constructed in
    pub initial_state: S,

    /// State the context occupied when captured
    pub current_state: S,

    /// Complete applied-transition history
    pub history: DispatchHistory<S, E>,
}

impl<S: StateId, E: EventKind> Snapshot<S, E> {
    /// Capture the current position of a context.
    pub fn capture<Args>(ctx: &Context<S, E, Args>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            initial_state: ctx.initial().clone(),
            current_state: ctx.current().clone(),
            history: ctx.history().clone(),
        }
    }

    /// Encode the snapshot as JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode a snapshot from JSON, validating the format version.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate_version()?;
        Ok(snapshot)
    }

    /// Encode the snapshot as compact binary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode a snapshot from binary, validating the format version.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate_version()?;
        Ok(snapshot)
    }

    /// Rebuild a live context from this snapshot and a freshly supplied
    /// registry.
    ///
    /// Fails if the snapshot's initial or current state has no handler in
    /// `registry`.
    pub fn restore<Args>(
        self,
        registry: DispatchRegistry<S, E, Args>,
        policy: FallbackPolicy,
    ) -> Result<Context<S, E, Args>, SnapshotError> {
        self.validate_version()?;
        Ok(Context::from_parts(
            self.initial_state,
            self.current_state,
            self.history,
            registry,
            policy,
        )?)
    }

    fn validate_version(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(())
    }
}
