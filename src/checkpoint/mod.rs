//! Checkpoint and resume for automaton runs.
//!
//! A checkpoint captures where a run is: the current state and the
//! transition log since the last reset. It does not capture structure;
//! it is restored into an automaton with the same states.

use crate::core::{Symbol, TransitionLog};
use crate::machine::{Automaton, AutomatonError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of an automaton's position.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<S: Symbol> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Initial state of the automaton
    pub initial_state: String,

    /// Current state of the automaton
    pub current_state: String,

    /// Transition log since the last reset
    pub history: TransitionLog<S>,
}

impl<S: Symbol> Checkpoint<S> {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    fn check_version(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(())
    }
}

impl<S: Symbol> Automaton<S> {
    /// Snapshot the current position and log.
    pub fn checkpoint(&self) -> Result<Checkpoint<S>, CheckpointError> {
        let initial_state = self
            .initial_state()
            .ok_or(AutomatonError::NotInitialized)?
            .to_string();
        let current_state = self
            .current_state()
            .ok_or(AutomatonError::NotInitialized)?
            .to_string();

        Ok(Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            initial_state,
            current_state,
            history: self.history().clone(),
        })
    }

    /// Resume a run from a checkpoint.
    ///
    /// The checkpoint must agree with this automaton's initial state, every
    /// state it names must be registered, and its log must be a connected
    /// walk over this automaton's transitions from the initial state to the
    /// current state. Runs that took unrecorded steps therefore cannot be
    /// restored. Nothing changes on failure.
    pub fn restore(&mut self, checkpoint: &Checkpoint<S>) -> Result<(), CheckpointError> {
        checkpoint.check_version()?;

        let initial = self.initial_state().ok_or(AutomatonError::NotInitialized)?;
        if initial != checkpoint.initial_state {
            return Err(CheckpointError::ValidationFailed(format!(
                "initial state '{}' does not match automaton initial state '{}'",
                checkpoint.initial_state, initial
            )));
        }

        let mut names = std::iter::once(checkpoint.current_state.as_str()).chain(
            checkpoint
                .history
                .transitions()
                .iter()
                .flat_map(|record| [record.from.as_str(), record.to.as_str()]),
        );
        if let Some(missing) = names.find(|name| !self.contains_state(name)) {
            return Err(CheckpointError::ValidationFailed(format!(
                "state '{}' is not registered",
                missing
            )));
        }
        self.check_log(checkpoint)?;

        self.restore_position(
            checkpoint.current_state.clone(),
            checkpoint.history.clone(),
        );
        info!(
            checkpoint = %checkpoint.id,
            current_state = %checkpoint.current_state,
            "Restored from checkpoint"
        );
        Ok(())
    }

    /// The log must replay from the initial state to the current state.
    fn check_log(&self, checkpoint: &Checkpoint<S>) -> Result<(), CheckpointError> {
        let mut at = checkpoint.initial_state.as_str();

        for (position, record) in checkpoint.history.transitions().iter().enumerate() {
            if record.from != at {
                return Err(CheckpointError::ValidationFailed(format!(
                    "record {} starts at '{}' but the run was at '{}'",
                    position, record.from, at
                )));
            }

            let target = self
                .state(&record.from)
                .and_then(|state| state.get_next_state(&record.symbol));
            if target != Some(record.to.as_str()) {
                return Err(CheckpointError::ValidationFailed(format!(
                    "record {} ({} --{:?}--> {}) is not a transition of this automaton",
                    position, record.from, record.symbol, record.to
                )));
            }
            at = record.to.as_str();
        }

        if at != checkpoint.current_state {
            return Err(CheckpointError::ValidationFailed(format!(
                "log ends at '{}' but current state is '{}'",
                at, checkpoint.current_state
            )));
        }
        Ok(())
    }
}
