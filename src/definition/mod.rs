//! Serializable automaton definitions.
//!
//! A definition is the declarative form of an automaton: its states, their
//! accepting flags, the transition relation and the initial state. It can be
//! loaded from JSON and built into a validated automaton, or exported from
//! an existing one.
//!
//! ```rust
//! use dfa_engine::definition::AutomatonDefinition;
//!
//! let json = r#"{
//!     "initial": "R0",
//!     "states": [
//!         { "name": "R0", "accepting": true },
//!         { "name": "R1" },
//!         { "name": "R2" }
//!     ],
//!     "transitions": [
//!         { "from": "R0", "symbol": "0", "to": "R0" },
//!         { "from": "R0", "symbol": "1", "to": "R1" },
//!         { "from": "R1", "symbol": "0", "to": "R2" },
//!         { "from": "R1", "symbol": "1", "to": "R0" },
//!         { "from": "R2", "symbol": "0", "to": "R1" },
//!         { "from": "R2", "symbol": "1", "to": "R2" }
//!     ]
//! }"#;
//!
//! let definition: AutomatonDefinition<char> = AutomatonDefinition::from_json(json).unwrap();
//! let mut divisible_by_three = definition.build().unwrap();
//!
//! assert_eq!(divisible_by_three.accepts_str("110"), Ok(true));
//! assert_eq!(divisible_by_three.accepts_str("111"), Ok(false));
//! ```

use crate::builder::{AutomatonBuilder, BuildError};
use crate::core::{State, Symbol};
use crate::machine::Automaton;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while reading or writing definitions.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("Definition parsing failed: {0}")]
    ParseFailed(String),

    #[error("Definition serialization failed: {0}")]
    SerializationFailed(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateDefinition {
    pub name: String,
    #[serde(default)]
    pub accepting: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionDefinition<S: Symbol> {
    pub from: String,
    pub symbol: S,
    pub to: String,
}

/// Declarative description of an automaton.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct AutomatonDefinition<S: Symbol> {
    #[serde(default)]
    pub initial: Option<String>,
    pub states: Vec<StateDefinition>,
    #[serde(default)]
    pub transitions: Vec<TransitionDefinition<S>>,
}

impl<S: Symbol> AutomatonDefinition<S> {
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        serde_json::from_str(json).map_err(|e| DefinitionError::ParseFailed(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, DefinitionError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DefinitionError::SerializationFailed(e.to_string()))
    }

    /// Build a validated automaton positioned at the initial state.
    pub fn build(self) -> Result<Automaton<S>, BuildError> {
        let mut builder = AutomatonBuilder::new();
        for state in self.states {
            builder = builder.add_state(State::with_accepting(state.name, state.accepting));
        }
        for transition in self.transitions {
            builder = builder.transition(transition.from, transition.symbol, transition.to);
        }
        if let Some(initial) = self.initial {
            builder = builder.initial(initial);
        }
        builder.build()
    }
}

impl<S: Symbol> Automaton<S> {
    /// Export the structure of this automaton as a definition.
    ///
    /// The current position and history are not part of a definition; see
    /// [`checkpoint`](Self::checkpoint) for those.
    pub fn definition(&self) -> AutomatonDefinition<S> {
        AutomatonDefinition {
            initial: self.initial_state().map(str::to_string),
            states: self
                .states()
                .map(|state| StateDefinition {
                    name: state.name().to_string(),
                    accepting: state.is_accepting(),
                })
                .collect(),
            transitions: self
                .states()
                .flat_map(|state| {
                    state
                        .transitions()
                        .map(move |(symbol, target)| TransitionDefinition {
                            from: state.name().to_string(),
                            symbol: symbol.clone(),
                            to: target.to_string(),
                        })
                })
                .collect(),
        }
    }
}
