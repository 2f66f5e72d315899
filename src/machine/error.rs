//! Errors raised while assembling or running an automaton.

use thiserror::Error;

/// Errors that can occur when building or stepping an automaton.
///
/// Symbols are rendered with their `Debug` form so the error type stays
/// independent of the automaton's symbol type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AutomatonError {
    #[error("State '{name}' is already registered")]
    DuplicateState { name: String },

    #[error("State '{name}' does not exist")]
    UnknownState { name: String },

    #[error("No transition from state '{state}' on input {symbol}")]
    NoTransition { state: String, symbol: String },

    #[error("No initial state set")]
    NotInitialized,
}

/// Result alias for automaton operations.
pub type Result<T> = std::result::Result<T, AutomatonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_state() {
        let err = AutomatonError::UnknownState {
            name: "NonExistent".to_string(),
        };
        assert_eq!(err.to_string(), "State 'NonExistent' does not exist");

        let err = AutomatonError::NoTransition {
            state: "S2".to_string(),
            symbol: format!("{:?}", 'b'),
        };
        assert_eq!(err.to_string(), "No transition from state 'S2' on input 'b'");
        assert_eq!(AutomatonError::NotInitialized.to_string(), "No initial state set");
    }
}
