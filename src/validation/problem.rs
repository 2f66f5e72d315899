//! Structural problems reported by validation.

use thiserror::Error;

/// How much a problem matters for execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The automaton cannot be run correctly
    Error,

    /// Dead configuration that does not affect results
    Warning,
}

/// A structural problem found in an automaton.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Problem {
    #[error("Automaton has no states")]
    NoStates,

    #[error("No initial state set")]
    MissingInitialState,

    #[error("State '{state}' has a transition on {symbol} to non-existent state '{target}'")]
    DanglingTransition {
        state: String,
        symbol: String,
        target: String,
    },

    #[error("State '{state}' is unreachable from the initial state")]
    UnreachableState { state: String },
}

impl Problem {
    pub fn severity(&self) -> Severity {
        match self {
            Self::UnreachableState { .. } => Severity::Warning,
            Self::NoStates | Self::MissingInitialState | Self::DanglingTransition { .. } => {
                Severity::Error
            }
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_states_are_warnings() {
        let problem = Problem::UnreachableState {
            state: "ISLAND".to_string(),
        };
        assert!(problem.is_warning());
        assert!(!problem.is_error());
    }

    #[test]
    fn structural_problems_are_errors() {
        let dangling = Problem::DanglingTransition {
            state: "A".to_string(),
            symbol: "'x'".to_string(),
            target: "GHOST".to_string(),
        };
        assert!(dangling.is_error());
        assert!(Problem::NoStates.is_error());
        assert!(Problem::MissingInitialState.is_error());
        assert_eq!(
            dangling.to_string(),
            "State 'A' has a transition on 'x' to non-existent state 'GHOST'"
        );
    }
}
