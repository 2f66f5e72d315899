//! Build errors for the automaton builder.

use crate::machine::AutomatonError;
use crate::validation::Problem;
use thiserror::Error;

/// Errors that can occur when building an automaton.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(name) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error(transparent)]
    Automaton(#[from] AutomatonError),

    #[error("Automaton failed validation with {} problem(s)", .problems.len())]
    Invalid { problems: Vec<Problem> },
}
