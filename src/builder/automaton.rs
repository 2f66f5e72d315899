//! Builder for constructing validated automatons.

use crate::builder::error::BuildError;
use crate::core::{State, Symbol};
use crate::machine::Automaton;
use stillwater::validation::Validation;

/// Builder for constructing automatons with a fluent API.
///
/// States and transitions may be declared in any order; transitions are
/// wired after every state is registered. [`build`](Self::build) only
/// returns automatons that pass validation, so a built automaton is ready
/// to run.
pub struct AutomatonBuilder<S: Symbol> {
    states: Vec<State<S>>,
    transitions: Vec<(String, S, String)>,
    initial: Option<String>,
}

impl<S: Symbol> AutomatonBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            transitions: Vec::new(),
            initial: None,
        }
    }

    /// Declare a non-accepting state.
    pub fn state(self, name: impl Into<String>) -> Self {
        self.add_state(State::new(name))
    }

    /// Declare an accepting state.
    pub fn accepting(self, name: impl Into<String>) -> Self {
        self.add_state(State::accepting(name))
    }

    /// Add a pre-built state, keeping any transitions it already has.
    pub fn add_state(mut self, state: State<S>) -> Self {
        self.states.push(state);
        self
    }

    /// Declare a transition between states by name.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        symbol: S,
        to: impl Into<String>,
    ) -> Self {
        self.transitions.push((from.into(), symbol, to.into()));
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Build the automaton.
    ///
    /// Returns an error if required fields are missing, a state is declared
    /// twice, a transition starts from an undeclared state, or validation
    /// finds an error-severity problem. Unreachable states are allowed.
    pub fn build(self) -> Result<Automaton<S>, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut automaton = Automaton::new();
        for state in self.states {
            automaton.add_state(state)?;
        }
        for (from, symbol, to) in self.transitions {
            automaton.add_transition(&from, symbol, to)?;
        }
        automaton.set_initial_state(&initial)?;

        match automaton.check() {
            Validation::Success(_) => Ok(automaton),
            Validation::Failure(problems) => Err(BuildError::Invalid {
                problems: problems.iter().cloned().collect(),
            }),
        }
    }
}

impl<S: Symbol> Default for AutomatonBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
