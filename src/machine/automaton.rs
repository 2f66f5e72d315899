//! Deterministic automaton that owns its states and runs input through them.

use crate::core::{State, Symbol, TransitionLog, TransitionRecord};
use crate::machine::describe::{Description, TransitionEntry};
use crate::machine::error::{AutomatonError, Result};
use crate::validation::{self, Problem};
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{debug, info, warn};

/// A deterministic finite automaton.
///
/// States live in an arena in registration order and are looked up by name,
/// so transitions can form cycles without shared ownership. The automaton
/// tracks its current state and a log of every successful step since the
/// last reset.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::State;
/// use dfa_engine::machine::Automaton;
///
/// let mut even = State::accepting("EVEN_A");
/// even.add_transition('a', "ODD_A");
/// even.add_transition('b', "EVEN_A");
///
/// let mut odd = State::new("ODD_A");
/// odd.add_transition('a', "EVEN_A");
/// odd.add_transition('b', "ODD_A");
///
/// let mut automaton = Automaton::new();
/// automaton.add_state(even).unwrap();
/// automaton.add_state(odd).unwrap();
/// automaton.set_initial_state("EVEN_A").unwrap();
///
/// assert!(automaton.process_str("abab"));
/// automaton.reset().unwrap();
/// assert!(!automaton.process_str("bab"));
/// ```
#[derive(Clone, Debug)]
pub struct Automaton<S: Symbol> {
    states: Vec<State<S>>,
    index: HashMap<String, usize>,
    initial: Option<String>,
    current: Option<String>,
    history: TransitionLog<S>,
}

impl<S: Symbol> Default for Automaton<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> Automaton<S> {
    /// Create an automaton with no states and no initial state.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            index: HashMap::new(),
            initial: None,
            current: None,
            history: TransitionLog::new(),
        }
    }

    /// Register a state.
    ///
    /// Fails with [`AutomatonError::DuplicateState`] if a state with the same
    /// name is already registered. Registering a state never designates it as
    /// the initial state.
    pub fn add_state(&mut self, state: State<S>) -> Result<()> {
        if self.index.contains_key(state.name()) {
            return Err(AutomatonError::DuplicateState {
                name: state.name().to_string(),
            });
        }

        info!("Added state: {}", state);
        self.index.insert(state.name().to_string(), self.states.len());
        self.states.push(state);
        Ok(())
    }

    /// Wire a transition on an already registered state.
    ///
    /// Only `from` must exist; the target is resolved when the transition is
    /// taken and dangling targets are reported by [`validate`](Self::validate).
    /// Returns the target that was replaced, if any.
    pub fn add_transition(
        &mut self,
        from: &str,
        symbol: S,
        to: impl Into<String>,
    ) -> Result<Option<String>> {
        let idx = self.position(from)?;
        Ok(self.states[idx].add_transition(symbol, to))
    }

    /// Designate the initial state and move there.
    ///
    /// This is an implicit reset: the transition log is cleared.
    pub fn set_initial_state(&mut self, name: &str) -> Result<()> {
        self.position(name)?;

        self.initial = Some(name.to_string());
        self.current = Some(name.to_string());
        self.history.clear();
        info!("Set initial state to: {}", name);
        Ok(())
    }

    /// Return to the initial state and clear the transition log.
    ///
    /// Fails with [`AutomatonError::NotInitialized`] if no initial state was
    /// ever designated.
    pub fn reset(&mut self) -> Result<()> {
        let initial = self.initial.clone().ok_or(AutomatonError::NotInitialized)?;
        self.current = Some(initial);
        self.history.clear();
        debug!("Automaton reset to initial state");
        Ok(())
    }

    /// Consume one symbol, recording the step in the log.
    ///
    /// See [`step_with`](Self::step_with).
    pub fn step(&mut self, symbol: S) -> Result<bool> {
        self.step_with(symbol, true)
    }

    /// Consume one symbol and return whether the new state is accepting.
    ///
    /// A missing transition fails with [`AutomatonError::NoTransition`] and
    /// leaves the automaton exactly as it was: the current state is unchanged
    /// and nothing is logged. The caller may try another symbol.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfa_engine::core::State;
    /// use dfa_engine::machine::{Automaton, AutomatonError};
    ///
    /// let mut a = State::new("A");
    /// a.add_transition('x', "B");
    ///
    /// let mut automaton = Automaton::new();
    /// automaton.add_state(a).unwrap();
    /// automaton.add_state(State::accepting("B")).unwrap();
    /// automaton.set_initial_state("A").unwrap();
    ///
    /// assert!(matches!(
    ///     automaton.step('y'),
    ///     Err(AutomatonError::NoTransition { .. })
    /// ));
    /// assert_eq!(automaton.current_state(), Some("A"));
    ///
    /// assert_eq!(automaton.step('x'), Ok(true));
    /// assert_eq!(automaton.current_state(), Some("B"));
    /// ```
    pub fn step_with(&mut self, symbol: S, record: bool) -> Result<bool> {
        let from = self.current.as_deref().ok_or(AutomatonError::NotInitialized)?;
        let state = self.state(from).ok_or_else(|| AutomatonError::UnknownState {
            name: from.to_string(),
        })?;

        let Some(target) = state.get_next_state(&symbol) else {
            warn!(
                state = %from,
                symbol = ?symbol,
                valid_inputs = ?state.get_valid_inputs(),
                "Invalid transition"
            );
            return Err(AutomatonError::NoTransition {
                state: from.to_string(),
                symbol: format!("{:?}", symbol),
            });
        };

        let Some(next) = self.state(target) else {
            warn!(state = %from, target = %target, "Transition targets an unregistered state");
            return Err(AutomatonError::UnknownState {
                name: target.to_string(),
            });
        };

        let accepting = next.is_accepting();
        let from = from.to_string();
        let to = next.name().to_string();

        debug!("Transition successful: {} --{:?}--> {}", from, symbol, to);
        if record {
            self.history
                .record(TransitionRecord::new(from, symbol, to.clone()));
        }
        self.current = Some(to);
        Ok(accepting)
    }

    /// Run a whole sequence, recording every step.
    ///
    /// See [`process_sequence_with`](Self::process_sequence_with).
    pub fn process_sequence<I>(&mut self, symbols: I) -> bool
    where
        I: IntoIterator<Item = S>,
    {
        self.process_sequence_with(symbols, true)
    }

    /// Run symbols in order from the current state and report acceptance.
    ///
    /// Nothing is reset first; call [`reset`](Self::reset) for a fresh
    /// evaluation or use [`accepts`](Self::accepts). Processing stops at the
    /// first symbol that cannot be consumed and the sequence is rejected;
    /// step errors never escape this method. Steps taken before the failure
    /// stay in the log.
    ///
    /// An empty sequence is accepted exactly when the current state is.
    pub fn process_sequence_with<I>(&mut self, symbols: I, record: bool) -> bool
    where
        I: IntoIterator<Item = S>,
    {
        for (position, symbol) in symbols.into_iter().enumerate() {
            if let Err(err) = self.step_with(symbol, record) {
                warn!(position, error = %err, "Sequence rejected");
                return false;
            }
        }

        let accepted = self.is_in_accepting_state();
        debug!(
            accepted,
            final_state = ?self.current_state(),
            "Sequence processed"
        );
        accepted
    }

    /// Reset, then run the sequence.
    ///
    /// Fails only when no initial state is set.
    pub fn accepts<I>(&mut self, symbols: I) -> Result<bool>
    where
        I: IntoIterator<Item = S>,
    {
        self.reset()?;
        Ok(self.process_sequence(symbols))
    }

    /// Name of the state the automaton is in, if initialized.
    pub fn current_state(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Name of the designated initial state.
    pub fn initial_state(&self) -> Option<&str> {
        self.initial.as_deref()
    }

    /// Whether the current state is accepting. `false` when uninitialized.
    pub fn is_in_accepting_state(&self) -> bool {
        self.current
            .as_deref()
            .and_then(|name| self.state(name))
            .is_some_and(State::is_accepting)
    }

    pub fn state(&self, name: &str) -> Option<&State<S>> {
        self.index.get(name).map(|&idx| &self.states[idx])
    }

    pub fn contains_state(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Registered states in registration order.
    pub fn states(&self) -> impl Iterator<Item = &State<S>> + '_ {
        self.states.iter()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The transition log since the last reset.
    pub fn history(&self) -> &TransitionLog<S> {
        &self.history
    }

    /// Snapshot of the transition log since the last reset.
    pub fn get_transition_history(&self) -> Vec<TransitionRecord<S>> {
        self.history.transitions().to_vec()
    }

    /// Report every structural problem. An empty list means valid.
    pub fn validate(&self) -> Vec<Problem> {
        let problems = validation::validate(self);
        if problems.is_empty() {
            info!("Automaton validation passed");
        }
        for problem in &problems {
            warn!(severity = ?problem.severity(), "{}", problem);
        }
        problems
    }

    /// Whether validation finds no error-severity problems.
    pub fn is_valid(&self) -> bool {
        self.check().is_success()
    }

    /// Accumulate every error-severity problem.
    pub fn check(&self) -> Validation<(), NonEmptyVec<Problem>> {
        validation::check(self)
    }

    /// Structured summary of the automaton for display.
    pub fn describe(&self) -> Description<S> {
        Description {
            states: self.states.iter().map(|s| s.name().to_string()).collect(),
            initial_state: self.initial.clone(),
            accepting_states: self
                .states
                .iter()
                .filter(|s| s.is_accepting())
                .map(|s| s.name().to_string())
                .collect(),
            current_state: self.current.clone(),
            transitions: self
                .states
                .iter()
                .flat_map(|state| {
                    state.transitions().map(move |(symbol, target)| TransitionEntry {
                        from: state.name().to_string(),
                        symbol: symbol.clone(),
                        to: target.to_string(),
                    })
                })
                .collect(),
        }
    }

    pub(crate) fn restore_position(&mut self, current: String, history: TransitionLog<S>) {
        self.current = Some(current);
        self.history = history;
    }

    fn position(&self, name: &str) -> Result<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| AutomatonError::UnknownState {
                name: name.to_string(),
            })
    }
}

impl Automaton<char> {
    /// Run the characters of `input` from the current state.
    pub fn process_str(&mut self, input: &str) -> bool {
        self.process_sequence(input.chars())
    }

    /// Reset, then run the characters of `input`.
    pub fn accepts_str(&mut self, input: &str) -> Result<bool> {
        self.accepts(input.chars())
    }
}
