//! Automaton states and their transition tables.
//!
//! A state owns only its own outgoing transitions. Targets are stored by
//! name and resolved through the owning automaton's registry, so cyclic
//! graphs need no shared ownership.

use super::symbol::Symbol;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// A named automaton state with its outgoing transition table.
///
/// Each symbol maps to at most one target, which keeps the automaton
/// deterministic. Re-registering a symbol replaces the earlier target.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::State;
///
/// let mut start: State<char> = State::new("START");
/// start.add_transition('0', "ZERO");
/// start.add_transition('1', "START");
///
/// assert_eq!(start.get_next_state(&'0'), Some("ZERO"));
/// assert_eq!(start.get_next_state(&'x'), None);
/// assert!(!start.is_accepting());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct State<S: Symbol> {
    name: String,
    is_accepting: bool,
    transitions: HashMap<S, String>,
    // Registration order of symbols, kept for display.
    order: Vec<S>,
}

impl<S: Symbol> State<S> {
    /// Create a non-accepting state.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_accepting(name, false)
    }

    /// Create an accepting state.
    pub fn accepting(name: impl Into<String>) -> Self {
        Self::with_accepting(name, true)
    }

    /// Create a state with an explicit accepting flag.
    pub fn with_accepting(name: impl Into<String>, is_accepting: bool) -> Self {
        Self {
            name: name.into(),
            is_accepting,
            transitions: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// The state's name, unique within an automaton.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether ending input in this state accepts it.
    pub fn is_accepting(&self) -> bool {
        self.is_accepting
    }

    /// Register the transition for `symbol`, replacing any earlier target.
    ///
    /// Returns the previous target if one was replaced.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfa_engine::core::State;
    ///
    /// let mut state: State<char> = State::new("Q0");
    /// assert_eq!(state.add_transition('a', "Q1"), None);
    /// assert_eq!(state.add_transition('a', "Q2"), Some("Q1".to_string()));
    /// assert_eq!(state.get_next_state(&'a'), Some("Q2"));
    /// assert_eq!(state.get_valid_inputs().len(), 1);
    /// ```
    pub fn add_transition(&mut self, symbol: S, target: impl Into<String>) -> Option<String> {
        let target = target.into();
        debug!(state = %self.name, symbol = ?symbol, target = %target, "Added transition");

        let previous = self.transitions.insert(symbol.clone(), target);
        match &previous {
            Some(old) => debug!(
                state = %self.name,
                symbol = ?symbol,
                replaced = %old,
                "Transition overwritten"
            ),
            None => self.order.push(symbol),
        }
        previous
    }

    /// Look up the target name for `symbol`.
    ///
    /// `None` means the state has no transition for the symbol, which an
    /// automaton treats as an implicit reject.
    pub fn get_next_state(&self, symbol: &S) -> Option<&str> {
        self.transitions.get(symbol).map(String::as_str)
    }

    /// Symbols with an outgoing transition from this state.
    pub fn get_valid_inputs(&self) -> HashSet<S> {
        self.transitions.keys().cloned().collect()
    }

    /// Outgoing transitions in registration order.
    pub fn transitions(&self) -> impl Iterator<Item = (&S, &str)> + '_ {
        self.order.iter().filter_map(move |symbol| {
            self.transitions
                .get(symbol)
                .map(|target| (symbol, target.as_str()))
        })
    }

    /// Number of distinct symbols this state recognizes.
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }
}

impl<S: Symbol> std::fmt::Display for State<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "State({}, accepting={})", self.name, self.is_accepting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_no_transitions() {
        let state: State<char> = State::new("TestState");
        assert_eq!(state.name(), "TestState");
        assert!(!state.is_accepting());
        assert_eq!(state.transition_count(), 0);
        assert!(state.get_valid_inputs().is_empty());
    }

    #[test]
    fn accepting_constructor_sets_flag() {
        let state: State<char> = State::accepting("AcceptState");
        assert!(state.is_accepting());

        let explicit: State<char> = State::with_accepting("Other", false);
        assert!(!explicit.is_accepting());
    }

    #[test]
    fn get_next_state_returns_registered_target() {
        let mut state = State::new("S");
        state.add_transition('a', "NextState");

        assert_eq!(state.get_next_state(&'a'), Some("NextState"));
        assert_eq!(state.get_next_state(&'b'), None);
    }

    #[test]
    fn get_valid_inputs_lists_every_symbol() {
        let mut state = State::new("S");
        state.add_transition('a', "State1");
        state.add_transition('b', "State2");

        let inputs = state.get_valid_inputs();
        assert!(inputs.contains(&'a'));
        assert!(inputs.contains(&'b'));
        assert_eq!(inputs.len(), 2);
    }

    #[test]
    fn overwrite_replaces_target_without_duplicating() {
        let mut state = State::new("S");
        state.add_transition('a', "First");
        let previous = state.add_transition('a', "Second");

        assert_eq!(previous.as_deref(), Some("First"));
        assert_eq!(state.get_next_state(&'a'), Some("Second"));
        assert_eq!(state.transition_count(), 1);
        assert_eq!(state.transitions().count(), 1);
    }

    #[test]
    fn transitions_iterate_in_registration_order() {
        let mut state = State::new("S");
        state.add_transition('z', "Z");
        state.add_transition('a', "A");
        state.add_transition('m', "M");
        state.add_transition('a', "A2");

        let listed: Vec<(char, &str)> = state.transitions().map(|(s, t)| (*s, t)).collect();
        assert_eq!(listed, vec![('z', "Z"), ('a', "A2"), ('m', "M")]);
    }

    #[test]
    fn string_symbols_work() {
        let mut state: State<String> = State::new("Idle");
        state.add_transition("start".to_string(), "Running");

        assert_eq!(state.get_next_state(&"start".to_string()), Some("Running"));
        assert_eq!(state.get_next_state(&"stop".to_string()), None);
    }

    #[test]
    fn display_shows_name_and_flag() {
        let state: State<char> = State::accepting("ACCEPT");
        assert_eq!(state.to_string(), "State(ACCEPT, accepting=true)");
    }
}
