//! Property-based tests for automaton execution.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use dfa_engine::automaton;
use dfa_engine::core::State;
use dfa_engine::machine::Automaton;
use proptest::prelude::*;

fn even_a() -> Automaton<char> {
    automaton! {
        initial: "EVEN_A",
        states: ["ODD_A"],
        accepting: ["EVEN_A"],
        transitions: [
            "EVEN_A" => 'a' => "ODD_A",
            "ODD_A" => 'a' => "EVEN_A",
            "EVEN_A" => 'b' => "EVEN_A",
            "ODD_A" => 'b' => "ODD_A",
        ],
    }
    .unwrap()
}

fn binary_suffix() -> Automaton<char> {
    automaton! {
        initial: "START",
        states: ["START", "ZERO"],
        accepting: ["ACCEPT"],
        transitions: [
            "START" => '0' => "ZERO",
            "START" => '1' => "START",
            "ZERO" => '0' => "ZERO",
            "ZERO" => '1' => "ACCEPT",
            "ACCEPT" => '0' => "ZERO",
            "ACCEPT" => '1' => "START",
        ],
    }
    .unwrap()
}

prop_compose! {
    fn ab_string()(symbols in prop::collection::vec(prop::sample::select(vec!['a', 'b']), 0..32)) -> String {
        symbols.into_iter().collect()
    }
}

prop_compose! {
    fn abc_string()(symbols in prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c']), 0..32)) -> String {
        symbols.into_iter().collect()
    }
}

prop_compose! {
    fn binary_string()(symbols in prop::collection::vec(prop::sample::select(vec!['0', '1']), 0..32)) -> String {
        symbols.into_iter().collect()
    }
}

proptest! {
    #[test]
    fn transition_table_stays_deterministic(
        writes in prop::collection::vec((prop::sample::select(vec!['a', 'b', 'c']), 0..5usize), 0..40)
    ) {
        let mut state = State::new("S");
        let mut expected = std::collections::HashMap::new();

        for (symbol, target) in &writes {
            let target = format!("T{}", target);
            state.add_transition(*symbol, target.clone());
            expected.insert(*symbol, target);
        }

        prop_assert!(state.get_valid_inputs().len() <= 3);
        prop_assert_eq!(state.transition_count(), expected.len());
        for (symbol, target) in &expected {
            prop_assert_eq!(state.get_next_state(symbol), Some(target.as_str()));
            prop_assert_eq!(state.get_next_state(symbol), state.get_next_state(symbol));
        }
    }

    #[test]
    fn reset_is_idempotent(input in ab_string()) {
        let mut automaton = even_a();
        automaton.process_str(&input);

        automaton.reset().unwrap();
        let first = automaton.current_state().map(str::to_string);
        prop_assert!(automaton.get_transition_history().is_empty());

        automaton.reset().unwrap();
        prop_assert_eq!(automaton.current_state().map(str::to_string), first);
        prop_assert!(automaton.get_transition_history().is_empty());
    }

    #[test]
    fn complete_automaton_logs_every_symbol(input in ab_string()) {
        let mut automaton = even_a();
        automaton.reset().unwrap();
        automaton.process_str(&input);

        prop_assert_eq!(automaton.get_transition_history().len(), input.chars().count());
    }

    #[test]
    fn history_path_is_connected(input in binary_string()) {
        let mut automaton = binary_suffix();
        automaton.process_str(&input);

        let history = automaton.get_transition_history();
        for pair in history.windows(2) {
            prop_assert_eq!(&pair[0].to, &pair[1].from);
        }
        if let Some(last) = history.last() {
            prop_assert_eq!(automaton.current_state(), Some(last.to.as_str()));
        }
    }

    #[test]
    fn even_a_counts_parity(input in ab_string()) {
        let mut automaton = even_a();
        let expected = input.chars().filter(|c| *c == 'a').count() % 2 == 0;
        prop_assert_eq!(automaton.accepts_str(&input), Ok(expected));
    }

    #[test]
    fn binary_suffix_matches_ends_with(input in binary_string()) {
        let mut automaton = binary_suffix();
        prop_assert_eq!(automaton.accepts_str(&input), Ok(input.ends_with("01")));
    }

    #[test]
    fn rejection_halts_history_growth(input in abc_string()) {
        let mut automaton = even_a();
        let accepted = automaton.accepts_str(&input).unwrap();

        match input.find('c') {
            Some(position) => {
                prop_assert!(!accepted);
                prop_assert_eq!(automaton.get_transition_history().len(), position);
            }
            None => prop_assert_eq!(automaton.get_transition_history().len(), input.len()),
        }
    }

    #[test]
    fn empty_input_reflects_current_state(prefix in ab_string()) {
        let mut automaton = even_a();
        automaton.process_str(&prefix);

        let before = automaton.current_state().map(str::to_string);
        let accepting = automaton.is_in_accepting_state();

        prop_assert_eq!(automaton.process_str(""), accepting);
        prop_assert_eq!(automaton.current_state().map(str::to_string), before);
    }
}
