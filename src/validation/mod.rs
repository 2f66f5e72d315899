//! Structural validation of automatons.
//!
//! Validation is purely diagnostic: it never mutates the automaton and is
//! safe to run on a partially built one. Every problem found is reported,
//! not just the first.
//!
//! # Example
//!
//! ```rust
//! use dfa_engine::core::State;
//! use dfa_engine::machine::Automaton;
//! use dfa_engine::validation::Problem;
//!
//! let mut a: State<char> = State::new("A");
//! a.add_transition('x', "GHOST");
//!
//! let mut automaton = Automaton::new();
//! automaton.add_state(a).unwrap();
//! automaton.set_initial_state("A").unwrap();
//!
//! let problems = automaton.validate();
//! assert!(problems.iter().any(|p| matches!(
//!     p,
//!     Problem::DanglingTransition { target, .. } if target == "GHOST"
//! )));
//! ```

mod problem;

pub use problem::{Problem, Severity};

use crate::core::Symbol;
use crate::machine::Automaton;
use std::collections::{HashSet, VecDeque};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Collect every structural problem, errors before warnings.
pub fn validate<S: Symbol>(automaton: &Automaton<S>) -> Vec<Problem> {
    let mut problems = Vec::new();

    if automaton.is_empty() {
        problems.push(Problem::NoStates);
    }

    if automaton.initial_state().is_none() {
        problems.push(Problem::MissingInitialState);
    }

    problems.extend(dangling_transitions(automaton));
    problems.extend(unreachable_states(automaton));
    problems
}

/// Accumulate every error-severity problem.
///
/// Warnings never fail the check.
pub fn check<S: Symbol>(automaton: &Automaton<S>) -> Validation<(), NonEmptyVec<Problem>> {
    let checks: Vec<Validation<(), NonEmptyVec<Problem>>> = validate(automaton)
        .into_iter()
        .map(|problem| {
            if problem.is_error() {
                Validation::fail(problem)
            } else {
                Validation::success(())
            }
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

fn dangling_transitions<S: Symbol>(automaton: &Automaton<S>) -> Vec<Problem> {
    automaton
        .states()
        .flat_map(|state| {
            state
                .transitions()
                .filter(move |(_, target)| !automaton.contains_state(target))
                .map(move |(symbol, target)| Problem::DanglingTransition {
                    state: state.name().to_string(),
                    symbol: format!("{:?}", symbol),
                    target: target.to_string(),
                })
        })
        .collect()
}

/// States no path from the initial state leads to.
///
/// Reachability is undefined without an initial state, so nothing is
/// reported in that case.
fn unreachable_states<S: Symbol>(automaton: &Automaton<S>) -> Vec<Problem> {
    let Some(initial) = automaton.initial_state() else {
        return Vec::new();
    };

    let mut seen: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    seen.insert(initial);
    queue.push_back(initial);

    while let Some(name) = queue.pop_front() {
        let Some(state) = automaton.state(name) else {
            continue;
        };
        for (_, target) in state.transitions() {
            if automaton.contains_state(target) && seen.insert(target) {
                queue.push_back(target);
            }
        }
    }

    automaton
        .states()
        .filter(|state| !seen.contains(state.name()))
        .map(|state| Problem::UnreachableState {
            state: state.name().to_string(),
        })
        .collect()
}
