//! dfa-engine: a deterministic finite automaton engine
//!
//! States are named nodes with an accepting flag and a transition table
//! keyed by input symbol. An automaton owns its states, follows one
//! transition per symbol, and reports whether the state it ends in is
//! accepting. Transitions reference their targets by name, so cyclic graphs
//! need no shared ownership.
//!
//! # Core Concepts
//!
//! - **State**: a named node and its outgoing transitions
//! - **Automaton**: state registry, current position and transition log
//! - **Validation**: dangling references, missing initial state and
//!   unreachable states, reported as data
//! - **Builder**: a two-phase path to a validated automaton
//!
//! # Example
//!
//! ```rust
//! use dfa_engine::core::State;
//! use dfa_engine::machine::Automaton;
//!
//! let mut q0 = State::accepting("Q0");
//! q0.add_transition('x', "Q1");
//! let mut q1 = State::new("Q1");
//! q1.add_transition('y', "Q0");
//!
//! let mut automaton = Automaton::new();
//! automaton.add_state(q0).unwrap();
//! automaton.add_state(q1).unwrap();
//! automaton.set_initial_state("Q0").unwrap();
//!
//! assert!(automaton.process_str("xy"));
//! assert_eq!(automaton.get_transition_history().len(), 2);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod definition;
pub mod machine;
pub mod validation;

// Re-export commonly used types
pub use crate::builder::{AutomatonBuilder, BuildError};
pub use crate::core::{State, Symbol, TransitionLog, TransitionRecord};
pub use crate::machine::{Automaton, AutomatonError, Description};
pub use crate::validation::Problem;
