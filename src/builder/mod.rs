//! Builder API for assembling automatons.
//!
//! The builder is the two-phase path to a runnable automaton: declare
//! states and transitions freely, then `build()` wires, validates and hands
//! back an automaton that is already positioned at its initial state.
//!
//! # Example
//!
//! ```
//! use dfa_engine::builder::AutomatonBuilder;
//!
//! let mut machine = AutomatonBuilder::new()
//!     .state("Q0")
//!     .accepting("Q1")
//!     .transition("Q0", 'x', "Q1")
//!     .transition("Q1", 'y', "Q0")
//!     .initial("Q0")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(machine.accepts_str("x"), Ok(true));
//! assert_eq!(machine.accepts_str("xy"), Ok(false));
//! ```

pub mod automaton;
pub mod error;
pub mod macros;

pub use automaton::AutomatonBuilder;
pub use error::BuildError;
