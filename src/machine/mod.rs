//! The automaton and its execution engine.
//!
//! # Key Concepts
//!
//! - **Automaton**: owns its states, tracks initial and current state
//! - **Stepping**: a missing transition is a recoverable error at the
//!   single-step level and a plain reject at the sequence level
//! - **Introspection**: history snapshots and structured descriptions

mod automaton;
mod describe;
mod error;

pub use automaton::Automaton;
pub use describe::{Description, TransitionEntry};
pub use error::{AutomatonError, Result};
