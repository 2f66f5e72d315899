//! Core automaton building blocks.
//!
//! This module contains the pieces every automaton is made of:
//! - Input symbols via the `Symbol` trait
//! - Named states and their transition tables
//! - The transition log recorded while running
//!
//! Nothing here knows about the automaton that owns it; states reference
//! each other only by name.

mod history;
mod state;
mod symbol;

pub use history::{TransitionLog, TransitionRecord};
pub use state::State;
pub use symbol::Symbol;
