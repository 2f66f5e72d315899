//! Binary Strings Ending in "01"
//!
//! This demo builds the automaton by hand from `State` values and walks
//! through it both a whole string at a time and one symbol at a time.
//!
//! Key concepts:
//! - States reference their targets by name
//! - `accepts_str` resets before running, `step` does not
//! - A missing transition is a recoverable error at the step level
//!
//! Run with: cargo run --example binary_suffix

use dfa_engine::core::State;
use dfa_engine::machine::Automaton;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "dfa_engine=warn".to_string()))
        .init();
}

fn build() -> Automaton<char> {
    let mut start = State::new("START");
    start.add_transition('0', "ZERO");
    start.add_transition('1', "START");

    let mut zero = State::new("ZERO");
    zero.add_transition('0', "ZERO");
    zero.add_transition('1', "ACCEPT");

    let mut accept = State::accepting("ACCEPT");
    accept.add_transition('0', "ZERO");
    accept.add_transition('1', "START");

    let mut automaton = Automaton::new();
    automaton.add_state(start).unwrap();
    automaton.add_state(zero).unwrap();
    automaton.add_state(accept).unwrap();
    automaton.set_initial_state("START").unwrap();
    automaton
}

fn main() {
    init_tracing();
    println!("=== Binary Strings Ending in '01' ===\n");

    let mut automaton = build();
    println!("{}\n", automaton.describe());

    for input in ["01", "101", "001", "1101", "10", "11", "000"] {
        let accepted = automaton.accepts_str(input).unwrap();
        println!(
            "{:>6}: {} (final state: {})",
            format!("'{}'", input),
            if accepted { "ACCEPTED" } else { "REJECTED" },
            automaton.current_state().unwrap_or("<none>")
        );
    }

    println!("\nStep-by-step:");
    automaton.reset().unwrap();
    for symbol in ['1', '0', '1', '0', '2'] {
        let from = automaton.current_state().unwrap_or("<none>").to_string();
        match automaton.step(symbol) {
            Ok(accepting) => println!(
                "  '{}': {} -> {} (accepting: {})",
                symbol,
                from,
                automaton.current_state().unwrap_or("<none>"),
                accepting
            ),
            Err(err) => println!("  '{}': {}", symbol, err),
        }
    }

    println!("\nPath: {}", automaton.history().get_path().join(" -> "));
    println!("\n=== Demo Complete ===");
}
