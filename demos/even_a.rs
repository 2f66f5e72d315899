//! Even Number of 'a's
//!
//! This demo declares the automaton with the `automaton!` macro and prints
//! the transition history of a run.
//!
//! Run with: cargo run --example even_a

use dfa_engine::automaton;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "dfa_engine=info".to_string()))
        .init();
}

fn main() {
    init_tracing();

    println!("=== Strings With an Even Number of 'a's ===\n");

    let mut automaton = automaton! {
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
    .unwrap();

    for input in ["", "aa", "aaa", "bab", "abab", "bbbb", "aaabbb"] {
        let accepted = automaton.accepts_str(input).unwrap();
        println!("'{}' -> {}", input, if accepted { "ACCEPTED" } else { "REJECTED" });
    }

    println!("\nTransition history for 'abab':");
    automaton.accepts_str("abab").unwrap();
    for (i, record) in automaton.get_transition_history().iter().enumerate() {
        println!("  {}. {} --{}--> {}", i + 1, record.from, record.symbol, record.to);
    }

    println!("\n=== Demo Complete ===");
}
