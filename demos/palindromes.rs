//! Length-3 Palindromes over {a, b}
//!
//! This demo builds a partial automaton with the builder. Strings that fall
//! off the graph are rejected, and validation points out dead states.
//!
//! Run with: cargo run --example palindromes

use dfa_engine::builder::AutomatonBuilder;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "dfa_engine=warn".to_string()))
        .init();
}

fn main() {
    init_tracing();

    println!("=== Length-3 Palindromes ===\n");

    let mut automaton = AutomatonBuilder::new()
        .state("START")
        .state("A_FIRST")
        .state("B_FIRST")
        .state("AA_SECOND")
        .state("AB_SECOND")
        .state("BA_SECOND")
        .state("BB_SECOND")
        .accepting("AAA")
        .accepting("ABA")
        .accepting("BAB")
        .accepting("BBB")
        .transition("START", 'a', "A_FIRST")
        .transition("START", 'b', "B_FIRST")
        .transition("A_FIRST", 'a', "AA_SECOND")
        .transition("A_FIRST", 'b', "AB_SECOND")
        .transition("B_FIRST", 'a', "BA_SECOND")
        .transition("B_FIRST", 'b', "BB_SECOND")
        .transition("AA_SECOND", 'a', "AAA")
        .transition("AB_SECOND", 'a', "ABA")
        .transition("BA_SECOND", 'b', "BAB")
        .transition("BB_SECOND", 'b', "BBB")
        .initial("START")
        .build()
        .unwrap();

    for input in ["aaa", "aba", "bab", "bbb", "abb", "ab", "abab"] {
        let accepted = automaton.accepts_str(input).unwrap();
        println!(
            "'{}' -> {} after {} step(s)",
            input,
            if accepted { "ACCEPTED" } else { "REJECTED" },
            automaton.history().len()
        );
    }

    println!("\nValidation:");
    let problems = automaton.validate();
    if problems.is_empty() {
        println!("  no problems");
    }
    for problem in problems {
        println!("  {:?}: {}", problem.severity(), problem);
    }

    println!("\n=== Demo Complete ===");
}
