//! Binary Numbers Divisible by 3
//!
//! This demo loads the automaton from a JSON definition. Each state tracks
//! the remainder of the number read so far, so reading bit `b` from
//! remainder `r` moves to `(2r + b) mod 3`.
//!
//! Run with: cargo run --example divisible_by_three

use dfa_engine::definition::AutomatonDefinition;

const DEFINITION: &str = r#"{
    "initial": "R0",
    "states": [
        { "name": "R0", "accepting": true },
        { "name": "R1" },
        { "name": "R2" }
    ],
    "transitions": [
        { "from": "R0", "symbol": "0", "to": "R0" },
        { "from": "R0", "symbol": "1", "to": "R1" },
        { "from": "R1", "symbol": "0", "to": "R2" },
        { "from": "R1", "symbol": "1", "to": "R0" },
        { "from": "R2", "symbol": "0", "to": "R1" },
        { "from": "R2", "symbol": "1", "to": "R2" }
    ]
}"#;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "dfa_engine=warn".to_string()))
        .init();
}

fn main() {
    init_tracing();

    println!("=== Binary Numbers Divisible by 3 ===\n");

    let definition: AutomatonDefinition<char> = AutomatonDefinition::from_json(DEFINITION).unwrap();
    let mut automaton = definition.build().unwrap();

    for n in 0u32..=12 {
        let binary = format!("{:b}", n);
        let accepted = automaton.accepts_str(&binary).unwrap();
        assert_eq!(accepted, n % 3 == 0);
        println!("{:>2} = {:>4}: {}", n, binary, if accepted { "divisible" } else { "not divisible" });
    }

    println!("\n=== Demo Complete ===");
}
