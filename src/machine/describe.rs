//! Structured summaries of an automaton for display.

use serde::Serialize;
use std::fmt::{self, Debug, Display};

/// One edge of the transition relation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransitionEntry<S> {
    pub from: String,
    pub symbol: S,
    pub to: String,
}

/// Snapshot of an automaton's structure and position.
///
/// Produced by [`Automaton::describe`](crate::machine::Automaton::describe).
/// State lists follow registration order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Description<S> {
    pub states: Vec<String>,
    pub initial_state: Option<String>,
    pub accepting_states: Vec<String>,
    pub current_state: Option<String>,
    pub transitions: Vec<TransitionEntry<S>>,
}

impl<S: Debug> Display for Description<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "States: [{}]", self.states.join(", "))?;
        writeln!(
            f,
            "Initial state: {}",
            self.initial_state.as_deref().unwrap_or("<none>")
        )?;
        writeln!(f, "Accepting states: [{}]", self.accepting_states.join(", "))?;
        writeln!(
            f,
            "Current state: {}",
            self.current_state.as_deref().unwrap_or("<none>")
        )?;
        write!(f, "Transitions:")?;
        for entry in &self.transitions {
            write!(f, "\n  {} --{:?}--> {}", entry.from, entry.symbol, entry.to)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_every_section() {
        let description = Description {
            states: vec!["EVEN_A".to_string(), "ODD_A".to_string()],
            initial_state: Some("EVEN_A".to_string()),
            accepting_states: vec!["EVEN_A".to_string()],
            current_state: None,
            transitions: vec![TransitionEntry {
                from: "EVEN_A".to_string(),
                symbol: 'a',
                to: "ODD_A".to_string(),
            }],
        };

        let rendered = description.to_string();
        assert_eq!(
            rendered,
            "States: [EVEN_A, ODD_A]\n\
             Initial state: EVEN_A\n\
             Accepting states: [EVEN_A]\n\
             Current state: <none>\n\
             Transitions:\n  EVEN_A --'a'--> ODD_A"
        );
    }

    #[test]
    fn description_serializes_to_json() {
        let description = Description::<char> {
            states: vec!["A".to_string()],
            initial_state: Some("A".to_string()),
            accepting_states: vec![],
            current_state: Some("A".to_string()),
            transitions: vec![],
        };

        let json = serde_json::to_value(&description).unwrap();
        assert_eq!(json["initial_state"], "A");
        assert_eq!(json["states"][0], "A");
    }
}
