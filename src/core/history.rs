//! Transition history tracking.
//!
//! The log records every successful step an automaton takes since its last
//! reset. Rejected steps never appear in it.

use super::symbol::Symbol;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single successful step.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::TransitionRecord;
///
/// let record = TransitionRecord::new("START", '0', "ZERO");
/// assert_eq!(record.as_tuple(), ("START", &'0', "ZERO"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: Symbol> {
    /// The state the step started from
    pub from: String,
    /// The symbol consumed
    pub symbol: S,
    /// The state the step ended in
    pub to: String,
    /// When the step occurred
    pub timestamp: DateTime<Utc>,
}

impl<S: Symbol> TransitionRecord<S> {
    /// Create a record stamped with the current time.
    pub fn new(from: impl Into<String>, symbol: S, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            symbol,
            to: to.into(),
            timestamp: Utc::now(),
        }
    }

    /// The `(from, symbol, to)` triple without the timestamp.
    pub fn as_tuple(&self) -> (&str, &S, &str) {
        (&self.from, &self.symbol, &self.to)
    }
}

/// Ordered log of successful steps.
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::{TransitionLog, TransitionRecord};
///
/// let mut log = TransitionLog::new();
/// log.record(TransitionRecord::new("START", '0', "ZERO"));
/// log.record(TransitionRecord::new("ZERO", '1', "ACCEPT"));
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.get_path(), vec!["START", "ZERO", "ACCEPT"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionLog<S: Symbol> {
    transitions: Vec<TransitionRecord<S>>,
}

impl<S: Symbol> Default for TransitionLog<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> TransitionLog<S> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a record.
    pub fn record(&mut self, transition: TransitionRecord<S>) {
        self.transitions.push(transition);
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.transitions.clear();
    }

    /// Get the path of state names traversed.
    ///
    /// The path starts with the `from` of the first record followed by the
    /// `to` of each record, so it is one longer than the log. An empty log
    /// has an empty path.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfa_engine::core::{TransitionLog, TransitionRecord};
    ///
    /// let mut log: TransitionLog<char> = TransitionLog::new();
    /// assert!(log.get_path().is_empty());
    ///
    /// log.record(TransitionRecord::new("EVEN_A", 'a', "ODD_A"));
    /// assert_eq!(log.get_path(), vec!["EVEN_A", "ODD_A"]);
    /// ```
    pub fn get_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(first.from.as_str());
        }
        for transition in &self.transitions {
            path.push(transition.to.as_str());
        }
        path
    }

    /// Time between the first and last record.
    ///
    /// Returns `None` when the log is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All records in order.
    pub fn transitions(&self) -> &[TransitionRecord<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_log_is_empty() {
        let log: TransitionLog<char> = TransitionLog::new();
        assert!(log.is_empty());
        assert!(log.get_path().is_empty());
        assert!(log.duration().is_none());
    }

    #[test]
    fn record_appends_in_order() {
        let mut log = TransitionLog::new();
        log.record(TransitionRecord::new("A", 'x', "B"));
        log.record(TransitionRecord::new("B", 'y', "C"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.transitions()[0].as_tuple(), ("A", &'x', "B"));
        assert_eq!(log.transitions()[1].as_tuple(), ("B", &'y', "C"));
    }

    #[test]
    fn clear_empties_the_log() {
        let mut log = TransitionLog::new();
        log.record(TransitionRecord::new("A", 'x', "B"));
        log.clear();

        assert!(log.is_empty());
        assert!(log.get_path().is_empty());
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let mut log = TransitionLog::new();
        log.record(TransitionRecord::new("START", '1', "START"));
        log.record(TransitionRecord::new("START", '0', "ZERO"));
        log.record(TransitionRecord::new("ZERO", '1', "ACCEPT"));

        assert_eq!(log.get_path(), vec!["START", "START", "ZERO", "ACCEPT"]);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let mut log = TransitionLog::new();
        log.record(TransitionRecord::new("A", 'x', "B"));

        std::thread::sleep(std::time::Duration::from_millis(10));

        log.record(TransitionRecord::new("B", 'y', "A"));

        let duration = log.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn single_record_has_duration_zero() {
        let mut log = TransitionLog::new();
        log.record(TransitionRecord::new("A", 'x', "B"));

        assert_eq!(log.duration(), Some(std::time::Duration::from_secs(0)));
    }

    #[test]
    fn log_serializes_correctly() {
        let mut log = TransitionLog::new();
        log.record(TransitionRecord::new("A", "go".to_string(), "B"));

        let json = serde_json::to_string(&log).unwrap();
        let deserialized: TransitionLog<String> = serde_json::from_str(&json).unwrap();

        assert_eq!(log, deserialized);
    }
}
