//! Input symbols consumed by an automaton.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Marker trait for automaton input symbols.
///
/// Any cloneable, hashable, comparable and serializable type works as a
/// symbol. It is implemented automatically, so `char`, `u8`, `String` or a
/// caller-defined enum can drive an automaton without extra code.
///
/// # Required Traits
///
/// - `Clone`: symbols are copied into the transition history
/// - `Eq` + `Hash`: symbols key each state's transition table
/// - `Debug`: symbols appear in errors and logs
/// - `Serialize` + `Deserialize`: symbols are persisted in definitions and checkpoints
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::Symbol;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Coin {
///     Nickel,
///     Dime,
/// }
///
/// fn assert_symbol<S: Symbol>() {}
/// assert_symbol::<Coin>();
/// assert_symbol::<char>();
/// ```
pub trait Symbol:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

impl<T> Symbol for T where
    T: Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Signal {
        Red,
        Green,
    }

    fn dedup<S: Symbol>(symbols: Vec<S>) -> HashSet<S> {
        symbols.into_iter().collect()
    }

    #[test]
    fn primitive_types_are_symbols() {
        assert_eq!(dedup(vec!['a', 'b', 'a']).len(), 2);
        assert_eq!(dedup(vec![0u8, 1, 1]).len(), 2);
        assert_eq!(dedup(vec!["go".to_string(), "go".to_string()]).len(), 1);
    }

    #[test]
    fn caller_enums_are_symbols() {
        let set = dedup(vec![Signal::Red, Signal::Green, Signal::Red]);
        assert!(set.contains(&Signal::Red));
        assert!(set.contains(&Signal::Green));
        assert_eq!(set.len(), 2);
    }
}
