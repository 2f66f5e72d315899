//! Macros for declarative automaton construction.

/// Build an automaton from a declarative table.
///
/// `states` lists non-accepting states and `accepting` lists accepting ones.
/// Each transition is written `from => symbol => to`. The macro evaluates to
/// `Result<Automaton<_>, BuildError>`.
///
/// # Example
///
/// ```
/// use dfa_engine::automaton;
///
/// let mut binary = automaton! {
///     initial: "START",
///     states: ["START", "ZERO"],
///     accepting: ["ACCEPT"],
///     transitions: [
///         "START" => '0' => "ZERO",
///         "START" => '1' => "START",
///         "ZERO" => '0' => "ZERO",
///         "ZERO" => '1' => "ACCEPT",
///         "ACCEPT" => '0' => "ZERO",
///         "ACCEPT" => '1' => "START",
///     ],
/// }
/// .unwrap();
///
/// assert_eq!(binary.accepts_str("101"), Ok(true));
/// ```
#[macro_export]
macro_rules! automaton {
    (
        initial: $initial:expr,
        states: [$($state:expr),* $(,)?],
        $(accepting: [$($accepting:expr),* $(,)?],)?
        transitions: [$($from:expr => $symbol:expr => $to:expr),* $(,)?] $(,)?
    ) => {{
        let builder = $crate::builder::AutomatonBuilder::new();
        $(let builder = builder.state($state);)*
        $($(let builder = builder.accepting($accepting);)*)?
        $(let builder = builder.transition($from, $symbol, $to);)*
        builder.initial($initial).build()
    }};
}
