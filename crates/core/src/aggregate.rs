//! Aggregate trait for the in-memory domain models (inventory, order).

/// Aggregate execution semantics (pure, deterministic).
///
/// - **Decision logic**: `handle(&self, cmd)` returns events.
/// - **State mutation**: `apply(&mut self, event)` evolves state.
///
/// Splitting the two is what makes every mutation all-or-nothing: `handle`
/// validates the whole command against the current state before a single
/// event is applied. Aggregates must not perform IO.
pub trait Aggregate {
    type Command: Clone + core::fmt::Debug;
    type Event: Clone + core::fmt::Debug;
    type Error: core::fmt::Debug;

    /// Monotonically increasing version of the aggregate's state
    /// (+1 per applied event).
    fn version(&self) -> u64;

    /// Evolve in-memory state from a single event.
    ///
    /// Events returned by `handle` are assumed valid; `apply` must not fail.
    fn apply(&mut self, event: &Self::Event);

    /// Decide which events to emit given the current state and a command.
    ///
    /// This must not mutate state. State evolution is done through `apply`.
    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error>;
}
