//! Aggregate trait for command/event driven domain models.

/// Aggregate execution semantics (pure, deterministic).
///
/// - **Decision logic**: `handle(&self, cmd)` returns events.
/// - **State mutation**: `apply(&mut self, event)` evolves state.
///
/// Aggregates must not perform IO or side effects. They should only return events
/// describing what happened.
pub trait Aggregate {
    type Command: Clone + core::fmt::Debug;
    type Event: Clone + core::fmt::Debug;
    type Error: core::fmt::Debug;

    /// Evolve in-memory state from a single event.
    fn apply(&mut self, event: &Self::Event);

    /// Decide which events to emit given the current state and a command.
    ///
    /// This must not mutate state. State evolution is done through `apply`.
    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error>;

    /// Handle a command and apply whatever it produced.
    ///
    /// A rejected command returns before any event is applied, so the aggregate
    /// is never left half-updated.
    fn execute(&mut self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        let events = self.handle(command)?;
        for event in &events {
            self.apply(event);
        }
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Counter {
        value: i64,
    }

    #[derive(Debug, Clone)]
    struct Bump(i64);

    #[derive(Debug, Clone)]
    struct Bumped(i64);

    impl Aggregate for Counter {
        type Command = Bump;
        type Event = Bumped;
        type Error = &'static str;

        fn apply(&mut self, event: &Self::Event) {
            self.value += event.0;
        }

        fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
            if command.0 == 0 {
                return Err("zero bump");
            }
            Ok(vec![Bumped(command.0), Bumped(command.0)])
        }
    }

    #[test]
    fn execute_applies_every_emitted_event() {
        let mut counter = Counter::default();
        let events = counter.execute(&Bump(3)).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(counter.value, 6);
    }

    #[test]
    fn rejected_command_leaves_state_untouched() {
        let mut counter = Counter::default();
        counter.execute(&Bump(1)).unwrap();
        assert_eq!(counter.execute(&Bump(0)).unwrap_err(), "zero bump");
        assert_eq!(counter.value, 2);
    }
}
