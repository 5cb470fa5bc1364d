//! Builder for constructing configurations.

use crate::builder::error::BuildError;
use crate::core::{Config, EventName, StateName, TransitionTable};
use indexmap::IndexMap;

/// Builder for constructing a [`Config`] with a fluent API.
///
/// States appear in the built configuration in the order they were first
/// mentioned, either through [`state`](Self::state) or as the source of a
/// [`transition`](Self::transition). Targets are not checked.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<StateName>,
    states: IndexMap<StateName, TransitionTable>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateName>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state. Declaring an existing state keeps its transitions.
    pub fn state(mut self, name: impl Into<StateName>) -> Self {
        self.states.entry(name.into()).or_default();
        self
    }

    /// Declare a state together with its full transition table, replacing
    /// any transitions added for it so far.
    pub fn state_with(mut self, name: impl Into<StateName>, table: TransitionTable) -> Self {
        self.states.insert(name.into(), table);
        self
    }

    /// Add a transition from `from` on `event` to `to`.
    pub fn transition(
        mut self,
        from: impl Into<StateName>,
        event: impl Into<EventName>,
        to: impl Into<StateName>,
    ) -> Self {
        self.states
            .entry(from.into())
            .or_default()
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Config, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        Ok(Config {
            initial,
            states: self.states,
        })
    }
}
