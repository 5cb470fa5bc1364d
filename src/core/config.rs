//! Static machine definition.
//!
//! A [`Config`] is supplied once and never mutated by the engine. Maps are
//! insertion-ordered so that state listings follow the order in which the
//! configuration declared them.

use super::name::{EventName, StateName};
use crate::error::FsmError;
use crate::validation::ConfigViolation;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outgoing transitions of a single state, keyed by event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionTable {
    /// Event name to target state name
    #[serde(default)]
    pub transitions: IndexMap<EventName, StateName>,
}

impl TransitionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition, returning the table for chaining.
    pub fn with(mut self, event: impl Into<EventName>, target: impl Into<StateName>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Target state for `event`, if the table defines one.
    pub fn target(&self, event: &str) -> Option<&StateName> {
        self.transitions.get(event)
    }

    /// Whether the table defines `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }

    /// Events defined by this table, in declaration order.
    pub fn events(&self) -> impl Iterator<Item = &EventName> {
        self.transitions.keys()
    }
}

impl<E, S> FromIterator<(E, S)> for TransitionTable
where
    E: Into<EventName>,
    S: Into<StateName>,
{
    fn from_iter<I: IntoIterator<Item = (E, S)>>(iter: I) -> Self {
        Self {
            transitions: iter
                .into_iter()
                .map(|(event, target)| (event.into(), target.into()))
                .collect(),
        }
    }
}

/// Complete machine definition: the initial state plus every state's
/// transition table.
///
/// Neither `initial` nor the transition targets are checked against
/// `states` here. Use [`Config::validate`] for that.
///
/// # Example
///
/// ```rust
/// use pocket_fsm::core::Config;
///
/// let config = Config::from_json(r#"{
///     "initial": "idle",
///     "states": {
///         "idle": { "transitions": { "start": "running" } },
///         "running": { "transitions": { "stop": "idle" } }
///     }
/// }"#).unwrap();
///
/// assert_eq!(config.initial, "idle");
/// assert!(config.contains("running"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// State the machine starts in and returns to on reset
    pub initial: StateName,
    /// State name to its transition table, in declaration order
    pub states: IndexMap<StateName, TransitionTable>,
}

impl Config {
    /// Create a configuration with no states yet.
    pub fn new(initial: impl Into<StateName>) -> Self {
        Self {
            initial: initial.into(),
            states: IndexMap::new(),
        }
    }

    /// Add a state with its transition table, returning the config for chaining.
    pub fn with_state(mut self, name: impl Into<StateName>, table: TransitionTable) -> Self {
        self.states.insert(name.into(), table);
        self
    }

    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        serde_json::from_str(json).map_err(|e| FsmError::InvalidConfig(e.to_string()))
    }

    /// Serialize the configuration to JSON text.
    pub fn to_json(&self) -> Result<String, FsmError> {
        serde_json::to_string(self).map_err(|e| FsmError::Serialization(e.to_string()))
    }

    /// Whether `state` is a configured state.
    pub fn contains(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    /// Transition table of `state`, if configured.
    pub fn table(&self, state: &str) -> Option<&TransitionTable> {
        self.states.get(state)
    }

    /// Check the configuration for structural problems, collecting all of them.
    ///
    /// See [`crate::validation::validate`].
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        crate::validation::validate(self)
    }
}
