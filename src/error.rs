//! Errors raised by the engine.

use crate::core::{EventName, StateName};
use thiserror::Error;

/// Errors that can occur when constructing or driving a machine.
///
/// A failed operation never leaves the machine partially updated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    #[error("Config is not provided")]
    ConfigMissing,

    #[error("State '{state}' doesn't exist")]
    UnknownState { state: StateName },

    #[error("Event '{event}' doesn't exist in state '{state}'")]
    UnknownEvent { event: EventName, state: StateName },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration could not be serialized: {0}")]
    Serialization(String),
}
