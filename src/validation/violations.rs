//! Structural problems found in a configuration.

use crate::core::{EventName, StateName};
use thiserror::Error;

/// A single structural problem in a [`Config`](crate::core::Config).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("Configuration defines no states")]
    NoStates,

    #[error("Initial state '{initial}' is not a configured state")]
    UnknownInitial { initial: StateName },

    #[error("Event '{event}' in state '{state}' targets unknown state '{target}'")]
    DanglingTarget {
        state: StateName,
        event: EventName,
        target: StateName,
    },
}
