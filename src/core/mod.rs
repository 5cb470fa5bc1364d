//! Core value types.
//!
//! This module contains the data the engine runs over:
//! - State and event names
//! - The static configuration and its per-state transition tables
//! - The journal of recorded state changes
//!
//! Everything here is plain data with pure accessors.

mod config;
mod journal;
mod name;

pub use config::{Config, TransitionTable};
pub use journal::{ChangeKind, Journal, JournalEntry, DEFAULT_JOURNAL_CAPACITY};
pub use name::{EventName, StateName};
