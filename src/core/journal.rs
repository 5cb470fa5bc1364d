//! Append-only record of state changes.
//!
//! The journal is observational only. Undo and redo never consult it; they
//! work from the single previous/next pair the engine keeps.

use super::name::{EventName, StateName};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// What caused a recorded state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChangeKind {
    /// An event fired from the source state's transition table
    Trigger { event: EventName },
    /// A direct jump via `change_state`
    Jump,
    /// Stepped back to the previous state
    Undo,
    /// Stepped forward to the next state
    Redo,
    /// Returned to the initial state
    Reset,
}

/// Record of a single state change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// The state being left
    pub from: StateName,
    /// The state being entered
    pub to: StateName,
    /// Operation that caused the change
    pub kind: ChangeKind,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

impl JournalEntry {
    /// Create an entry stamped with the current time.
    pub fn now(from: StateName, to: StateName, kind: ChangeKind) -> Self {
        Self {
            from,
            to,
            kind,
            timestamp: Utc::now(),
        }
    }
}

/// Number of entries a journal keeps unless told otherwise.
pub const DEFAULT_JOURNAL_CAPACITY: usize = 256;

fn default_capacity() -> usize {
    DEFAULT_JOURNAL_CAPACITY
}

/// Bounded, ordered log of state changes.
///
/// Holds at most `capacity` entries; once full, each new entry evicts the
/// oldest. A capacity of zero turns journaling off. `record` returns a new
/// journal and leaves the original untouched, while the engine appends in
/// place through `push`.
///
/// # Example
///
/// ```rust
/// use pocket_fsm::core::{ChangeKind, Journal, JournalEntry, StateName};
///
/// let journal = Journal::new()
///     .record(JournalEntry::now("idle".into(), "running".into(), ChangeKind::Jump))
///     .record(JournalEntry::now("running".into(), "paused".into(), ChangeKind::Jump));
///
/// let path: Vec<&str> = journal.path().into_iter().map(StateName::as_str).collect();
/// assert_eq!(path, vec!["idle", "running", "paused"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    entries: VecDeque<JournalEntry>,
    #[serde(default = "default_capacity")]
    capacity: usize,
}

impl Default for Journal {
    fn default() -> Self {
        Self::new()
    }
}

impl Journal {
    /// Create an empty journal holding up to [`DEFAULT_JOURNAL_CAPACITY`] entries.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_JOURNAL_CAPACITY)
    }

    /// Create an empty journal holding up to `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Append an entry, returning a new journal.
    pub fn record(&self, entry: JournalEntry) -> Self {
        let mut journal = self.clone();
        journal.push(entry);
        journal
    }

    /// Append an entry in place, evicting the oldest when full.
    pub(crate) fn push(&mut self, entry: JournalEntry) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Drop every entry, keeping the capacity.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// States visited, in order: the first source state, then the target of
    /// every entry.
    pub fn path(&self) -> Vec<&StateName> {
        let mut path = Vec::new();
        if let Some(first) = self.entries.front() {
            path.push(&first.from);
        }
        for entry in &self.entries {
            path.push(&entry.to);
        }
        path
    }

    /// Time between the first and last entry, or `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.entries.front(), self.entries.back()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }

    /// Retained entries, oldest first.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &JournalEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    /// Most recent entry.
    pub fn last(&self) -> Option<&JournalEntry> {
        self.entries.back()
    }

    /// Maximum number of retained entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
