//! Single-step undo/redo bookkeeping.
//!
//! Only one previous and one next state are ever kept. `None` means there is
//! nothing to step to in that direction.

use crate::core::StateName;

/// The previous/next pair that backs `undo` and `redo`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    previous: Option<StateName>,
    next: Option<StateName>,
}

impl History {
    /// History of a freshly constructed machine: both sides point at `state`.
    pub fn anchored(state: &StateName) -> Self {
        Self {
            previous: Some(state.clone()),
            next: Some(state.clone()),
        }
    }

    pub fn previous(&self) -> Option<&StateName> {
        self.previous.as_ref()
    }

    pub fn next(&self) -> Option<&StateName> {
        self.next.as_ref()
    }

    /// Remember the state being left by a triggered transition.
    pub(crate) fn depart(&mut self, from: StateName) {
        self.previous = Some(from);
    }

    /// Remember the state just entered by a trigger or a jump.
    pub(crate) fn arrive(&mut self, to: StateName) {
        self.next = Some(to);
    }

    /// Forget both sides.
    pub(crate) fn clear(&mut self) {
        self.previous = None;
        self.next = None;
    }

    /// State `undo` would move to, or `None` when undo is unavailable.
    ///
    /// Unavailable when there is no previous state, or when the machine sits
    /// in its initial state and the previous state is that same state.
    pub fn undo_target(&self, active: &StateName, initial: &StateName) -> Option<&StateName> {
        match &self.previous {
            None => None,
            Some(previous) if active == initial && previous == active => None,
            Some(previous) => Some(previous),
        }
    }

    /// State `redo` would move to, or `None` when redo is unavailable.
    ///
    /// Unavailable when there is no next state or the machine already sits
    /// in it.
    pub fn redo_target(&self, active: &StateName) -> Option<&StateName> {
        match &self.next {
            Some(next) if next != active => Some(next),
            _ => None,
        }
    }
}
