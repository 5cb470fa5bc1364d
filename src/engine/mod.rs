//! The runtime engine.
//!
//! [`Fsm`] owns a [`Config`](crate::core::Config) and tracks the active
//! state plus a single previous/next pair for undo and redo. Every operation
//! is synchronous and either fully applies or leaves the machine unchanged.

mod history;
mod machine;

pub use history::History;
pub use machine::Fsm;
