//! Pocket FSM: a small configuration-driven state machine
//!
//! A machine is described once by a [`Config`]: an initial state plus, for
//! every state, a table mapping event names to target states. The engine
//! tracks one active state, moves it on events or direct jumps, and keeps a
//! single previous/next pair for one-step undo and redo.
//!
//! # Core Concepts
//!
//! - **Config**: Static definition of states and event-driven transitions
//! - **Fsm**: Runtime engine over a config
//! - **History**: One previous and one next state backing undo/redo
//! - **Journal**: Observational log of every state change
//! - **Validation**: Opt-in structural checks that report every problem
//!
//! # Example
//!
//! ```rust
//! use pocket_fsm::{fsm_config, Fsm, FsmError};
//!
//! let config = fsm_config! {
//!     initial: "idle",
//!     "idle" => { "start" => "running" },
//!     "running" => { "stop" => "idle", "pause" => "paused" },
//!     "paused" => { "resume" => "running" },
//! };
//!
//! let mut fsm = Fsm::new(config);
//! assert_eq!(fsm.state(), "idle");
//!
//! fsm.trigger("start").unwrap();
//! assert_eq!(fsm.state(), "running");
//!
//! assert!(matches!(fsm.trigger("bogus"), Err(FsmError::UnknownEvent { .. })));
//! assert_eq!(fsm.state(), "running");
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.state(), "idle");
//! assert!(fsm.redo());
//! assert_eq!(fsm.state(), "running");
//!
//! assert_eq!(fsm.states_for("stop"), vec!["running"]);
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod error;
pub mod validation;

// Re-export commonly used types
pub use crate::builder::{ConfigBuilder, FsmBuilder};
pub use crate::core::{Config, EventName, StateName, TransitionTable};
pub use crate::engine::Fsm;
pub use crate::error::FsmError;
