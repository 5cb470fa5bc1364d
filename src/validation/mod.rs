//! Opt-in structural validation for configurations.
//!
//! Building a machine never validates its configuration; problems surface
//! only when an operation reaches them. Hosts that want to fail fast run
//! [`validate`] first. It uses Stillwater's `Validation` type to report every
//! problem at once instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use pocket_fsm::core::{Config, TransitionTable};
//! use pocket_fsm::validation::{violations, ConfigViolation};
//!
//! let config = Config::new("idle")
//!     .with_state("idle", TransitionTable::new().with("start", "running"));
//!
//! assert_eq!(
//!     violations(&config),
//!     vec![ConfigViolation::DanglingTarget {
//!         state: "idle".into(),
//!         event: "start".into(),
//!         target: "running".into(),
//!     }]
//! );
//! ```

pub mod rules;
pub mod violations;

pub use rules::{validate, violations};
pub use violations::ConfigViolation;
