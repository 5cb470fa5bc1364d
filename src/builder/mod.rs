//! Builder API for ergonomic construction.
//!
//! This module provides fluent builders and a macro for creating
//! configurations and machines with minimal boilerplate.

pub mod config;
pub mod error;
pub mod machine;
pub mod macros;

pub use config::ConfigBuilder;
pub use error::BuildError;
pub use machine::FsmBuilder;
