//! Builder for constructing machines.

use crate::core::Config;
use crate::engine::Fsm;
use crate::error::FsmError;
use crate::validation;

/// Builder for an [`Fsm`].
///
/// By default the configuration is accepted as-is. [`strict`](Self::strict)
/// runs structural validation first and rejects the configuration with every
/// problem listed.
#[derive(Debug, Default)]
pub struct FsmBuilder {
    config: Option<Config>,
    strict: bool,
    journal_capacity: Option<usize>,
}

impl FsmBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration (required).
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Validate the configuration before building.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Bound the journal to `capacity` entries (optional, zero disables it).
    pub fn journal_capacity(mut self, capacity: usize) -> Self {
        self.journal_capacity = Some(capacity);
        self
    }

    /// Build the machine.
    /// Fails with [`FsmError::ConfigMissing`] if no configuration was given.
    pub fn build(self) -> Result<Fsm, FsmError> {
        let config = self.config.ok_or(FsmError::ConfigMissing)?;

        if self.strict {
            let found = validation::violations(&config);
            if !found.is_empty() {
                let message = found
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(FsmError::InvalidConfig(message));
            }
        }

        let fsm = Fsm::new(config);
        Ok(match self.journal_capacity {
            Some(capacity) => fsm.with_journal_capacity(capacity),
            None => fsm,
        })
    }
}
