//! Structural checks over a configuration using Validation.

use crate::core::Config;
use crate::validation::violations::ConfigViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check `config` for structural problems, accumulating ALL of them.
///
/// Returns `Validation::Success(())` when the configuration is sound, or
/// `Validation::Failure` with every violation found.
pub fn validate(config: &Config) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

    checks.push(if config.states.is_empty() {
        Validation::fail(ConfigViolation::NoStates)
    } else {
        Validation::success(())
    });

    checks.push(if config.contains(config.initial.as_str()) {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::UnknownInitial {
            initial: config.initial.clone(),
        })
    });

    for (state, table) in &config.states {
        for (event, target) in &table.transitions {
            if !config.contains(target.as_str()) {
                checks.push(Validation::fail(ConfigViolation::DanglingTarget {
                    state: state.clone(),
                    event: event.clone(),
                    target: target.clone(),
                }));
            }
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Violations of `config` as a plain list, empty when the configuration is sound.
pub fn violations(config: &Config) -> Vec<ConfigViolation> {
    match validate(config) {
        Validation::Success(()) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}
