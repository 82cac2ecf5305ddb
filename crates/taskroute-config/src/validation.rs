// SPDX-FileCopyrightText: 2026 Taskroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as non-empty model names and known log levels.

use tracing::warn;

use crate::diagnostic::ConfigError;
use crate::model::{RoutingConfig, TaskrouteConfig};

/// Log levels accepted by `logging.level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &TaskrouteConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.model.default_model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "model.default_model must not be empty".to_string(),
        });
    }

    let level = config.logging.level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "logging.level `{}` is not one of {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if let Some(routing) = &config.routing {
        validate_routing(routing, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_routing(routing: &RoutingConfig, errors: &mut Vec<ConfigError>) {
    for (i, pref) in routing.preferences.iter().enumerate() {
        if pref.task_type.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("routing.preferences[{i}].task_type must not be empty"),
            });
        }
        if pref.model.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("routing.preferences[{i}].model must not be empty"),
            });
        }
    }

    // Duplicates are legal (first match wins) but later entries are dead.
    for (i, pref) in routing.shadowed_preferences() {
        warn!(
            task_type = pref.task_type.as_str(),
            index = i,
            "duplicate routing preference is shadowed by an earlier entry"
        );
    }
}
