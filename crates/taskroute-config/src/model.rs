// SPDX-FileCopyrightText: 2026 Taskroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for taskroute.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Top-level taskroute configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TaskrouteConfig {
    /// Default model settings used when no routing preference resolves.
    #[serde(default)]
    pub model: ModelConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Task-type routing table. `None` means routing is not configured at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing: Option<RoutingConfig>,
}

impl TaskrouteConfig {
    /// The routing table if one is configured and enabled.
    pub fn active_routing(&self) -> Option<&RoutingConfig> {
        self.routing.as_ref().filter(|r| r.enabled)
    }
}

/// Default model configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    /// Model used when routing yields no preference.
    #[serde(default = "default_model")]
    pub default_model: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            default_model: default_model(),
        }
    }
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Task-type routing table.
///
/// Preferences are scanned in order and the first entry whose task type
/// matches wins. Duplicate task types are allowed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    /// Enable task-type routing. When false, callers use `model.default_model`.
    #[serde(default)]
    pub enabled: bool,

    /// Ordered task type to model mappings.
    #[serde(default)]
    pub preferences: Vec<RoutingPreference>,
}

impl RoutingConfig {
    /// An enabled routing table with the given preferences.
    pub fn enabled_with(preferences: Vec<RoutingPreference>) -> Self {
        Self {
            enabled: true,
            preferences,
        }
    }

    /// Preferences that can never match because an earlier entry has the
    /// same task type, as `(index, preference)` in table order.
    pub fn shadowed_preferences(&self) -> Vec<(usize, &RoutingPreference)> {
        let mut seen = HashSet::new();
        self.preferences
            .iter()
            .enumerate()
            .filter(|&(_, p)| !seen.insert(p.task_type.as_str()))
            .collect()
    }
}

/// A single operator-configured mapping from task type to model.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingPreference {
    /// Predefined or operator-defined task type id. Compared case-sensitively.
    pub task_type: String,

    /// Model identifier handed to the provider layer.
    pub model: String,
}

impl RoutingPreference {
    /// Create a preference mapping `task_type` to `model`.
    pub fn new(task_type: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            task_type: task_type.into(),
            model: model.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routing_section_is_optional() {
        let config: TaskrouteConfig = toml::from_str("").unwrap();
        assert!(config.routing.is_none());
        assert!(config.active_routing().is_none());
    }

    #[test]
    fn routing_enabled_defaults_to_false() {
        let config: TaskrouteConfig = toml::from_str("[routing]\n").unwrap();
        let routing = config.routing.as_ref().unwrap();
        assert!(!routing.enabled);
        assert!(routing.preferences.is_empty());
        assert!(config.active_routing().is_none());
    }

    #[test]
    fn preferences_keep_declaration_order() {
        let toml_str = r#"
[routing]
enabled = true

[[routing.preferences]]
task_type = "creative_writing"
model = "claude-opus-4-20250514"

[[routing.preferences]]
task_type = "code_generation"
model = "gpt-4o"
"#;
        let config: TaskrouteConfig = toml::from_str(toml_str).unwrap();
        let routing = config.active_routing().unwrap();
        assert_eq!(routing.preferences.len(), 2);
        assert_eq!(routing.preferences[0].task_type, "creative_writing");
        assert_eq!(routing.preferences[1].model, "gpt-4o");
    }

    #[test]
    fn preference_requires_both_fields() {
        let toml_str = r#"
[routing]
enabled = true

[[routing.preferences]]
task_type = "code_generation"
"#;
        assert!(toml::from_str::<TaskrouteConfig>(toml_str).is_err());
    }

    #[test]
    fn shadowed_preferences_lists_later_duplicates() {
        let routing = RoutingConfig::enabled_with(vec![
            RoutingPreference::new("bug_fixing", "a"),
            RoutingPreference::new("refactoring", "b"),
            RoutingPreference::new("bug_fixing", "c"),
            RoutingPreference::new("Bug_Fixing", "d"),
        ]);
        let shadowed = routing.shadowed_preferences();
        assert_eq!(shadowed.len(), 1);
        assert_eq!(shadowed[0].0, 2);
        assert_eq!(shadowed[0].1.model, "c");
    }
}
