// SPDX-FileCopyrightText: 2026 Taskroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Routing table fixtures.

use strum::IntoEnumIterator;
use taskroute_config::{RoutingConfig, RoutingPreference};
use taskroute_core::PredefinedTaskType;

/// An enabled table built from `(task_type, model)` pairs, in order.
pub fn routing_table(entries: &[(&str, &str)]) -> RoutingConfig {
    RoutingConfig::enabled_with(
        entries
            .iter()
            .map(|(task_type, model)| RoutingPreference::new(*task_type, *model))
            .collect(),
    )
}

/// An enabled table mapping every predefined task type to `model-<task_type>`.
pub fn full_preference_table() -> RoutingConfig {
    RoutingConfig::enabled_with(
        PredefinedTaskType::iter()
            .map(|kind| RoutingPreference::new(kind.id(), format!("model-{}", kind.id())))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_table_covers_taxonomy() {
        let table = full_preference_table();
        assert!(table.enabled);
        assert_eq!(table.preferences.len(), 7);
        assert_eq!(table.preferences[2].model, "model-bug_fixing");
    }

    #[test]
    fn routing_table_keeps_order() {
        let table = routing_table(&[("b", "m2"), ("a", "m1")]);
        assert_eq!(table.preferences[0].task_type, "b");
    }
}
