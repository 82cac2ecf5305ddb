// SPDX-FileCopyrightText: 2026 Taskroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Matching classifications against the operator's routing table.
//!
//! Lookup is first-match-wins with exact, case-sensitive task type
//! comparison. Every query in this module uses the same lookup so
//! `has_preference_for_task_type`, `model_for_task_type`, and
//! `make_decision` always agree.

use taskroute_config::{RoutingConfig, RoutingPreference};
use taskroute_core::{RoutingDecision, TaskClassification, TaskTypeMetadata};

use crate::taxonomy;

/// Reason given when the table itself is disabled.
pub const ROUTING_DISABLED_REASON: &str = "Model routing is disabled";

/// A read-only view over one routing table snapshot.
#[derive(Debug, Clone)]
pub struct RoutingPreferences {
    config: RoutingConfig,
}

impl RoutingPreferences {
    /// Wrap a routing table snapshot.
    pub fn new(config: RoutingConfig) -> Self {
        Self { config }
    }

    /// Whether the table is enabled.
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Number of configured preferences, duplicates included.
    pub fn preference_count(&self) -> usize {
        self.config.preferences.len()
    }

    /// Task types in table order. Not deduplicated.
    pub fn configured_task_types(&self) -> Vec<&str> {
        self.config
            .preferences
            .iter()
            .map(|p| p.task_type.as_str())
            .collect()
    }

    /// Whether any preference names `task_type`.
    pub fn has_preference_for_task_type(&self, task_type: &str) -> bool {
        self.find(task_type).is_some()
    }

    /// Model of the first preference naming `task_type`.
    pub fn model_for_task_type(&self, task_type: &str) -> Option<&str> {
        self.find(task_type).map(|p| p.model.as_str())
    }

    /// Metadata for `task_type`, predefined or synthesized.
    pub fn task_type_metadata(&self, task_type: &str) -> TaskTypeMetadata {
        taxonomy::metadata_for(task_type)
    }

    /// Turn a classification into a routing decision.
    ///
    /// A disabled table never yields a model, even if a preference matches.
    pub fn make_decision(
        &self,
        classification: &TaskClassification,
        is_explicit: bool,
    ) -> RoutingDecision {
        let task_type = classification.task_type.clone();
        let confidence = classification.confidence;

        if !self.config.enabled {
            return RoutingDecision {
                model: None,
                task_type,
                confidence,
                reason: ROUTING_DISABLED_REASON.to_string(),
                is_explicit,
            };
        }

        match self.model_for_task_type(&task_type) {
            Some(model) => RoutingDecision {
                model: Some(model.to_string()),
                reason: routed_reason(model, classification),
                task_type,
                confidence,
                is_explicit,
            },
            None => RoutingDecision {
                model: None,
                reason: unmatched_reason(&task_type),
                task_type,
                confidence,
                is_explicit,
            },
        }
    }

    fn find(&self, task_type: &str) -> Option<&RoutingPreference> {
        self.config
            .preferences
            .iter()
            .find(|p| p.task_type == task_type)
    }
}

/// Confidence as an integer percentage, rounded to nearest.
pub fn confidence_percent(confidence: f32) -> u32 {
    (confidence.clamp(0.0, 1.0) * 100.0).round() as u32
}

fn routed_reason(model: &str, classification: &TaskClassification) -> String {
    format!(
        "Routed to {model} based on task type {} ({}% confidence): {}",
        classification.task_type,
        confidence_percent(classification.confidence),
        classification.reasoning
    )
}

fn unmatched_reason(task_type: &str) -> String {
    format!(
        "No routing preference configured for task type {task_type}, falling back to default model"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs(enabled: bool, entries: &[(&str, &str)]) -> RoutingPreferences {
        RoutingPreferences::new(RoutingConfig {
            enabled,
            preferences: entries
                .iter()
                .map(|(t, m)| RoutingPreference::new(*t, *m))
                .collect(),
        })
    }

    #[test]
    fn matched_decision_embeds_model_type_and_percentage() {
        let table = prefs(true, &[("code_generation", "gpt-4o")]);
        let classification =
            TaskClassification::new("code_generation", 0.85, "Detected code generation keywords");
        let decision = table.make_decision(&classification, false);

        assert_eq!(decision.model.as_deref(), Some("gpt-4o"));
        assert_eq!(decision.task_type, "code_generation");
        assert_eq!(decision.confidence, 0.85);
        assert!(!decision.is_explicit);
        assert_eq!(
            decision.reason,
            "Routed to gpt-4o based on task type code_generation (85% confidence): \
             Detected code generation keywords"
        );
    }

    #[test]
    fn disabled_table_never_leaks_a_model() {
        let table = prefs(false, &[("code_generation", "gpt-4o")]);
        let classification = TaskClassification::new("code_generation", 0.85, "r");
        let decision = table.make_decision(&classification, true);

        assert!(decision.model.is_none());
        assert_eq!(decision.task_type, "code_generation");
        assert_eq!(decision.confidence, 0.85);
        assert_eq!(decision.reason, ROUTING_DISABLED_REASON);
        assert!(decision.is_explicit);
    }

    #[test]
    fn unmatched_decision_names_task_type() {
        let table = prefs(true, &[("code_generation", "gpt-4o")]);
        let decision = table.make_decision(&TaskClassification::explicit("bug_fixing"), true);

        assert!(decision.model.is_none());
        assert_eq!(decision.confidence, 1.0);
        assert!(decision.reason.contains("bug_fixing"));
        assert!(decision.reason.contains("falling back to default"));
    }

    #[test]
    fn first_match_wins_on_duplicates() {
        let table = prefs(
            true,
            &[("refactoring", "first"), ("refactoring", "second")],
        );
        assert_eq!(table.model_for_task_type("refactoring"), Some("first"));
        let decision =
            table.make_decision(&TaskClassification::new("refactoring", 0.85, "r"), false);
        assert_eq!(decision.model.as_deref(), Some("first"));
    }

    #[test]
    fn task_type_lookup_is_case_sensitive() {
        let table = prefs(true, &[("Legal_Review", "m")]);
        assert!(table.has_preference_for_task_type("Legal_Review"));
        assert!(!table.has_preference_for_task_type("legal_review"));
    }

    #[test]
    fn auxiliary_queries_reflect_table() {
        let table = prefs(
            true,
            &[("a", "m1"), ("b", "m2"), ("a", "m3")],
        );
        assert!(table.is_enabled());
        assert_eq!(table.preference_count(), 3);
        assert_eq!(table.configured_task_types(), vec!["a", "b", "a"]);
        assert_eq!(table.model_for_task_type("b"), Some("m2"));
        assert_eq!(table.model_for_task_type("c"), None);
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        assert_eq!(confidence_percent(0.855), 86);
        assert_eq!(confidence_percent(0.4), 40);
        assert_eq!(confidence_percent(0.754), 75);
        assert_eq!(confidence_percent(1.0), 100);
        assert_eq!(confidence_percent(0.0), 0);
    }

    #[test]
    fn metadata_lookup_covers_custom_types() {
        let table = prefs(true, &[]);
        assert!(table.task_type_metadata("documentation").is_predefined);
        assert_eq!(table.task_type_metadata("sql_tuning").name, "sql tuning");
    }
}
