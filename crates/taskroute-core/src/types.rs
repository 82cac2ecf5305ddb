// SPDX-FileCopyrightText: 2026 Taskroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the classifier, matcher, and router.
//!
//! Task types are carried as plain strings everywhere so operator-defined
//! ids flow through unchanged. [`PredefinedTaskType`] only names the fixed
//! taxonomy.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Reasoning attached to classifications built from an explicit task type.
pub const EXPLICIT_REASONING: &str = "Task type explicitly selected";

/// The fixed, built-in task categories, in taxonomy order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PredefinedTaskType {
    CodeGeneration,
    CodeUnderstanding,
    BugFixing,
    Refactoring,
    Documentation,
    CreativeWriting,
    ComplexReasoning,
}

impl PredefinedTaskType {
    /// The string id used in configuration and decisions.
    pub fn id(self) -> &'static str {
        self.into()
    }
}

/// Human-readable metadata for a task type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTypeMetadata {
    /// Identity of the task type.
    pub id: String,
    /// Display name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// True for entries from the built-in taxonomy.
    pub is_predefined: bool,
}

impl TaskTypeMetadata {
    /// Synthesize metadata for an operator-defined task type.
    ///
    /// The name replaces underscores with spaces; the id is kept verbatim.
    pub fn custom(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: id.replace('_', " "),
            description: format!("Custom task type: {id}"),
            is_predefined: false,
        }
    }
}

/// The classifier's verdict for one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskClassification {
    /// Inferred (or explicit) task type id. Never empty.
    pub task_type: String,
    /// Confidence in `[0.0, 1.0]`.
    pub confidence: f32,
    /// Audit explanation. Never empty.
    pub reasoning: String,
}

impl TaskClassification {
    /// Create a classification.
    pub fn new(task_type: impl Into<String>, confidence: f32, reasoning: impl Into<String>) -> Self {
        Self {
            task_type: task_type.into(),
            confidence,
            reasoning: reasoning.into(),
        }
    }

    /// A full-confidence classification for a caller-supplied task type.
    pub fn explicit(task_type: impl Into<String>) -> Self {
        Self::new(task_type, 1.0, EXPLICIT_REASONING)
    }
}

/// The sole output of a routing call.
///
/// `model == None` tells the caller to fall back to its own default model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingDecision {
    /// Resolved model, if a preference matched.
    pub model: Option<String>,
    /// Task type the decision was made for.
    pub task_type: String,
    /// Confidence carried over from the classification.
    pub confidence: f32,
    /// Human-readable justification, suitable for display verbatim.
    pub reason: String,
    /// Whether the task type was supplied by the caller rather than inferred.
    pub is_explicit: bool,
}

impl RoutingDecision {
    /// The routed model, or `default` when no preference resolved.
    pub fn model_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.model.as_deref().unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn predefined_ids_are_snake_case() {
        let ids: Vec<&str> = PredefinedTaskType::iter().map(PredefinedTaskType::id).collect();
        assert_eq!(
            ids,
            [
                "code_generation",
                "code_understanding",
                "bug_fixing",
                "refactoring",
                "documentation",
                "creative_writing",
                "complex_reasoning",
            ]
        );
    }

    #[test]
    fn predefined_display_and_parse_agree() {
        for kind in PredefinedTaskType::iter() {
            let parsed = PredefinedTaskType::from_str(&kind.to_string()).expect("should parse back");
            assert_eq!(parsed, kind);
        }
        assert!(PredefinedTaskType::from_str("Code_Generation").is_err());
    }

    #[test]
    fn custom_metadata_is_synthesized() {
        let meta = TaskTypeMetadata::custom("legal_contract_review");
        assert_eq!(meta.id, "legal_contract_review");
        assert_eq!(meta.name, "legal contract review");
        assert_eq!(meta.description, "Custom task type: legal_contract_review");
        assert!(!meta.is_predefined);
    }

    #[test]
    fn explicit_classification_is_full_confidence() {
        let c = TaskClassification::explicit("bug_fixing");
        assert_eq!(c.task_type, "bug_fixing");
        assert_eq!(c.confidence, 1.0);
        assert_eq!(c.reasoning, EXPLICIT_REASONING);
    }

    #[test]
    fn decision_model_or_falls_back() {
        let decision = RoutingDecision {
            model: None,
            task_type: "documentation".into(),
            confidence: 0.8,
            reason: "none".into(),
            is_explicit: false,
        };
        assert_eq!(decision.model_or("default-model"), "default-model");
    }

    #[test]
    fn decision_serializes_null_model() {
        let decision = RoutingDecision {
            model: None,
            task_type: "unknown".into(),
            confidence: 0.0,
            reason: "Model routing is not enabled".into(),
            is_explicit: false,
        };
        let json = serde_json::to_value(&decision).unwrap();
        assert!(json["model"].is_null());
        assert_eq!(json["task_type"], "unknown");
    }
}
