// SPDX-FileCopyrightText: 2026 Taskroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The fixed taxonomy of predefined task types and their display metadata.

use taskroute_config::RoutingConfig;
use taskroute_core::{PredefinedTaskType, TaskTypeMetadata};

/// Display metadata for one predefined task type.
#[derive(Debug, Clone, Copy)]
pub struct PredefinedTask {
    pub kind: PredefinedTaskType,
    pub name: &'static str,
    pub description: &'static str,
}

impl PredefinedTask {
    /// Owned metadata for this entry.
    pub fn metadata(&self) -> TaskTypeMetadata {
        TaskTypeMetadata {
            id: self.kind.id().to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            is_predefined: true,
        }
    }
}

/// Predefined task types in taxonomy order.
pub const PREDEFINED_TASKS: &[PredefinedTask] = &[
    PredefinedTask {
        kind: PredefinedTaskType::CodeGeneration,
        name: "Code Generation",
        description: "Writing new code, functions, classes, or programs",
    },
    PredefinedTask {
        kind: PredefinedTaskType::CodeUnderstanding,
        name: "Code Understanding",
        description: "Explaining or analyzing how existing code works",
    },
    PredefinedTask {
        kind: PredefinedTaskType::BugFixing,
        name: "Bug Fixing",
        description: "Finding and fixing errors, crashes, or failing behavior",
    },
    PredefinedTask {
        kind: PredefinedTaskType::Refactoring,
        name: "Refactoring",
        description: "Restructuring or optimizing existing code without changing behavior",
    },
    PredefinedTask {
        kind: PredefinedTaskType::Documentation,
        name: "Documentation",
        description: "Writing docs, comments, READMEs, or API references",
    },
    PredefinedTask {
        kind: PredefinedTaskType::CreativeWriting,
        name: "Creative Writing",
        description: "Stories, poems, essays, and other non-technical prose",
    },
    PredefinedTask {
        kind: PredefinedTaskType::ComplexReasoning,
        name: "Complex Reasoning",
        description: "Math, logic puzzles, and multi-step problem solving",
    },
];

/// Look up a predefined task by id. Ids are case-sensitive.
pub fn predefined(id: &str) -> Option<&'static PredefinedTask> {
    PREDEFINED_TASKS.iter().find(|t| t.kind.id() == id)
}

/// Whether `id` names a predefined task type.
pub fn is_predefined(id: &str) -> bool {
    predefined(id).is_some()
}

/// Metadata for any task type: predefined lookup, else synthesized.
pub fn metadata_for(id: &str) -> TaskTypeMetadata {
    match predefined(id) {
        Some(task) => task.metadata(),
        None => TaskTypeMetadata::custom(id),
    }
}

/// Predefined entries followed by every operator-defined task type in `config`.
///
/// Operator-defined entries appear in configuration order. Duplicates in
/// the table are kept as they appear.
pub fn available_task_types(config: Option<&RoutingConfig>) -> Vec<TaskTypeMetadata> {
    let mut types: Vec<TaskTypeMetadata> =
        PREDEFINED_TASKS.iter().map(PredefinedTask::metadata).collect();

    if let Some(config) = config {
        types.extend(
            config
                .preferences
                .iter()
                .filter(|p| !is_predefined(&p.task_type))
                .map(|p| TaskTypeMetadata::custom(&p.task_type)),
        );
    }

    types
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;
    use taskroute_config::RoutingPreference;

    use super::*;

    #[test]
    fn taxonomy_follows_enum_order() {
        let from_table: Vec<_> = PREDEFINED_TASKS.iter().map(|t| t.kind).collect();
        let from_enum: Vec<_> = PredefinedTaskType::iter().collect();
        assert_eq!(from_table, from_enum);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(is_predefined("bug_fixing"));
        assert!(!is_predefined("Bug_Fixing"));
        assert!(!is_predefined(""));
    }

    #[test]
    fn metadata_for_predefined_and_custom() {
        let predefined = metadata_for("refactoring");
        assert_eq!(predefined.name, "Refactoring");
        assert!(predefined.is_predefined);

        let custom = metadata_for("sql_tuning");
        assert_eq!(custom.name, "sql tuning");
        assert!(!custom.is_predefined);
    }

    #[test]
    fn available_without_config_is_predefined_only() {
        let types = available_task_types(None);
        assert_eq!(types.len(), 7);
        assert!(types.iter().all(|t| t.is_predefined));
    }

    #[test]
    fn available_appends_operator_types_in_order() {
        let config = RoutingConfig::enabled_with(vec![
            RoutingPreference::new("translation", "m1"),
            RoutingPreference::new("code_generation", "m2"),
            RoutingPreference::new("data_analysis", "m3"),
        ]);
        let types = available_task_types(Some(&config));
        assert_eq!(types.len(), 9);
        assert_eq!(types[7].id, "translation");
        assert_eq!(types[8].id, "data_analysis");
        assert!(!types[8].is_predefined);
    }
}
